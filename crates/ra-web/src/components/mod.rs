mod chat_log;
mod nav_link;
mod section;

pub use chat_log::{ChatLog, ChatMessage, Speaker};
pub use nav_link::NavLink;
pub use section::Section;
