mod support;

pub use support::{
    ChatReply, SupportSummary, TicketSummary, get_recent_tickets, get_support_summary,
    send_message,
};
