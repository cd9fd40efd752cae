//! Client-side navigation core for the Retail Assist front-end.
//!
//! Holds an ordered table of literal path patterns bound to named views,
//! resolves a location path to the view the host should render, and writes
//! navigation requests back to the host location. Rendering and the real
//! browser location live in the host crate; this crate sees them only as
//! opaque [`ViewId`] tokens and the [`LocationProvider`] trait.

mod history;
mod route;
mod router;

pub use history::{HistoryMode, LocationProvider, MemoryLocation};
pub use route::{Route, RouteTable, ViewId};
pub use router::{Router, UnknownRouteName};
