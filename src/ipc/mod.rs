//! Line-delimited JSON IPC: `{id, method, params}` in, `{id, ok, ...}` out.

mod error;
mod handlers;
mod helpers;
mod router;
mod types;

pub use router::handle_request;
pub use types::{AppState, Request};
