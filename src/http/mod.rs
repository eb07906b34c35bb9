//! HTTP plumbing: the JSON responder and the server lifecycle.
//!
//! The server includes:
//! - Pretty-printed JSON responses with a fixed content type
//! - Graceful shutdown on SIGTERM/SIGINT with connection draining

mod json;
mod server;
mod shutdown;

pub use json::PrettyJson;
pub use server::start_server;
