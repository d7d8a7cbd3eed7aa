//! Messages service for Slack API.
//!
//! Posts messages and resolves message permalinks.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
