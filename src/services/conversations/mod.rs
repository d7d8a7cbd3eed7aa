//! Conversations service for Slack API.
//!
//! Lists channels and opens direct-message conversations.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
