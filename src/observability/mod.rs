//! Observability infrastructure for the Slack client.
//!
//! Provides request logging with token redaction and tracing spans.

pub mod logging;
pub mod tracing_utils;

pub use logging::*;
pub use tracing_utils::*;
