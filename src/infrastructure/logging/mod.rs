//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - stderr bootstrap subscriber for the configuration load
//! - JSON or pretty service logger driven by `observability.logging`

pub mod logger;

pub use logger::{bootstrap_subscriber, LoggerImpl};
