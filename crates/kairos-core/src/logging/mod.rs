//! Logging utilities.
//!
//! Centralizes logger initialization for embedding applications. Library
//! code only ever uses the `log` facade; the `env_logger` backend is wired
//! up here, once, by the host binary.

mod init;

pub use init::{LoggingConfig, init_logging};
