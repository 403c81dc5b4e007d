//! Shared utilities for MetaSignet.

pub mod logging;

pub use logging::{init_logging, LogFormat};
