//! Library side of the `redundoc` command: configuration, logging and the
//! file-level check run.

pub mod config;
pub mod logging;
pub mod report;
