//! Foundation module - shared utilities
//!
//! Currently just logging: the diagnostic logger setup and the session log
//! every bootstrap stage writes to.

pub mod logging;
