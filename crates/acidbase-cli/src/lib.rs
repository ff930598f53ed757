//! acidbase-cli library root.
//!
//! Re-exports the argument types, command handlers and config layer so
//! integration tests can exercise them without spawning the binary.

pub mod args;
pub mod commands;
pub mod config;
