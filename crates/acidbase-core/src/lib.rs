//! acidbase-core
//!
//! Pure domain types for blood-gas interpretation: lab inputs, evaluation
//! settings, result records, and reference ranges. No I/O; every other
//! acidbase crate builds on these.

pub mod error;
pub mod models;
pub mod reference;
