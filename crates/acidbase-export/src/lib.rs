//! acidbase-export
//!
//! Report rows, Tera-rendered report text, DOCX generation, and the
//! one-line copy summary.

pub mod docx;
pub mod error;
pub mod render;
pub mod rows;
pub mod styles;
pub mod summary;
