pub mod anion_gap;
pub mod config;
pub mod evaluation;
pub mod interpretation;
pub mod lab;
pub mod oxygenation;
pub mod patient;
pub mod report;
