pub mod acid_base;
pub mod anion_gap;
pub mod compensation;
pub mod oxygenation;
