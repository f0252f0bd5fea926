//! Core conversion modules
//!
//! - [`segment`]: delimiter scanning and plain-text joining
//! - [`readable`]: LaTeX math body to readable text

pub mod readable;
pub mod segment;
