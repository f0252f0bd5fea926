//! Utility modules
//!
//! This module contains utilities shared by the library, CLI and WASM
//! surfaces:
//! - Error types and result types
//! - Conversion reports (commands dropped during conversion)

pub mod error;
pub mod report;

// Re-export commonly used items
pub use error::{MathTextError, MathTextResult};
pub use report::ConversionReport;
