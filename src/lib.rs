//! # Mathtext
//!
//! Readable plain text from LaTeX math, for rendering targets that cannot
//! typeset math (PDF text runs, plain-text exports, screen readers).
//!
//! Input is mixed content such as a quiz question: prose with embedded math
//! delimited by `\[...\]`, `$$...$$`, `\(...\)` or `$...$`. Each math span is
//! rewritten into an ASCII-safe approximation by an ordered rule table.
//!
//! ## Quick start
//!
//! ```
//! use mathtext::{convert_math, segment, to_plain_text, Segment};
//!
//! assert_eq!(convert_math(r"\frac{1}{2}"), "(1)/(2)");
//! assert_eq!(to_plain_text(r"Area is $\pi r^2$."), "Area is pi r^2.");
//!
//! let segments = segment("Solve $x^2$ now");
//! assert_eq!(segments[1], Segment::math("x^2", false));
//! ```
//!
//! Every function here is total: malformed LaTeX yields lower-fidelity text,
//! never an error.

pub mod core;
pub mod data;
pub mod utils;
pub mod wasm;

pub use crate::core::readable::{ReadableOptions, DEFAULT_BRACE_PASSES};
pub use crate::core::segment::{join_segments, segments_to_json, Delimiter, Segment};
pub use crate::utils::error::{MathTextError, MathTextResult};
pub use crate::utils::report::ConversionReport;

/// Split mixed text into text and converted-math segments, in source order.
///
/// Escaped dollars (`\$`) stay literal text. Unterminated delimiters are
/// left as text.
pub fn segment(text: &str) -> Vec<Segment> {
    crate::core::segment::segment(text)
}

/// [`segment`] with explicit converter options.
pub fn segment_with_options(text: &str, options: &ReadableOptions) -> Vec<Segment> {
    crate::core::segment::segment_with_options(text, options)
}

/// [`segment`], also reporting unknown commands dropped from math spans.
pub fn segment_with_report(
    text: &str,
    options: &ReadableOptions,
) -> ConversionReport<Vec<Segment>> {
    crate::core::segment::segment_with_report(text, options)
}

/// Convert mixed text to one plain string.
///
/// Equal to concatenating the contents of [`segment`].
pub fn to_plain_text(text: &str) -> String {
    crate::core::segment::to_plain_text(text)
}

/// [`to_plain_text`] with explicit converter options.
pub fn to_plain_text_with_options(text: &str, options: &ReadableOptions) -> String {
    crate::core::segment::to_plain_text_with_options(text, options)
}

/// Convert a LaTeX math body (without delimiters) to readable text.
///
/// ```
/// assert_eq!(
///     mathtext::convert_math(r"\alpha \times \beta \leq \gamma"),
///     "alpha * beta <= gamma"
/// );
/// ```
pub fn convert_math(latex: &str) -> String {
    crate::core::readable::convert(latex)
}

/// [`convert_math`] with explicit options.
pub fn convert_math_with_options(latex: &str, options: &ReadableOptions) -> String {
    crate::core::readable::convert_with_options(latex, options)
}

/// [`convert_math`], also reporting unknown commands that were dropped.
pub fn convert_math_with_report(latex: &str, options: &ReadableOptions) -> ConversionReport {
    crate::core::readable::convert_with_report(latex, options)
}
