//! Conversion reports: which unknown commands a conversion dropped.

use serde::Serialize;

use super::error::MathTextResult;

/// Converted content together with the unknown commands that were deleted
/// while producing it.
///
/// `T` is the content type: a `String` for a single math body, a
/// `Vec<Segment>` for segmented input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport<T = String> {
    pub content: T,
    /// Command names without the leading backslash, in order of occurrence.
    pub dropped: Vec<String>,
}

impl<T> ConversionReport<T> {
    pub fn new(content: T, dropped: Vec<String>) -> Self {
        Self { content, dropped }
    }

    /// True when no command was dropped.
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Dropped command names with duplicates removed, first occurrence kept.
    pub fn unique_dropped(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for name in &self.dropped {
            if !seen.contains(&name.as_str()) {
                seen.push(name.as_str());
            }
        }
        seen
    }
}

impl<T: Serialize> ConversionReport<T> {
    /// Serialize as JSON, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> MathTextResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
