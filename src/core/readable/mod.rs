//! LaTeX math to readable plain text
//!
//! Converts the body of a math span (no outer delimiters) into an ASCII-safe
//! approximation for rendering targets that cannot typeset math, such as a
//! single styled text run in a generated PDF.
//!
//! Conversion is a fixed pipeline:
//! 1. trim the input;
//! 2. run every rule of [`rules::RULES`] once, in order;
//! 3. unwrap leftover brace groups for the remaining configured passes;
//! 4. remove empty groups, delete unknown control words, collapse whitespace;
//! 5. restore protected escaped characters such as `\%`.
//!
//! Every step is total: malformed input only lowers output fidelity.

pub mod rules;

use serde::Deserialize;

use crate::data::symbols::restore_tombstones;
use crate::utils::report::ConversionReport;
use rules::{BRACE_GROUP, EMPTY_GROUP, RULES, WHITESPACE};

/// Default number of brace-unwrap passes, including the one in the rule table.
pub const DEFAULT_BRACE_PASSES: usize = 4;

/// Options for math-to-text conversion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadableOptions {
    /// Total brace-unwrap passes, the rule-table pass included. Unwrapping
    /// stops early once a pass changes nothing.
    /// Default: 4 (resolves up to four levels of nesting)
    pub brace_passes: usize,
}

impl Default for ReadableOptions {
    fn default() -> Self {
        Self {
            brace_passes: DEFAULT_BRACE_PASSES,
        }
    }
}

impl ReadableOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap braces until nothing changes, with no nesting ceiling.
    pub fn exhaustive() -> Self {
        Self {
            brace_passes: usize::MAX,
        }
    }

    /// Builder-style override of the brace pass count.
    pub fn with_brace_passes(mut self, passes: usize) -> Self {
        self.brace_passes = passes;
        self
    }
}

/// Convert a LaTeX math body to readable text with default options.
pub fn convert(latex: &str) -> String {
    convert_with_options(latex, &ReadableOptions::default())
}

/// Convert a LaTeX math body to readable text.
pub fn convert_with_options(latex: &str, options: &ReadableOptions) -> String {
    let mut dropped = Vec::new();
    convert_into(latex, options, &mut dropped)
}

/// Convert and report which unknown commands were dropped.
pub fn convert_with_report(latex: &str, options: &ReadableOptions) -> ConversionReport {
    let mut dropped = Vec::new();
    let content = convert_into(latex, options, &mut dropped);
    ConversionReport::new(content, dropped)
}

/// Shared pipeline; appends dropped command names to `dropped`.
pub(crate) fn convert_into(
    latex: &str,
    options: &ReadableOptions,
    dropped: &mut Vec<String>,
) -> String {
    let mut out = latex.trim().to_string();

    for rule in RULES.iter() {
        out = rule.apply(out, dropped);
    }

    for _ in 1..options.brace_passes {
        let next = rules::replace_all(&BRACE_GROUP, out.clone(), "${1}");
        if next == out {
            break;
        }
        out = next;
    }

    out = rules::replace_all(&EMPTY_GROUP, out, "");
    out = rules::strip_control_words(out, dropped);
    out = rules::replace_all(&WHITESPACE, out, " ");

    restore_tombstones(out.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions() {
        assert_eq!(convert(r"\frac{1}{2}"), "(1)/(2)");
        assert_eq!(convert(r"\frac12"), "(1)/(2)");
        assert_eq!(convert(r"\tfrac{a}{b+c}"), "(a)/(b+c)");
    }

    #[test]
    fn test_nested_grouping() {
        assert_eq!(convert(r"\frac{\sqrt{x+1}}{2}"), "(sqrt(x+1))/(2)");
    }

    #[test]
    fn test_greek_and_operators() {
        assert_eq!(
            convert(r"\alpha \times \beta \leq \gamma"),
            "alpha * beta <= gamma"
        );
        assert_eq!(convert(r"\Delta x \approx 0"), "Delta x ~= 0");
    }

    #[test]
    fn test_scripts() {
        assert_eq!(convert("x^2"), "x^2");
        assert_eq!(convert(r"\sum_{i=1}^{n} i"), "sum_(i=1)^(n) i");
        assert_eq!(convert(r"\int_0^\infty f(x)"), "integral_0^infinity f(x)");
    }

    #[test]
    fn test_degrees() {
        assert_eq!(convert(r"90^\circ"), "90 degrees");
        assert_eq!(convert(r"45^{\circ}"), "45 degrees");
        assert_eq!(convert(r"90^\circ2"), "90 degrees2");
        assert_eq!(convert(r"20^{\circ}C"), "20 degrees C");
    }

    #[test]
    fn test_sets() {
        assert_eq!(convert(r"x \in A \cup B"), "x in A union B");
        assert_eq!(convert(r"A \cap B = \emptyset"), "A intersect B =");
        assert_eq!(convert(r"\{1, 2\} \subseteq S"), "1, 2 subseteq S");
        assert_eq!(convert(r"50\% \& 5\#"), "50% & 5#");
    }

    #[test]
    fn test_text_and_spacing() {
        assert_eq!(convert(r"x = 3 \quad \text{if } y > 0"), "x = 3 if y > 0");
        assert_eq!(convert(r"\operatorname{sin} x"), "sin x");
        assert_eq!(convert(r"a\!b"), "ab");
        assert_eq!(convert(r"5\,\mathrm{cm}"), "5 cm");
    }

    #[test]
    fn test_sizing_removed() {
        assert_eq!(convert(r"\left( \frac{a}{b} \right)"), "( (a)/(b) )");
        assert_eq!(convert(r"\displaystyle \Big| x \Big|"), "| x |");
    }

    #[test]
    fn test_absolute_value() {
        assert_eq!(convert(r"\abs{x - 1}"), "|x - 1|");
        assert_eq!(convert(r"\lvert y \rvert"), "| y |");
    }

    #[test]
    fn test_unknown_commands_keep_content() {
        assert_eq!(convert(r"\hat{x} + \foo y"), "x + y");
    }

    #[test]
    fn test_fraction_nesting_limit() {
        // A braced argument holds one nested group; deeper structure is lossy.
        let report = convert_with_report(r"\frac{\frac{1}{2}}{3}", &ReadableOptions::new());
        assert_eq!(report.content, "(12)/(3)");
        assert!(report.is_lossless());

        let report =
            convert_with_report(r"\frac{1}{\sqrt{\frac{a}{b}}}", &ReadableOptions::new());
        assert_eq!(report.content, "1sqrt((a)/(b))");
        assert!(report.dropped.is_empty());
    }

    #[test]
    fn test_brace_pass_limit() {
        let nested = "{{{{{x}}}}}";
        assert_eq!(convert(nested), "{x}");
        assert_eq!(convert_with_options(nested, &ReadableOptions::exhaustive()), "x");
        assert_eq!(
            convert_with_options(nested, &ReadableOptions::new().with_brace_passes(1)),
            "{{{{x}}}}"
        );
    }

    #[test]
    fn test_report_lists_dropped_commands() {
        let report = convert_with_report(
            r"\vec{v} \cdot \mathcal{F} \unknown",
            &ReadableOptions::new(),
        );
        assert_eq!(report.content, "v * F");
        assert_eq!(report.dropped, vec!["vec", "mathcal", "unknown"]);
        assert!(!report.is_lossless());
    }

    #[test]
    fn test_malformed_input_is_total() {
        for input in [r"\frac{", "}}}{", r"\", r"\sqrt[", "^{", r"\left"] {
            let _ = convert(input);
        }
        assert_eq!(convert(""), "");
        assert_eq!(convert("   "), "");
    }

    #[test]
    fn test_options_deserialize_from_camel_case() {
        let opts: ReadableOptions = serde_json::from_str(r#"{"bracePasses": 2}"#).unwrap();
        assert_eq!(opts.brace_passes, 2);
        let opts: ReadableOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ReadableOptions::default());
    }
}
