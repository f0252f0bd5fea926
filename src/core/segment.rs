//! Splitting mixed text into text and math segments
//!
//! Recognizes the four LaTeX math delimiter pairs in a single left-to-right
//! scan, converts each math body with [`crate::core::readable`], and keeps
//! everything else as literal text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::core::readable::{convert_into, ReadableOptions};
use crate::utils::error::MathTextResult;
use crate::utils::report::ConversionReport;

/// Stands in for `\$` while scanning so escaped dollars are never delimiters.
const ESCAPED_DOLLAR_SENTINEL: char = '\u{E000}';

lazy_static! {
    /// One alternation over all delimiter pairs; the first branch that
    /// matches at a position wins. Bodies are non-greedy and may span lines.
    static ref MATH_SPAN: Regex = Regex::new(
        r"(?s)\\\[(.*?)\\\]|\$\$(.*?)\$\$|\\\((.*?)\\\)|\$(.+?)\$"
    )
    .unwrap_or_else(|e| panic!("invalid math span pattern: {e}"));
}

/// The delimiter pair that enclosed a math span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `\[ ... \]`
    Bracket,
    /// `$$ ... $$`
    DoubleDollar,
    /// `\( ... \)`
    Paren,
    /// `$ ... $`
    Dollar,
}

impl Delimiter {
    /// Capture group order of the span pattern.
    const ALL: [Delimiter; 4] = [
        Delimiter::Bracket,
        Delimiter::DoubleDollar,
        Delimiter::Paren,
        Delimiter::Dollar,
    ];

    /// Block-style delimiters render as display math.
    pub fn is_display(self) -> bool {
        matches!(self, Delimiter::Bracket | Delimiter::DoubleDollar)
    }
}

/// A unit of output: literal text or converted math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text {
        content: String,
    },
    Math {
        content: String,
        #[serde(rename = "displayMode")]
        display_mode: bool,
    },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn math(content: impl Into<String>, display_mode: bool) -> Self {
        Segment::Math {
            content: content.into(),
            display_mode,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content } | Segment::Math { content, .. } => content,
        }
    }

    pub fn is_math(&self) -> bool {
        matches!(self, Segment::Math { .. })
    }

    /// `Some(display)` for math segments, `None` for text.
    pub fn display_mode(&self) -> Option<bool> {
        match self {
            Segment::Math { display_mode, .. } => Some(*display_mode),
            Segment::Text { .. } => None,
        }
    }

    pub fn into_content(self) -> String {
        match self {
            Segment::Text { content } | Segment::Math { content, .. } => content,
        }
    }
}

/// Split `text` into segments using default converter options.
pub fn segment(text: &str) -> Vec<Segment> {
    segment_with_options(text, &ReadableOptions::default())
}

/// Split `text` into segments.
pub fn segment_with_options(text: &str, options: &ReadableOptions) -> Vec<Segment> {
    let mut dropped = Vec::new();
    scan(text, options, &mut dropped)
}

/// Split `text` into segments and collect every command dropped from any
/// math span.
pub fn segment_with_report(
    text: &str,
    options: &ReadableOptions,
) -> ConversionReport<Vec<Segment>> {
    let mut dropped = Vec::new();
    let segments = scan(text, options, &mut dropped);
    ConversionReport::new(segments, dropped)
}

/// Concatenate segment contents, discarding the math/text distinction.
pub fn to_plain_text(text: &str) -> String {
    to_plain_text_with_options(text, &ReadableOptions::default())
}

pub fn to_plain_text_with_options(text: &str, options: &ReadableOptions) -> String {
    join_segments(&segment_with_options(text, options))
}

/// Concatenate the contents of already-built segments.
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(Segment::content).collect()
}

/// Serialize segments as a JSON array.
pub fn segments_to_json(segments: &[Segment], pretty: bool) -> MathTextResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(segments)?
    } else {
        serde_json::to_string(segments)?
    };
    Ok(json)
}

fn scan(text: &str, options: &ReadableOptions, dropped: &mut Vec<String>) -> Vec<Segment> {
    let mut segments = Vec::new();
    if text.is_empty() {
        return segments;
    }

    let sentinel = ESCAPED_DOLLAR_SENTINEL.to_string();
    let protected = text.replace("\\$", &sentinel);
    let mut last = 0;

    for caps in MATH_SPAN.captures_iter(&protected) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let Some((delimiter, body)) = Delimiter::ALL
            .iter()
            .enumerate()
            .find_map(|(i, d)| caps.get(i + 1).map(|m| (*d, m.as_str())))
        else {
            continue;
        };

        push_text(&mut segments, &protected[last..whole.start()]);

        let body = restore_dollars(body);
        let content = convert_into(&body, options, dropped);
        segments.push(Segment::math(content, delimiter.is_display()));

        last = whole.end();
    }
    push_text(&mut segments, &protected[last..]);

    tracing::trace!(
        segments = segments.len(),
        math = segments.iter().filter(|s| s.is_math()).count(),
        "segmented input"
    );
    segments
}

fn push_text(segments: &mut Vec<Segment>, span: &str) {
    if !span.is_empty() {
        segments.push(Segment::text(restore_dollars(span)));
    }
}

fn restore_dollars(span: &str) -> String {
    span.replace(ESCAPED_DOLLAR_SENTINEL, "$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert_eq!(to_plain_text(""), "");
    }

    #[test]
    fn test_plain_text_passthrough() {
        let input = "What is the capital of France?";
        assert_eq!(segment(input), vec![Segment::text(input)]);
        assert_eq!(to_plain_text(input), input);
    }

    #[test]
    fn test_escaped_dollar_is_text() {
        assert_eq!(segment(r"\$5"), vec![Segment::text("$5")]);
        assert_eq!(
            segment(r"costs \$5 or \$10"),
            vec![Segment::text("costs $5 or $10")]
        );
    }

    #[test]
    fn test_inline_dollar() {
        assert_eq!(
            segment("Solve $x^2$ now"),
            vec![
                Segment::text("Solve "),
                Segment::math("x^2", false),
                Segment::text(" now"),
            ]
        );
    }

    #[test]
    fn test_display_modes() {
        let cases = [
            (r"\[x\]", true),
            ("$$x$$", true),
            (r"\(x\)", false),
            ("$x$", false),
        ];
        for (input, display) in cases {
            assert_eq!(segment(input), vec![Segment::math("x", display)], "{input}");
        }
    }

    #[test]
    fn test_double_dollar_wins_over_single() {
        assert_eq!(
            segment("$$a$$ and $b$"),
            vec![
                Segment::math("a", true),
                Segment::text(" and "),
                Segment::math("b", false),
            ]
        );
    }

    #[test]
    fn test_multiline_body() {
        assert_eq!(
            segment("\\[\n\\frac{1}{2}\n\\]"),
            vec![Segment::math("(1)/(2)", true)]
        );
    }

    #[test]
    fn test_unterminated_delimiter_is_text() {
        assert_eq!(segment("price: 5$"), vec![Segment::text("price: 5$")]);
        assert_eq!(
            segment(r"open \( never closed"),
            vec![Segment::text(r"open \( never closed")]
        );
        assert_eq!(segment("$$"), vec![Segment::text("$$")]);
    }

    #[test]
    fn test_escaped_dollar_inside_math() {
        assert_eq!(segment(r"$\$5 + x$"), vec![Segment::math("$5 + x", false)]);
    }

    #[test]
    fn test_plain_text_matches_segments() {
        let input = r"Let $\alpha = \frac12$ and \[\sqrt{x}\] hold.";
        let joined: String = segment(input).iter().map(Segment::content).collect();
        assert_eq!(to_plain_text(input), joined);
        assert_eq!(joined, "Let alpha = (1)/(2) and sqrt(x) hold.");
    }

    #[test]
    fn test_segment_accessors() {
        let math = Segment::math("x", true);
        assert!(math.is_math());
        assert_eq!(math.display_mode(), Some(true));
        let text = Segment::text("y");
        assert_eq!(text.display_mode(), None);
        assert_eq!(text.into_content(), "y");
    }

    #[test]
    fn test_segments_json_shape() {
        let json = segments_to_json(&segment("a $b$"), false).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"text","content":"a "},{"type":"math","content":"b","displayMode":false}]"#
        );
    }

    #[test]
    fn test_segment_report_collects_all_spans() {
        let report =
            segment_with_report(r"$\hat{x}$ then $\vec{y}$", &ReadableOptions::new());
        assert_eq!(report.dropped, vec!["hat", "vec"]);
        assert_eq!(join_segments(&report.content), "x then y");
    }
}
