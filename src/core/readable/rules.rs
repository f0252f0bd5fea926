//! Ordered rewrite table for LaTeX math bodies.
//!
//! Each rule is one global substitution over the current string. Rules run
//! strictly in table order and later rules see the output of earlier ones:
//! structural rules (fractions, roots, scripts, text wrappers) must consume
//! their braces before the generic brace unwrap at the end of the table.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

use crate::data::symbols::{
    ARROWS, BARS, BIG_OPERATORS, DEGREE_MARKS, ELLIPSES, ESCAPED_LITERALS, GREEK_LETTERS,
    OPERATORS, SETS, SIZING, SPACING,
};

/// Braced argument allowing one nested brace group. Captures the inner text.
const ARG: &str = r"\{((?:[^{}]|\{[^{}]*\})*)\}";

/// Unbraced single-character argument, as in `\frac12`.
const CHAR: &str = r"([^\s{}\\])";

/// Structural commands whose rules ran but could not consume them because an
/// argument nests deeper than [`ARG`] allows. They are still deleted, but
/// they are not unknown and are kept out of the report.
const STRUCTURAL_COMMANDS: [&str; 4] = ["frac", "dfrac", "tfrac", "sqrt"];

type SymbolTable = phf::Map<&'static str, &'static str>;

lazy_static! {
    /// A control word: backslash followed by the maximal run of ASCII letters.
    static ref CONTROL_WORD: Regex = compile(r"\\([a-zA-Z]+)");

    /// Backslash-escaped literal character such as `\%` or `\_`.
    static ref ESCAPED_CHAR: Regex = compile(r"\\([%&#_$])");

    /// A control word used directly as a superscript, as in `90^\circ`.
    static ref SUPERSCRIPT_COMMAND: Regex = compile(r"\^\s*\\([a-zA-Z]+)");

    /// Unknown command applied directly to a braced group.
    static ref COMMAND_BEFORE_GROUP: Regex = compile(r"\\([a-zA-Z]+)\s*(\{)");

    /// One level of brace grouping with non-empty content.
    pub static ref BRACE_GROUP: Regex = compile(r"\{([^{}]+)\}");

    pub static ref EMPTY_GROUP: Regex = compile(r"\{\s*\}");

    pub static ref WHITESPACE: Regex = compile(r"\s+");

    /// The full rewrite table, in application order.
    pub static ref RULES: Vec<Rule> = build_rules();
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// How a single rule rewrites its input.
enum RuleKind {
    /// Regex substitution; replacement uses `regex` `${n}` syntax.
    Pattern { re: Regex, replacement: &'static str },
    /// Whole-match lookup: capture group 1 is looked up in the table and the
    /// match is left untouched when the key is absent.
    Lookup { re: &'static Regex, table: &'static SymbolTable },
    /// Delete the command named by group 1, keeping group 2 if present.
    /// Deleted names are reported to the caller.
    Drop { re: &'static Regex },
}

/// A named step in the rewrite table.
pub struct Rule {
    pub name: &'static str,
    kind: RuleKind,
}

impl Rule {
    fn pattern(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Rule {
            name,
            kind: RuleKind::Pattern {
                re: compile(pattern),
                replacement,
            },
        }
    }

    fn symbols(name: &'static str, table: &'static SymbolTable) -> Self {
        Rule {
            name,
            kind: RuleKind::Lookup {
                re: &*CONTROL_WORD,
                table,
            },
        }
    }

    /// Apply this rule once, globally. Returns the input unchanged (without
    /// reallocating) when nothing matched.
    pub fn apply(&self, input: String, dropped: &mut Vec<String>) -> String {
        let changed = {
            let replaced = match &self.kind {
                RuleKind::Pattern { re, replacement } => re.replace_all(&input, *replacement),
                RuleKind::Lookup { re, table } => re.replace_all(&input, |caps: &Captures| {
                    match table.get(&caps[1]) {
                        Some(rendered) => (*rendered).to_string(),
                        None => caps[0].to_string(),
                    }
                }),
                RuleKind::Drop { re } => drop_commands(re, &input, dropped),
            };
            into_changed(replaced)
        };
        changed.unwrap_or(input)
    }
}

fn drop_commands<'a>(re: &Regex, input: &'a str, dropped: &mut Vec<String>) -> Cow<'a, str> {
    re.replace_all(input, |caps: &Captures| {
        let name = &caps[1];
        if STRUCTURAL_COMMANDS.contains(&name) {
            tracing::trace!(command = name, "argument nested too deeply");
        } else {
            tracing::debug!(command = name, "dropping unknown command");
            dropped.push(name.to_string());
        }
        caps.get(2).map_or("", |m| m.as_str()).to_string()
    })
}

/// Delete every remaining control word, reporting each unknown name.
pub fn strip_control_words(input: String, dropped: &mut Vec<String>) -> String {
    let changed = into_changed(drop_commands(&CONTROL_WORD, &input, dropped));
    changed.unwrap_or(input)
}

/// Global substitution helper for the post-pass regexes.
pub fn replace_all(re: &Regex, input: String, replacement: &str) -> String {
    let changed = into_changed(re.replace_all(&input, replacement));
    changed.unwrap_or(input)
}

fn into_changed(replaced: Cow<'_, str>) -> Option<String> {
    match replaced {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    }
}

fn cat(parts: &[&str]) -> String {
    parts.concat()
}

fn build_rules() -> Vec<Rule> {
    vec![
        // Escapes
        Rule::pattern("line-break", r"\\\\", " "),
        Rule {
            name: "escaped-literal",
            kind: RuleKind::Lookup {
                re: &*ESCAPED_CHAR,
                table: &ESCAPED_LITERALS,
            },
        },
        Rule::pattern("escaped-brace", r"\\([{}])", "${1}"),
        // Fractions
        Rule::pattern(
            "frac",
            &cat(&[r"\\[dt]?frac\s*", ARG, r"\s*", ARG]),
            "(${1})/(${2})",
        ),
        Rule::pattern(
            "frac-braced-char",
            &cat(&[r"\\[dt]?frac\s*", ARG, r"\s*", CHAR]),
            "(${1})/(${2})",
        ),
        Rule::pattern(
            "frac-char-braced",
            &cat(&[r"\\[dt]?frac\s*", CHAR, r"\s*", ARG]),
            "(${1})/(${2})",
        ),
        Rule::pattern(
            "frac-char-char",
            &cat(&[r"\\[dt]?frac\s*", CHAR, r"\s*", CHAR]),
            "(${1})/(${2})",
        ),
        // Roots
        Rule::pattern(
            "nth-root",
            &cat(&[r"\\sqrt\s*\[([^\]]*)\]\s*", ARG]),
            "root(${1})(${2})",
        ),
        Rule::pattern("sqrt", &cat(&[r"\\sqrt\s*", ARG]), "sqrt(${1})"),
        Rule::pattern("sqrt-char", &cat(&[r"\\sqrt\s*", CHAR]), "sqrt(${1})"),
        Rule::pattern("sqrt-bare", r"\\sqrt", "sqrt"),
        // Scripts
        Rule::pattern(
            "degree-mark-braced",
            r"\^\s*\{\s*\\(?:circ|degree)\s*\}",
            " degrees ",
        ),
        Rule {
            name: "degree-mark",
            kind: RuleKind::Lookup {
                re: &*SUPERSCRIPT_COMMAND,
                table: &DEGREE_MARKS,
            },
        },
        Rule::pattern("superscript", &cat(&[r"\^\s*", ARG]), "^(${1})"),
        Rule::pattern("subscript", &cat(&[r"_\s*", ARG]), "_(${1})"),
        // Symbols
        Rule::symbols("greek", &GREEK_LETTERS),
        Rule::symbols("operators", &OPERATORS),
        Rule::symbols("ellipses", &ELLIPSES),
        Rule::symbols("arrows", &ARROWS),
        Rule::symbols("sets", &SETS),
        Rule::symbols("big-operators", &BIG_OPERATORS),
        Rule::symbols("bars", &BARS),
        Rule::pattern("abs", &cat(&[r"\\abs\s*", ARG]), "|${1}|"),
        // Text wrappers
        Rule::pattern(
            "text",
            &cat(&[
                r"\\(?:text|textbf|textit|textrm|textsf|texttt|mathrm|mathbf|mathit|mathsf|mathtt|operatorname\*?)\s*",
                ARG,
            ]),
            "${1}",
        ),
        // Spacing
        Rule::pattern("hspace", r"\\hspace\*?\s*\{[^{}]*\}", " "),
        Rule::pattern("short-space", r"\\[,:; ]", " "),
        Rule::pattern("negative-space", r"\\!", ""),
        Rule::symbols("spacing", &SPACING),
        // Sizing
        Rule::pattern("null-delimiter", r"\\(?:left|right)\s*\.", ""),
        Rule::symbols("sizing", &SIZING),
        // Braces
        Rule {
            name: "unknown-command-group",
            kind: RuleKind::Drop {
                re: &*COMMAND_BEFORE_GROUP,
            },
        },
        Rule::pattern("brace-group", r"\{([^{}]+)\}", "${1}"),
    ]
}
