//! Control-word tables for the readable-text rules.
//!
//! Keys are command names without the leading backslash. Each table is
//! applied as one rule, matching whole control words only, so `\in` never
//! fires inside `\infty`.

use phf::phf_map;

/// Greek letters spelled out by name.
pub static GREEK_LETTERS: phf::Map<&'static str, &'static str> = phf_map! {
    "alpha" => "alpha",
    "beta" => "beta",
    "gamma" => "gamma",
    "delta" => "delta",
    "epsilon" => "epsilon",
    "varepsilon" => "epsilon",
    "zeta" => "zeta",
    "eta" => "eta",
    "theta" => "theta",
    "vartheta" => "theta",
    "iota" => "iota",
    "kappa" => "kappa",
    "lambda" => "lambda",
    "mu" => "mu",
    "nu" => "nu",
    "xi" => "xi",
    "pi" => "pi",
    "varpi" => "pi",
    "rho" => "rho",
    "varrho" => "rho",
    "sigma" => "sigma",
    "varsigma" => "sigma",
    "tau" => "tau",
    "upsilon" => "upsilon",
    "phi" => "phi",
    "varphi" => "phi",
    "chi" => "chi",
    "psi" => "psi",
    "omega" => "omega",
    "Gamma" => "Gamma",
    "Delta" => "Delta",
    "Theta" => "Theta",
    "Lambda" => "Lambda",
    "Xi" => "Xi",
    "Pi" => "Pi",
    "Sigma" => "Sigma",
    "Upsilon" => "Upsilon",
    "Phi" => "Phi",
    "Psi" => "Psi",
    "Omega" => "Omega",
};

/// Binary, relational and logic operators.
// `\le` and `\Leftarrow` (see ARROWS) both render as `<=`.
pub static OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "times" => "*",
    "div" => "/",
    "pm" => "+/-",
    "mp" => "-/+",
    "cdot" => "*",
    "neq" => "!=",
    "ne" => "!=",
    "leq" => "<=",
    "le" => "<=",
    "geq" => ">=",
    "ge" => ">=",
    "approx" => "~=",
    "equiv" => "===",
    "infty" => "infinity",
    "perp" => "perp",
    "parallel" => "||",
    "angle" => "angle ",
};

pub static ELLIPSES: phf::Map<&'static str, &'static str> = phf_map! {
    "ldots" => "...",
    "cdots" => "...",
    "dots" => "...",
    "vdots" => "...",
};

pub static ARROWS: phf::Map<&'static str, &'static str> = phf_map! {
    "rightarrow" => "->",
    "to" => "->",
    "leftarrow" => "<-",
    "Rightarrow" => "=>",
    "Leftarrow" => "<=",
};

/// Set notation. Padding spaces are collapsed later.
pub static SETS: phf::Map<&'static str, &'static str> = phf_map! {
    "in" => " in ",
    "notin" => " not in ",
    "subset" => " subset ",
    "subseteq" => " subseteq ",
    "cup" => " union ",
    "cap" => " intersect ",
    "emptyset" => "{}",
    "varnothing" => "{}",
};

/// Large operators, calculus and degree marks.
pub static BIG_OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "sum" => "sum",
    "prod" => "prod",
    "int" => "integral",
    "partial" => "d",
    "degree" => " degrees",
    "circ" => " degrees",
    "plusmn" => "+/-",
};

/// Commands that mark a degree when used directly as a superscript.
pub static DEGREE_MARKS: phf::Map<&'static str, &'static str> = phf_map! {
    "circ" => " degrees",
    "degree" => " degrees",
};

pub static BARS: phf::Map<&'static str, &'static str> = phf_map! {
    "lvert" => "|",
    "rvert" => "|",
    "vert" => "|",
    "mid" => "|",
};

pub static SPACING: phf::Map<&'static str, &'static str> = phf_map! {
    "quad" => " ",
    "qquad" => " ",
    "thinspace" => " ",
    "medspace" => " ",
    "thickspace" => " ",
    "enspace" => " ",
    "space" => " ",
};

/// Delimiter sizing and style switches that render as nothing.
pub static SIZING: phf::Map<&'static str, &'static str> = phf_map! {
    "left" => "",
    "right" => "",
    "big" => "",
    "Big" => "",
    "bigg" => "",
    "Bigg" => "",
    "bigl" => "",
    "bigr" => "",
    "Bigl" => "",
    "Bigr" => "",
    "biggl" => "",
    "biggr" => "",
    "Biggl" => "",
    "Biggr" => "",
    "displaystyle" => "",
    "textstyle" => "",
    "scriptstyle" => "",
};

/// Escaped literal characters, keyed by the character after the backslash.
/// Values are private-use tombstones restored by [`restore_tombstones`].
/// Escaped braces are not listed: they become ordinary grouping braces.
pub static ESCAPED_LITERALS: phf::Map<&'static str, &'static str> = phf_map! {
    "%" => "\u{E004}",
    "&" => "\u{E005}",
    "#" => "\u{E006}",
    "_" => "\u{E007}",
    "$" => "\u{E008}",
};

/// Map a tombstone back to the literal text it protects.
pub fn tombstone_literal(c: char) -> Option<&'static str> {
    match c {
        '\u{E004}' => Some("%"),
        '\u{E005}' => Some("&"),
        '\u{E006}' => Some("#"),
        '\u{E007}' => Some("_"),
        '\u{E008}' => Some("$"),
        _ => None,
    }
}

/// Replace every tombstone in `input` with its literal text.
pub fn restore_tombstones(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match tombstone_literal(ch) {
            Some(literal) => out.push_str(literal),
            None => out.push(ch),
        }
    }
    out
}
