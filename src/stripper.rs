//! Comment stripping.
//!
//! A pure, literal-aware text transform that removes `//` and `/* */`
//! comments from C/C++ source while leaving string and character literals
//! untouched.
//!
//! A single combined pattern matches, in priority order: a line comment, a
//! block comment (non-greedy, spanning lines), a single-quoted character
//! literal, or a double-quoted string literal. Both literal forms honor
//! backslash-escaped delimiters, so `'\''` and `"a\"b"` are consumed as
//! whole literals. Because the regex engine consumes whichever alternative
//! matches first, a literal containing `//` or `/*` is swallowed as a
//! literal and copied through before the comment alternatives ever see its
//! contents.
//!
//! Every removed comment is replaced by a single space, never the empty
//! string, so two tokens separated only by a comment cannot be joined into
//! one.
//!
//! This is span matching, not parsing: preprocessor semantics (macros,
//! `#ifdef`, line continuations inside a comment marker) are out of scope.

use regex::Regex;

use crate::error::Result;

/// Line comment | block comment | char literal | string literal. `(?s)`
/// lets block comments span lines; `(?m)` anchors `$` at line ends so a
/// line comment stops before its newline.
const COMMENT_OR_LITERAL: &str =
    r#"(?sm)//.*?$|/\*.*?\*/|'(?:\\.|[^\\'])*'|"(?:\\.|[^\\"])*""#;

/// Remove comments from `text`, preserving literal contents.
pub fn strip(text: &str) -> Result<String> {
    let pattern = Regex::new(COMMENT_OR_LITERAL)?;

    let stripped = pattern.replace_all(text, |caps: &regex::Captures<'_>| {
        let matched = &caps[0];
        if matched.starts_with('/') {
            // A comment of either kind; a space and not an empty string
            " ".to_string()
        } else {
            matched.to_string()
        }
    });

    Ok(stripped.into_owned())
}
