//! Classification of a single ducky script line.

use std::fmt;

/// Comment marker recognised at the start of a line.
pub const COMMENT_MARKER: &str = "//";

/// A classified script line.  Borrowed slices point into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// `// text` or `REM text`.  Holds everything after the marker, so that
    /// `//` followed by the body reproduces a `//` line verbatim.
    Comment(&'a str),
    /// `DELAY <ms>`; the raw argument, if any.
    Delay(Option<&'a str>),
    /// `DEFAULTDELAY <ms>` or `DEFAULT_DELAY <ms>`; the raw argument, if any.
    DefaultDelay(Option<&'a str>),
    /// `STRING <text>`; the payload with internal spacing intact.
    StringLiteral(&'a str),
    /// `ENTER`.
    Enter,
    /// Zero or more modifier tokens followed by one key token.
    Combo(Vec<&'a str>),
}

/// Classifies one line of script text.
///
/// Leading and trailing whitespace is ignored.  Keywords are matched against
/// the first whitespace-delimited token without regard to case.
pub fn classify_line(line: &str) -> ScriptLine<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ScriptLine::Blank;
    }
    if let Some(body) = line.strip_prefix(COMMENT_MARKER) {
        return ScriptLine::Comment(body);
    }

    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return ScriptLine::Blank;
    };

    if command.eq_ignore_ascii_case("REM") {
        ScriptLine::Comment(&line[command.len()..])
    } else if command.eq_ignore_ascii_case("DELAY") {
        ScriptLine::Delay(tokens.next())
    } else if command.eq_ignore_ascii_case("DEFAULTDELAY")
        || command.eq_ignore_ascii_case("DEFAULT_DELAY")
    {
        ScriptLine::DefaultDelay(tokens.next())
    } else if command.eq_ignore_ascii_case("STRING") {
        ScriptLine::StringLiteral(string_payload(&line[command.len()..]))
    } else if command.eq_ignore_ascii_case("ENTER") {
        ScriptLine::Enter
    } else {
        ScriptLine::Combo(line.split_whitespace().collect())
    }
}

/// Drops the single separator character that follows the `STRING` keyword.
fn string_payload(after_keyword: &str) -> &str {
    let mut chars = after_keyword.chars();
    chars.next();
    chars.as_str()
}

/// Splits script text into lines.
///
/// `\n`, `\r\n`, a lone `\r`, the vertical tab, form feed, the ASCII
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators all end a line.  A terminator at the very end of the text does
/// not start an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((at, brk)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..at];
        let mut next = at + brk.len_utf8();
        if brk == '\r' && rest[next..].starts_with('\n') {
            next += 1;
        }
        rest = &rest[next..];
        Some(line)
    })
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// A delay in milliseconds.
///
/// Held as canonical decimal digits (no leading zeros) so that any value the
/// script spells out is emitted exactly, whatever its magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Millis(String);

impl Millis {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as a `u64`, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for Millis {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a delay argument: one or more ASCII digits, no sign.
pub fn parse_millis(argument: &str) -> Option<Millis> {
    if argument.is_empty() || !argument.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = argument.trim_start_matches('0');
    Some(if digits.is_empty() {
        Millis::zero()
    } else {
        Millis(digits.to_string())
    })
}
