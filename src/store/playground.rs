//! Regex playground state.

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_FLAGS: &str = "g";

/// Parsed JavaScript-style regex flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_all: bool,
    /// `u` or `v`. Without it `\p{..}` is the literal text `p{..}`.
    pub unicode: bool,
    pub sticky: bool,
    /// `d`: report capture group spans in [`RegexMatch::indices`].
    pub indices: bool,
}

impl RegexFlags {
    /// Parse a flag string such as `"gi"`. Unknown or repeated flags are rejected.
    pub fn parse(flags: &str) -> Result<Self, FlagError> {
        let mut out = RegexFlags::default();
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut out.global,
                'i' => &mut out.case_insensitive,
                'm' => &mut out.multi_line,
                's' => &mut out.dot_all,
                'u' | 'v' => &mut out.unicode,
                'y' => &mut out.sticky,
                'd' => &mut out.indices,
                other => return Err(FlagError::Unknown(other)),
            };
            if *slot {
                return Err(FlagError::Repeated(c));
            }
            *slot = true;
        }
        Ok(out)
    }

    fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&translate(pattern, self.unicode))
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_all)
            .build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    Unknown(char),
    Repeated(char),
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagError::Unknown(c) => write!(f, "invalid regular expression flag '{}'", c),
            FlagError::Repeated(c) => write!(f, "duplicate regular expression flag '{}'", c),
        }
    }
}

impl std::error::Error for FlagError {}

/// One match. Offsets are byte positions into the playground text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Capture groups 1..n; `None` where a group did not participate.
    pub groups: Vec<Option<String>>,
    /// `(start, end)` of groups 1..n. Only filled under the `d` flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indices: Option<Vec<Option<(usize, usize)>>>,
}

impl RegexMatch {
    fn from_captures(caps: &Captures<'_>, with_indices: bool) -> Option<Self> {
        let whole = caps.get(0)?;
        let indices = with_indices.then(|| {
            caps.iter()
                .skip(1)
                .map(|g| g.map(|m| (m.start(), m.end())))
                .collect()
        });
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str().to_string(),
            groups: caps
                .iter()
                .skip(1)
                .map(|g| g.map(|m| m.as_str().to_string()))
                .collect(),
            indices,
        })
    }
}

/// Result of reading [`Playground::matches`].
///
/// When the pattern or flags cannot be compiled `matches` is empty and
/// `error` carries the reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    pub matches: Vec<RegexMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchSet {
    fn failed(reason: impl fmt::Display) -> Self {
        Self {
            matches: Vec::new(),
            error: Some(reason.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Matched substrings, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.text.as_str()).collect()
    }
}

/// Editable `{pattern, text, flags}` record behind the regex playground.
///
/// Owned by whichever UI surface shows the playground; every read of
/// [`matches`](Self::matches) recomputes from the current fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playground {
    pattern: String,
    text: String,
    flags: String,
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            text: String::new(),
            flags: DEFAULT_FLAGS.to_string(),
        }
    }
}

impl Playground {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn update_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub fn update_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn update_flags(&mut self, flags: impl Into<String>) {
        self.flags = flags.into();
    }

    pub fn matches(&self) -> MatchSet {
        find_matches(&self.text, &self.pattern, &self.flags)
    }
}

/// Run `pattern` with JavaScript-style `flags` over `text`. Never panics.
pub fn find_matches(text: &str, pattern: &str, flags: &str) -> MatchSet {
    let flags = match RegexFlags::parse(flags) {
        Ok(f) => f,
        Err(e) => return MatchSet::failed(e),
    };
    let re = match flags.compile(pattern) {
        Ok(re) => re,
        Err(e) => return MatchSet::failed(e),
    };

    MatchSet {
        matches: exec_all(&re, text, &flags),
        error: None,
    }
}

// Follows `RegExp.prototype.exec` with `lastIndex`: an empty match moves the
// cursor one character on, so it may directly follow a non-empty one. Under
// `y` each match must start exactly at the cursor.
fn exec_all(re: &Regex, text: &str, flags: &RegexFlags) -> Vec<RegexMatch> {
    let mut out = Vec::new();
    let mut pos = 0;
    while pos <= text.len() {
        let Some(m) = re
            .captures_at(text, pos)
            .and_then(|c| RegexMatch::from_captures(&c, flags.indices))
        else {
            break;
        };
        if flags.sticky && m.start != pos {
            break;
        }
        pos = if m.end == m.start {
            next_char_boundary(text, m.end)
        } else {
            m.end
        };
        out.push(m);
        if !flags.global {
            break;
        }
    }
    out
}

const DIGIT: &str = "[0-9]";
const NOT_DIGIT: &str = "[^0-9]";
const WORD: &str = "[0-9A-Za-z_]";
const NOT_WORD: &str = "[^0-9A-Za-z_]";

/// Rewrite a JavaScript pattern for the `regex` crate.
///
/// `\d`, `\w` and `\b` are ASCII in JavaScript with or without `u`; the
/// crate's are Unicode, so they become explicit ASCII classes. `\s` is left
/// alone since both sides treat it as Unicode whitespace. A `[` inside a class
/// is literal in JavaScript but opens a nested class here, so it is escaped.
fn translate(pattern: &str, unicode: bool) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(next) = chars.next() else {
                    out.push('\\');
                    break;
                };
                match next {
                    'd' => out.push_str(DIGIT),
                    'D' => out.push_str(NOT_DIGIT),
                    'w' => out.push_str(WORD),
                    'W' => out.push_str(NOT_WORD),
                    'b' if !in_class => out.push_str(r"(?-u:\b)"),
                    'B' if !in_class => out.push_str(r"(?-u:\B)"),
                    'p' | 'P' if !unicode => {
                        out.push(next);
                        if chars.peek() == Some(&'{') {
                            chars.next();
                            out.push_str(r"\{");
                        }
                    }
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                }
            }
            '[' if in_class => out.push_str(r"\["),
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map(|c| at + c.len_utf8())
        .unwrap_or(text.len() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_global_flag() {
        let p = Playground::new();
        assert_eq!(p.flags(), "g");
        assert_eq!(p.pattern(), "");
        assert_eq!(p.text(), "");
    }

    #[test]
    fn parses_flags() {
        let f = RegexFlags::parse("gimsy").unwrap();
        assert!(f.global && f.case_insensitive && f.multi_line && f.dot_all && f.sticky);
        assert!(!f.unicode);
        assert_eq!(RegexFlags::parse("gg"), Err(FlagError::Repeated('g')));
        assert_eq!(RegexFlags::parse("gx"), Err(FlagError::Unknown('x')));
    }

    #[test]
    fn sticky_stops_at_first_gap() {
        let set = find_matches("aab", "a", "gy");
        assert_eq!(set.texts(), vec!["a", "a"]);

        let set = find_matches("baa", "a", "gy");
        assert!(set.is_empty());
        assert!(!set.has_error());
    }

    #[test]
    fn translate_makes_classes_ascii() {
        assert_eq!(translate(r"\d+\W", false), "[0-9]+[^0-9A-Za-z_]");
        assert_eq!(translate(r"\bx\B", true), r"(?-u:\b)x(?-u:\B)");
        assert_eq!(translate(r"[\w.[]", false), r"[[0-9A-Za-z_].\[]");
        assert_eq!(translate(r"\\d\s", false), r"\\d\s");
    }

    #[test]
    fn translate_p_escape_depends_on_unicode() {
        assert_eq!(translate(r"\p{L}", true), r"\p{L}");
        assert_eq!(translate(r"\p{L}", false), r"p\{L}");
    }

    #[test]
    fn sticky_empty_match_terminates() {
        let set = find_matches("ab", "", "gy");
        assert_eq!(set.len(), 3);
        assert!(set.matches.iter().all(|m| m.text.is_empty()));
    }
}
