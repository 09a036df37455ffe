use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// One comma-separated piece of the input, exactly as it appeared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawElement<'a> {
    pub text: &'a str,
}

impl<'a> RawElement<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The element with surrounding whitespace and byte order marks removed
    pub fn trimmed(&self) -> &'a str {
        self.text
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
    }
}

/// Returns true for non-empty strings made only of ASCII letters and digits
pub fn is_valid_token(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// A validated alphanumeric token.
///
/// Ordering is plain byte order, so digits sort before uppercase letters
/// and uppercase before lowercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(text: &str) -> Option<Self> {
        is_valid_token(text).then(|| Self(text.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
