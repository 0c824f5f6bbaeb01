use std::cmp::Ordering;
use std::fmt;

/// A contiguous run of text treated as one comparable unit.
///
/// Tokens order lexicographically by character code point, compared
/// character by character until a mismatch or either token ends; a token
/// that is a prefix of another sorts before it. The text is owned through a
/// single heap handle, so swapping two tokens in a sequence exchanges the
/// handles and never copies or mutates the character data.
#[derive(Clone)]
pub struct Token {
    text: Box<str>,
}

impl Token {
    pub fn new<S: Into<Box<str>>>(text: S) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text.into()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Token {}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut lhs = self.text.chars();
        let mut rhs = other.text.chars();

        loop {
            match (lhs.next(), rhs.next()) {
                (Some(a), Some(b)) => match a.cmp(&b) {
                    Ordering::Equal => continue,
                    mismatch => return mismatch,
                },
                // One token ran out: the shorter prefix sorts first.
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (None, None) => return Ordering::Equal,
            }
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
