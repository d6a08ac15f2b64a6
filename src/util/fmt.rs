use std::fmt::{self, Debug, Display, Formatter};

/// Formats a byte string as text, escaping anything that isn't printable ASCII. Debug adds quotes.
pub struct DebugBytes<'a>(pub &'a [u8]);

impl Display for DebugBytes<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

impl Debug for DebugBytes<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}
