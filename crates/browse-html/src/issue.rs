use std::fmt;

/// A malformed-markup situation that was recovered from.
///
/// Issues are diagnostics only; recording them never changes the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human readable description of the recovery.
    pub message: String,
    /// Byte offset into the input where the issue was noticed.
    pub position: usize,
}

impl ParseIssue {
    /// Create an issue at the given byte offset.
    #[must_use]
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at byte {}: {}", self.position, self.message)
    }
}
