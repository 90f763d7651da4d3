use std::io;

use thiserror::Error;

/// The only way a parse can fail: the input source reported an error.
///
/// End of input is not an error, and malformed markup is recovered from.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading from the underlying input failed.
    #[error("failed to read markup input: {0}")]
    Io(#[from] io::Error),
}
