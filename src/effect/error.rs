//! Error types for console effects.
//!
//! Absence (`Maybe::Absent`) is the only failure signal inside the
//! containers. The errors here belong to the console port underneath the
//! effect producers: the terminal going away, or input that is not text.

use thiserror::Error;

/// Represents a failure of the console behind an effect producer.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::ConsoleError;
///
/// let error = ConsoleError::EndOfInput;
/// assert_eq!(error.to_string(), "console input ended before a value was read");
/// ```
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before a word could be read.
    #[error("console input ended before a value was read")]
    EndOfInput,

    /// The input contained bytes that are not valid UTF-8.
    #[error("console input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn test_end_of_input_display() {
        assert_eq!(
            ConsoleError::EndOfInput.to_string(),
            "console input ended before a value was read"
        );
    }

    #[rstest]
    fn test_io_error_converts_and_keeps_source() {
        let error: ConsoleError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();

        assert!(matches!(error, ConsoleError::Io(_)));
        assert_eq!(error.to_string(), "console I/O failed: pipe closed");
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_invalid_utf8_converts() {
        let utf8_error = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error = ConsoleError::from(utf8_error);
        assert!(matches!(error, ConsoleError::InvalidUtf8(_)));
    }

    #[rstest]
    fn test_end_of_input_has_no_source() {
        assert!(ConsoleError::EndOfInput.source().is_none());
    }
}
