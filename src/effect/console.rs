//! Console port used by the effect producers.
//!
//! [`Console`] pairs an input reader with an output writer. The demos run
//! against standard input and output through [`Console::stdio`]; tests drive
//! the same code with in-memory buffers.
//!
//! Every read and write happens during the call and is returned wrapped in
//! an [`IO`], matching the eager effect model.

use std::fmt;
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

use super::{ConsoleError, IO};
use crate::control::Maybe;

/// An input and an output stream acting as the program's console.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::Console;
///
/// let mut console = Console::new("Ada Lovelace\n".as_bytes(), Vec::new());
/// let first = console.read_word().unwrap();
/// let second = console.read_word().unwrap();
///
/// assert_eq!(first.into_inner(), "Ada");
/// assert_eq!(second.into_inner(), "Lovelace");
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Creates a console over the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console from an input reader and an output writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Reads one whitespace-delimited word.
    ///
    /// Leading whitespace, including line breaks, is skipped. The whitespace
    /// that ends the word is consumed.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::EndOfInput`] if the input ends before any word
    /// - [`ConsoleError::Io`] if reading fails
    /// - [`ConsoleError::InvalidUtf8`] if the word is not UTF-8
    pub fn read_word(&mut self) -> Result<IO<String>, ConsoleError> {
        let mut word = Vec::new();
        loop {
            let (consumed, finished) = {
                let buffer = self.input.fill_buf()?;
                if buffer.is_empty() {
                    break;
                }
                let mut consumed = 0;
                let mut finished = false;
                for &byte in buffer {
                    consumed += 1;
                    if byte.is_ascii_whitespace() {
                        if !word.is_empty() {
                            finished = true;
                            break;
                        }
                    } else {
                        word.push(byte);
                    }
                }
                (consumed, finished)
            };
            self.input.consume(consumed);
            if finished {
                break;
            }
        }

        if word.is_empty() {
            return Err(ConsoleError::EndOfInput);
        }
        let word = String::from_utf8(word)?;
        tracing::trace!(%word, "read word from console");
        Ok(IO::pure(word))
    }

    /// Reads one line, without its line terminator.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::EndOfInput`] if the input is already exhausted
    /// - [`ConsoleError::Io`] if reading fails
    pub fn read_line(&mut self) -> Result<IO<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        let trimmed_length = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_length);
        tracing::trace!(%line, "read line from console");
        Ok(IO::pure(line))
    }

    /// Reads one word and parses it as an integer.
    ///
    /// A word that is not an integer yields an absent value rather than an
    /// error, so malformed input travels through the same absence channel as
    /// every other refused value.
    ///
    /// # Errors
    ///
    /// Same as [`Console::read_word`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::effect::Console;
    ///
    /// let mut console = Console::new("41 forty-two".as_bytes(), Vec::new());
    /// assert_eq!(console.read_number().unwrap().into_inner(), Maybe::present(41));
    /// assert_eq!(console.read_number().unwrap().into_inner(), Maybe::absent());
    /// ```
    pub fn read_number(&mut self) -> Result<IO<Maybe<i64>>, ConsoleError> {
        let word = self.read_word()?.into_inner();
        let number = Maybe::from(word.parse::<i64>().ok());
        if number.is_absent() {
            tracing::debug!(%word, "console input is not an integer");
        }
        Ok(IO::pure(number))
    }

    /// Writes `message` followed by a line break, and flushes.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if writing or flushing fails.
    pub fn write_line<M: fmt::Display>(&mut self, message: M) -> Result<IO<()>, ConsoleError> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(IO::pure(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[rstest]
    #[case("Ada", "Ada")]
    #[case("  \n\t Ada\n", "Ada")]
    #[case("Ada Lovelace", "Ada")]
    fn test_read_word(#[case] input: &str, #[case] expected: &str) {
        let word = console(input).read_word().unwrap();
        assert_eq!(word.into_inner(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   \n  ")]
    fn test_read_word_end_of_input(#[case] input: &str) {
        let result = console(input).read_word();
        assert!(matches!(result, Err(ConsoleError::EndOfInput)));
    }

    #[rstest]
    fn test_read_word_across_small_buffers() {
        let reader = std::io::BufReader::with_capacity(2, "  Grace Hopper".as_bytes());
        let mut console = Console::new(reader, Vec::new());
        assert_eq!(console.read_word().unwrap().into_inner(), "Grace");
        assert_eq!(console.read_word().unwrap().into_inner(), "Hopper");
    }

    #[rstest]
    fn test_read_word_invalid_utf8() {
        let mut console = Console::new(&[0xffu8, 0xfe, b'\n'][..], Vec::new());
        assert!(matches!(console.read_word(), Err(ConsoleError::InvalidUtf8(_))));
    }

    #[rstest]
    fn test_read_line_strips_terminator() {
        let mut console = console("first line\r\nsecond\n");
        assert_eq!(console.read_line().unwrap().into_inner(), "first line");
        assert_eq!(console.read_line().unwrap().into_inner(), "second");
        assert!(matches!(console.read_line(), Err(ConsoleError::EndOfInput)));
    }

    #[rstest]
    #[case("7", Maybe::present(7))]
    #[case("-12", Maybe::present(-12))]
    #[case("seven", Maybe::absent())]
    #[case("7.5", Maybe::absent())]
    fn test_read_number(#[case] input: &str, #[case] expected: Maybe<i64>) {
        let number = console(input).read_number().unwrap();
        assert_eq!(number.into_inner(), expected);
    }

    #[rstest]
    fn test_write_line() {
        let mut console = console("");
        console.write_line("Hello, what is your name?").unwrap();
        console.write_line(42).unwrap();
        let (_, output) = console.into_parts();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Hello, what is your name?\n42\n"
        );
    }
}
