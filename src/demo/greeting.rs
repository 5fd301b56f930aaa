//! Interactive greeting driven through eager `IO` values.
//!
//! Every producer here touches the console when called. The values it hands
//! back are threaded on with [`IO::try_flat_map`], since the console itself
//! can fail.

use std::io::{BufRead, Write};

use crate::control::Maybe;
use crate::effect::{Console, ConsoleError, IO};
use crate::typeclass::Functor;

/// Printed when the favourite number cannot be read as an integer.
pub const NOT_A_NUMBER: &str = "That doesn't look like a number to me";

/// Asks for the user's name and reads one word.
///
/// # Errors
///
/// Propagates [`ConsoleError`] from the prompt or the read.
pub fn ask_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<IO<String>, ConsoleError> {
    console.write_line("Hello, what is your name?")?;
    console.read_word()
}

/// Greets `name`.
///
/// # Errors
///
/// Propagates [`ConsoleError`] from the write.
pub fn greet_user<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &str,
) -> Result<IO<()>, ConsoleError> {
    tracing::debug!(name, "greeting user");
    IO::print_line(console, format_args!("Pleased to meet you, {name}!"))
}

/// Asks for a favourite number and reads one word as an integer.
///
/// # Errors
///
/// Propagates [`ConsoleError`] from the prompt or the read. A word that is
/// not an integer is not an error; it comes back absent.
pub fn ask_favourite_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<IO<Maybe<i64>>, ConsoleError> {
    console.write_line("What is your favourite number?")?;
    console.read_number()
}

/// `n + 1`, absent on overflow.
pub fn better_number(n: i64) -> Maybe<i64> {
    Maybe::from(n.checked_add(1))
}

/// Announces that `better` beats `n`.
///
/// # Errors
///
/// Propagates [`ConsoleError`] from the write.
pub fn show_better_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    n: i64,
    better: i64,
) -> Result<IO<()>, ConsoleError> {
    IO::print_line(
        console,
        format_args!("Personally, I think {better} is a better number than {n}"),
    )
}

/// Runs the favourite-number exchange.
///
/// # Errors
///
/// Propagates [`ConsoleError`].
pub fn favourite_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<IO<()>, ConsoleError> {
    ask_favourite_number(console)?.try_flat_map(|number| {
        let pair = number >> (|n: i64| better_number(n).fmap(|better| (n, better)));
        match pair {
            Maybe::Present((n, better)) => show_better_number(console, n, better),
            Maybe::Absent => {
                tracing::debug!("favourite number was not usable");
                IO::print_line(console, NOT_A_NUMBER)
            }
        }
    })
}

/// Runs the whole effect demo and returns the final `IO`.
///
/// The transcript ends with `End value of computation is IO ()`.
///
/// # Errors
///
/// Returns [`ConsoleError::EndOfInput`] if the input runs out before both
/// answers were read, or [`ConsoleError::Io`] if the console fails.
///
/// # Examples
///
/// ```rust
/// use monadic::demo::greeting;
/// use monadic::effect::Console;
///
/// let mut console = Console::new("Ada 41\n".as_bytes(), Vec::new());
/// let io = greeting::run(&mut console).unwrap();
/// assert_eq!(io.to_string(), "IO ()");
///
/// let (_, output) = console.into_parts();
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("Personally, I think 42 is a better number than 41"));
/// ```
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<IO<()>, ConsoleError> {
    ask_name(console)?.try_flat_map(|name| greet_user(console, &name))?;
    let io = favourite_number(console)?;
    console.write_line(format_args!("End value of computation is {io}"))?;
    Ok(io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn transcript(input: &str) -> (Result<IO<()>, ConsoleError>, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let result = run(&mut console);
        let (_, output) = console.into_parts();
        (result, String::from_utf8(output).unwrap())
    }

    #[rstest]
    fn test_full_transcript() {
        let (result, output) = transcript("Ada\n41\n");
        assert_eq!(result.unwrap(), IO::pure(()));
        assert_eq!(
            output,
            "Hello, what is your name?\n\
             Pleased to meet you, Ada!\n\
             What is your favourite number?\n\
             Personally, I think 42 is a better number than 41\n\
             End value of computation is IO ()\n"
        );
    }

    #[rstest]
    fn test_words_not_lines_are_read() {
        // The surname is left in the input and answers the number prompt.
        let (result, output) = transcript("Grace Hopper\n7\n");
        assert!(result.is_ok());
        assert!(output.contains("Pleased to meet you, Grace!"));
        assert!(output.contains(NOT_A_NUMBER));
        assert!(!output.contains("Personally"));
    }

    #[rstest]
    #[case::not_a_number("Ada\nseven\n")]
    #[case::overflow("Ada\n9223372036854775807\n")]
    fn test_unusable_number(#[case] input: &str) {
        let (result, output) = transcript(input);
        assert!(result.is_ok());
        assert!(output.contains(NOT_A_NUMBER));
        assert!(output.ends_with("End value of computation is IO ()\n"));
    }

    #[rstest]
    #[case::no_name("")]
    #[case::no_number("Ada\n")]
    fn test_end_of_input(#[case] input: &str) {
        let (result, _) = transcript(input);
        assert!(matches!(result, Err(ConsoleError::EndOfInput)));
    }

    #[rstest]
    #[case(-1, Maybe::present(0))]
    #[case(41, Maybe::present(42))]
    #[case(i64::MAX, Maybe::absent())]
    fn test_better_number(#[case] n: i64, #[case] expected: Maybe<i64>) {
        assert_eq!(better_number(n), expected);
    }
}
