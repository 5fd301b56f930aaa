//! Demonstration scenarios behind the `optional-demo`, `sequence-demo` and
//! `effect-demo` binaries.
//!
//! - [`numeric`]: `ln` and reciprocal as partial functions
//! - [`wallet`]: chained lookups that stop at the first miss
//! - [`fibonacci`]: one-to-many expansion of a number list
//! - [`gridworld`]: breadth-first neighbour enumeration
//! - [`greeting`]: console prompts sequenced through `IO`
//!
//! Each `run_*` function writes its transcript to a [`Console`], so the
//! binaries print to standard output and tests read the same text back from
//! a buffer.

pub mod fibonacci;
pub mod greeting;
pub mod gridworld;
pub mod numeric;
pub mod wallet;

use std::io::{BufRead, Write};

use crate::control::{Maybe, Sequence};
use crate::effect::{Console, ConsoleError};

use self::gridworld::{Coordinate, Gridworld};
use self::wallet::{KNOWN_USER, UNKNOWN_USER, WalletDirectory};

/// Writes the optional-value transcript.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if writing fails.
pub fn run_optional<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    directory: &WalletDirectory,
) -> Result<(), ConsoleError> {
    let something = Maybe::present(2.0);
    // The associated function and the operator are the same bind.
    let result = Maybe::bind(Maybe::bind(something, numeric::safe_log), numeric::reciprocal);
    debug_assert_eq!(result, numeric::inverse_log(something));
    console.write_line(format_args!("'something' is {something}"))?;
    console.write_line(format_args!("1 / ln(something) = {result}"))?;

    let nothing = Maybe::<f64>::absent();
    console.write_line(format_args!("'nothing' is {nothing}"))?;
    console.write_line(format_args!("1 / ln(nothing) = {}", numeric::inverse_log(nothing)))?;

    let erroneous = numeric::inverse_log(Maybe::present(1.0));
    console.write_line(format_args!("'erroneous_result' 1 / ln(1) is {erroneous}"))?;

    console.write_line(format_args!(
        "Existing user's balance after purchase: {}",
        directory.balance_after_purchase(KNOWN_USER)
    ))?;
    console.write_line(format_args!(
        "Non-existent user's balance after purchase: {}",
        directory.balance_after_purchase(UNKNOWN_USER)
    ))?;
    Ok(())
}

/// Writes the sequence transcript.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if writing fails.
pub fn run_sequence<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    grid: &Gridworld,
) -> Result<(), ConsoleError> {
    console.write_line("Fibonacci numbers, pre flatmap:")?;
    for number in fibonacci::fibonacci() {
        console.write_line(number)?;
    }
    console.write_line("Fibonacci numbers, post flatmap:")?;
    for number in fibonacci::expanded_fibonacci() {
        console.write_line(number)?;
    }

    console.write_line("next_moves:")?;
    write_coordinates(console, &grid.after_turns(Gridworld::START, 1))?;

    // Different paths onto the same tile each leave their own entry.
    console.write_line("after_two_turns:")?;
    write_coordinates(console, &grid.after_turns(Gridworld::START, 2))?;
    Ok(())
}

fn write_coordinates<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    coordinates: &Sequence<Coordinate>,
) -> Result<(), ConsoleError> {
    for coordinate in coordinates {
        console.write_line(format_args!("(row, column): {coordinate}"))?;
    }
    Ok(())
}
