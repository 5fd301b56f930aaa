//! End-to-end scenarios for the demo drivers.

use std::io::Cursor;

use monadic::control::{Maybe, Sequence};
use monadic::demo::gridworld::{Coordinate, Gridworld};
use monadic::demo::numeric::{reciprocal, safe_log};
use monadic::demo::wallet::{KNOWN_USER, UNKNOWN_USER, WalletDirectory};
use monadic::demo::{self, greeting};
use monadic::effect::{Console, ConsoleError};
use monadic::sequence;
use rstest::{fixture, rstest};

#[fixture]
fn grid() -> Gridworld {
    Gridworld::default()
}

#[fixture]
fn directory() -> WalletDirectory {
    WalletDirectory::default()
}

// =============================================================================
// Optional values
// =============================================================================

#[rstest]
fn inverse_log_of_two() {
    let result = Maybe::present(2.0) >> safe_log >> reciprocal;
    match result {
        Maybe::Present(value) => assert!((value - std::f64::consts::LOG2_E).abs() < 1e-4),
        Maybe::Absent => panic!("expected a value"),
    }
}

#[rstest]
fn inverse_log_of_one_is_absent() {
    assert_eq!(Maybe::present(1.0) >> safe_log >> reciprocal, Maybe::absent());
}

#[rstest]
fn wallet_purchase(directory: WalletDirectory) {
    assert_eq!(directory.balance_after_purchase(KNOWN_USER), Maybe::present(118.45));
    assert_eq!(directory.balance_after_purchase(UNKNOWN_USER), Maybe::absent());
}

// =============================================================================
// Sequences
// =============================================================================

#[rstest]
fn one_turn_from_start(grid: Gridworld) {
    let next_moves = Sequence::singleton(Coordinate::new(2, 0)) >> (|c: Coordinate| grid.neighbours(c));
    assert_eq!(
        next_moves,
        sequence![Coordinate::new(1, 0), Coordinate::new(2, 1)]
    );
}

#[rstest]
fn two_turns_from_start_keeps_duplicate_paths(grid: Gridworld) {
    let after_two_turns = grid.expand(grid.expand(sequence![Coordinate::new(2, 0)]));
    assert_eq!(
        after_two_turns,
        sequence![
            Coordinate::new(0, 0),
            Coordinate::new(2, 0),
            Coordinate::new(2, 2),
            Coordinate::new(2, 0),
        ]
    );
}

#[rstest]
fn three_turns_never_enter_blocked_tile(grid: Gridworld) {
    let blocked = Coordinate::new(1, 1);
    let reachable = grid.after_turns(Gridworld::START, 3);
    assert!(!reachable.is_empty());
    assert!(reachable.iter().all(|coordinate| *coordinate != blocked));
}

// =============================================================================
// Transcripts
// =============================================================================

fn run_with_input<F, T>(input: &str, run: F) -> (Result<T, ConsoleError>, String)
where
    F: FnOnce(&mut Console<Cursor<String>, Vec<u8>>) -> Result<T, ConsoleError>,
{
    let mut console = Console::new(Cursor::new(input.to_owned()), Vec::new());
    let result = run(&mut console);
    let (_, output) = console.into_parts();
    (result, String::from_utf8(output).unwrap())
}

#[rstest]
fn optional_demo_transcript(directory: WalletDirectory) {
    let (result, output) = run_with_input("", |console| demo::run_optional(console, &directory));
    assert!(result.is_ok());
    assert_eq!(
        output,
        "'something' is Present 2\n\
         1 / ln(something) = Present 1.4426950408889634\n\
         'nothing' is Absent\n\
         1 / ln(nothing) = Absent\n\
         'erroneous_result' 1 / ln(1) is Absent\n\
         Existing user's balance after purchase: Present 118.45\n\
         Non-existent user's balance after purchase: Absent\n"
    );
}

#[rstest]
fn sequence_demo_transcript(grid: Gridworld) {
    let (result, output) = run_with_input("", |console| demo::run_sequence(console, &grid));
    assert!(result.is_ok());
    assert_eq!(
        output,
        "Fibonacci numbers, pre flatmap:\n1\n1\n2\n3\n5\n8\n\
         Fibonacci numbers, post flatmap:\n2\n3\n2\n3\n3\n4\n4\n5\n6\n7\n9\n10\n\
         next_moves:\n\
         (row, column): (1, 0)\n\
         (row, column): (2, 1)\n\
         after_two_turns:\n\
         (row, column): (0, 0)\n\
         (row, column): (2, 0)\n\
         (row, column): (2, 2)\n\
         (row, column): (2, 0)\n"
    );
}

#[rstest]
#[case("Ada 41", "Personally, I think 42 is a better number than 41")]
#[case("  Ada\n\n  -1\n", "Personally, I think 0 is a better number than -1")]
#[case("Ada\nforty-one\n", greeting::NOT_A_NUMBER)]
fn effect_demo_transcript(#[case] input: &str, #[case] number_line: &str) {
    let (result, output) = run_with_input(input, greeting::run);
    assert_eq!(result.unwrap().to_string(), "IO ()");

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Hello, what is your name?",
            "Pleased to meet you, Ada!",
            "What is your favourite number?",
            number_line,
            "End value of computation is IO ()",
        ]
    );
}

#[rstest]
fn effect_demo_stops_at_end_of_input() {
    let (result, output) = run_with_input("Ada", greeting::run);
    assert!(matches!(result, Err(ConsoleError::EndOfInput)));
    assert!(output.ends_with("What is your favourite number?\n"));
    assert!(!output.contains("End value"));
}
