//! Effects: the results of side effects that have already run.
//!
//! - [`IO`]: The value an effect produced
//! - [`Console`]: The input/output port effect producers read and write
//! - [`ConsoleError`]: Failures of the console underneath
//!
//! Effect producers run eagerly. Reading a word from the console performs
//! the read before the `IO` is returned, and composing `IO` values only
//! threads the produced values through.
//!
//! ```rust
//! use monadic::effect::{Console, IO};
//! use monadic::typeclass::Monad;
//!
//! let mut console = Console::new("Ada\n".as_bytes(), Vec::new());
//! let greeting = console
//!     .read_word()
//!     .unwrap()
//!     .flat_map(|name| IO::pure(format!("Pleased to meet you, {name}!")));
//!
//! assert_eq!(greeting.into_inner(), "Pleased to meet you, Ada!");
//! ```

mod console;
mod error;
mod io;

pub use console::Console;
pub use error::ConsoleError;
pub use io::{IO, ShowValue};
