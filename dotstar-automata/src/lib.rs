//! Matching engines for a minimal regular expression language.
//!
//! A pattern is a sequence of literal characters and `.` wildcards, each of
//! which may be followed by `*` to repeat it zero or more times. Patterns are
//! compiled into one of two encodings:
//!
//! - a [`TransitionTable`] keyed by `(symbol, state)`, executed by the
//!   set-of-states simulator in [`matcher`]
//! - a [`Program`] of `Char`/`Split`/`Jump`/`Match` instructions, executed by
//!   the thread-based [`PikeVM`]
//!
//! Both engines answer the same question: does the pattern match the *whole*
//! input? Both run in time bounded by the size of the pattern times the size
//! of the input.

#[macro_use]
mod macros;

pub mod compiler;
pub mod matcher;
pub mod nfa;
pub mod pikevm;
pub mod syntax;

pub use compiler::{compile_program, compile_table, Compiler};
pub use matcher::Matcher;
pub use nfa::{StateId, StateSet, Symbol, TransitionTable};
pub use pikevm::{Config, Inst, InstPtr, PikeVM, Program};
pub use syntax::{Atom, Element};

/// The result of compiling or running a pattern.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while compiling or matching a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern uses syntax outside of literals, `.` and `*`, or places a
    /// quantifier where there is nothing to repeat.
    InvalidPattern {
        /// Byte offset into the pattern where the problem starts.
        offset: usize,
        message: String,
    },
    /// The Pike VM gave up after executing `limit` instructions.
    MatchBudgetExceeded { limit: usize },
}

impl Error {
    pub(crate) fn invalid(offset: usize, message: impl Into<String>) -> Error {
        Error::InvalidPattern { offset, message: message.into() }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPattern { offset, message } => {
                write!(f, "unsupported pattern syntax at offset {}: {}", offset, message)
            }
            Error::MatchBudgetExceeded { limit } => {
                write!(f, "match budget of {} steps exceeded", limit)
            }
        }
    }
}

impl std::error::Error for Error {}
