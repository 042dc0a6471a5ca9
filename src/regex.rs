use std::sync::Arc;

use dotstar_automata::{Matcher, PikeVM, TransitionTable};

use crate::{builders::RegexBuilder, Result};

/// The strategy a [`Regex`] uses to run its pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Simulate a transition table by tracking the set of active states.
    Table,
    /// Run compiled instructions as lock-step threads.
    #[default]
    PikeVM,
}

/// A compiled pattern.
///
/// A `Regex` is immutable once built. Cloning is cheap and every call to
/// [`Regex::is_match`] uses its own scratch space, so one value can be shared
/// freely across threads.
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: Arc<str>,
    imp: Imp,
}

#[derive(Clone, Debug)]
enum Imp {
    Table(Arc<TransitionTable>),
    PikeVM(Arc<PikeVM>),
}

impl Regex {
    /// Compiles `pattern` with the default configuration.
    ///
    /// ```
    /// let re = dotstar::Regex::new("ab*c")?;
    /// assert!(re.is_match("abbbc"));
    /// # Ok::<(), dotstar::Error>(())
    /// ```
    pub fn new(pattern: &str) -> Result<Regex> {
        RegexBuilder::new().build(pattern)
    }

    /// Returns a builder for configuring a `Regex`.
    pub fn builder() -> RegexBuilder {
        RegexBuilder::new()
    }

    pub(crate) fn from_table(pattern: &str, table: TransitionTable) -> Regex {
        Regex { pattern: Arc::from(pattern), imp: Imp::Table(Arc::new(table)) }
    }

    pub(crate) fn from_pikevm(pattern: &str, vm: PikeVM) -> Regex {
        Regex { pattern: Arc::from(pattern), imp: Imp::PikeVM(Arc::new(vm)) }
    }

    /// Returns true if this pattern matches all of `text`.
    ///
    /// If a configured step limit is exhausted this returns false. Use
    /// [`Regex::try_is_match`] to tell the two apart.
    pub fn is_match(&self, text: &str) -> bool {
        match self.imp {
            Imp::Table(ref table) => Matcher::new(table).is_match(text),
            Imp::PikeVM(ref vm) => vm.is_match(text),
        }
    }

    /// Like [`Regex::is_match`], but returns
    /// [`Error::MatchBudgetExceeded`](crate::Error::MatchBudgetExceeded) when
    /// the search gave up.
    pub fn try_is_match(&self, text: &str) -> Result<bool> {
        match self.imp {
            Imp::Table(ref table) => Ok(Matcher::new(table).is_match(text)),
            Imp::PikeVM(ref vm) => vm.try_is_match(text),
        }
    }

    /// Returns the pattern this value was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the engine this value runs on.
    pub fn engine(&self) -> Engine {
        match self.imp {
            Imp::Table(_) => Engine::Table,
            Imp::PikeVM(_) => Engine::PikeVM,
        }
    }
}

impl core::fmt::Display for Regex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::str::FromStr for Regex {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Regex> {
        Regex::new(s)
    }
}
