/*!
This crate provides full-string matching for a minimal regular expression
language.

A pattern is built from three things:

* literal characters, which match themselves,
* `.`, which matches any single character,
* `*` after a literal or `.`, which repeats it zero or more times.

Adjacent elements are concatenated. A pattern matches an input only if it
matches the *entire* input; there is no searching for a match somewhere inside
a longer string. Anything else (escapes, classes, groups, alternation,
anchors, other quantifiers) is rejected with [`Error::InvalidPattern`].

# Example

```
use dotstar::{matches_program, matches_table};

assert!(matches_table("a*b", "aaab").unwrap());
assert!(!matches_program("a*b", "aaac").unwrap());
assert!(matches_program("h.llo", "hello").unwrap());
```

# Engines

Two engines are available and always agree with one another:

* [`Engine::Table`] compiles the pattern into a transition table and
  simulates it by tracking the set of active states.
* [`Engine::PikeVM`] compiles the pattern into `Char`/`Split`/`Jump`/`Match`
  instructions and runs them as lock-step threads.

When a pattern is matched against many inputs, compile it once with
[`Regex::new`] or [`RegexBuilder`] and reuse it.

```
use dotstar::{Engine, RegexBuilder};

let re = RegexBuilder::new().engine(Engine::Table).build(".*.txt")?;
assert!(re.is_match("notes.txt"));
assert!(!re.is_match("notes.txt.bak"));
# Ok::<(), dotstar::Error>(())
```

# Crate features

* **std** - Enabled by default. Currently required.
* **logging** - Emits compile and search diagnostics through the
  [`log`](https://docs.rs/log) crate.
*/

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

pub use dotstar_automata::{Error, Result};

pub use crate::{
    builders::RegexBuilder,
    regex::{Engine, Regex},
};

mod builders;
mod regex;

/// Returns true if `pattern` matches all of `text`, using the transition
/// table engine.
///
/// ```
/// assert!(dotstar::matches_table("a*", "").unwrap());
/// assert!(!dotstar::matches_table("ab", "abc").unwrap());
/// assert!(dotstar::matches_table("*a", "a").is_err());
/// ```
pub fn matches_table(pattern: &str, text: &str) -> Result<bool> {
    let re = RegexBuilder::new().engine(Engine::Table).build(pattern)?;
    Ok(re.is_match(text))
}

/// Returns true if `pattern` matches all of `text`, using the Pike VM.
///
/// ```
/// assert!(dotstar::matches_program(".", "x").unwrap());
/// assert!(!dotstar::matches_program(".", "").unwrap());
/// ```
pub fn matches_program(pattern: &str, text: &str) -> Result<bool> {
    let re = RegexBuilder::new().engine(Engine::PikeVM).build(pattern)?;
    Ok(re.is_match(text))
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
