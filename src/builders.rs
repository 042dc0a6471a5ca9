use dotstar_automata::{pikevm, Compiler, PikeVM};

use crate::{
    regex::{Engine, Regex},
    Result,
};

/// A configurable builder for a [`Regex`].
///
/// ```
/// use dotstar::{Engine, Error, RegexBuilder};
///
/// let re = RegexBuilder::new()
///     .engine(Engine::PikeVM)
///     .step_limit(Some(8))
///     .build("a*b")?;
/// assert_eq!(re.try_is_match("b"), Ok(true));
/// assert!(matches!(
///     re.try_is_match("aaaaaaaab"),
///     Err(Error::MatchBudgetExceeded { .. }),
/// ));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegexBuilder {
    engine: Engine,
    pikevm: pikevm::Config,
}

impl RegexBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> RegexBuilder {
        RegexBuilder::default()
    }

    /// Choose the engine. Defaults to [`Engine::PikeVM`].
    pub fn engine(&mut self, engine: Engine) -> &mut RegexBuilder {
        self.engine = engine;
        self
    }

    /// Cap the number of instructions one search may execute. Only the Pike
    /// VM honors this.
    pub fn step_limit(&mut self, limit: Option<usize>) -> &mut RegexBuilder {
        self.pikevm = self.pikevm.clone().step_limit(limit);
        self
    }

    /// Compile `pattern` with this configuration.
    pub fn build(&self, pattern: &str) -> Result<Regex> {
        let compiler = Compiler::new(pattern)?;
        let re = match self.engine {
            Engine::Table => Regex::from_table(pattern, compiler.compile_table()),
            Engine::PikeVM => {
                let vm = PikeVM::with_config(self.pikevm.clone(), compiler.compile_program());
                Regex::from_pikevm(pattern, vm)
            }
        };
        Ok(re)
    }
}
