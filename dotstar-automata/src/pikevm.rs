//! A Pike VM over a compiled instruction sequence.
//!
//! Threads are advanced in lock-step: every thread in the current generation
//! sits at the same input position, and a thread that consumes a character
//! moves to the next generation. Within a generation each instruction is
//! executed at most once, so a search over `n` characters executes at most
//! `program.len() * (n + 1)` instructions.

use core::mem;

use crate::{syntax::Atom, Error, Result};

/// An index into a [`Program`].
pub type InstPtr = usize;

/// A single VM instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// Consume one character accepted by the atom and continue at the next
    /// instruction, or kill the thread.
    Char(Atom),
    /// Continue at the first target and spawn a lower priority thread at the
    /// second.
    Split(InstPtr, InstPtr),
    /// Continue at the target without consuming input.
    Jump(InstPtr),
    /// Succeed if all input has been consumed, otherwise kill the thread.
    Match,
}

/// A compiled instruction sequence. Execution starts at address `0` and the
/// last instruction is always [`Inst::Match`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    insts: Vec<Inst>,
}

impl Program {
    pub(crate) fn new(insts: Vec<Inst>) -> Program {
        debug_assert_eq!(insts.last(), Some(&Inst::Match));
        Program { insts }
    }

    pub fn insts(&self) -> &[Inst] {
        &self.insts
    }

    pub fn len(&self) -> usize {
        self.insts.len()
    }

    pub fn get(&self, pc: InstPtr) -> Option<&Inst> {
        self.insts.get(pc)
    }
}

/// The configuration used for building a [`PikeVM`].
#[derive(Clone, Debug, Default)]
pub struct Config {
    step_limit: Option<usize>,
}

impl Config {
    /// Return a new default Pike VM configuration.
    pub fn new() -> Config {
        Config::default()
    }

    /// Cap the number of instructions a single search may execute.
    ///
    /// When the cap is hit the search stops with
    /// [`Error::MatchBudgetExceeded`]. By default there is no cap beyond the
    /// `program.len() * (input.len() + 1)` bound every search already obeys.
    pub fn step_limit(mut self, limit: Option<usize>) -> Config {
        self.step_limit = limit;
        self
    }

    pub fn get_step_limit(&self) -> Option<usize> {
        self.step_limit
    }
}

/// One speculative execution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Thread {
    pc: InstPtr,
    at: usize,
}

/// The threads of one generation, in scheduling order, along with the
/// instructions already executed in that generation.
#[derive(Debug)]
struct Threads {
    queue: Vec<Thread>,
    seen: Vec<bool>,
}

impl Threads {
    fn new(program_len: usize) -> Threads {
        Threads { queue: Vec::new(), seen: vec![false; program_len] }
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue a thread unless its instruction already ran this generation.
    fn push(&mut self, thread: Thread) {
        if !self.seen[thread.pc] {
            self.queue.push(thread);
        }
    }

    /// Mark `pc` as executed. Returns false if it already was.
    fn visit(&mut self, pc: InstPtr) -> bool {
        !mem::replace(&mut self.seen[pc], true)
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.seen.iter_mut().for_each(|seen| *seen = false);
    }
}

/// A Pike VM executing a [`Program`] against whole inputs.
#[derive(Clone, Debug)]
pub struct PikeVM {
    config: Config,
    program: Program,
}

impl PikeVM {
    pub fn new(program: Program) -> PikeVM {
        PikeVM::with_config(Config::new(), program)
    }

    pub fn with_config(config: Config, program: Program) -> PikeVM {
        PikeVM { config, program }
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Returns true if the program matches all of `input`.
    ///
    /// Running out of budget is reported as no match.
    pub fn is_match(&self, input: &str) -> bool {
        match self.try_is_match(input) {
            Ok(matched) => matched,
            Err(_err) => {
                debug!("giving up on {:?}: {}", input, _err);
                false
            }
        }
    }

    /// Like [`PikeVM::is_match`], but reports budget exhaustion as an error.
    pub fn try_is_match(&self, input: &str) -> Result<bool> {
        let chars: Vec<char> = input.chars().collect();
        let limit = self
            .config
            .get_step_limit()
            .unwrap_or_else(|| self.program.len().saturating_mul(chars.len() + 1));
        let mut steps = 0usize;

        let mut clist = Threads::new(self.program.len());
        let mut nlist = Threads::new(self.program.len());
        clist.push(Thread { pc: 0, at: 0 });

        for at in 0..=chars.len() {
            if clist.is_empty() {
                trace!("all threads died at {}", at);
                return Ok(false);
            }
            // Split appends to the queue while it is being walked.
            let mut next = 0;
            while next < clist.queue.len() {
                let thread = clist.queue[next];
                debug_assert_eq!(thread.at, at);
                let mut pc = thread.pc;
                next += 1;
                while clist.visit(pc) {
                    steps += 1;
                    if steps > limit {
                        return Err(Error::MatchBudgetExceeded { limit });
                    }
                    match self.program.insts[pc] {
                        Inst::Char(atom) => {
                            if chars.get(at).map_or(false, |&ch| atom.matches(ch)) {
                                nlist.push(Thread { pc: pc + 1, at: at + 1 });
                            }
                            break;
                        }
                        Inst::Split(x, y) => {
                            clist.push(Thread { pc: y, at });
                            pc = x;
                        }
                        Inst::Jump(target) => pc = target,
                        Inst::Match => {
                            if at == chars.len() {
                                return Ok(true);
                            }
                            break;
                        }
                    }
                }
            }
            mem::swap(&mut clist, &mut nlist);
            nlist.clear();
        }
        Ok(false)
    }
}
