use crate::{
    nfa::{Symbol, TransitionTable},
    pikevm::{Inst, Program},
    syntax::{self, Element},
    Result,
};

/// Compiler that converts a pattern into either a transition table or a
/// Pike VM program
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    elements: Vec<Element>,
}

impl Compiler {
    /// Parse `pattern` and prepare it for compilation.
    pub fn new(pattern: &str) -> Result<Self> {
        let elements = syntax::parse(pattern)?;
        Ok(Self { elements })
    }

    /// The elements this compiler will encode.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Compile to a transition table.
    ///
    /// Each element owns one state. A plain element consumes its atom and
    /// moves to the next state. A repeated element loops on its own state and
    /// leaves it through an epsilon edge, so zero repetitions are possible.
    pub fn compile_table(&self) -> TransitionTable {
        let mut table = TransitionTable::new();
        let mut state = TransitionTable::START;

        for element in &self.elements {
            let symbol = Symbol::from(element.atom);
            if element.repeat {
                table.insert(symbol, state, state);
                table.insert(Symbol::Epsilon, state, state + 1);
            } else {
                table.insert(symbol, state, state + 1);
            }
            state += 1;
        }
        table.set_accept(state);

        debug!(
            "compiled table with {} states and {} edges",
            table.state_len(),
            table.len()
        );
        table
    }

    /// Compile to a Pike VM program.
    ///
    /// A repeated element `x*` at address `L` becomes
    ///
    /// ```text
    /// L:   split L+1, L+3
    /// L+1: char x
    /// L+2: jmp L
    /// ```
    ///
    /// and the program ends with a single `match`.
    pub fn compile_program(&self) -> Program {
        let repeats = self.elements.iter().filter(|e| e.repeat).count();
        let mut insts = Vec::with_capacity(self.elements.len() + 2 * repeats + 1);

        for element in &self.elements {
            if element.repeat {
                let split = insts.len();
                insts.push(Inst::Split(split + 1, split + 3));
                insts.push(Inst::Char(element.atom));
                insts.push(Inst::Jump(split));
            } else {
                insts.push(Inst::Char(element.atom));
            }
        }
        insts.push(Inst::Match);

        debug!("compiled program with {} instructions", insts.len());
        Program::new(insts)
    }
}

/// Compile `pattern` to a transition table.
pub fn compile_table(pattern: &str) -> Result<TransitionTable> {
    Ok(Compiler::new(pattern)?.compile_table())
}

/// Compile `pattern` to a Pike VM program.
pub fn compile_program(pattern: &str) -> Result<Program> {
    Ok(Compiler::new(pattern)?.compile_program())
}
