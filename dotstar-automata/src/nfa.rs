use std::collections::{HashMap, HashSet};

use crate::syntax::Atom;

/// A state ID in a transition table. States are numbered `1..=N`.
pub type StateId = usize;

/// A set of currently active states.
pub type StateSet = HashSet<StateId>;

/// The label on an edge of a [`TransitionTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Consume exactly this character.
    Char(char),
    /// Consume any single character.
    Any,
    /// Move without consuming input.
    Epsilon,
}

impl From<Atom> for Symbol {
    fn from(atom: Atom) -> Symbol {
        match atom {
            Atom::Literal(c) => Symbol::Char(c),
            Atom::Any => Symbol::Any,
        }
    }
}

/// A compiled pattern as a map from `(symbol, source)` to destination state.
///
/// State `1` is the start state and the accept state is the highest state
/// number. Each `(symbol, source)` key has exactly one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    transitions: HashMap<(Symbol, StateId), StateId>,
    accept: StateId,
}

impl TransitionTable {
    /// The start state of every table.
    pub const START: StateId = 1;

    /// Create a table with a single state that is both start and accept.
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
            accept: Self::START,
        }
    }

    pub(crate) fn insert(&mut self, symbol: Symbol, from: StateId, to: StateId) {
        let previous = self.transitions.insert((symbol, from), to);
        debug_assert!(previous.is_none(), "duplicate edge {:?} from {}", symbol, from);
    }

    pub(crate) fn set_accept(&mut self, accept: StateId) {
        self.accept = accept;
    }

    pub fn start(&self) -> StateId {
        Self::START
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// The number of states, which is also the accept state's ID.
    pub fn state_len(&self) -> usize {
        self.accept
    }

    /// The number of edges.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Returns true if the table has no edges, i.e. it was compiled from the
    /// empty pattern.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Look up the destination of the edge labeled `symbol` leaving `from`.
    pub fn get(&self, symbol: Symbol, from: StateId) -> Option<StateId> {
        self.transitions.get(&(symbol, from)).copied()
    }

    /// Look up where `ch` leads from `from`, preferring a literal edge over a
    /// wildcard one.
    pub fn next(&self, from: StateId, ch: char) -> Option<StateId> {
        self.get(Symbol::Char(ch), from)
            .or_else(|| self.get(Symbol::Any, from))
    }

    /// Iterate over all edges as `(symbol, from, to)`.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, StateId, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(symbol, from), &to)| (symbol, from, to))
    }

    /// Get epsilon closure of a set of states
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().cloned().collect();

        // Every state is pushed at most once, so this runs at most
        // `state_len()` times.
        while let Some(state_id) = stack.pop() {
            if let Some(next) = self.get(Symbol::Epsilon, state_id) {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }

        closure
    }

    /// Check if the accept state is in the set
    pub fn is_accepting(&self, states: &StateSet) -> bool {
        states.contains(&self.accept)
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(states: &[StateId]) -> StateSet {
        states.iter().copied().collect()
    }

    #[test]
    fn test_empty_table() {
        let table = TransitionTable::new();
        assert_eq!(table.start(), 1);
        assert_eq!(table.accept(), 1);
        assert_eq!(table.len(), 0);
        assert!(table.is_accepting(&set(&[1])));
    }

    #[test]
    fn test_epsilon_closure_reaches_fixpoint() {
        let mut table = TransitionTable::new();
        table.insert(Symbol::Epsilon, 1, 2);
        table.insert(Symbol::Epsilon, 2, 3);
        table.insert(Symbol::Char('a'), 3, 4);
        table.set_accept(4);

        assert_eq!(table.epsilon_closure(&set(&[1])), set(&[1, 2, 3]));
        assert_eq!(table.epsilon_closure(&set(&[3])), set(&[3]));
        assert_eq!(table.epsilon_closure(&set(&[])), set(&[]));
    }

    #[test]
    fn test_next_prefers_literal_edge() {
        let mut table = TransitionTable::new();
        table.insert(Symbol::Char('a'), 1, 2);
        table.insert(Symbol::Any, 1, 3);
        table.set_accept(3);

        assert_eq!(table.next(1, 'a'), Some(2));
        assert_eq!(table.next(1, 'z'), Some(3));
        assert_eq!(table.next(2, 'a'), None);
    }
}
