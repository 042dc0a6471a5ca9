use crate::nfa::{StateSet, TransitionTable};

/// A matcher that runs a [`TransitionTable`] against input by tracking the set
/// of active states.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    table: &'a TransitionTable,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given table
    pub fn new(table: &'a TransitionTable) -> Self {
        Self { table }
    }

    /// Check if the entire input matches
    pub fn is_match(&self, input: &str) -> bool {
        let mut current_states = StateSet::new();
        current_states.insert(self.table.start());
        current_states = self.table.epsilon_closure(&current_states);

        for ch in input.chars() {
            let next_states = self.step_states(&current_states, ch);
            if next_states.is_empty() {
                trace!("no active states left at {:?}", ch);
                return false;
            }
            current_states = self.table.epsilon_closure(&next_states);
        }

        self.table.is_accepting(&current_states)
    }

    /// Advance every active state over `ch`
    fn step_states(&self, current_states: &StateSet, ch: char) -> StateSet {
        current_states
            .iter()
            .filter_map(|&state| self.table.next(state, ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_table;

    fn is_match(pattern: &str, input: &str) -> bool {
        let table = compile_table(pattern).unwrap();
        Matcher::new(&table).is_match(input)
    }

    #[test]
    fn test_empty_pattern() {
        assert!(is_match("", ""));
        assert!(!is_match("", "a"));
    }

    #[test]
    fn test_simple_char_match() {
        assert!(is_match("a", "a"));
        assert!(!is_match("a", "b"));
        assert!(!is_match("a", ""));
    }

    #[test]
    fn test_simple_match() {
        assert!(is_match("ab", "ab"));
        assert!(!is_match("ab", "ac"));
        assert!(!is_match("ab", "a"));
        assert!(!is_match("ab", "abc"));
    }

    #[test]
    fn test_dot_match() {
        assert!(is_match(".", "a"));
        assert!(is_match(".", "x"));
        assert!(is_match(".", "."));
        assert!(!is_match(".", ""));
        assert!(!is_match(".", "ab"));
    }

    #[test]
    fn test_star() {
        assert!(is_match("a*", ""));
        assert!(is_match("a*", "aaaa"));
        assert!(!is_match("a*", "aab"));
        assert!(is_match("a*b", "aaab"));
        assert!(is_match("a*b", "b"));
        assert!(!is_match("a*b", "aaac"));
    }

    #[test]
    fn test_star_followed_by_same_literal() {
        assert!(is_match("a*a", "a"));
        assert!(is_match("a*a", "aaa"));
        assert!(!is_match("a*a", ""));
    }

    #[test]
    fn test_adjacent_stars() {
        assert!(is_match("a*b*", ""));
        assert!(is_match("a*b*", "aabb"));
        assert!(!is_match("a*b*", "ba"));
        assert!(is_match(".*.*", "anything"));
        assert!(is_match(".*x", "abcx"));
        assert!(!is_match(".*x", "abcxy"));
    }
}
