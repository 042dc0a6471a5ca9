//! Lowering of pattern strings to a flat list of elements.
//!
//! Parsing is delegated to `regex-syntax`'s AST parser so that positions and
//! error messages line up with what users of full regex engines expect. The
//! resulting AST is then narrowed to the supported subset: verbatim literals,
//! `.`, concatenation and greedy `*` applied to a single atom.

use regex_syntax::ast::{self, Ast, LiteralKind, RepetitionKind};

use crate::{Error, Result};

/// A single-character matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atom {
    /// Matches exactly this character.
    Literal(char),
    /// `.`, matches any single character.
    Any,
}

impl Atom {
    /// Returns true if this atom accepts `ch`.
    #[inline]
    pub fn matches(self, ch: char) -> bool {
        match self {
            Atom::Literal(c) => c == ch,
            Atom::Any => true,
        }
    }
}

/// One pattern element: an atom, optionally repeated zero or more times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub atom: Atom,
    pub repeat: bool,
}

impl Element {
    pub fn once(atom: Atom) -> Element {
        Element { atom, repeat: false }
    }

    pub fn repeated(atom: Atom) -> Element {
        Element { atom, repeat: true }
    }
}

/// Parse `pattern` into the elements it concatenates, in order.
///
/// The empty pattern yields no elements.
pub fn parse(pattern: &str) -> Result<Vec<Element>> {
    let ast = ast::parse::Parser::new()
        .parse(pattern)
        .map_err(|err| Error::invalid(err.span().start.offset, err.kind().to_string()))?;
    match ast {
        Ast::Empty(_) => Ok(Vec::new()),
        Ast::Concat(ref concat) => concat.asts.iter().map(lower_element).collect(),
        ref other => Ok(vec![lower_element(other)?]),
    }
}

fn lower_element(ast: &Ast) -> Result<Element> {
    let Ast::Repetition(rep) = ast else {
        return lower_atom(ast).map(Element::once);
    };
    if !matches!(rep.op.kind, RepetitionKind::ZeroOrMore) {
        return Err(unsupported(ast, "only the '*' quantifier is supported"));
    }
    if !rep.greedy {
        return Err(unsupported(ast, "non-greedy repetition is not supported"));
    }
    lower_atom(&rep.ast).map(Element::repeated)
}

fn lower_atom(ast: &Ast) -> Result<Atom> {
    let message = match ast {
        Ast::Literal(lit) if matches!(lit.kind, LiteralKind::Verbatim) => {
            return Ok(Atom::Literal(lit.c));
        }
        Ast::Dot(_) => return Ok(Atom::Any),
        Ast::Literal(_) => "escape sequences are not supported",
        Ast::Repetition(_) => "a quantifier cannot be applied to another quantifier",
        Ast::Alternation(_) => "alternation is not supported",
        Ast::Group(_) => "groups are not supported",
        Ast::Assertion(_) => "anchors and assertions are not supported",
        Ast::ClassUnicode(_) | Ast::ClassPerl(_) | Ast::ClassBracketed(_) => {
            "character classes are not supported"
        }
        Ast::Flags(_) => "inline flags are not supported",
        _ => "expected a literal or '.'",
    };
    Err(unsupported(ast, message))
}

fn unsupported(ast: &Ast, message: &str) -> Error {
    Error::invalid(ast.span().start.offset, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(pattern: &str) -> usize {
        match parse(pattern) {
            Err(Error::InvalidPattern { offset, .. }) => offset,
            other => panic!("expected {:?} to be rejected, got {:?}", pattern, other),
        }
    }

    #[test]
    fn test_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_literals_and_wildcards() {
        assert_eq!(
            parse("a.c").unwrap(),
            vec![
                Element::once(Atom::Literal('a')),
                Element::once(Atom::Any),
                Element::once(Atom::Literal('c')),
            ]
        );
    }

    #[test]
    fn test_star_binds_to_preceding_atom() {
        assert_eq!(
            parse("ab*.*").unwrap(),
            vec![
                Element::once(Atom::Literal('a')),
                Element::repeated(Atom::Literal('b')),
                Element::repeated(Atom::Any),
            ]
        );
        assert_eq!(parse("x*").unwrap(), vec![Element::repeated(Atom::Literal('x'))]);
    }

    #[test]
    fn test_non_ascii_literal() {
        assert_eq!(parse("é*").unwrap(), vec![Element::repeated(Atom::Literal('é'))]);
    }

    #[test]
    fn test_leading_star_rejected() {
        assert_eq!(offset("*"), 0);
        assert_eq!(offset("*a"), 0);
    }

    #[test]
    fn test_stacked_star_rejected() {
        assert!(parse("a**").is_err());
    }

    #[test]
    fn test_unsupported_syntax_rejected() {
        assert_eq!(offset("a|b"), 0);
        assert_eq!(offset("a(b)"), 1);
        assert_eq!(offset("ab^"), 2);
        assert_eq!(offset("[ab]"), 0);
        assert_eq!(offset("a+"), 0);
        assert_eq!(offset("a?"), 0);
        assert_eq!(offset("a*?"), 0);
        assert_eq!(offset("\\."), 0);
    }

    #[test]
    fn test_error_message_names_problem() {
        let err = parse("ab|c").unwrap_err();
        assert!(err.to_string().contains("alternation"), "{}", err);
    }
}
