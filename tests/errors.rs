use dotstar::{matches_program, matches_table, Error};

fn assert_invalid(pattern: &str) {
    for result in [matches_table(pattern, ""), matches_program(pattern, "")] {
        match result {
            Err(Error::InvalidPattern { .. }) => {}
            other => panic!("expected {:?} to be rejected, got {:?}", pattern, other),
        }
    }
}

#[test]
fn leading_quantifier() {
    assert_invalid("*");
    assert_invalid("*ab");
}

#[test]
fn stacked_quantifier() {
    assert_invalid("a**");
    assert_invalid(".**");
}

#[test]
fn unsupported_syntax() {
    for pattern in ["a|b", "(ab)", "[ab]", "^a", "a$", "a+", "a?", "a{2}", "\\*", "\\d", "(?i)a"] {
        assert_invalid(pattern);
    }
}

#[test]
fn error_reports_offset() {
    let err = matches_table("abc|d", "abc").unwrap_err();
    assert_eq!(err, Error::InvalidPattern { offset: 0, message: "alternation is not supported".into() });
    assert!(err.to_string().contains("unsupported pattern syntax"));
}

#[test]
fn budget_exceeded_is_not_a_match() {
    let re = dotstar::RegexBuilder::new().step_limit(Some(3)).build("a*").unwrap();
    assert!(!re.is_match("aaaa"));
    assert_eq!(re.try_is_match("aaaa"), Err(Error::MatchBudgetExceeded { limit: 3 }));
}
