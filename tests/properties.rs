//! Property-based tests for the whole pipeline.
//!
//! Programs are generated from random integer lists, so every property holds
//! for arbitrary list contents and lengths rather than a few samples.

use countavg::{error::ErrorKind, interpreter::lexer::tokenize, run};
use proptest::prelude::*;

fn join(values: &[i64]) -> String {
    values.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(", ")
}

fn program(dividend: &[i64], divisor: &[i64]) -> String {
    format!("[{}] / count({})", join(dividend), join(divisor))
}

/// Wraps every other element in its own sublist: `[1, [2], 3, [4]]`.
fn nested_program(values: &[i64]) -> String {
    let elements = values.iter()
                         .enumerate()
                         .map(|(i, v)| if i % 2 == 0 { v.to_string() } else { format!("[{v}]") })
                         .collect::<Vec<_>>()
                         .join(", ");
    format!("[[{elements}]] / count({})", join(values))
}

fn mean(values: &[i64]) -> f64 {
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    sum as f64 / values.len() as f64
}

proptest! {
    #[test]
    fn matching_lists_average_to_their_mean(values in prop::collection::vec(0i64..1_000_000, 1..40)) {
        let average = run(&program(&values, &values)).unwrap();
        prop_assert!((average - mean(&values)).abs() < 1e-9);
    }

    #[test]
    fn nesting_does_not_change_the_mean(values in prop::collection::vec(0i64..1_000, 1..20)) {
        let average = run(&nested_program(&values)).unwrap();
        prop_assert!((average - mean(&values)).abs() < 1e-9);
    }

    #[test]
    fn differing_lists_are_semantic_errors(dividend in prop::collection::vec(0i64..10, 0..8),
                                           divisor in prop::collection::vec(0i64..10, 0..8)) {
        prop_assume!(dividend != divisor);

        let err = run(&program(&dividend, &divisor)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Semantic);
    }

    #[test]
    fn decimal_points_are_lexical_errors_at_the_dot(whole in 0u32..1000, fraction in 0u32..1000) {
        let source = format!("[{whole}.{fraction}]/count({whole}.{fraction})");
        let dot = source.find('.').unwrap();

        let err = run(&source).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Lexical);
        prop_assert_eq!(err.offset(), Some(dot));
    }

    #[test]
    fn unknown_words_are_lexical_errors(word in "[a-zA-Z]{1,10}") {
        prop_assume!(!word.eq_ignore_ascii_case("count"));

        let err = run(&format!("[1]/{word}(1)")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Lexical);
        prop_assert_eq!(err.offset(), Some(4));
    }

    #[test]
    fn lexer_terminates_with_one_end_marker(source in "[\\[\\](),/0-9 count]{0,40}") {
        if let Ok(tokens) = tokenize(&source) {
            let ends = tokens.iter()
                             .filter(|t| t.kind == countavg::interpreter::lexer::TokenKind::EndOfInput)
                             .count();
            prop_assert_eq!(ends, 1);
            prop_assert_eq!(tokens.last().map(|t| t.offset), Some(source.chars().count()));
        }
    }

    #[test]
    fn trailing_tokens_are_syntax_errors(values in prop::collection::vec(0i64..100, 1..10),
                                         trailer in prop::sample::select(vec!["]", "[", ")", "(", ",", "/", "7", "count"])) {
        let source = format!("{}{trailer}", program(&values, &values));

        let err = run(&source).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Syntax);
        prop_assert_eq!(err.offset(), Some(source.len() - trailer.len()));
    }
}
