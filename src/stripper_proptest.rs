//! Property-based tests for the comment stripper.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::stripper::strip;
    use proptest::prelude::*;

    proptest! {
        /// Property: text containing no comment or literal delimiters passes
        /// through unchanged
        #[test]
        fn strip_without_delimiters_is_identity(input in "[a-zA-Z0-9 \\n\\t;=(){}.,<>#+-]*") {
            let result = strip(&input).unwrap();
            prop_assert_eq!(result, input);
        }

        /// Property: stripping never grows the text (every removed comment is
        /// at least two bytes and is replaced by one space; literals are
        /// copied through)
        #[test]
        fn strip_never_grows(input in "[[:ascii:]]*") {
            let result = strip(&input).unwrap();
            prop_assert!(
                result.len() <= input.len(),
                "stripping grew {} bytes to {}",
                input.len(),
                result.len()
            );
        }

        /// Property: stripping is idempotent, a second pass finds nothing
        /// left to remove
        #[test]
        fn strip_is_idempotent(input in "[a-zA-Z0-9 \\n'\"/*\\\\;=]*") {
            let once = strip(&input).unwrap();
            let twice = strip(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Property: the line count never changes; line comments stop at the
        /// end of their line and block comment bodies are the only multi-line
        /// removals, replaced within their surrounding lines
        #[test]
        fn strip_line_comments_preserve_line_count(input in "([a-zA-Z0-9 ;]*(//[a-zA-Z0-9 ]*)?\\n)*") {
            let result = strip(&input).unwrap();
            prop_assert_eq!(
                result.lines().count(),
                input.lines().count()
            );
        }

        /// Property: a generated string literal always survives verbatim
        #[test]
        fn strip_preserves_string_literals(body in "[a-zA-Z0-9 /*]*") {
            let literal = format!("\"{}\"", body);
            let input = format!("x = {};", literal);
            let result = strip(&input).unwrap();
            prop_assert!(
                result.contains(&literal),
                "literal {} lost from {}",
                literal,
                result
            );
        }
    }
}
