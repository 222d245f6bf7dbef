//! Regular-expression based rewrites.
//!
//! Unlike the syntax-aware transformations, nothing here parses the input.
//! Both operations work purely on the text and tolerate fragments that are
//! not valid Python.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::RecastError;

/// Two words separated by a hyphen, with the whitespace on each side captured.
static HYPHEN_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)(\s*)-(\s*)(\w+)")
        .unwrap_or_else(|err| panic!("hyphen pair pattern: {err}"))
});

/// A quoted span followed, one character later, by a colon.
static QUOTED_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"['"].*?['"].:"#).unwrap_or_else(|err| panic!("quoted key pattern: {err}"))
});

/// Swaps the two words of a hyphen-separated pair.
///
/// Only the first `word-word` match is used and the output is the reformatted
/// match alone: the hyphen and the whitespace on each side of it are kept
/// exactly as written, while any text outside the matched span is discarded.
///
/// ```text
/// "apple - banana"       =>  "banana - apple"
/// "chocolate-  vanilla"  =>  "vanilla-  chocolate"
/// ```
///
/// # Errors
///
/// Returns [`RecastError::NoMatch`] when the input contains no
/// word-hyphen-word pattern.
pub fn swap_values_around_hyphen(text: &str) -> Result<String, RecastError> {
    let captures = HYPHEN_PAIR
        .captures(text)
        .ok_or_else(|| RecastError::no_match("no hyphen-separated word pair in input"))?;

    let first = group(&captures, 1);
    let left_space = group(&captures, 2);
    let right_space = group(&captures, 3);
    let second = group(&captures, 4);

    Ok(format!("{second}{left_space}-{right_space}{first}"))
}

/// Rewrites quoted dictionary keys found by textual pattern matching.
///
/// Every non-overlapping match of a quoted span followed by a colon is
/// replaced with `"<result>":`, where `<result>` comes from `transform`. The
/// transform receives the entire matched span, quotes and trailing colon
/// included, not just the inner key text; the rewrite always re-quotes with
/// double quotes.
///
/// This operation never fails: input without a match is returned unchanged.
#[must_use]
pub fn transform_string_keys_in_dict_using_regexps<F>(text: &str, mut transform: F) -> String
where
    F: FnMut(&str) -> String,
{
    QUOTED_KEY
        .replace_all(text, |captures: &Captures<'_>| {
            format!("\"{}\":", transform(group(captures, 0)))
        })
        .into_owned()
}

/// Resolves a capture group to its text, or empty when absent.
fn group<'t>(captures: &Captures<'t>, index: usize) -> &'t str {
    captures.get(index).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("apple - banana", "banana - apple")]
    #[case("chocolate-  vanilla", "vanilla-  chocolate")]
    #[case("left-right", "right-left")]
    #[case("snake_case -other", "other -snake_case")]
    fn swaps_words_and_preserves_hyphen_formatting(#[case] input: &str, #[case] expected: &str) {
        let result = swap_values_around_hyphen(input).expect("swap");
        assert_eq!(result, expected);
    }

    #[test]
    fn text_outside_the_match_is_discarded() {
        let result = swap_values_around_hyphen("prefix! apple - banana !suffix").expect("swap");
        assert_eq!(result, "banana - apple");
    }

    #[test]
    fn only_the_first_pair_is_used() {
        let result = swap_values_around_hyphen("a - b c - d").expect("swap");
        assert_eq!(result, "b - a");
    }

    #[rstest]
    #[case("no hyphen here")]
    #[case("- leading")]
    #[case("trailing -")]
    #[case("")]
    fn no_pair_is_a_no_match_error(#[case] input: &str) {
        let error = swap_values_around_hyphen(input).expect_err("should fail");
        assert!(matches!(error, RecastError::NoMatch { .. }));
    }

    #[test]
    fn quoted_key_transform_receives_the_whole_match() {
        let mut seen = Vec::new();
        let result = transform_string_keys_in_dict_using_regexps("{'first_name' : 'John'}", |m| {
            seen.push(m.to_owned());
            m.to_uppercase()
        });

        assert_eq!(seen, vec!["'first_name' :".to_owned()]);
        assert_eq!(result, "{\"'FIRST_NAME' :\": 'John'}");
    }

    #[test]
    fn quoted_key_transform_rewrites_all_matches() {
        let result = transform_string_keys_in_dict_using_regexps(
            "{'a' : 1, 'b' : 2}",
            |m| m.to_uppercase(),
        );

        assert_eq!(result, "{\"'A' :\": 1, \"'B' :\": 2}");
    }

    #[test]
    fn quoted_key_transform_without_match_returns_input() {
        let input = "no keys in sight";
        let result = transform_string_keys_in_dict_using_regexps(input, |m| m.to_owned());
        assert_eq!(result, input);
    }
}
