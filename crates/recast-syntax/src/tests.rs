//! Crate-level tests exercising the public surface across modules.

use rstest::rstest;

use crate::{
    RecastError, swap_two_args_in_function_call, swap_values_around_hyphen,
    transform_keys_in_dict, transform_string_keys_in_dict_using_regexps,
};

// =============================================================================
// Cross-Operation Independence
// =============================================================================

#[test]
fn operations_share_no_state_between_calls() {
    let first = swap_two_args_in_function_call("func(a, b)").expect("first");
    let second = swap_two_args_in_function_call("other(x, y)").expect("second");

    assert_eq!(first, "func(b, a)");
    assert_eq!(second, "other(y, x)");
}

#[test]
fn syntax_and_textual_key_rewrites_disagree_on_transform_input() {
    // The syntax-aware rewrite hands the transform the raw key value; the
    // textual rewrite hands it the whole matched span. Both behaviours are
    // deliberate, see DESIGN.md.
    let mut syntax_inputs = Vec::new();
    let mut textual_inputs = Vec::new();

    transform_keys_in_dict("{'name' : 1}", |key| {
        syntax_inputs.push(key.to_owned());
        key.to_owned()
    })
    .expect("syntax transform");
    let rewritten = transform_string_keys_in_dict_using_regexps("{'name' : 1}", |span| {
        textual_inputs.push(span.to_owned());
        span.to_owned()
    });

    assert_eq!(rewritten, "{\"'name' :\": 1}");
    assert_eq!(syntax_inputs, vec!["name".to_owned()]);
    assert_eq!(textual_inputs, vec!["'name' :".to_owned()]);
}

// =============================================================================
// Error Display
// =============================================================================

#[rstest]
#[case(RecastError::structure("call has 1 positional argument(s), need at least two"))]
#[case(RecastError::no_match("no hyphen-separated word pair in input"))]
#[case(RecastError::transform("dictionary key is not a literal constant: tuple"))]
fn error_messages_name_the_failure(#[case] error: RecastError) {
    assert!(!error.to_string().is_empty());
}

#[test]
fn parse_error_display_carries_position() {
    let error = swap_two_args_in_function_call("func(arg1,").expect_err("should fail");
    let message = error.to_string();

    assert!(message.contains("line 1"), "got: {message}");
}

// =============================================================================
// Pathological Inputs
// =============================================================================

#[test]
fn deeply_nested_calls_still_swap_the_outermost() {
    let source = "a(b(c(d(e(1, 2), 3), 4), 5), f(6))";
    let result = swap_two_args_in_function_call(source).expect("swap");

    assert_eq!(result, "a(f(6), b(c(d(e(1, 2), 3), 4), 5))");
}

#[test]
fn hyphen_swap_ignores_surrounding_lines() {
    let result = swap_values_around_hyphen("noise\napple - banana\nnoise").expect("swap");
    assert_eq!(result, "banana - apple");
}

#[test]
fn multibyte_content_survives_argument_swap() {
    let result = swap_two_args_in_function_call("greet('héllo', 'wörld')").expect("swap");
    assert_eq!(result, "greet('wörld', 'héllo')");
}
