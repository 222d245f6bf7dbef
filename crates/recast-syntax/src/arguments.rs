//! Call-expression argument swapping.

use crate::edits::{self, Edit};
use crate::error::RecastError;
use crate::parser::parse_valid_fragment;

/// Swaps the first two positional arguments of the first call expression.
///
/// The fragment is parsed as Python and walked pre-order (a node before its
/// children, children left to right); the first `call` node encountered is
/// rewritten and the walk stops, so nested and subsequent calls are preserved
/// verbatim. A fragment with no call at all is returned unchanged.
///
/// ```text
/// func(arg1, arg2)                      =>  func(arg2, arg1)
/// method(inner(3, 4), other('a', 'b'))  =>  method(other('a', 'b'), inner(3, 4))
/// ```
///
/// # Errors
///
/// Returns [`RecastError::Parse`] when the fragment is not valid Python, and
/// [`RecastError::Structure`] when the call found has fewer than two
/// positional arguments.
pub fn swap_two_args_in_function_call(source: &str) -> Result<String, RecastError> {
    let parsed = parse_valid_fragment(source)?;

    let Some(call) = first_call(parsed.root_node()) else {
        return Ok(source.to_owned());
    };

    let positionals = positional_arguments(call)?;
    let (first, second) = match (positionals.first(), positionals.get(1)) {
        (Some(first), Some(second)) => (*first, *second),
        _ => {
            return Err(RecastError::structure(format!(
                "call has {} positional argument(s), need at least two",
                positionals.len()
            )));
        }
    };

    let first_text = edits::node_text(source, first)?.to_owned();
    let second_text = edits::node_text(source, second)?.to_owned();

    edits::apply(
        source,
        vec![
            Edit {
                range: first.byte_range(),
                text: second_text,
            },
            Edit {
                range: second.byte_range(),
                text: first_text,
            },
        ],
    )
}

/// Finds the first `call` node in a pre-order depth-first walk.
fn first_call(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.kind() == "call" {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_call(child) {
            return Some(found);
        }
    }

    None
}

/// Collects the positional arguments of a call node, in source order.
///
/// Keyword arguments and comments inside the argument list do not count as
/// positions.
fn positional_arguments(
    call: tree_sitter::Node<'_>,
) -> Result<Vec<tree_sitter::Node<'_>>, RecastError> {
    let arguments = call
        .child_by_field_name("arguments")
        .ok_or_else(|| RecastError::structure("call node has no argument list"))?;

    let mut cursor = arguments.walk();
    let positionals = arguments
        .named_children(&mut cursor)
        .filter(|node| !matches!(node.kind(), "keyword_argument" | "comment"))
        .collect();

    Ok(positionals)
}
