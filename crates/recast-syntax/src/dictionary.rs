//! Dictionary-literal key rewriting.

use crate::edits::{self, Edit};
use crate::error::RecastError;
use crate::parser::parse_valid_fragment;

/// Rewrites every literal key of every dictionary literal in a fragment.
///
/// The fragment is parsed as Python and every `dictionary` node in the tree
/// participates, not just the first. Each key is passed to `transform` as its
/// *raw value*: for a string key that is the text between the quotes, so the
/// original quote style survives the rewrite; for numeric and keyword literals
/// (`1`, `2.5`, `True`, `None`) it is the literal's source text. Values are
/// left untouched.
///
/// ```text
/// {'first_name': 'John'}  --to_uppercase-->  {'FIRST_NAME': 'John'}
/// ```
///
/// A fragment without any dictionary literal is returned unchanged.
///
/// # Errors
///
/// Returns [`RecastError::Parse`] when the fragment is not valid Python, and
/// [`RecastError::Transform`] when a key is not a simple literal constant: a
/// non-literal key has no single value to transform, so the operation fails
/// rather than guessing.
pub fn transform_keys_in_dict<F>(source: &str, mut transform: F) -> Result<String, RecastError>
where
    F: FnMut(&str) -> String,
{
    let parsed = parse_valid_fragment(source)?;

    let mut dictionaries = Vec::new();
    collect_dictionaries(parsed.root_node(), &mut dictionaries);

    let mut key_edits = Vec::new();
    for dictionary in dictionaries {
        collect_key_edits(source, dictionary, &mut transform, &mut key_edits)?;
    }

    edits::apply(source, key_edits)
}

/// Collects every `dictionary` node in pre-order.
fn collect_dictionaries<'a>(node: tree_sitter::Node<'a>, out: &mut Vec<tree_sitter::Node<'a>>) {
    if node.kind() == "dictionary" {
        out.push(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_dictionaries(child, out);
    }
}

/// Produces one edit per key of a single dictionary node.
fn collect_key_edits<F>(
    source: &str,
    dictionary: tree_sitter::Node<'_>,
    transform: &mut F,
    out: &mut Vec<Edit>,
) -> Result<(), RecastError>
where
    F: FnMut(&str) -> String,
{
    let mut cursor = dictionary.walk();
    for entry in dictionary.named_children(&mut cursor) {
        match entry.kind() {
            "pair" => {
                let key = entry
                    .child_by_field_name("key")
                    .ok_or_else(|| RecastError::structure("dictionary pair has no key"))?;
                out.push(key_edit(source, key, transform)?);
            }
            "comment" => {}
            // A `**splat` entry carries no key to rewrite.
            other => {
                return Err(RecastError::transform(format!(
                    "dictionary entry '{other}' has no literal key"
                )));
            }
        }
    }

    Ok(())
}

/// Builds the edit for one key node, or rejects a non-literal key.
fn key_edit<F>(
    source: &str,
    key: tree_sitter::Node<'_>,
    transform: &mut F,
) -> Result<Edit, RecastError>
where
    F: FnMut(&str) -> String,
{
    match key.kind() {
        "string" => {
            let inner = string_inner_range(key)?;
            let raw = source
                .get(inner.clone())
                .ok_or_else(|| RecastError::transform("string key range outside source"))?;
            Ok(Edit {
                range: inner,
                text: transform(raw),
            })
        }
        "integer" | "float" | "true" | "false" | "none" => {
            let raw = edits::node_text(source, key)?;
            Ok(Edit {
                range: key.byte_range(),
                text: transform(raw),
            })
        }
        other => Err(RecastError::transform(format!(
            "dictionary key is not a literal constant: {other}"
        ))),
    }
}

/// Returns the byte range between a string literal's quotes.
///
/// Interpolated strings do not hold a single raw value and are rejected.
fn string_inner_range(string: tree_sitter::Node<'_>) -> Result<std::ops::Range<usize>, RecastError> {
    let mut start = None;
    let mut end = None;

    let mut cursor = string.walk();
    for part in string.children(&mut cursor) {
        match part.kind() {
            "string_start" => start = Some(part.end_byte()),
            "string_end" => end = Some(part.start_byte()),
            "interpolation" => {
                return Err(RecastError::transform(
                    "dictionary key is an interpolated string, not a literal",
                ));
            }
            _ => {}
        }
    }

    match (start, end) {
        (Some(start_byte), Some(end_byte)) if start_byte <= end_byte => Ok(start_byte..end_byte),
        _ => Err(RecastError::transform("malformed string literal key")),
    }
}
