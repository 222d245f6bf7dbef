//! Byte-range splice engine shared by the syntax-aware transformations.
//!
//! Transformations never mutate the syntax tree. They record the byte spans
//! of the nodes they want to rewrite, paired with replacement text, and the
//! edits are spliced into a copy of the original source. Everything outside
//! the edited spans survives verbatim, including the author's formatting.

use std::ops::Range;

use crate::error::RecastError;

/// A single replacement of a byte span in the original source.
#[derive(Debug)]
pub(crate) struct Edit {
    /// Byte range in the original source to replace.
    pub(crate) range: Range<usize>,
    /// Replacement text.
    pub(crate) text: String,
}

/// Splices a set of non-overlapping edits into the source.
///
/// Edits are applied from the end of the source towards the start so earlier
/// byte offsets stay valid while later spans are replaced. Ranges come from
/// Tree-sitter nodes of this same source, so they are non-overlapping by
/// construction.
pub(crate) fn apply(source: &str, mut edits: Vec<Edit>) -> Result<String, RecastError> {
    edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    let mut result = source.to_owned();
    for edit in edits {
        if edit.range.end > result.len() {
            return Err(RecastError::transform("edit range outside source"));
        }
        if !result.is_char_boundary(edit.range.start) || !result.is_char_boundary(edit.range.end) {
            return Err(RecastError::transform(
                "edit range is not on a UTF-8 boundary",
            ));
        }

        result.replace_range(edit.range, &edit.text);
    }

    Ok(result)
}

/// Resolves a node's span back to its text in the parsed source.
pub(crate) fn node_text<'a>(
    source: &'a str,
    node: tree_sitter::Node<'_>,
) -> Result<&'a str, RecastError> {
    source
        .get(node.byte_range())
        .ok_or_else(|| RecastError::transform("node range outside source"))
}
