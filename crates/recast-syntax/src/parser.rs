//! Tree-sitter parsing wrapper for Python fragments.
//!
//! Tree-sitter is error tolerant and will happily produce a tree containing
//! ERROR nodes for malformed input. The transformations in this crate refuse
//! to rewrite such trees, so [`ParseResult`] exposes both the raw tree and a
//! strict validity check that turns the first syntax error into a
//! [`RecastError::Parse`].

use std::ops::Range;

use crate::error::RecastError;

/// Maximum length of the context snippet attached to a syntax error.
const ERROR_CONTEXT_LIMIT: usize = 50;

/// Result of parsing a Python fragment.
///
/// Owns the syntax tree together with the source it was parsed from, so node
/// byte ranges can always be resolved back to text.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
}

impl ParseResult {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Returns whether the parse result contains any syntax errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        has_error_nodes(self.tree.root_node())
    }

    /// Collects all syntax errors found in the parse result.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &self.source, &mut errors);
        errors
    }

    /// Rejects fragments that did not parse cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::Parse`] describing the first syntax error when
    /// the tree contains ERROR or MISSING nodes.
    pub fn require_valid(&self) -> Result<(), RecastError> {
        match self.errors().into_iter().next() {
            None => Ok(()),
            Some(info) => Err(RecastError::parse(info.line, info.column, info.context)),
        }
    }
}

/// Information about a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let start = node.start_position();
        let byte_range = node.byte_range();

        let context = source
            .get(byte_range.clone())
            .map(|s| {
                if s.len() > ERROR_CONTEXT_LIMIT {
                    let truncated: String = s.chars().take(ERROR_CONTEXT_LIMIT - 3).collect();
                    format!("{truncated}...")
                } else {
                    s.to_owned()
                }
            })
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        // Tree-sitter points are zero-based; display coordinates are one-based.
        let line = u32::try_from(start.row.saturating_add(1)).unwrap_or(u32::MAX);
        let column = u32::try_from(start.column.saturating_add(1)).unwrap_or(u32::MAX);

        Self {
            byte_range,
            line,
            column,
            context,
            message,
        }
    }
}

/// Tree-sitter parser configured for the Python grammar.
pub struct Parser {
    inner: tree_sitter::Parser,
}

impl Parser {
    /// Creates a new Python parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser cannot be initialised with
    /// the Python grammar.
    pub fn new() -> Result<Self, RecastError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| RecastError::parser_init(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Parses a Python fragment and returns the result.
    ///
    /// The result may still contain syntax errors; use
    /// [`ParseResult::require_valid`] to reject malformed input.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser fails to produce a tree at all, which
    /// typically indicates a parser configuration issue.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, RecastError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| RecastError::parser_init("parsing produced no tree"))?;

        Ok(ParseResult {
            tree,
            source: source.to_owned(),
        })
    }
}

/// Parses a fragment and rejects it unless it is syntactically valid.
///
/// Convenience entry point for the syntax-aware transformations.
pub(crate) fn parse_valid_fragment(source: &str) -> Result<ParseResult, RecastError> {
    let mut parser = Parser::new()?;
    let parsed = parser.parse(source)?;
    parsed.require_valid()?;
    Ok(parsed)
}

/// Recursively checks if a node or any of its descendants is an ERROR node.
fn has_error_nodes(node: tree_sitter::Node<'_>) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_error_nodes(child) {
            return true;
        }
    }

    false
}

/// Recursively collects all ERROR nodes from a syntax tree.
fn collect_error_nodes(
    node: tree_sitter::Node<'_>,
    source: &str,
    errors: &mut Vec<SyntaxErrorInfo>,
) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node, source));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, source, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("func(arg1, arg2)")]
    #[case("def hello():\n    pass")]
    #[case("{'first_name': 'John'}")]
    #[case("")]
    fn parser_accepts_valid_fragments(#[case] source: &str) {
        let mut parser = Parser::new().expect("parser init");
        let result = parser.parse(source).expect("parse");

        assert!(!result.has_errors());
        assert!(result.require_valid().is_ok());
    }

    #[rstest]
    #[case("def broken(")]
    #[case("func(arg1,")]
    #[case("{'key': ")]
    fn parser_detects_syntax_errors(#[case] source: &str) {
        let mut parser = Parser::new().expect("parser init");
        let result = parser.parse(source).expect("parse");

        assert!(result.has_errors());
        assert!(!result.errors().is_empty());
    }

    #[test]
    fn require_valid_reports_line_and_column() {
        let mut parser = Parser::new().expect("parser init");
        let result = parser.parse("x = 1\ny = (").expect("parse");

        let error = result.require_valid().expect_err("should reject");
        match error {
            RecastError::Parse { line, column, .. } => {
                assert!(line >= 1);
                assert!(column >= 1);
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn parse_result_keeps_source() {
        let source = "value - other";
        let result = parse_valid_fragment(source).expect("parse");
        assert_eq!(result.source(), source);
    }
}
