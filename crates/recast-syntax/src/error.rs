//! Error types for the transformation operations.
//!
//! Every operation in this crate reports failures through [`RecastError`].
//! Errors propagate immediately to the caller; there is no retry and no
//! partial-result recovery.

use thiserror::Error;

/// Errors from source-text transformation operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecastError {
    /// Failed to initialise the Tree-sitter parser for the Python grammar.
    #[error("failed to initialise python parser: {message}")]
    ParserInit {
        /// Description of the failure.
        message: String,
    },

    /// The input is not syntactically valid Python.
    #[error("invalid python source at line {line}, column {column}: {context}")]
    Parse {
        /// Line number (one-based) where the first error starts.
        line: u32,
        /// Column number (one-based) where the first error starts.
        column: u32,
        /// A snippet of the problematic source text.
        context: String,
    },

    /// The expected syntactic shape was not found.
    #[error("unexpected structure: {message}")]
    Structure {
        /// Description of the missing shape.
        message: String,
    },

    /// The textual pattern was not found in the input.
    #[error("no match: {message}")]
    NoMatch {
        /// Description of the pattern that failed to match.
        message: String,
    },

    /// A matched node has a shape the transform cannot handle.
    #[error("transform failed: {message}")]
    Transform {
        /// Description of the transform failure.
        message: String,
    },
}

impl RecastError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInit {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(line: u32, column: u32, context: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            context: context.into(),
        }
    }

    /// Creates a structure error.
    #[must_use]
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
        }
    }

    /// Creates a no-match error.
    #[must_use]
    pub fn no_match(message: impl Into<String>) -> Self {
        Self::NoMatch {
            message: message.into(),
        }
    }

    /// Creates a transform error.
    #[must_use]
    pub fn transform(message: impl Into<String>) -> Self {
        Self::Transform {
            message: message.into(),
        }
    }
}
