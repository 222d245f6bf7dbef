//! Source-code text transformations for Python fragments.
//!
//! This crate provides four stateless, single-purpose rewriting helpers:
//!
//! - **Argument swapping** via [`swap_two_args_in_function_call`]: swap the
//!   first two positional arguments of the first call expression in a
//!   fragment.
//! - **Dictionary key rewriting** via [`transform_keys_in_dict`]: apply a
//!   caller-supplied transform to every literal key of every dictionary
//!   literal in a fragment.
//! - **Hyphen pair swapping** via [`swap_values_around_hyphen`]: swap the two
//!   words of a `word - word` string, preserving the hyphen and its
//!   surrounding whitespace.
//! - **Quoted key rewriting** via
//!   [`transform_string_keys_in_dict_using_regexps`]: rewrite quoted keys
//!   found by textual pattern matching, re-quoting results in double quotes.
//!
//! The first two operations are syntax aware. A fragment is parsed with
//! Tree-sitter's Python grammar, the relevant nodes are located in the tree,
//! and the transformation is spliced back into the original text as byte-range
//! edits, so everything outside the rewritten spans survives verbatim. The
//! last two operations are plain regular-expression rewrites and never parse.
//!
//! # Example: Argument Swapping
//!
//! ```
//! use recast_syntax::swap_two_args_in_function_call;
//!
//! let swapped = swap_two_args_in_function_call("func(arg1, arg2)")?;
//! assert_eq!(swapped, "func(arg2, arg1)");
//! # Ok::<(), recast_syntax::RecastError>(())
//! ```
//!
//! # Example: Dictionary Key Rewriting
//!
//! ```
//! use recast_syntax::transform_keys_in_dict;
//!
//! let upper = transform_keys_in_dict(
//!     "{'first_name': 'John'}",
//!     |key| key.to_uppercase(),
//! )?;
//! assert_eq!(upper, "{'FIRST_NAME': 'John'}");
//! # Ok::<(), recast_syntax::RecastError>(())
//! ```
//!
//! # Failure Model
//!
//! Every operation either returns a new string or fails with a
//! [`RecastError`]; the input is never mutated and no partial output is
//! produced. See the error type for the failure kinds.

mod arguments;
mod dictionary;
mod edits;
mod error;
mod parser;
mod textual;

pub use arguments::swap_two_args_in_function_call;
pub use dictionary::transform_keys_in_dict;
pub use error::RecastError;
pub use parser::{ParseResult, Parser, SyntaxErrorInfo};
pub use textual::{swap_values_around_hyphen, transform_string_keys_in_dict_using_regexps};

#[cfg(test)]
mod tests;
