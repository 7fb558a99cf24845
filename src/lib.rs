//! Token-level semantic diff
//!
//! This crate compares two tokenized versions of a text and reports only the
//! semantically meaningful insertions and deletions. Purely cosmetic
//! differences are treated as non-changes:
//!
//! - quote-character style (`'react'` vs `"react"`)
//! - optional separator tokens (`;`, `,` by default)
//! - indentation convention (spaces vs tabs, step size)
//!
//! Modules:
//!
//! - `diff`: the LCS-guided alignment engine and its data model
//! - `indent`: indentation-signature detection from whitespace runs
//! - `lexer`: built-in lexers, language dispatch and string-literal splitting
//! - `sink`: eager and streaming consumers for the operation sequence
//! - `render`: turning an operation sequence into tagged output text

pub mod diff;
pub mod indent;
pub mod lexer;
pub mod render;
pub mod sink;
