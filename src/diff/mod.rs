//! Alignment engine and diff data model
//!
//! This module contains the comparison core:
//!
//! - `token`: lexical tokens and per-side input (`Token`, `Side`)
//! - `operation`: classified runs of tokens (`Operation`, `OperationKind`)
//! - `engine`: the LCS-guided forward walk (`TokenDiff`, `DiffOptions`)
//! - `error`: the engine's error taxonomy (`DiffError`)
//!
//! The engine is synchronous and call-scoped: every comparison owns its own
//! cursors and accumulators, and nothing persists between invocations.

pub mod engine;
pub mod error;
pub mod operation;
pub mod token;

pub use engine::{DiffOptions, TokenDiff};
pub use error::DiffError;
pub use operation::{Operation, OperationKind};
pub use token::{Side, Token};
