use thiserror::Error;

/// Failures the alignment engine can surface.
///
/// The two conditions are deliberately distinct: an iteration-ceiling breach
/// means a cursor failed to advance (an algorithmic invariant violation, not
/// a large input) and must propagate to the caller unrecovered, while a table
/// allocation failure is an expected outcome for extremely large inputs and
/// is safe to catch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("forward walk exceeded {0} steps without consuming both sides")]
    IterationCeiling(usize),
    #[error("failed to allocate the {rows}x{cols} LCS table")]
    TableAllocation { rows: usize, cols: usize },
}
