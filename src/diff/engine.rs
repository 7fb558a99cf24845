use crate::diff::error::DiffError;
use crate::diff::operation::{Operation, OperationKind};
use crate::diff::token::Side;
use crate::sink::{CollectorSink, OperationSink};
use derive_new::new;

/// Ceiling on forward-walk iterations. Far beyond any realistic combined
/// token count; breaching it means a cursor stopped advancing.
pub const WALK_STEP_CEILING: usize = 50_000;

/// Per-comparison knobs for the alignment engine.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Tokens treated as insignificant separators: dropped silently when they
    /// come from the old side, preserved as equal when they come from the new
    /// side.
    pub skip_tokens: Vec<String>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            skip_tokens: vec![";".to_string(), ",".to_string()],
        }
    }
}

impl DiffOptions {
    fn is_skip_token(&self, value: &str) -> bool {
        self.skip_tokens.iter().any(|skip| skip == value)
    }
}

/// LCS-guided token alignment between an old side `a` and a new side `b`.
///
/// Token values are normalized for comparison only: one layer of matching
/// wrapping quotes is stripped, and every occurrence of `a`'s indentation
/// step inside `a`'s values is replaced with `b`'s. The walk then classifies
/// every token as equal, inserted or deleted, accumulating same-kind runs
/// into operations and flushing each finished run to the sink.
///
/// The LCS table costs O(|a|×|b|) memory and time; that table is the
/// scalability limit of this design.
#[derive(Debug, new)]
pub struct TokenDiff<'d> {
    a: &'d Side,
    b: &'d Side,
    #[new(default)]
    options: DiffOptions,
}

impl<'d> TokenDiff<'d> {
    pub fn with_options(a: &'d Side, b: &'d Side, options: DiffOptions) -> Self {
        TokenDiff { a, b, options }
    }

    /// Runs the comparison eagerly and returns the finished operation list.
    pub fn collect(&self) -> Result<Vec<Operation>, DiffError> {
        self.run(CollectorSink::default())
    }

    /// Runs the comparison, writing each finished operation to `sink`, and
    /// returns the sink's product.
    pub fn run<S: OperationSink>(&self, mut sink: S) -> Result<S::Output, DiffError> {
        let a_indent = self.a.indent.as_text();
        let b_indent = self.b.indent.as_text();

        let a_normalized: Vec<String> = self
            .a
            .tokens
            .iter()
            .map(|token| strip_quotes(&token.value).replace(&a_indent, &b_indent))
            .collect();
        let b_normalized: Vec<String> = self
            .b
            .tokens
            .iter()
            .map(|token| strip_quotes(&token.value).to_string())
            .collect();

        let matrix = lcs_matrix(&a_normalized, &b_normalized)?;

        let a = &self.a.tokens;
        let b = &self.b.tokens;
        let mut i = 0;
        let mut j = 0;
        let mut steps = 0;
        let mut operation = Operation::empty(OperationKind::Equal);

        while i < a.len() || j < b.len() {
            steps += 1;
            if steps > WALK_STEP_CEILING {
                return Err(DiffError::IterationCeiling(WALK_STEP_CEILING));
            }

            // Skipped separator in A: dropped, never emitted.
            if i < a.len() && self.options.is_skip_token(&a[i].value) {
                i += 1;
                continue;
            }

            // Skipped separator in B: B's own separators are always kept.
            if j < b.len() && self.options.is_skip_token(&b[j].value) {
                operation = switch(&mut sink, operation, OperationKind::Equal);
                operation.tokens.push(b[j].clone());
                j += 1;
                continue;
            }

            // Normalized match, or two whitespace runs that differ only in
            // their exact content. Always emit B's token.
            if i < a.len()
                && j < b.len()
                && (a_normalized[i] == b_normalized[j]
                    || (is_whitespace_only(&a[i].value) && is_whitespace_only(&b[j].value)))
            {
                operation = switch(&mut sink, operation, OperationKind::Equal);
                operation.tokens.push(b[j].clone());
                i += 1;
                j += 1;
                continue;
            }

            // Insert vs delete, guided by the LCS table; ties favor insert.
            if j < b.len() && (i >= a.len() || matrix[i][j + 1] >= matrix[i + 1][j]) {
                operation = switch(&mut sink, operation, OperationKind::Insert);
                operation.tokens.push(b[j].clone());
                j += 1;
                continue;
            }

            // Deleted tokens are displayed with B's indentation convention.
            operation = switch(&mut sink, operation, OperationKind::Delete);
            let mut token = a[i].clone();
            token.value = token.value.replace(&a_indent, &b_indent);
            operation.tokens.push(token);
            i += 1;
        }

        if !operation.tokens.is_empty() {
            sink.write(operation);
        }

        Ok(sink.close())
    }
}

/// Flushes the in-progress operation on a kind change. The initial empty
/// placeholder is never written.
fn switch<S: OperationSink>(sink: &mut S, current: Operation, kind: OperationKind) -> Operation {
    if current.kind == kind {
        return current;
    }
    if !current.tokens.is_empty() {
        sink.write(current);
    }
    Operation::empty(kind)
}

/// Strips one layer of matching wrapping quotes from a token value. A lone
/// quote character is its own opening and closing quote and strips to the
/// empty string, so the quote tokens emitted around a re-tokenized string
/// literal compare equal across quote styles.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            if value.len() == 1 {
                return "";
            }
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn is_whitespace_only(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Builds the `(|a|+1)×(|b|+1)` LCS table, filled from the bottom-right
/// corner backward; out-of-range cells stay 0. Allocation is fallible so an
/// oversized input surfaces as a catchable error instead of an abort.
fn lcs_matrix(a: &[String], b: &[String]) -> Result<Vec<Vec<u32>>, DiffError> {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let exhausted = DiffError::TableAllocation { rows, cols };

    let mut matrix: Vec<Vec<u32>> = Vec::new();
    matrix
        .try_reserve_exact(rows)
        .map_err(|_| exhausted.clone())?;
    for _ in 0..rows {
        let mut row: Vec<u32> = Vec::new();
        row.try_reserve_exact(cols).map_err(|_| exhausted.clone())?;
        row.resize(cols, 0);
        matrix.push(row);
    }

    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            matrix[i][j] = if a[i] == b[j] {
                matrix[i + 1][j + 1] + 1
            } else {
                matrix[i + 1][j].max(matrix[i][j + 1])
            };
        }
    }

    Ok(matrix)
}
