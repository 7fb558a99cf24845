use crate::indent::IndentSignature;
use derive_new::new;

/// A minimal lexical unit: its literal text plus byte offsets into the
/// source it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Token {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// One input to a comparison: a token sequence that partitions the source in
/// reading order, plus the indentation signature detected from its
/// whitespace tokens.
///
/// A `Side` is built once per comparison call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Side {
    pub tokens: Vec<Token>,
    pub indent: IndentSignature,
}

impl Side {
    /// Concatenation of all token values, in order. With a coverage-complete
    /// lexer this is the original source text.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.value.as_str()).collect()
    }
}
