use crate::diff::token::Token;
use std::fmt::Display;

/// Classification of a run of tokens in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationKind {
    Equal,
    Insert,
    Delete,
}

/// A maximal run of same-classified tokens, in emission order.
///
/// The full ordered sequence of operations produced by one comparison is the
/// diff. Every token of both sides is accounted for by exactly one operation,
/// except old-side tokens in the skip set, which are dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub tokens: Vec<Token>,
}

impl Operation {
    pub fn empty(kind: OperationKind) -> Self {
        Operation {
            kind,
            tokens: Vec::new(),
        }
    }

    /// The literal text of this run: all token values concatenated.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.value.as_str()).collect()
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            OperationKind::Equal => write!(f, "{}", self.text()),
            OperationKind::Insert => write!(f, "[+ {} +]", self.text()),
            OperationKind::Delete => write!(f, "[- {} -]", self.text()),
        }
    }
}
