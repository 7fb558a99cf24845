use crate::diff::token::Token;

/// Character classes for splitting a string literal into finer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunClass {
    Quote,
    Space,
    Other,
}

fn classify(character: char) -> RunClass {
    match character {
        '`' | '"' | '\'' => RunClass::Quote,
        ' ' => RunClass::Space,
        _ => RunClass::Other,
    }
}

/// Splits a whitespace-containing string-literal token into finer tokens
/// covering the same span, so the engine can match individual words inside a
/// changed literal instead of treating the whole literal as opaque.
///
/// The scan flushes the buffered run on every character-class change and at
/// end of input. Offsets are absolute, derived from the literal's original
/// `start`; zero-length runs are never emitted.
pub fn split_substrings(value: &str, start: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut state = RunClass::Quote;
    let mut buffer = String::new();
    let mut run_start = start;

    for (offset, character) in value.char_indices() {
        let class = classify(character);
        if class != state {
            if !buffer.is_empty() {
                let end = run_start + buffer.len();
                tokens.push(Token::new(std::mem::take(&mut buffer), run_start, end));
            }
            run_start = start + offset;
            state = class;
        }
        buffer.push(character);
    }

    if !buffer.is_empty() {
        let end = run_start + buffer.len();
        tokens.push(Token::new(buffer, run_start, end));
    }

    tokens
}
