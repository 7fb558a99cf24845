use crate::diff::token::{Side, Token};
use crate::indent::IndentTracker;
use crate::lexer::substrings::split_substrings;

/// Decides whether a string-literal token is handed to the substring
/// re-tokenizer. Supplied per lexer rather than hardcoded, since the useful
/// heuristic varies by source language.
pub type SplitPredicate = fn(&str) -> bool;

/// Default predicate: literals containing a literal space get split so the
/// engine can match individual words inside them.
pub fn contains_space(value: &str) -> bool {
    value.contains(' ')
}

fn is_quote(character: char) -> bool {
    matches!(character, '`' | '"' | '\'')
}

fn is_word(character: char) -> bool {
    character.is_alphanumeric() || character == '_' || character == '$'
}

/// Code-oriented lexer: word runs, single punctuation characters, space/tab
/// runs (fed to the indent tracker), newline runs, and quote-delimited
/// string literals with backslash escapes.
///
/// The token sequence partitions the source in reading order with no gaps,
/// which is the contract the alignment engine relies on.
#[derive(Debug, Clone, Copy)]
pub struct SourceLexer {
    split_literal: SplitPredicate,
}

impl Default for SourceLexer {
    fn default() -> Self {
        SourceLexer {
            split_literal: contains_space,
        }
    }
}

impl SourceLexer {
    pub fn with_split_predicate(split_literal: SplitPredicate) -> Self {
        SourceLexer { split_literal }
    }

    pub fn tokenize(&self, source: &str) -> anyhow::Result<Side> {
        let mut tokens = Vec::new();
        let mut indents = IndentTracker::new();
        let chars: Vec<(usize, char)> = source.char_indices().collect();
        let mut index = 0;

        while index < chars.len() {
            let (start, character) = chars[index];

            if character == ' ' || character == '\t' {
                let value = take_run(&chars, &mut index, |c| c == ' ' || c == '\t');
                indents.record(&value)?;
                let end = start + value.len();
                tokens.push(Token::new(value, start, end));
            } else if character == '\n' || character == '\r' {
                let value = take_run(&chars, &mut index, |c| c == '\n' || c == '\r');
                let end = start + value.len();
                tokens.push(Token::new(value, start, end));
            } else if is_quote(character) {
                let value = take_literal(&chars, &mut index, character);
                let end = start + value.len();
                if (self.split_literal)(&value) {
                    tokens.extend(split_substrings(&value, start));
                } else {
                    tokens.push(Token::new(value, start, end));
                }
            } else if is_word(character) {
                let value = take_run(&chars, &mut index, is_word);
                let end = start + value.len();
                tokens.push(Token::new(value, start, end));
            } else {
                index += 1;
                let end = start + character.len_utf8();
                tokens.push(Token::new(character.to_string(), start, end));
            }
        }

        Ok(Side::new(tokens, indents.signature()))
    }
}

fn take_run(chars: &[(usize, char)], index: &mut usize, keep: impl Fn(char) -> bool) -> String {
    let mut run = String::new();
    while *index < chars.len() && keep(chars[*index].1) {
        run.push(chars[*index].1);
        *index += 1;
    }
    run
}

/// Consumes a string literal from the opening quote up to and including the
/// matching closing quote. A backslash escapes the next character; an
/// unterminated literal stops at the end of the line.
fn take_literal(chars: &[(usize, char)], index: &mut usize, quote: char) -> String {
    let mut value = String::new();
    value.push(quote);
    *index += 1;

    while *index < chars.len() {
        let character = chars[*index].1;
        if character == '\n' || character == '\r' {
            break;
        }
        value.push(character);
        *index += 1;
        if character == '\\' {
            if *index < chars.len() && !matches!(chars[*index].1, '\n' | '\r') {
                value.push(chars[*index].1);
                *index += 1;
            }
            continue;
        }
        if character == quote {
            break;
        }
    }

    value
}
