//! Built-in lexers and language dispatch
//!
//! Lexers turn raw text into a `Side`: a token sequence that partitions the
//! source in reading order (every character, including separators and
//! whitespace, belongs to exactly one token) plus the indent signature
//! detected from the whitespace tokens. The alignment engine trusts this
//! coverage contract and does no validation of its own.
//!
//! - `text`: plain-text lexer (word, space/tab and newline runs)
//! - `source`: code-oriented lexer with string-literal handling
//! - `substrings`: splits a whitespace-containing string literal into finer
//!   word/quote/space tokens

pub mod source;
pub mod substrings;
pub mod text;

pub use source::SourceLexer;

use crate::diff::token::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Text,
    Source,
}

/// Language tags accepted by `tokenize`. Unknown tags fall back to the text
/// lexer.
pub const LANGUAGES: phf::Map<&'static str, Language> = phf::phf_map! {
    "text" => Language::Text,
    "txt" => Language::Text,
    "javascript" => Language::Source,
    "js" => Language::Source,
    "jsx" => Language::Source,
    "typescript" => Language::Source,
    "ts" => Language::Source,
    "tsx" => Language::Source,
};

/// Tokenizes `content` with the lexer registered for `language`.
pub fn tokenize(content: &str, language: &str) -> anyhow::Result<Side> {
    match LANGUAGES.get(language).copied().unwrap_or(Language::Text) {
        Language::Source => SourceLexer::default().tokenize(content),
        Language::Text => text::tokenize(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("typescript")]
    #[case("js")]
    #[case("text")]
    #[case("not-a-language")]
    fn every_lexer_partitions_the_source(#[case] language: &str) {
        let content = "const greeting = 'hi there';\n\tdone\n";
        let side = tokenize(content, language).unwrap();
        assert_eq!(side.text(), content);
    }

    #[rstest]
    fn unknown_tags_fall_back_to_text() {
        let side = tokenize("a 'b c'", "not-a-language").unwrap();
        // the text lexer never splits string literals
        let values: Vec<&str> = side.tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["a", " ", "'b", " ", "c'"]);
    }
}
