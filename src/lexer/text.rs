use crate::diff::token::{Side, Token};
use crate::indent::IndentTracker;

/// Plain-text lexer: maximal runs of non-whitespace characters, space/tab
/// runs, and newline runs. Whitespace runs are emitted too, so the token
/// sequence partitions the source with no gaps, and space/tab runs feed the
/// indent tracker.
pub fn tokenize(source: &str) -> anyhow::Result<Side> {
    let mut tokens = Vec::new();
    let mut indents = IndentTracker::new();
    let chars: Vec<(usize, char)> = source.char_indices().collect();
    let mut index = 0;

    while index < chars.len() {
        let (start, character) = chars[index];
        let value = match character {
            ' ' | '\t' => {
                let run = take_run(&chars, &mut index, |c| c == ' ' || c == '\t');
                indents.record(&run)?;
                run
            }
            '\n' | '\r' => take_run(&chars, &mut index, |c| c == '\n' || c == '\r'),
            c if c.is_whitespace() => take_run(&chars, &mut index, |c| {
                c.is_whitespace() && !matches!(c, ' ' | '\t' | '\n' | '\r')
            }),
            _ => take_run(&chars, &mut index, |c| !c.is_whitespace()),
        };
        let end = start + value.len();
        tokens.push(Token::new(value, start, end));
    }

    Ok(Side::new(tokens, indents.signature()))
}

fn take_run(
    chars: &[(usize, char)],
    index: &mut usize,
    keep: impl Fn(char) -> bool,
) -> String {
    let mut run = String::new();
    while *index < chars.len() && keep(chars[*index].1) {
        run.push(chars[*index].1);
        *index += 1;
    }
    run
}
