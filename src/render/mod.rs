//! Rendering an operation sequence as tagged text
//!
//! Each operation that is not omitted renders as its open tag, the literal
//! token values concatenated in order, then its close tag. Two modes:
//!
//! - materializing: a finished operation list becomes one string
//! - incremental: an open `OperationStream` becomes a stream of rendered
//!   chunks, one per non-omitted operation, with no whole-result buffering;
//!   an aborted operation sequence surfaces as an error, not as a
//!   shorter-looking result
//!
//! Rendering with inserts and equals kept and deletes omitted (and empty
//! insert tags) reproduces the new side's text exactly.

use crate::diff::operation::{Operation, OperationKind};
use crate::sink::{OperationStream, StreamAborted};

/// Which operations to render and how to mark them up.
///
/// Empty tag strings are valid and mean "no tag".
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub omit: Vec<OperationKind>,
    pub insert_tag_open: String,
    pub insert_tag_close: String,
    pub delete_tag_open: String,
    pub delete_tag_close: String,
    pub equal_tag_open: String,
    pub equal_tag_close: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            omit: Vec::new(),
            insert_tag_open: "[+ ".to_string(),
            insert_tag_close: " +]".to_string(),
            delete_tag_open: "[- ".to_string(),
            delete_tag_close: " -]".to_string(),
            equal_tag_open: String::new(),
            equal_tag_close: String::new(),
        }
    }
}

impl RenderOptions {
    /// The `<ins>`/`<del>` tag set used for HTML output.
    pub fn html() -> Self {
        RenderOptions {
            insert_tag_open: "<ins>".to_string(),
            insert_tag_close: "</ins>".to_string(),
            delete_tag_open: "<del>".to_string(),
            delete_tag_close: "</del>".to_string(),
            ..Self::default()
        }
    }

    fn tags(&self, kind: OperationKind) -> (&str, &str) {
        match kind {
            OperationKind::Insert => (&self.insert_tag_open, &self.insert_tag_close),
            OperationKind::Delete => (&self.delete_tag_open, &self.delete_tag_close),
            OperationKind::Equal => (&self.equal_tag_open, &self.equal_tag_close),
        }
    }

    /// One operation's rendered text, or `None` when its kind is omitted.
    fn render_operation(&self, operation: &Operation) -> Option<String> {
        if self.omit.contains(&operation.kind) {
            return None;
        }
        let (open, close) = self.tags(operation.kind);
        let mut chunk = String::with_capacity(open.len() + close.len());
        chunk.push_str(open);
        for token in &operation.tokens {
            chunk.push_str(&token.value);
        }
        chunk.push_str(close);
        Some(chunk)
    }
}

/// Renders a finished diff into one string.
pub fn render(diff: &[Operation], options: &RenderOptions) -> String {
    let mut result = String::new();
    for operation in diff {
        if let Some(chunk) = options.render_operation(operation) {
            result.push_str(&chunk);
        }
    }
    result
}

/// Incrementally rendered output: one chunk per non-omitted operation,
/// produced as soon as that operation arrives.
#[derive(Debug)]
pub struct ChunkStream {
    operations: OperationStream,
    options: RenderOptions,
}

impl ChunkStream {
    /// Next rendered chunk, or `None` once the operation stream ends. Every
    /// non-omitted operation yields exactly one chunk, empty or not; an
    /// aborted producer surfaces as `Err(StreamAborted)`.
    pub async fn next(&mut self) -> Option<Result<String, StreamAborted>> {
        loop {
            let operation = match self.operations.next().await? {
                Ok(operation) => operation,
                Err(aborted) => return Some(Err(aborted)),
            };
            if let Some(chunk) = self.options.render_operation(&operation) {
                return Some(Ok(chunk));
            }
        }
    }
}

/// Wraps an open operation sequence in an incremental renderer.
pub fn render_chunks(operations: OperationStream, options: RenderOptions) -> ChunkStream {
    ChunkStream {
        operations,
        options,
    }
}

/// Drains an open operation sequence into one rendered string. An aborted
/// sequence is an error, never a partial string.
pub async fn render_stream_to_string(
    operations: OperationStream,
    options: RenderOptions,
) -> Result<String, StreamAborted> {
    let mut chunks = render_chunks(operations, options);
    let mut result = String::new();
    while let Some(chunk) = chunks.next().await {
        result.push_str(&chunk?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::token::Token;
    use crate::sink::{ChannelSink, OperationSink, StreamAborted};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn operation(kind: OperationKind, value: &str) -> Operation {
        Operation {
            kind,
            tokens: vec![Token::new(value.into(), 0, value.len())],
        }
    }

    #[rstest]
    fn default_tags_mark_inserts_and_deletes() {
        let diff = vec![
            operation(OperationKind::Equal, "foo "),
            operation(OperationKind::Insert, "bar"),
            operation(OperationKind::Delete, "baz"),
        ];
        assert_eq!(
            render(&diff, &RenderOptions::default()),
            "foo [+ bar +][- baz -]"
        );
    }

    #[rstest]
    fn custom_tags_are_substituted() {
        let diff = vec![
            operation(OperationKind::Equal, "foo "),
            operation(OperationKind::Insert, "bar"),
        ];
        let options = RenderOptions {
            insert_tag_open: "<ins>".to_string(),
            insert_tag_close: "</ins>".to_string(),
            ..RenderOptions::default()
        };
        assert_eq!(render(&diff, &options), "foo <ins>bar</ins>");
    }

    #[rstest]
    fn omitted_kinds_disappear() {
        let diff = vec![
            operation(OperationKind::Equal, "keep "),
            operation(OperationKind::Delete, "drop"),
        ];
        let options = RenderOptions {
            omit: vec![OperationKind::Delete],
            ..RenderOptions::default()
        };
        assert_eq!(render(&diff, &options), "keep ");
    }

    #[rstest]
    fn html_preset_uses_ins_and_del() {
        let diff = vec![operation(OperationKind::Insert, "x")];
        assert_eq!(render(&diff, &RenderOptions::html()), "<ins>x</ins>");
    }

    #[tokio::test]
    async fn chunk_stream_yields_one_chunk_per_operation() {
        let (mut sink, stream) = ChannelSink::new();
        sink.write(operation(OperationKind::Equal, "foo "));
        sink.write(operation(OperationKind::Insert, "bar"));
        sink.close();

        let mut chunks = render_chunks(stream, RenderOptions::default());
        assert_eq!(chunks.next().await.unwrap().unwrap(), "foo ");
        assert_eq!(chunks.next().await.unwrap().unwrap(), "[+ bar +]");
        assert!(chunks.next().await.is_none());
    }

    #[tokio::test]
    async fn empty_chunks_are_still_yielded() {
        let (mut sink, stream) = ChannelSink::new();
        sink.write(operation(OperationKind::Equal, ""));
        sink.write(operation(OperationKind::Insert, "x"));
        sink.close();

        let mut chunks = render_chunks(stream, RenderOptions::default());
        assert_eq!(chunks.next().await.unwrap().unwrap(), "");
        assert_eq!(chunks.next().await.unwrap().unwrap(), "[+ x +]");
        assert!(chunks.next().await.is_none());
    }

    #[tokio::test]
    async fn aborted_stream_yields_an_error_not_a_partial_string() {
        let (mut sink, stream) = ChannelSink::new();
        sink.write(operation(OperationKind::Equal, "a"));
        drop(sink);

        let result = render_stream_to_string(stream, RenderOptions::default()).await;
        assert_eq!(result, Err(StreamAborted));
    }

    #[tokio::test]
    async fn streaming_and_materializing_agree() {
        let diff = vec![
            operation(OperationKind::Equal, "a "),
            operation(OperationKind::Delete, "b"),
            operation(OperationKind::Insert, "c"),
        ];

        let (mut sink, stream) = ChannelSink::new();
        for op in &diff {
            sink.write(op.clone());
        }
        sink.close();

        let streamed = render_stream_to_string(stream, RenderOptions::default())
            .await
            .unwrap();
        let materialized = render(&diff, &RenderOptions::default());
        assert_eq!(streamed, materialized);
    }
}
