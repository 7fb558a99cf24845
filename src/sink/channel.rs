use crate::diff::operation::Operation;
use crate::sink::OperationSink;
use thiserror::Error;
use tokio::sync::mpsc;

/// The producer went away without closing the sink, so the operation
/// sequence is truncated and must not be treated as a finished diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the producer dropped the sink before closing it")]
pub struct StreamAborted;

#[derive(Debug)]
enum Message {
    Operation(Operation),
    Done,
}

/// Incremental sink: operations flow through an unbounded channel to an
/// `OperationStream` that a consumer can read while the engine is still
/// producing.
///
/// Closing the sink sends an explicit end-of-sequence marker. A sink dropped
/// without `close` (the producer failed mid-run) surfaces to the consumer as
/// [`StreamAborted`], so a truncated sequence is never mistaken for a
/// finished one. A consumer that stops reading and drops its stream is
/// sufficient cancellation: later writes are simply discarded.
#[derive(Debug)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Message>,
}

impl ChannelSink {
    pub fn new() -> (Self, OperationStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelSink { tx }, OperationStream { rx, finished: false })
    }
}

impl OperationSink for ChannelSink {
    type Output = ();

    fn write(&mut self, operation: Operation) {
        // send only fails when the consumer has gone away
        let _ = self.tx.send(Message::Operation(operation));
    }

    fn close(self) {
        let _ = self.tx.send(Message::Done);
    }
}

/// Pull side of a `ChannelSink`: an open-ended, ordered operation sequence.
#[derive(Debug)]
pub struct OperationStream {
    rx: mpsc::UnboundedReceiver<Message>,
    finished: bool,
}

impl OperationStream {
    /// Next operation in emission order. `None` once the sink has been
    /// closed; `Some(Err(StreamAborted))` when the producer dropped the sink
    /// without closing it.
    pub async fn next(&mut self) -> Option<Result<Operation, StreamAborted>> {
        if self.finished {
            return None;
        }
        match self.rx.recv().await {
            Some(Message::Operation(operation)) => Some(Ok(operation)),
            Some(Message::Done) => {
                self.finished = true;
                None
            }
            None => {
                self.finished = true;
                Some(Err(StreamAborted))
            }
        }
    }
}
