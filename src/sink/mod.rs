//! Consumers for the operation sequence
//!
//! The alignment engine pushes finished operations into an `OperationSink`
//! one at a time, in emission order. Two realizations exist:
//!
//! - `CollectorSink`: eager, accumulates everything into a `Vec`
//! - `ChannelSink`: incremental, hands operations to a concurrently running
//!   consumer through an unbounded channel
//!
//! The caller picks one explicitly; sinks must preserve emission order and
//! never drop, reorder or duplicate operations. A `ChannelSink` dropped
//! without `close` marks its stream aborted rather than cleanly finished.

pub mod channel;
pub mod collector;

pub use channel::{ChannelSink, OperationStream, StreamAborted};
pub use collector::CollectorSink;

use crate::diff::operation::Operation;

/// Strategy consuming operations as the engine produces them.
///
/// `write` accepts one operation in emission order; `close` finalizes the
/// sink and returns its product.
pub trait OperationSink {
    type Output;

    fn write(&mut self, operation: Operation);

    fn close(self) -> Self::Output;
}
