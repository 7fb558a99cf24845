use crate::diff::operation::Operation;
use crate::sink::OperationSink;

/// Eager sink: collects the whole diff into a finite ordered list.
#[derive(Debug, Default)]
pub struct CollectorSink {
    operations: Vec<Operation>,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationSink for CollectorSink {
    type Output = Vec<Operation>;

    fn write(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    fn close(self) -> Vec<Operation> {
        self.operations
    }
}
