/// Thread-safe progress reporting for directory sweeps.
///
/// Implementors can drive progress bars, logging, or any other UI feedback.
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A sweep over `total_items` frames has started.
    fn begin(&self, _total_items: usize) {}

    /// `items_done` frames have completed, in completion order.
    fn advance(&self, _items_done: usize) {}

    /// The sweep is finished.
    fn finish(&self) {}
}

/// Reporter that ignores every event.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
