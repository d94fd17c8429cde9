use crate::error::LunaError;
use crate::frame::SourceFrame;

use super::Preview;

/// Receives what the session publishes. All methods default to no-ops.
///
/// Called synchronously on the thread driving the session, in the order
/// the changes arrived; the latest call supersedes earlier ones.
pub trait PreviewObserver: Send + Sync {
    /// A fresh measurement and preview for the active frame.
    fn on_preview(&self, _preview: &Preview) {}

    /// `frame` could not be loaded; the previous preview stays current.
    fn on_frame_error(&self, _frame: &SourceFrame, _error: &LunaError) {}
}

/// Observer that ignores every event.
pub struct NoOpObserver;
impl PreviewObserver for NoOpObserver {}
