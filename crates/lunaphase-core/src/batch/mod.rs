pub mod export;
pub mod survey;

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::warn;

use crate::consts::PARALLEL_FRAME_THRESHOLD;
use crate::error::{LunaError, Result};
use crate::frame::SourceFrame;
use crate::progress::ProgressReporter;

pub use export::{export_all, export_frames, ExportOptions, ExportSummary, ExportedFrame};
pub use survey::{survey, survey_frames, SurveyEntry, SurveyReport};

/// Run `work` on every frame, in parallel for larger sequences.
///
/// Results come back in enumeration order regardless of completion order.
/// A failing frame is logged and recorded; it never stops the sweep.
pub(crate) fn sweep<T, F>(
    frames: &[SourceFrame],
    reporter: &dyn ProgressReporter,
    work: F,
) -> (Vec<T>, Vec<(usize, LunaError)>)
where
    T: Send,
    F: Fn(&SourceFrame) -> Result<T> + Send + Sync,
{
    reporter.begin(frames.len());
    let done = AtomicUsize::new(0);

    let run = |frame: &SourceFrame| {
        let result = work(frame);
        let n = done.fetch_add(1, Ordering::Relaxed) + 1;
        reporter.advance(n);
        (frame.index, result)
    };

    let results: Vec<(usize, Result<T>)> = if frames.len() >= PARALLEL_FRAME_THRESHOLD {
        frames.par_iter().map(run).collect()
    } else {
        frames.iter().map(run).collect()
    };
    reporter.finish();

    let mut successes = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (index, result) in results {
        match result {
            Ok(value) => successes.push(value),
            Err(e) => {
                warn!(index, error = %e, "Skipping frame");
                failures.push((index, e));
            }
        }
    }
    (successes, failures)
}
