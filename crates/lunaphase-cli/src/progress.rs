use indicatif::{ProgressBar, ProgressStyle};
use lunaphase_core::progress::ProgressReporter;

/// Drives an indicatif bar from a directory sweep.
pub struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    pub fn new(message: &'static str) -> anyhow::Result<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg:10} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        bar.set_message(message);
        Ok(Self { bar })
    }
}

impl ProgressReporter for BarReporter {
    fn begin(&self, total_items: usize) {
        self.bar.set_length(total_items as u64);
        self.bar.set_position(0);
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}
