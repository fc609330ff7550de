//! Progress display for a generation run and the exports that follow it

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Drives a single progress bar through the generation and export stages
///
/// Generation steps are cheap, so the bar is only redrawn every
/// `PROGRESS_UPDATE_INTERVAL` values and on the last one.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    total: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{width}.cyan/blue}}] {{pos}}/{{len}}",
            width = PROGRESS_BAR_WIDTH
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            total: 0,
        }
    }

    /// Show a bar sized to the number of values about to be generated
    pub fn start_generation(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(GENERATION_STYLE.clone());
        bar.set_message("Generating");
        self.bar = Some(bar);
        self.total = total;
    }

    /// Report how many values have been produced so far
    pub fn update_generation(&self, produced: usize) {
        if !Self::should_refresh(produced, self.total) {
            return;
        }
        if let Some(ref bar) = self.bar {
            bar.set_position(produced as u64);
        }
    }

    /// Label the stage that follows generation, such as an export
    pub fn set_stage(&self, stage: &'static str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(stage);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Position last drawn, zero when no bar is active
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Whether `produced` out of `total` warrants a redraw
    pub const fn should_refresh(produced: usize, total: usize) -> bool {
        produced == total || produced % PROGRESS_UPDATE_INTERVAL == 0
    }
}
