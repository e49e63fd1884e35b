//! Progress bar for the database load.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use iconmoji_db::LoadProgress;

/// Shows one tick per inserted record.
pub(crate) struct BarProgress {
    pb: ProgressBar,
}

impl BarProgress {
    /// When `quiet` is true the bar is hidden.
    pub(crate) fn new(quiet: bool) -> Self {
        let pb = ProgressBar::new(0);
        if quiet {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        pb.set_style(
            ProgressStyle::with_template("  {bar:40.cyan/blue} {pos:>5}/{len:5} {msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        Self { pb }
    }
}

impl LoadProgress for BarProgress {
    fn on_record(&self, current: usize, total: usize, file_name: &str) {
        self.pb.set_length(total as u64);
        self.pb.set_position(current as u64);
        self.pb.set_message(file_name.to_string());
    }

    fn on_complete(&self, _total: usize) {
        self.pb.finish_and_clear();
    }
}

impl Drop for BarProgress {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.abandon();
        }
    }
}
