//! Load progress reporting.

/// Trait for receiving load progress updates.
pub trait LoadProgress {
    /// Called after each record is inserted.
    fn on_record(&self, current: usize, total: usize, file_name: &str);

    /// Called once every record is committed.
    fn on_complete(&self, total: usize);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl LoadProgress for SilentProgress {
    fn on_record(&self, _current: usize, _total: usize, _file_name: &str) {}
    fn on_complete(&self, _total: usize) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl LoadProgress for LogProgress {
    fn on_record(&self, current: usize, total: usize, file_name: &str) {
        if current.is_multiple_of(500) || current == total {
            log::info!("  [{}/{}] {}", current, total, file_name);
        }
    }

    fn on_complete(&self, total: usize) {
        log::info!("Loaded {} emoji", total);
    }
}
