
use crate::constants::TRACKED_STATUS_CODES;
use crate::record::LogRecord;

/// Running totals for one stream of access-log lines.
///
/// The set of counted status codes is fixed at construction. Records with any
/// other status code only move the size total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsState {
    total_file_size: u64,
    // Parallel to TRACKED_STATUS_CODES, so iteration order is ascending.
    status_counts: [u64; TRACKED_STATUS_CODES.len()],
}

impl Default for MetricsState {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsState {
    pub fn new() -> Self {
        Self {
            total_file_size: 0,
            status_counts: [0; TRACKED_STATUS_CODES.len()],
        }
    }

    /// Folds one record into the totals and returns the new size total.
    pub fn update(&mut self, record: &LogRecord) -> u64 {
        self.total_file_size = self.total_file_size.saturating_add(record.file_size);

        if let Some(i) = slot(&record.status_code) {
            self.status_counts[i] += 1;
        }

        self.total_file_size
    }

    pub fn total_file_size(&self) -> u64 {
        self.total_file_size
    }

    /// Count for `code`, or `None` when the code is not tracked.
    pub fn count(&self, code: &str) -> Option<u64> {
        slot(code).map(|i| self.status_counts[i])
    }

    /// Every tracked code with its count, in ascending code order.
    pub fn status_counts(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.status_counts
            .iter()
            .enumerate()
            .map(|(i, count)| (TRACKED_STATUS_CODES[i], *count))
    }
}

fn slot(code: &str) -> Option<usize> {
    TRACKED_STATUS_CODES.iter().position(|c| *c == code)
}
