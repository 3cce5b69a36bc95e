use crate::constants::SENTINEL_STATUS;

/// What one access-log line contributes to the metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Taken verbatim from the line; not guaranteed to be a real HTTP status.
    pub status_code: String,
    pub file_size: u64,
}

impl LogRecord {
    pub fn new(status_code: impl Into<String>, file_size: u64) -> Self {
        Self {
            status_code: status_code.into(),
            file_size,
        }
    }

    /// Record for a line nothing could be extracted from.
    pub fn sentinel() -> Self {
        Self::new(SENTINEL_STATUS, 0)
    }

    pub fn is_sentinel(&self) -> bool {
        self.status_code == SENTINEL_STATUS && self.file_size == 0
    }
}
