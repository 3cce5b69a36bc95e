/// Status codes that get their own counter, in ascending order.
pub const TRACKED_STATUS_CODES: [&str; 8] = ["200", "301", "400", "401", "403", "404", "405", "500"];

/// A snapshot is printed after every this many lines.
pub const REPORT_EVERY: u64 = 10;

/// Status code carried by the record of a line that did not parse.
pub const SENTINEL_STATUS: &str = "0";

/// Lines the stdin reader may queue ahead of the loop before it blocks.
pub const LINE_QUEUE_DEPTH: usize = 64;
