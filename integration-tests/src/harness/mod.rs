pub mod lines;
pub mod tracing;

pub use self::lines::{LineBuilder, stream_of};
pub use self::tracing::{CapturedEvent, captured_events};
