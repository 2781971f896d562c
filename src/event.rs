//! Event decoding and timestamp display formatting

pub mod record;
pub mod timestamp;

pub use record::{EventKind, NormalizedEvent};
pub use timestamp::format_timestamp;
