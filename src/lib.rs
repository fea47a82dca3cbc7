//! Counts newline-delimited lines in a byte stream while sampling process
//! memory and elapsed wall-clock time at caller-chosen measurement points.

pub mod count;
pub mod format;
#[cfg(feature = "perf-tracing")]
pub mod perf;
pub mod usage;
