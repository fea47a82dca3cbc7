use serde::Serialize;

/// One reporter reading. Constructed fresh per call; the peak fields reflect
/// the reporter's lifetime maximum as of the call.
#[derive(Clone, Debug, Serialize)]
pub struct UsageSnapshot {
    pub memory_bytes: u64,
    pub memory_formatted: String,
    pub peak_bytes: u64,
    pub peak_formatted: String,
    pub elapsed_ms: u64,
    pub elapsed_formatted: String,
}

impl UsageSnapshot {
    /// Single-line rendering for stdout.
    pub fn usage_line(&self) -> String {
        format!(
            "memory: {} | peak: {} | elapsed: {}",
            self.memory_formatted, self.peak_formatted, self.elapsed_formatted
        )
    }
}
