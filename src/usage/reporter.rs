use std::time::Instant;

use crate::format::format_mib;

use super::probe::MemoryProbe;
use super::snapshot::UsageSnapshot;

/// Samples memory and elapsed time against a fixed start instant, tracking
/// the largest memory reading seen over its lifetime.
pub struct UsageReporter<P: MemoryProbe> {
    probe: P,
    peak_bytes: u64,
}

impl<P: MemoryProbe> UsageReporter<P> {
    pub fn new(probe: P) -> Self {
        UsageReporter {
            probe,
            peak_bytes: 0,
        }
    }

    /// Takes a reading and folds it into the lifetime peak. The peak never
    /// decreases and has no reset.
    pub fn sample(&mut self, start: Instant) -> UsageSnapshot {
        let elapsed = start.elapsed();
        let memory_bytes = self.probe.memory_bytes();
        if self.peak_bytes < memory_bytes {
            self.peak_bytes = memory_bytes;
        }

        UsageSnapshot {
            memory_bytes,
            memory_formatted: format_mib(memory_bytes),
            peak_bytes: self.peak_bytes,
            peak_formatted: format_mib(self.peak_bytes),
            elapsed_ms: elapsed.as_millis() as u64,
            elapsed_formatted: format!("{elapsed:?}"),
        }
    }

    /// `sample`, then print the usage line.
    pub fn report(&mut self, start: Instant) -> UsageSnapshot {
        let snapshot = self.sample(start);
        println!("{}", snapshot.usage_line());
        snapshot
    }

    pub fn peak_bytes(&self) -> u64 {
        self.peak_bytes
    }
}
