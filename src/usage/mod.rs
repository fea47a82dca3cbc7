mod probe;
mod reporter;
mod snapshot;

pub use probe::{MemoryProbe, SystemProbe};
pub use reporter::UsageReporter;
pub use snapshot::UsageSnapshot;
