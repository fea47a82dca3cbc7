use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Current-process memory reading, injectable so reporter arithmetic can be
/// exercised with fabricated values.
pub trait MemoryProbe {
    /// Memory the OS currently attributes to the process, in bytes.
    fn memory_bytes(&mut self) -> u64;
}

/// Live probe over the host's process table.
pub struct SystemProbe {
    sys: System,
    pid: Pid,
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe {
    pub fn new() -> Self {
        let pid = Pid::from_u32(std::process::id());
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        SystemProbe { sys, pid }
    }
}

impl MemoryProbe for SystemProbe {
    fn memory_bytes(&mut self) -> u64 {
        #[cfg(feature = "perf-tracing")]
        let _probe_span = tracing::debug_span!("probe.refresh").entered();

        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        self.sys.process(self.pid).map(|p| p.memory()).unwrap_or(0)
    }
}
