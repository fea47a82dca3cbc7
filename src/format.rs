const MIB: u64 = 1024 * 1024;

/// Whole-MiB display value for a byte count.
///
/// Truncating division, not rounding: 1_048_575 bytes renders as "0 MiB".
pub fn format_mib(bytes: u64) -> String {
    format!("{} MiB", bytes / MIB)
}
