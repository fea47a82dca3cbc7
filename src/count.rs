use std::io::{self, ErrorKind, Read};

use thiserror::Error;

/// Read-block size for the counting loop.
pub const BUF_SIZE: usize = 32 * 1024;

/// Byte that terminates a record in the input stream.
pub const LINE_SEP: u8 = b'\n';

/// Read failure surfaced mid-count. `lines` holds the separators seen before
/// the stream went bad; the caller decides whether a partial total means
/// anything.
#[derive(Debug, Error)]
#[error("read failed after {lines} lines: {source}")]
pub struct CountError {
    pub lines: u64,
    #[source]
    pub source: io::Error,
}

/// Counts line-separator bytes in `reader` without buffering the whole input.
///
/// The total depends only on the bytes the stream yields, not on how the
/// stream splits them across reads. A final fragment with no trailing
/// separator is not counted as a line.
pub fn count_lines<R: Read>(mut reader: R) -> Result<u64, CountError> {
    #[cfg(feature = "perf-tracing")]
    let _count_span = tracing::debug_span!("count.lines").entered();

    let mut buf = [0u8; BUF_SIZE];
    let mut count: u64 = 0;

    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(count),
            Ok(filled) => count += bytecount::count(&buf[..filled], LINE_SEP) as u64,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(CountError { lines: count, source }),
        }
    }
}
