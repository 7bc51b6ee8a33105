use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{Level, debug, span};

/// Chunk size for the streaming comparison.
const COMPARE_CHUNK_SIZE: usize = 8192;

/// Compare two files byte-for-byte.
///
/// Both files are read fully in fixed-size chunks; the comparison stops at
/// the first differing byte or when one file ends before the other. There is
/// no size or mtime shortcut, so a pair is only reported equal when every
/// byte matches.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or read, e.g. because it
/// vanished between enumeration and comparison.
pub fn files_identical(a: &Path, b: &Path) -> Result<bool> {
    let span = span!(Level::DEBUG, "files_identical", a = %a.display(), b = %b.display());
    let _guard = span.enter();

    let mut reader_a = open(a)?;
    let mut reader_b = open(b)?;

    let mut buf_a = [0u8; COMPARE_CHUNK_SIZE];
    let mut buf_b = [0u8; COMPARE_CHUNK_SIZE];

    loop {
        let n_a = read_full(&mut reader_a, &mut buf_a)
            .with_context(|| format!("Failed to read {}", a.display()))?;
        let n_b = read_full(&mut reader_b, &mut buf_b)
            .with_context(|| format!("Failed to read {}", b.display()))?;

        if n_a != n_b || buf_a[..n_a] != buf_b[..n_b] {
            debug!("Files differ");
            return Ok(false);
        }
        if n_a == 0 {
            debug!("Files are identical");
            return Ok(true);
        }
    }
}

/// Open a file for buffered reading.
fn open(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Read until the buffer is full or the reader hits EOF, returning the byte
/// count. Plain `read` may return short counts, which would desynchronize
/// the two sides.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}
