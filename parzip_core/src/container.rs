use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Suffix appended to a source name to form its container name.
pub const CONTAINER_SUFFIX: &str = ".zip";

/// Suffix appended when restoring a container whose name lacks
/// [`CONTAINER_SUFFIX`], so the output never collides with its input.
pub const RESTORED_SUFFIX: &str = ".out";

/// Container name for a source path: `report.txt` → `report.txt.zip`.
///
/// The suffix is appended, never substituted, which is what lets
/// [`restored_path`] recover the original name on the way back.
pub fn container_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(CONTAINER_SUFFIX);
    PathBuf::from(name)
}

/// Restored name for a container path: `report.txt.zip` → `report.txt`;
/// any other name gets [`RESTORED_SUFFIX`] appended.
pub fn restored_path(path: &Path) -> PathBuf {
    if let Some(s) = path.to_str() {
        if let Some(stripped) = s.strip_suffix(CONTAINER_SUFFIX) {
            if !stripped.is_empty() {
                return PathBuf::from(stripped);
            }
        }
        return PathBuf::from(format!("{s}{RESTORED_SUFFIX}"));
    }
    // Non-UTF-8 name: appending is always possible, stripping is not.
    let mut name = path.as_os_str().to_os_string();
    name.push(RESTORED_SUFFIX);
    PathBuf::from(name)
}

/// Write `records` to `path` as `[size: u64 LE][payload]`, one record per
/// block, in index order. Overwrites any existing file at `path`.
///
/// Zero-length records are written as an 8-byte size prefix with no payload;
/// the reader returns them as empty records.
pub fn write_records(path: &Path, records: &[Vec<u8>]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating container {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for record in records {
        out.write_all(&(record.len() as u64).to_le_bytes())?;
        out.write_all(record)?;
    }
    out.flush()
        .with_context(|| format!("flushing container {}", path.display()))?;
    Ok(())
}

/// Read every `[size: u64 LE][payload]` record from `path`, in order.
///
/// The reader peeks before committing to a record: an empty buffer at a
/// record boundary is a clean end of stream. A partial size prefix, or a
/// size prefix promising more bytes than the file still holds, is a fatal
/// format error — a record is never silently truncated.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<Vec<u8>>> {
    let file = File::open(path)
        .with_context(|| format!("opening container {}", path.display()))?;
    let total = file.metadata()?.len();
    let mut reader = BufReader::new(file);
    let mut records: Vec<Vec<u8>> = Vec::new();
    let mut consumed: u64 = 0;

    loop {
        if reader.fill_buf()?.is_empty() {
            break;
        }

        let mut size_buf = [0u8; 8];
        reader.read_exact(&mut size_buf).map_err(|err| {
            anyhow::anyhow!(
                "truncated record header in {} after {} record(s): {err}",
                path.display(),
                records.len()
            )
        })?;
        let size = u64::from_le_bytes(size_buf);
        consumed += 8;

        if size > total - consumed {
            anyhow::bail!(
                "truncated record in {}: header promises {size} bytes but only {} remain",
                path.display(),
                total - consumed
            );
        }

        let mut payload = vec![0u8; size as usize];
        reader
            .read_exact(&mut payload)
            .with_context(|| format!("reading {size} byte record from {}", path.display()))?;
        consumed += size;
        records.push(payload);
    }

    Ok(records)
}
