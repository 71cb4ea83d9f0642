//! Loading and saving buffers as plain text files
//!
//! One buffer line per `\n`-terminated record, trimmed of surrounding
//! whitespace on both load and save. Saves go through a sibling
//! `<path>.swp` file that is flushed, synced and renamed over the target, so
//! an interrupted save never leaves a half-written file at `path`.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the target path while a save is in progress
pub const SWAP_SUFFIX: &str = ".swp";

/// Path of the temporary file used while saving `path`
pub fn swap_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(SWAP_SUFFIX);
    PathBuf::from(name)
}

/// Read a file into lines
///
/// Each record is trimmed of leading and trailing whitespace. A final record
/// without a terminator is kept. Bytes that are not valid UTF-8 become
/// U+FFFD instead of failing the read.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut record = Vec::new();

    loop {
        record.clear();
        if reader.read_until(b'\n', &mut record)? == 0 {
            break;
        }
        lines.push(String::from_utf8_lossy(&record).trim().to_string());
    }

    tracing::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write lines to `path` through a swap file
///
/// On failure the swap file is removed and `path` keeps its previous content.
pub fn write_lines_atomic<S: AsRef<str>>(path: &Path, lines: &[S]) -> io::Result<()> {
    let swap = swap_path(path);

    let result = write_swap(&swap, lines)
        .and_then(|()| replace_with(&swap, path, |from, to| fs::rename(from, to)));
    if let Err(e) = result {
        if swap.exists() {
            if let Err(cleanup) = fs::remove_file(&swap) {
                tracing::warn!("Failed to remove {}: {}", swap.display(), cleanup);
            }
        }
        return Err(e);
    }

    tracing::debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

fn write_swap<S: AsRef<str>>(swap: &Path, lines: &[S]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(swap)?);
    for line in lines {
        writer.write_all(line.as_ref().trim().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

/// Move `swap` onto `path`
///
/// Some platforms refuse to rename over an existing file. When the first
/// rename fails and `path` exists, the old file is removed and the rename is
/// retried once.
fn replace_with<F>(swap: &Path, path: &Path, mut rename: F) -> io::Result<()>
where
    F: FnMut(&Path, &Path) -> io::Result<()>,
{
    match rename(swap, path) {
        Ok(()) => Ok(()),
        Err(e) if path.exists() => {
            tracing::debug!(
                "Rename onto {} failed ({}), removing it and retrying",
                path.display(),
                e
            );
            fs::remove_file(path)?;
            rename(swap, path)
        }
        Err(e) => Err(e),
    }
}
