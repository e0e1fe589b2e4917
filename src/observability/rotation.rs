//! Append-only line file with size-based rotation into numbered backups.
//!
//! When the next line would push the file past its size limit, the file is
//! shifted to `<name>.1`, `<name>.1` to `<name>.2`, and so on. The oldest
//! backup beyond the retention count is overwritten.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit before rotation (5 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of numbered backups kept.
pub const DEFAULT_BACKUPS: usize = 3;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    /// Opened lazily on first append and reopened after each rotation.
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `n`th backup, `1` being the most recent.
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if the limit would be exceeded.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotating, opening, or writing fails,
    /// or an `Other` error if the handle lock is poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        let current = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        let incoming = line.len() as u64 + 1;
        if current > 0 && current + incoming > self.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_lines_below_limit() {
        let dir = TempDir::new().unwrap();
        let file = RotatingFile::new(dir.path().join("trace.json"));
        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();
        assert_eq!(read(file.path()), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = TempDir::new().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 2);

        for line in ["first", "second", "third", "fourth"] {
            file.append_line(line).unwrap();
        }

        assert_eq!(read(file.path()), "fourth\n");
        assert_eq!(read(&file.backup_path(1)), "third\n");
        assert_eq!(read(&file.backup_path(2)), "second\n");
        assert!(!file.backup_path(3).exists());
    }

    #[test]
    fn oversized_line_still_written_to_empty_file() {
        let dir = TempDir::new().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 4, 1);
        file.append_line("longer than four").unwrap();
        assert_eq!(read(file.path()), "longer than four\n");
        assert!(!file.backup_path(1).exists());
    }
}
