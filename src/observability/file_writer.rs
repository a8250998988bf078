//! Size-capped log file used as the tracing sink.
//!
//! Writes go to `<data dir>/shelfwise.log.json`. Once that file grows past
//! its cap it is renamed with a millisecond suffix and a fresh file is started;
//! only the few newest rolled copies are kept.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Default cap before the log is rolled over (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rolled logs kept next to the live one.
const MAX_BACKUP_FILES: usize = 3;

/// Mutex-guarded append handle that rolls itself over by size.
///
/// Shared behind an `Arc` so `tracing-subscriber` can hand it out as a
/// `MakeWriter`.
///
/// ```rust,no_run
/// use shelfwise::observability::FileWriter;
/// use std::path::PathBuf;
///
/// let log = FileWriter::new(PathBuf::from("/tmp/shelfwise.log.json"));
/// log.write_line(r#"{"message":"hello"}"#).unwrap();
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    /// Opened on first write.
    writer: Mutex<Option<std::fs::File>>,
    max_bytes: u64,
}

impl FileWriter {
    /// Nothing is opened until the first write, so construction never fails.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_bytes(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer that rotates once the file exceeds `max_bytes`.
    #[must_use]
    pub const fn with_max_bytes(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
            max_bytes,
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures and reports a poisoned lock as an I/O error.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        self.write_bytes(format!("{line}\n").as_bytes())
    }

    /// Appends `buf`, rolling the log over first when it has outgrown `max_bytes`.
    ///
    /// # Errors
    ///
    /// Same as [`write_line`](Self::write_line).
    pub fn write_bytes(&self, buf: &[u8]) -> std::io::Result<()> {
        let mut handle = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::other(format!("log writer lock poisoned: {e}")))?;

        if self.needs_rollover() {
            *handle = None;
            self.roll_over()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(std::io::Error::other("log file is not open"));
        };

        file.write_all(buf)?;
        file.flush()
    }

    fn needs_rollover(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    /// Moves the live log aside as `<stem>.json.<millis>` and prunes old copies.
    fn roll_over(&self) -> std::io::Result<()> {
        let millis = chrono::Utc::now().timestamp_millis();
        let rolled = self.file_path.with_extension(format!("json.{millis}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &rolled)?;
        }

        self.prune_rolled()
    }

    /// Keeps the newest `MAX_BACKUP_FILES` rolled logs. Removal failures are skipped.
    fn prune_rolled(&self) -> std::io::Result<()> {
        let Some(dir) = self.file_path.parent() else {
            return Err(std::io::Error::other("log path has no parent directory"));
        };
        let Some(stem) = self.file_path.file_stem().and_then(|s| s.to_str()) else {
            return Err(std::io::Error::other("log file name is not valid UTF-8"));
        };

        let mut rolled: Vec<(Option<std::time::SystemTime>, PathBuf)> = fs::read_dir(dir)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(stem) && name.contains(".json."))
            })
            .map(|path| (fs::metadata(&path).and_then(|m| m.modified()).ok(), path))
            .collect();

        rolled.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, path) in rolled.into_iter().skip(MAX_BACKUP_FILES) {
            if let Err(e) = fs::remove_file(&path) {
                tracing::trace!(path = %path.display(), error = %e, "could not prune rolled log");
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl std::io::Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shelfwise.log.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_when_over_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shelfwise.log.json");
        let writer = FileWriter::with_max_bytes(path.clone(), 8);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().contains(".json."))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn usable_as_io_writer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let writer = FileWriter::new(path.clone());

        (&writer).write_all(b"line\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "line\n");
    }
}
