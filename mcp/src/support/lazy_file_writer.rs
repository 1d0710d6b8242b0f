use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

/// Trace sink that does not touch the filesystem until the first event is written.
///
/// A server started at the default level never creates a log file. If the
/// file is removed while the server runs, the next write creates it again.
#[derive(Clone)]
pub struct LazyFileWriter {
    path: PathBuf,
    file: Arc<Mutex<Option<File>>>,
}

impl LazyFileWriter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            file: Arc::new(Mutex::new(None)),
        }
    }
}

/// Per-event writer handed out by [`LazyFileWriter`]
pub struct LazyWriter {
    path: PathBuf,
    file: Arc<Mutex<Option<File>>>,
}

impl LazyWriter {
    fn lock(&self) -> io::Result<MutexGuard<'_, Option<File>>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("trace log mutex poisoned"))
    }

    fn open(path: &Path) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }
}

impl Write for LazyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.lock()?;

        if guard.is_none() || !self.path.exists() {
            *guard = Some(Self::open(&self.path)?);
        }

        let written = match guard.as_mut().map(|file| file.write(buf)) {
            Some(Ok(written)) => written,
            // stale handle
            _ => {
                let mut file = Self::open(&self.path)?;
                let written = file.write(buf)?;
                *guard = Some(file);
                written
            },
        };
        drop(guard);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self.lock()?;

        if self.path.exists() {
            if matches!(guard.as_mut().map(File::flush), Some(Err(_))) {
                *guard = Some(Self::open(&self.path)?);
            }
        } else {
            *guard = None;
        }
        drop(guard);
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LazyFileWriter {
    type Writer = LazyWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LazyWriter {
            path: self.path.clone(),
            file: Arc::clone(&self.file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_created_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.log");
        let writer = LazyFileWriter::new(path.clone());

        let mut event = writer.make_writer();
        assert!(!path.exists());

        event.write_all(b"first\n").unwrap();
        event.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\n");
    }

    #[test]
    fn test_file_recreated_after_removal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.log");
        let writer = LazyFileWriter::new(path.clone());

        writer.make_writer().write_all(b"one\n").unwrap();
        std::fs::remove_file(&path).unwrap();

        let mut event = writer.make_writer();
        event.flush().unwrap();
        event.write_all(b"two\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two\n");
    }
}
