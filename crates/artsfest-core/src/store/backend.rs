use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

/// Raw text storage keyed by string.
///
/// Implementations must be shareable across threads: the scoreboard poller
/// reads from a background task while the foreground may write.
pub trait StorageBackend: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, contents: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key under a data directory.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory: {}", data_dir.display())
        })?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store file: {}", key))?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        std::fs::write(self.key_path(key), contents)
            .with_context(|| format!("Failed to write store file: {}", key))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove store file: {}", key))?;
        }
        Ok(())
    }
}

/// In-process map, used by tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Unique scratch directory under the system temp dir.
    pub(crate) fn scratch_dir(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "artsfest-test-{}-{}-{}",
            name,
            std::process::id(),
            n
        ))
    }

    /// Memory backend that counts writes, for asserting "no writes happened".
    #[derive(Default, Clone)]
    pub(crate) struct CountingBackend {
        inner: Arc<MemoryBackend>,
        pub(crate) writes: Arc<AtomicUsize>,
    }

    impl CountingBackend {
        pub(crate) fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl StorageBackend for CountingBackend {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, contents: &str) -> Result<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.write(key, contents)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.remove(key)
        }
    }

    /// Backend whose writes always fail.
    pub(crate) struct FailingBackend;

    impl StorageBackend for FailingBackend {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("disk unavailable"))
        }

        fn write(&self, _key: &str, _contents: &str) -> Result<()> {
            Err(anyhow!("disk full"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(anyhow!("disk unavailable"))
        }
    }

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("teams").unwrap(), None);
        backend.write("teams", "[]").unwrap();
        assert_eq!(backend.read("teams").unwrap().as_deref(), Some("[]"));
        backend.remove("teams").unwrap();
        assert_eq!(backend.read("teams").unwrap(), None);
    }

    #[test]
    fn test_file_backend_writes_one_file_per_key() {
        let dir = scratch_dir("file-backend");
        let backend = FileBackend::new(dir.clone()).unwrap();

        backend.write("points", r#"{"gold":3}"#).unwrap();
        assert!(dir.join("points.json").exists());
        assert_eq!(
            backend.read("points").unwrap().as_deref(),
            Some(r#"{"gold":3}"#)
        );

        backend.remove("points").unwrap();
        assert!(!dir.join("points.json").exists());
        // Removing again is fine
        backend.remove("points").unwrap();

        let _ = std::fs::remove_dir_all(dir);
    }
}
