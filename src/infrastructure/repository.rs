//! Saying persistence
//!
//! The store is mirrored to one JSON file per saying plus a `lastId.txt`
//! counter file under `<root>/wiseSaying/`. When no data directory is
//! configured the no-op repository keeps the app purely in memory.

use crate::domain::WiseSaying;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// A record file that could not be read or parsed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub file_name: String,
    pub message: String,
}

/// Result of scanning the data directory at startup.
///
/// Loaded sayings come back in directory-enumeration order, which is not
/// guaranteed to match the original insertion order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub sayings: Vec<WiseSaying>,
    pub last_id: i64,
    pub failures: Vec<LoadFailure>,
}

/// Durable mirror of the saying store.
pub trait SayingRepository {
    /// Load all persisted sayings and the id counter. Individual files
    /// that fail to load are reported in the result, never fatal.
    fn load_all(&self) -> Result<LoadReport>;

    /// Write or overwrite `<id>.json` for the saying.
    fn save(&self, saying: &WiseSaying) -> Result<()>;

    /// Remove `<id>.json`; no-op when the file is absent.
    fn delete(&self, id: i64) -> Result<()>;

    /// Overwrite `lastId.txt` with the counter value.
    fn save_last_id(&self, last_id: i64) -> Result<()>;
}

/// Repository used when no data directory is configured. Every method is
/// a no-op and nothing is loaded at startup.
#[derive(Debug, Default)]
pub struct NullRepository;

impl SayingRepository for NullRepository {
    fn load_all(&self) -> Result<LoadReport> {
        Ok(LoadReport::default())
    }

    fn save(&self, _saying: &WiseSaying) -> Result<()> {
        Ok(())
    }

    fn delete(&self, _id: i64) -> Result<()> {
        Ok(())
    }

    fn save_last_id(&self, _last_id: i64) -> Result<()> {
        Ok(())
    }
}

/// File system implementation keeping one JSON file per saying.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    dir: PathBuf,
}

impl FileSystemRepository {
    /// Open the `wiseSaying` directory under `root`, creating it and the
    /// counter file (content `0`) when missing.
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join("wiseSaying");
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let repo = FileSystemRepository { dir };
        if !repo.counter_path().exists() {
            fs::write(repo.counter_path(), "0")?;
        }

        Ok(repo)
    }

    fn counter_path(&self) -> PathBuf {
        self.dir.join("lastId.txt")
    }

    fn saying_path(&self, id: i64) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    /// Read the counter file. Unparseable content falls back to zero.
    fn read_counter(&self) -> Result<i64> {
        let text = fs::read_to_string(self.counter_path())?;
        Ok(text.trim().parse().unwrap_or(0))
    }

    fn read_saying(path: &Path) -> Result<WiseSaying> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl SayingRepository for FileSystemRepository {
    fn load_all(&self) -> Result<LoadReport> {
        let mut report = LoadReport {
            last_id: self.read_counter()?,
            ..LoadReport::default()
        };

        for entry in fs::read_dir(&self.dir)? {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match Self::read_saying(&path) {
                Ok(saying) => report.sayings.push(saying),
                Err(e) => report.failures.push(LoadFailure {
                    file_name: entry.file_name().to_string_lossy().into_owned(),
                    message: e.to_string(),
                }),
            }
        }

        Ok(report)
    }

    fn save(&self, saying: &WiseSaying) -> Result<()> {
        let json = serde_json::to_string(saying)?;
        fs::write(self.saying_path(saying.id), json)?;
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let path = self.saying_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_last_id(&self, last_id: i64) -> Result<()> {
        fs::write(self.counter_path(), last_id.to_string())?;
        Ok(())
    }
}
