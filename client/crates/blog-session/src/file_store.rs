use crate::{CredentialStore, SessionError, SessionResult, StoredKeys};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Distinguishes temp files of concurrent saves within one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Session persisted as a JSON object in a single file.
///
/// Every process pointing at the same path shares one store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames a corrupted file to `<name>.corrupted.<timestamp>` so the next
    /// save starts clean.
    fn backup_corrupted(&self) -> SessionResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup_name = self.path.as_os_str().to_owned();
        backup_name.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup_name);

        fs::rename(&self.path, &backup_path).map_err(SessionError::backup_failed)?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(backup_path)
    }

    /// Unique per save, so writers sharing the file never touch each
    /// other's temp file.
    fn temp_path(&self) -> PathBuf {
        let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".tmp.{}.{seq}", std::process::id()));
        PathBuf::from(name)
    }
}

impl CredentialStore for FileStore {
    /// A missing file is an empty store. A corrupted file is backed up and
    /// also read as empty.
    fn load(&self) -> SessionResult<StoredKeys> {
        if !self.path.exists() {
            return Ok(StoredKeys::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| SessionError::file_read(self.path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(StoredKeys::new());
        }

        match serde_json::from_str::<StoredKeys>(&contents) {
            Ok(keys) => Ok(keys),
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                if let Err(backup_err) = self.backup_corrupted() {
                    warn!("{backup_err}");
                }
                Ok(StoredKeys::new())
            }
        }
    }

    /// Write to a temp file, fsync, then rename over the real file so readers
    /// in other processes never observe a partial write.
    fn save(&self, keys: &StoredKeys) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();
        let json = serde_json::to_string_pretty(keys)?;

        {
            let mut file = open_private(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        debug!("Saved session to {:?}", self.path);
        Ok(())
    }
}

/// The file holds a bearer token, so it is readable by the owner only.
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::File::create(path)
}
