use crate::config::{self, ReleaseContext};
use crate::context::ContextStore;
use crate::error::{Result, VcError};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Context store backed by a TOML document on disk
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    context: ReleaseContext,
}

impl FileStore {
    /// Open the context document at `path`.
    ///
    /// A missing document is bootstrapped with the defaults and written
    /// immediately. A document that exists but cannot be read or parsed is
    /// an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let context = config::load_context(&path).map_err(|e| {
            VcError::context(format!("cannot read {}: {}", path.display(), e))
        })?;

        match context {
            Some(context) => {
                debug!("Loaded context from {}", path.display());
                Ok(FileStore { path, context })
            }
            None => {
                info!("No context at {}, writing defaults", path.display());
                let mut store = FileStore {
                    path,
                    context: ReleaseContext::default(),
                };
                store.flush()?;
                Ok(store)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContextStore for FileStore {
    fn get(&self) -> &ReleaseContext {
        &self.context
    }

    fn set(&mut self) -> &mut ReleaseContext {
        &mut self.context
    }

    fn flush(&mut self) -> Result<()> {
        config::write_context(&self.path, &self.context).map_err(|e| {
            VcError::context(format!("cannot write {}: {}", self.path.display(), e))
        })?;
        debug!("Wrote context to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;
    use std::fs;

    #[test]
    fn test_open_bootstraps_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".vc.toml");

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(), &ReleaseContext::default());
        assert!(path.exists());
    }

    #[test]
    fn test_flush_round_trips_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".vc.toml");

        let mut store = FileStore::open(&path).unwrap();
        store
            .set()
            .set_current_version(&Version::new(0, 1, 0, "alpha", 2));
        store.flush().unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get().current_version().to_string(),
            "v0.1.0-alpha.2"
        );
    }

    #[test]
    fn test_unparseable_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".vc.toml");
        fs::write(&path, "dry_mode = [").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(err.to_string().starts_with("Context error: cannot read"));
    }

    #[test]
    fn test_flush_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(".vc.toml");

        assert!(FileStore::open(&path).is_err());
    }
}
