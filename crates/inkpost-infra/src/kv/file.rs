//! File-backed key-value storage - one file per key inside a data directory.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use inkpost_core::ports::{KeyValueStore, KvError};

/// Durable key-value store rooted at a directory.
///
/// Writes go to a uniquely named temporary sibling file which is then renamed
/// over the target, so a reader never observes a half-written value and two
/// writers never share a temporary file. There is no locking between processes:
/// the last writer wins.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KvError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| KvError::Io(format!("{}: {}", self.root.display(), e)))?;

        let root = self.root.clone();
        let prefix = format!(".{}.", key);
        let contents = value.as_bytes().to_vec();
        tokio::task::spawn_blocking(move || write_atomically(&root, &prefix, &contents, &path))
            .await
            .map_err(|e| KvError::Io(format!("write task failed: {}", e)))??;

        tracing::debug!(key = %key, bytes = value.len(), "Value written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KvError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KvError::Io(format!("{}: {}", path.display(), e))),
        }
    }
}

fn write_atomically(root: &Path, prefix: &str, contents: &[u8], path: &Path) -> Result<(), KvError> {
    let mut tmp = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".tmp")
        .tempfile_in(root)
        .map_err(|e| KvError::Io(format!("{}: {}", root.display(), e)))?;

    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| KvError::Io(format!("{}: {}", tmp.path().display(), e)))?;
    tmp.persist(path)
        .map_err(|e| KvError::Io(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
