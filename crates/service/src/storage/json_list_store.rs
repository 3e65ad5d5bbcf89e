use std::{io, marker::PhantomData, path::{Path, PathBuf}};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::{debug, error};

use crate::errors::ServiceError;

/// JSON file-backed ordered list store.
///
/// The file holds the entire collection as a JSON array. Nothing is cached:
/// every `load` reads the whole file and every `save` overwrites it. There is
/// no lock around a load/mutate/save cycle, so overlapping writers race and
/// the last save wins.
#[derive(Debug, Clone)]
pub struct JsonListStore<T> {
    file_path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonListStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the store at `path`. Creates the parent directory, and an empty
    /// array file if none exists yet. An existing file is left untouched.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| unavailable(&file_path, e))?;
        }
        let store = Self { file_path, _record: PhantomData };
        if fs::metadata(&store.file_path).await.is_err() {
            store.save(&[]).await?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read and decode the whole collection.
    pub async fn load(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = fs::read(&self.file_path).await.map_err(|e| {
            error!(path = %self.file_path.display(), error = %e, "read data file failed");
            unavailable(&self.file_path, e)
        })?;
        let items: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| {
            error!(path = %self.file_path.display(), error = %e, "decode data file failed");
            ServiceError::CorruptData(format!("{}: {e}", self.file_path.display()))
        })?;
        debug!(path = %self.file_path.display(), count = items.len(), "collection loaded");
        Ok(items)
    }

    /// Encode the whole collection and overwrite the file in place.
    pub async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(items)
            .map_err(|e| ServiceError::CorruptData(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| {
            error!(path = %self.file_path.display(), error = %e, "write data file failed");
            unavailable(&self.file_path, e)
        })?;
        debug!(path = %self.file_path.display(), count = items.len(), "collection saved");
        Ok(())
    }
}

fn unavailable(path: &Path, e: io::Error) -> ServiceError {
    ServiceError::Unavailable(format!("{}: {e}", path.display()))
}
