//! Directory-backed key-value store.
//!
//! Each key maps to one `<key>.json` file inside a capability-scoped
//! directory. Writes go to a temporary sibling first and are renamed into
//! place, so a crash mid-write leaves the previous value readable.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::task::ports::{KeyValueResult, KeyValueStore, KeyValueStoreError};

const FILE_EXTENSION: &str = "json";

/// Key-value store persisting one file per key.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the directory cannot be created
    /// or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> KeyValueResult<Self> {
        let root = path.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(KeyValueStoreError::io)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(KeyValueStoreError::io)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

/// Accepts ASCII alphanumerics, `-`, `_` and non-leading `.`.
fn file_name_for(key: &str) -> KeyValueResult<String> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !valid {
        return Err(KeyValueStoreError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{FILE_EXTENSION}"))
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let file_name = file_name_for(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let file_name = file_name_for(key)?;
        let temp_name = format!(".{file_name}.tmp");
        self.dir
            .write(&temp_name, value)
            .map_err(KeyValueStoreError::io)?;
        self.dir
            .rename(&temp_name, &self.dir, &file_name)
            .map_err(KeyValueStoreError::io)
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        let file_name = file_name_for(key)?;
        match self.dir.remove_file(&file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueStoreError::io(err)),
        }
    }
}
