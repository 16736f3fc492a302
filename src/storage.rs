//! Flat JSON tables inside a capability-scoped data directory.
//!
//! Each table is one file holding a JSON array of rows. Reads load the whole
//! file; writes replace it through a temporary file and a rename so readers
//! never observe a half-written table. A missing file reads as empty.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while reading or writing a table file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The data directory could not be created or opened.
    #[error("failed to open data directory {path}: {source}")]
    OpenDir {
        /// Directory path as configured.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A table file could not be read or written.
    #[error("I/O error on table {table}: {source}")]
    Io {
        /// Table file name.
        table: &'static str,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A table file does not contain a valid JSON row array.
    #[error("malformed table {table}: {source}")]
    Decode {
        /// Table file name.
        table: &'static str,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// Rows could not be encoded.
    #[error("failed to encode table {table}: {source}")]
    Encode {
        /// Table file name.
        table: &'static str,
        /// Underlying encoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the directory holding every table file.
#[derive(Debug, Clone)]
pub struct DataDir {
    dir: Arc<Dir>,
    path: Utf8PathBuf,
}

impl DataDir {
    /// Creates `path` if needed and opens it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::OpenDir`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> Result<Self, StorageError> {
        let open_error = |source| StorageError::OpenDir {
            path: path.to_owned(),
            source,
        };
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(open_error)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(open_error)?;
        Ok(Self {
            dir: Arc::new(dir),
            path: path.to_owned(),
        })
    }

    /// Returns the directory path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns a typed table stored in `file_name`.
    #[must_use]
    pub fn table<T>(&self, file_name: &'static str) -> JsonTable<T> {
        JsonTable {
            dir: Arc::clone(&self.dir),
            file_name,
            rows: PhantomData,
        }
    }
}

/// A table of `T` rows persisted as one JSON array.
///
/// The table does not lock. Callers serialize read-modify-write sequences.
#[derive(Debug)]
pub struct JsonTable<T> {
    dir: Arc<Dir>,
    file_name: &'static str,
    rows: PhantomData<fn() -> T>,
}

impl<T> JsonTable<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Reads every row. A missing file yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on read failure or
    /// [`StorageError::Decode`] when the file is not a JSON row array.
    pub fn load(&self) -> Result<Vec<T>, StorageError> {
        let contents = match self.dir.read_to_string(self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    table: self.file_name,
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| StorageError::Decode {
            table: self.file_name,
            source,
        })
    }

    /// Replaces the table contents with `rows`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] when a row cannot be encoded or
    /// [`StorageError::Io`] when the file cannot be replaced.
    pub fn save(&self, rows: &[T]) -> Result<(), StorageError> {
        let encoded = serde_json::to_vec_pretty(rows).map_err(|source| StorageError::Encode {
            table: self.file_name,
            source,
        })?;
        let staging = format!(".{}.tmp", self.file_name);
        let io_error = |source| StorageError::Io {
            table: self.file_name,
            source,
        };
        self.dir.write(&staging, encoded).map_err(io_error)?;
        self.dir
            .rename(&staging, &self.dir, self.file_name)
            .map_err(io_error)
    }
}
