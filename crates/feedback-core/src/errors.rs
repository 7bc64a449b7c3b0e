//! The single error kind surfaced by the feedback store.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which store step was running when SQLite gave up.
///
/// Context only: callers handle every failure the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Open,
    InitSchema,
    Append,
    Close,
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StorageOp::Open => "open",
            StorageOp::InitSchema => "init schema",
            StorageOp::Append => "append",
            StorageOp::Close => "close",
        };
        f.write_str(s)
    }
}

/// The durable write path could not complete.
///
/// Covers open/create, schema creation, insert and commit failures alike.
#[derive(Debug, Error)]
#[error("feedback storage failure ({op}) at {}", .path.display())]
pub struct StorageFailure {
    op: StorageOp,
    path: PathBuf,
    #[source]
    source: rusqlite::Error,
}

impl StorageFailure {
    pub fn new(op: StorageOp, path: &Path, source: rusqlite::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn op(&self) -> StorageOp {
        self.op
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub type Result<T> = std::result::Result<T, StorageFailure>;
