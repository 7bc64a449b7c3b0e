use crate::errors::{Result, StorageFailure, StorageOp};
use crate::model::FeedbackEntry;
use crate::storage::schema;
use rusqlite::{params, Connection, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "feedback.db";

/// How long a connection waits on SQLite's file lock before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Append-only handle on the `feedback_log` table.
///
/// Holds no connection: every call opens one, runs a single statement and
/// closes it again, so the handle is cheap to clone and share across threads.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Store {
    /// Opens (creating if needed) the database at `path` and ensures the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_DB_PATH)
    }

    pub fn open_with_busy_timeout(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout,
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Idempotent: an existing table and its rows are left untouched.
    pub fn init_schema(&self) -> Result<()> {
        self.with_connection(StorageOp::InitSchema, |conn| conn.execute_batch(schema::DDL))?;
        tracing::debug!(
            event = "feedback.schema.ensured",
            path = %self.path.display(),
            table = schema::TABLE
        );
        Ok(())
    }

    /// Inserts one row and commits it before returning.
    ///
    /// The assigned id is not exposed; failures are returned, never retried.
    pub fn append(&self, entry: &FeedbackEntry) -> Result<()> {
        let row_id = self.with_connection(StorageOp::Append, |conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            tx.execute(
                schema::INSERT,
                params![
                    entry.use_case,
                    entry.user_prompt,
                    entry.model_a,
                    entry.model_b,
                    entry.model_a_response,
                    entry.model_b_response,
                    entry.feedback,
                    entry.feedback_motivation,
                ],
            )?;
            let row_id = tx.last_insert_rowid();
            tx.commit()?;
            Ok(row_id)
        })?;

        tracing::debug!(
            event = "feedback.appended",
            path = %self.path.display(),
            row_id,
            use_case = %entry.use_case
        );
        Ok(())
    }

    /// Runs `f` on a connection scoped to this call.
    ///
    /// On failure inside `f` the connection is dropped, which closes it and
    /// rolls back any open transaction.
    fn with_connection<T>(
        &self,
        op: StorageOp,
        f: impl FnOnce(&mut Connection) -> rusqlite::Result<T>,
    ) -> Result<T> {
        let fail = |op: StorageOp, e: rusqlite::Error| StorageFailure::new(op, &self.path, e);

        let mut conn = Connection::open(&self.path).map_err(|e| fail(StorageOp::Open, e))?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(|e| fail(StorageOp::Open, e))?;

        let out = f(&mut conn).map_err(|e| fail(op, e))?;

        conn.close().map_err(|(_, e)| fail(StorageOp::Close, e))?;
        Ok(out)
    }
}
