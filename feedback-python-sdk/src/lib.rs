use feedback_core::{FeedbackEntry, Store};
use pyo3::create_exception;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

create_exception!(
    _native,
    StorageFailure,
    PyRuntimeError,
    "Raised when the feedback database cannot be opened or written."
);

fn storage_failure(e: feedback_core::StorageFailure) -> PyErr {
    StorageFailure::new_err(e.to_string())
}

#[pyclass]
/// Append-only feedback log backed by a local SQLite file.
struct Database {
    store: Store,
}

#[pymethods]
impl Database {
    #[new]
    #[pyo3(signature = (db_name="feedback.db"))]
    /// Open the log, creating the file and `feedback_log` table if needed.
    ///
    /// Args:
    ///     db_name (str): Path of the SQLite file. Defaults to 'feedback.db'.
    ///
    /// Raises:
    ///     StorageFailure: If the file or table cannot be created.
    fn new(db_name: &str, py: Python<'_>) -> PyResult<Self> {
        let store = py
            .allow_threads(|| Store::open(db_name))
            .map_err(storage_failure)?;
        Ok(Database { store })
    }

    #[getter]
    fn db_name(&self) -> String {
        self.store.path().display().to_string()
    }

    /// Record one comparison between two model responses.
    ///
    /// Raises:
    ///     StorageFailure: If the row cannot be committed.
    #[allow(clippy::too_many_arguments)]
    fn log_feedback(
        &self,
        use_case: String,
        user_prompt: String,
        model_a: String,
        model_b: String,
        model_a_response: String,
        model_b_response: String,
        feedback: String,
        feedback_motivation: String,
        py: Python<'_>,
    ) -> PyResult<()> {
        let entry = FeedbackEntry {
            use_case,
            user_prompt,
            model_a,
            model_b,
            model_a_response,
            model_b_response,
            feedback,
            feedback_motivation,
        };
        self.append(entry, py)
    }

    /// Record one comparison given as a dict with the eight feedback keys.
    ///
    /// Raises:
    ///     ValueError: If a key is missing, unknown, or not a string.
    ///     StorageFailure: If the row cannot be committed.
    fn log_record(&self, record: PyObject, py: Python<'_>) -> PyResult<()> {
        let entry: FeedbackEntry = pythonize::depythonize(record.bind(py))
            .map_err(|e| PyValueError::new_err(format!("Invalid feedback record: {}", e)))?;
        self.append(entry, py)
    }
}

impl Database {
    fn append(&self, entry: FeedbackEntry, py: Python<'_>) -> PyResult<()> {
        let store = &self.store;
        py.allow_threads(|| store.append(&entry))
            .map_err(storage_failure)
    }
}

#[pymodule]
#[pyo3(name = "_native")]
fn native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Database>()?;
    m.add("StorageFailure", m.py().get_type::<StorageFailure>())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::types::PyDict;
    use std::path::Path;

    fn stored_rows(path: &Path) -> Vec<Vec<String>> {
        let conn = rusqlite::Connection::open(path).unwrap();
        let mut stmt = conn
            .prepare(
                "SELECT use_case, user_prompt, model_a, model_b, model_a_response,
                        model_b_response, feedback, feedback_motivation
                 FROM feedback_log ORDER BY id",
            )
            .unwrap();
        let rows = stmt
            .query_map([], |row| (0..8usize).map(|i| row.get::<_, String>(i)).collect())
            .unwrap()
            .collect::<Result<Vec<Vec<String>>, _>>()
            .unwrap();
        rows
    }

    #[test]
    fn log_feedback_stores_arguments_in_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.db");

        Python::with_gil(|py| {
            let db = Database::new(path.to_str().unwrap(), py).unwrap();
            assert_eq!(db.db_name(), path.display().to_string());
            db.log_feedback(
                "qa-chatbot".into(),
                "What's the weather?".into(),
                "gpt-x".into(),
                "llama-y".into(),
                "Sunny today.".into(),
                "I don't know.".into(),
                "A".into(),
                "more factual".into(),
                py,
            )
            .unwrap();
        });

        assert_eq!(
            stored_rows(&path),
            vec![vec![
                "qa-chatbot",
                "What's the weather?",
                "gpt-x",
                "llama-y",
                "Sunny today.",
                "I don't know.",
                "A",
                "more factual",
            ]]
        );
    }

    #[test]
    fn log_record_reads_dict_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.db");

        Python::with_gil(|py| {
            let db = Database::new(path.to_str().unwrap(), py).unwrap();
            let record = PyDict::new(py);
            for (key, value) in [
                ("use_case", "summarize"),
                ("user_prompt", "tl;dr"),
                ("model_a", "m1"),
                ("model_b", "m2"),
                ("model_a_response", "short"),
                ("model_b_response", "long"),
                ("feedback", "B"),
                ("feedback_motivation", ""),
            ] {
                record.set_item(key, value).unwrap();
            }
            db.log_record(record.into_any().unbind(), py).unwrap();
        });

        let rows = stored_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "summarize");
        assert_eq!(rows[0][5], "long");
        assert_eq!(rows[0][7], "");
    }

    #[test]
    fn log_record_missing_key_is_value_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.db");

        Python::with_gil(|py| {
            let db = Database::new(path.to_str().unwrap(), py).unwrap();
            let record = PyDict::new(py);
            record.set_item("use_case", "only one").unwrap();

            let err = db.log_record(record.into_any().unbind(), py).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });

        assert!(stored_rows(&path).is_empty());
    }

    #[test]
    fn unwritable_location_raises_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("feedback.db");

        Python::with_gil(|py| {
            let err = match Database::new(path.to_str().unwrap(), py) {
                Ok(_) => panic!("opened a database in a missing directory"),
                Err(e) => e,
            };
            assert!(err.is_instance_of::<StorageFailure>(py));
            assert!(err.is_instance_of::<PyRuntimeError>(py));
        });
    }

    #[test]
    fn append_after_location_vanishes_raises_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("logs");
        std::fs::create_dir(&sub).unwrap();
        let path = sub.join("feedback.db");

        Python::with_gil(|py| {
            let db = Database::new(path.to_str().unwrap(), py).unwrap();
            std::fs::remove_dir_all(&sub).unwrap();

            let err = db
                .log_feedback(
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    "A".into(),
                    String::new(),
                    py,
                )
                .unwrap_err();
            assert!(err.is_instance_of::<StorageFailure>(py));
        });
    }
}
