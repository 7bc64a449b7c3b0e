pub mod errors;
pub mod model;
pub mod storage;

pub use errors::StorageFailure;
pub use model::{FeedbackEntry, FeedbackRecord};
pub use storage::{Store, DEFAULT_DB_PATH};
