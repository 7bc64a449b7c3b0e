pub mod schema;
pub mod store;

pub use store::{Store, DEFAULT_BUSY_TIMEOUT, DEFAULT_DB_PATH};
