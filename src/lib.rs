// task-cli - Track short text tasks in a local JSON file

pub mod error;
pub mod filter;
pub mod models;
pub mod output;
pub mod store;
pub mod tracker;

// Re-export main types for convenience
pub use error::{StorageError, TaskError};
pub use filter::StatusFilter;
pub use models::{Status, Task, next_id, now};
pub use output::{Format, Listing, Outcome};
pub use store::{Store, TASK_FILE};
pub use tracker::Tracker;
