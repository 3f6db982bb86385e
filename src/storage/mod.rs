pub mod json_store;
pub mod memory;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over durable key-value backends holding the tracker's
/// persisted records (entry sequence, budget ceiling, theme preference).
///
/// All operations are synchronous; callers rely on `set` being durable by
/// the time it returns.
pub trait StateStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

pub use json_store::{JsonFileStore, DATA_DIR_ENV};
pub use memory::MemoryStore;
