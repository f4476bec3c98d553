//! Persistence surface for analysis history.
//!
//! Everything is stored as whole string blobs under fixed keys. `KvStore` is the
//! only seam backends implement; `history::AnalysisStore` holds the logic.

use async_trait::async_trait;
use thiserror::Error;

pub mod file;
pub mod history;
pub mod memory;
pub mod redis_kv;

pub use file::FileKvStore;
pub use history::AnalysisStore;
pub use memory::MemoryKvStore;
pub use redis_kv::RedisKvStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Minimal key-value persistence. `get` hands back raw bytes; decoding is the
/// caller's business. `set` replaces the whole value; a failed `set` must leave
/// the previous value readable.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
