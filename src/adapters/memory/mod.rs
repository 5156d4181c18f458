//! Conversation-memory service adapters.

mod http_memory_store;
mod noop;

pub use http_memory_store::{HttpMemoryStore, MemoryStoreConfig};
pub use noop::NoopMemoryStore;
