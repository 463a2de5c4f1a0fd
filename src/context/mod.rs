//! Persisted context store
//!
//! The tag engine and the apply protocol never touch the context file
//! directly. They read and mutate a [`ReleaseContext`] through the
//! [`ContextStore`] trait and ask the store to flush once, at the end of a
//! successful run.
//!
//! - [file::FileStore]: the TOML document on disk
//! - [memory::MemoryStore]: an in-memory store for tests

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::ReleaseContext;
use crate::error::Result;

/// Typed access to the persisted release context
pub trait ContextStore {
    /// Current in-memory view of the context
    fn get(&self) -> &ReleaseContext;

    /// Mutable view; changes are only durable after [`ContextStore::flush`]
    fn set(&mut self) -> &mut ReleaseContext;

    /// Write the whole context to durable storage
    fn flush(&mut self) -> Result<()>;
}
