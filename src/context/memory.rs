use crate::config::ReleaseContext;
use crate::context::ContextStore;
use crate::error::{Result, VcError};

/// In-memory context store for tests
///
/// Keeps the last flushed snapshot separately from the working copy, so a
/// test can tell what would have reached the disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    context: ReleaseContext,
    flushed: Option<ReleaseContext>,
    flush_count: usize,
    fail_flush: bool,
}

impl MemoryStore {
    /// Create a store holding `context`
    pub fn new(context: ReleaseContext) -> Self {
        MemoryStore {
            context,
            ..MemoryStore::default()
        }
    }

    /// Make every subsequent flush fail
    pub fn fail_on_flush(mut self) -> Self {
        self.fail_flush = true;
        self
    }

    /// The context as of the last successful flush
    pub fn flushed(&self) -> Option<&ReleaseContext> {
        self.flushed.as_ref()
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }
}

impl ContextStore for MemoryStore {
    fn get(&self) -> &ReleaseContext {
        &self.context
    }

    fn set(&mut self) -> &mut ReleaseContext {
        &mut self.context
    }

    fn flush(&mut self) -> Result<()> {
        if self.fail_flush {
            return Err(VcError::context("flush refused by memory store"));
        }
        self.flushed = Some(self.context.clone());
        self.flush_count += 1;
        Ok(())
    }
}
