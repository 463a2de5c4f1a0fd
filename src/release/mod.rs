//! Release tag state machine
//!
//! - `strategy` - which version to tag next (`t`, `inc`, `new`)
//! - `engine` - resolves a strategy against the stored version and applies it
//! - `apply` - tag, push, persist
//! - `mode` - the dry-run switch

pub mod apply;
pub mod engine;
pub mod mode;
pub mod strategy;

pub use apply::{apply, ApplyOutcome};
pub use engine::TagEngine;
pub use mode::{effective_dry_run, Mode};
pub use strategy::{
    plain_alias_increments, resolve, ExplicitRequest, PlainRequest, Resolved, Source, Strategy,
    VersionFields,
};
