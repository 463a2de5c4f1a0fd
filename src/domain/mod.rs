//! Domain logic - pure release version rules independent of git and storage

pub mod slug;
pub mod version;

pub use version::{Increment, Version};
