pub mod cli;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod git;
pub mod release;
pub mod shortcuts;
pub mod ui;

pub use error::{Result, VcError};
