//! User interface module - terminal control and formatting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Terminal control

use console::Term;

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_branches, display_dry_mode_notice, display_dry_switch, display_error,
    display_incremented, display_new, display_planned_command, display_status, display_success,
};

/// Clears the terminal before the repository overview.
///
/// Does nothing when stdout is not a terminal, so piped output stays clean.
pub fn clear_screen() -> Result<()> {
    let term = Term::stdout();
    if term.is_term() {
        term.clear_screen()?;
    }
    Ok(())
}
