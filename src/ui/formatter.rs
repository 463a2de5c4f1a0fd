//! Pure formatting functions for UI output.
//!
//! Everything the tool prints about its own decisions goes through here;
//! output of the git subprocesses themselves is inherited and never touched.

use console::style;

use crate::git::{BranchListing, GitCommand};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Show a version reached by incrementing the stored one.
pub fn display_incremented(tag: &str) {
    println!("inc --> {}", style(tag).green().bold());
}

/// Show a version built from explicit flags.
pub fn display_new(tag: &str) {
    println!("new {}", style(tag).green().bold());
}

/// Show the current branch and the numbered branch listing.
pub fn display_branches(listing: &BranchListing) {
    println!("head: {}", listing.head.as_deref().unwrap_or("(none)"));
    println!("branches:");
    for (i, branch) in listing.all.iter().enumerate() {
        println!("{} {}", i, branch);
    }
}

/// Explain that nothing will be tagged or pushed, and how to change that.
pub fn display_dry_mode_notice() {
    println!(
        "\n{}\n-\n\nchange dry behavior with subcommand\n\n    {}\n\n-",
        style("dry mode").yellow().bold(),
        style("vc switch dry").cyan()
    );
}

/// Print a command that dry mode skipped.
pub fn display_planned_command(command: &GitCommand) {
    println!("{}", style(command).cyan());
}

/// Report the new state of the dry-run switch.
pub fn display_dry_switch(now_dry: bool) {
    if now_dry {
        println!("you are safe 🍃");
    } else {
        println!(
            "{} --dry-run=false",
            style("now you need to be careful 🛃").red().bold()
        );
    }
    println!("dry {}", now_dry);
}
