//! Main workflow orchestration logic
//!
//! Maps parsed arguments onto the library: opens the context store where a
//! command needs it, builds the tag strategy, and runs the matching
//! shortcut or the tag engine against the real git executable.

use anyhow::{Context, Result};

use crate::cli::{Cli, Commands, SwitchTarget};
use crate::context::FileStore;
use crate::git::ProcessGit;
use crate::release::{Strategy, TagEngine};
use crate::shortcuts;

/// Run one invocation
pub fn run(mut cli: Cli) -> Result<()> {
    let git = ProcessGit::new();

    let command = match cli.command.take() {
        Some(command) => command,
        None => return Ok(shortcuts::overview(&git, cli.more)?),
    };

    match command {
        Commands::Status => shortcuts::status(&git)?,
        Commands::Add(args) => {
            shortcuts::add(&git, args.auto)?;
        }
        Commands::Commit(args) => shortcuts::commit(&git, args.amend || args.update)?,
        Commands::Push => {
            let store = open_store(&cli)?;
            shortcuts::push(&store, &git, cli.mode)?;
        }
        Commands::Tag(args) => run_tag(&cli, args.strategy(), git)?,
        Commands::Inc(args) => run_tag(&cli, args.strategy(), git)?,
        Commands::New(args) => run_tag(&cli, args.strategy(), git)?,
        Commands::Switch {
            target: SwitchTarget::Dry,
        } => {
            let mut store = open_store(&cli)?;
            shortcuts::switch_dry(&mut store, cli.mode)?;
        }
    }

    Ok(())
}

fn open_store(cli: &Cli) -> Result<FileStore> {
    FileStore::open(&cli.context)
        .with_context(|| format!("Failed to open context {}", cli.context.display()))
}

fn run_tag(cli: &Cli, strategy: Strategy, git: ProcessGit) -> Result<()> {
    let store = open_store(cli)?;
    let mut engine = TagEngine::new(store, git);
    let outcome = engine.run(strategy, cli.mode)?;
    log::info!("applied {} (dry run: {})", outcome.tag, outcome.dry_run);
    Ok(())
}
