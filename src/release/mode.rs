use clap::ValueEnum;

/// One-invocation override of the persisted dry-run switch (`--mode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print commands instead of running them
    Dry,
    /// Run commands
    Run,
}

/// Effective dry-run flag: an explicit `--mode` beats the persisted value.
pub fn effective_dry_run(mode: Option<Mode>, persisted: bool) -> bool {
    match mode {
        Some(Mode::Dry) => true,
        Some(Mode::Run) => false,
        None => persisted,
    }
}
