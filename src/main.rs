use clap::Parser;

use vc::cli::{orchestration, Cli};
use vc::ui;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = orchestration::run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
