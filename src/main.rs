use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    services::logging::init_logging();
    commands::handle_scan(&cli)
}
