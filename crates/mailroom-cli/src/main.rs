use std::io;

use clap::Parser;
use mailroom_ledger::Ledger;
use tracing::Level;

mod cli;
mod config;
mod controller;
mod error;
mod letters;
mod menu;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let config = cli.config()?;
    let mut controller = controller::Controller::new(
        Ledger::seeded(),
        config,
        io::stdin().lock(),
        io::stdout().lock(),
    );
    controller.run()
}
