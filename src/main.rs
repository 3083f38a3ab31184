use std::process;

use anyhow::Result;
use clap::ArgMatches;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod pizza;
mod workflow;

use cli::{build_cli, matches_to_action, CliAction};

fn main() {
    init_tracing();
    let matches = build_cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches_to_action(matches)? {
        CliAction::Menu => {
            print!("{}", pizza::render_menu());
            Ok(())
        }
        CliAction::Order {
            pizza,
            delivery,
            pickup,
        } => Ok(workflow::process_order(pizza, delivery, pickup)?),
    }
}

/// Logs go to stderr so stdout carries only the simulator's output.
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
