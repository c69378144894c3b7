#[macro_use] extern crate prettytable;

use structopt::StructOpt;
use tracing::debug;

mod cli;
mod config;
mod export;
mod interface;
mod labels;
mod logging;
mod model;
mod progress;

use cli::{Command::*, CommandLineArgs};
use config::Config;

fn main() -> anyhow::Result<()> {
    // Get the command-line arguments.
    let CommandLineArgs {
        action,
        database,
        verbose,
    } = CommandLineArgs::from_args();

    logging::init_logging(verbose);

    let (csv_path, chart_path) = match &action {
        Export { output, .. } => (output.clone(), None),
        Plot { output } => (None, output.clone()),
        _ => (None, None),
    };
    let config = Config::resolve(database, csv_path, chart_path)?;
    debug!(?config, "resolved configuration");

    // One connection per invocation, closed when it goes out of scope.
    let db = model::open_store(&config.store_path)?;

    // Perform the action.
    match action {
        Add {
            task,
            category,
            status,
            notes,
        } => interface::add(&db, category, &task, status, &notes),
        List { table } => interface::list(&db, table),
        Export { stdout, .. } => interface::export(&db, &config.csv_path, stdout),
        Plot { .. } => interface::plot(&db, &config.chart_path),
        Init => interface::init(&config.store_path),
    }?;
    Ok(())
}
