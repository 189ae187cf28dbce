//! Interactive entry point for the contact book.
//!
//! Reads one command per line from stdin and prints the feedback.

mod config;

use clap::Parser;
use config::{AppConfig, Overrides};
use contactbook_core::{
    init_logging, CatalogService, JsonFileRosterStore, Roster, RosterStore, ServiceError,
};
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "Keep track of contacts and their grades from the command line", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Roster data file (JSON)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for log files; logging is off when unset
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(
        cli.config.as_deref(),
        Overrides {
            data_file: cli.data,
            log_level: cli.log_level,
            log_dir: cli.log_dir,
        },
    )?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let mut service = open_catalog(JsonFileRosterStore::new(&config.data_file))?;
    run_loop(&mut service, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// Opens the catalog, starting empty when the stored roster is invalid.
///
/// The data file is left untouched until the first mutating command.
fn open_catalog<S: RosterStore + Clone>(store: S) -> Result<CatalogService<S>, ServiceError> {
    match CatalogService::open(store.clone()) {
        Ok(service) => Ok(service),
        Err(ServiceError::Load(err)) => {
            warn!("event=catalog_open module=cli status=error kind=load");
            eprintln!(
                "Data file {} could not be loaded ({err}). Starting with an empty contact book.",
                store.location()
            );
            Ok(CatalogService::with_roster(store, Roster::new()))
        }
        Err(err) => Err(err),
    }
}

fn run_loop<S, R, W>(service: &mut CatalogService<S>, input: R, mut output: W) -> io::Result<()>
where
    S: RosterStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let outcome = service.run(&line);
        writeln!(output, "{}", outcome.message)?;
        if outcome.show_list {
            for (index, contact) in service.state().visible_contacts().iter().enumerate() {
                writeln!(output, "{}. {contact}", index + 1)?;
            }
        }
        if outcome.exit {
            break;
        }
    }
    Ok(())
}
