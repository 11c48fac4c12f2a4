//! Interactive console entry point.
//!
//! # Responsibility
//! - Initialize logging and both record tables.
//! - Run the command loop on stdin/stdout until `stop` or end of input.
//!
//! # Invariants
//! - Any error is reported once as `An error occurred: ...` and ends the run.
//! - Only the car controller is wired to the loop; the client table is
//!   initialized but no command reaches it.

mod config;

use carrental_core::{
    core_version, flush_logging, init_logging, logging_status, CarController, ClientController,
    CommandLoop, SqliteCarRepository, SqliteClientRepository,
};
use config::CliConfig;
use log::{error, info};
use std::error::Error;
use std::io::{self, Write};

fn main() {
    match run() {
        Ok(()) => info!("event=app_exit module=cli status=ok"),
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            println!("An error occurred: {err}");
        }
    }
    flush_logging();
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CliConfig::load()?;
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }
    if let Some((level, log_dir)) = logging_status() {
        info!(
            "event=logging_status module=cli status=ok level={} log_dir={}",
            level,
            log_dir.display()
        );
    }
    info!(
        "event=app_start module=cli status=ok version={} db_path={}",
        core_version(),
        config.db_path.display()
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let cars = CarController::new(SqliteCarRepository::open(&config.db_path)?);
    announce_table(&mut output, cars.repository().storage().table())?;

    let clients = ClientController::new(SqliteClientRepository::open(&config.db_path)?);
    announce_table(&mut output, clients.repository().storage().table())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    CommandLoop::new(&cars).run(&mut input, &mut output)?;
    Ok(())
}

fn announce_table(output: &mut dyn Write, table: &str) -> io::Result<()> {
    writeln!(output, "Table '{table}' initialized.")
}
