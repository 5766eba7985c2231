mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, generate};
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(commands.verbose);
    print::banner(commands.no_banner);

    match generate::generate(&commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("ERROR: {err:#}. Exiting");
            ExitCode::FAILURE
        }
    }
}
