mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use scopehunter_common::config::Config;
use terminal::{banner, logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg = Config::from(&commands);

    logging::init_logging(cfg.verbosity);
    if !cfg.no_clear && cfg.quiet == 0 {
        print::clear_screen();
    }
    banner::banner(cfg.no_banner, cfg.quiet);

    match check::check(&commands.file, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
