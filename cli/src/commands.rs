pub mod check;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use scopehunter_common::config::Config;

#[derive(Parser)]
#[command(name = "scopehunter")]
#[command(version)]
#[command(about = "Verify network access into every subnet of a scope file.")]
pub struct CommandLine {
    /// Path to the scope file (one subnet per line, '#' comments allowed)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Scanner binary to use for host discovery
    #[arg(long = "nmap", value_name = "PATH", default_value = "nmap")]
    pub scanner: PathBuf,

    /// Give up on a single scanner run after this many seconds
    #[arg(long = "deadline", value_name = "SECS")]
    pub deadline: Option<u64>,

    /// Keep logs and colors but hide the ASCII art
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Do not clear the terminal on start
    #[arg(long = "no-clear")]
    pub no_clear: bool,

    /// Reduce UI visual density (-q: no banner or headers, -qq: problem list only)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase logging detail (-v: debug logs, -vv: scanner command lines)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            no_banner: cmd.no_banner,
            no_clear: cmd.no_clear,
            quiet: cmd.quiet,
            verbosity: cmd.verbosity,
            scanner: cmd.scanner.clone(),
            deadline: cmd.deadline.filter(|secs| *secs > 0).map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_flag_is_required() {
        assert!(CommandLine::try_parse_from(["scopehunter"]).is_err());
    }

    #[test]
    fn builds_config_from_flags() {
        let cmd = CommandLine::try_parse_from([
            "scopehunter",
            "-f",
            "scope.txt",
            "-qq",
            "-v",
            "--deadline",
            "30",
            "--no-banner",
        ])
        .unwrap();
        let cfg = Config::from(&cmd);

        assert_eq!(cmd.file, PathBuf::from("scope.txt"));
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.verbosity, 1);
        assert!(cfg.no_banner);
        assert!(!cfg.no_clear);
        assert_eq!(cfg.scanner, PathBuf::from("nmap"));
        assert_eq!(cfg.deadline, Some(Duration::from_secs(30)));
    }

    #[test]
    fn zero_deadline_disables_it() {
        let cmd =
            CommandLine::try_parse_from(["scopehunter", "--file", "s.txt", "--deadline", "0"])
                .unwrap();
        assert_eq!(Config::from(&cmd).deadline, None);
    }
}
