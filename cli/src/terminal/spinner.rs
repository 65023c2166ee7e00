use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use scopehunter_common::network::subnet::Subnet;
use scopehunter_common::verdict::Verdict;
use scopehunter_core::engine::{Position, ScanObserver};

use crate::terminal::{colors, print};

const TICK: Duration = Duration::from_millis(100);
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SUBNET_WIDTH: usize = 18;

/// The spinner currently on screen, if any. Log output is written around it.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn active() -> MutexGuard<'static, Option<ProgressBar>> {
    ACTIVE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn new_spinner(msg: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.208} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(FRAMES);
    pb.set_style(style);
    pb.set_message(msg);
    pb.enable_steady_tick(TICK);
    pb
}

fn progress_prefix(position: Position, subnet: &Subnet) -> String {
    format!(
        "[{}/{}] Checking: {}",
        position.index,
        position.total,
        format!("{:<SUBNET_WIDTH$}", subnet.notation()).bold()
    )
}

/// Renders one spinner per subnet while its probes run, then a result line.
pub struct SpinnerObserver {
    quiet: u8,
}

impl SpinnerObserver {
    pub fn new(quiet: u8) -> Self {
        Self { quiet }
    }
}

impl ScanObserver for SpinnerObserver {
    fn subnet_started(&self, position: Position, subnet: &Subnet) {
        if self.quiet > 1 {
            return;
        }
        let msg = format!(
            "{} {}",
            progress_prefix(position, subnet),
            "[Scanning...]".color(colors::MUTED)
        );
        *active() = Some(new_spinner(msg));
    }

    fn subnet_finished(&self, position: Position, subnet: &Subnet, verdict: Verdict) {
        let finished = active().take();
        if let Some(pb) = finished {
            pb.finish_and_clear();
        }
        if self.quiet > 1 {
            return;
        }

        let (symbol, color) = match verdict {
            Verdict::Accessible => ("[✔]", colors::ACCESSIBLE),
            Verdict::EmptyButReachable => ("[~]", colors::EMPTY),
            Verdict::NoRoute | Verdict::Timeout => ("[✘]", colors::PROBLEM),
        };
        print::print(&format!(
            "{} {} -> {}",
            symbol.color(color),
            progress_prefix(position, subnet),
            verdict.label().color(color).bold()
        ));
    }
}

/// Log writer that keeps the active spinner intact.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let guard = active();
        match guard.as_ref() {
            Some(pb) => pb.suspend(|| io::stdout().write_all(buf))?,
            None => io::stdout().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
