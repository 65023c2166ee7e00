use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use is_root::is_root;
use tracing::{debug, error, warn};

use scopehunter_common::config::Config;
use scopehunter_common::network::subnet::Subnet;
use scopehunter_common::scope::{self, ScopeError};
use scopehunter_core::engine::ScanEngine;
use scopehunter_core::probe::ProbeExecutor;
use scopehunter_core::probe::nmap::Nmap;
use scopehunter_core::probe::route::SystemRoutes;

use crate::terminal::spinner::SpinnerObserver;
use crate::terminal::{colors, print, report};

const KEY_WIDTH: usize = 12;

pub async fn check(scope_file: &Path, cfg: &Config) -> anyhow::Result<()> {
    print::header("preflight", cfg.quiet);

    let nmap = Nmap::new(cfg.scanner.clone()).with_deadline(cfg.deadline);
    let version = nmap
        .ensure_available()
        .await
        .context("host discovery needs nmap")?;
    debug!("Using {version}");

    if !is_root() {
        warn!("Not running as root, nmap will fall back to TCP connect probes");
    }

    let subnets = load_scope(scope_file)?;
    if subnets.is_empty() {
        warn!("{} does not list any subnets", scope_file.display());
    }
    if cfg.quiet == 0 {
        let ports: Vec<String> = nmap
            .sweep_profile()
            .syn_ports
            .iter()
            .map(u16::to_string)
            .collect();
        let scope_name = scope_file.display().to_string();
        print::aligned_line("Scope file", scope_name.color(colors::ACCENT), KEY_WIDTH);
        print::aligned_line("Target ports", ports.join(", ").color(colors::ACCENT), KEY_WIDTH);
        print::aligned_line("Subnets", subnets.len().to_string().color(colors::ACCENT), KEY_WIDTH);
        print::blank();
    }

    print::header("checking access", cfg.quiet);

    let engine = ScanEngine::new(ProbeExecutor::new(nmap, SystemRoutes));
    let observer = SpinnerObserver::new(cfg.quiet);

    let start_time = Instant::now();
    let outcome = engine.run(subnets, &observer).await;
    report::render(&outcome, start_time.elapsed(), cfg);

    Ok(())
}

fn load_scope(path: &Path) -> anyhow::Result<Vec<Subnet>> {
    match scope::load(path) {
        Ok(subnets) => Ok(subnets),
        Err(ScopeError::Malformed(lines)) => {
            for line in &lines {
                error!("{line}");
            }
            let err = ScopeError::Malformed(lines);
            anyhow::bail!("{}: {err}, fix them before scanning", path.display())
        }
        Err(e) => Err(e.into()),
    }
}
