//! [`HostSweeper`] backed by the `nmap` binary.

use std::io;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use scopehunter_common::config::SweepProfile;
use scopehunter_common::network::subnet::Subnet;
use tokio::process::Command;
use tracing::{debug, trace};

use super::{HostSweeper, ProbeError};

pub struct Nmap {
    binary: PathBuf,
    sweep: SweepProfile,
    gateway: SweepProfile,
    deadline: Option<Duration>,
}

impl Nmap {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            sweep: SweepProfile::host_sweep(),
            gateway: SweepProfile::gateway_probe(),
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn sweep_profile(&self) -> &SweepProfile {
        &self.sweep
    }

    /// Makes sure the binary runs, returning its version line.
    pub async fn ensure_available(&self) -> Result<String, ProbeError> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| spawn_error(&self.binary, e))?;

        if !output.status.success() {
            return Err(ProbeError::Unavailable(self.binary.clone()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("nmap")
            .trim()
            .to_string())
    }

    async fn run(&self, profile: &SweepProfile, target: &str) -> Result<bool, ProbeError> {
        let args = build_args(profile, target);
        trace!("{} {}", self.binary.display(), args.join(" "));

        let mut command = Command::new(&self.binary);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let output: Output = match self.deadline {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| ProbeError::DeadlineExceeded(limit))?,
            None => command.output().await,
        }
        .map_err(|e| spawn_error(&self.binary, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if reports_host_up(&stdout) {
            return Ok(true);
        }
        if !output.status.success() {
            return Err(ProbeError::Exit {
                program: self.binary.clone(),
                status: output.status,
            });
        }

        debug!("{target}: no host reported up");
        Ok(false)
    }
}

#[async_trait]
impl HostSweeper for Nmap {
    async fn sweep(&self, subnet: &Subnet) -> Result<bool, ProbeError> {
        self.run(&self.sweep, subnet.notation()).await
    }

    async fn ping(&self, addr: Ipv4Addr) -> Result<bool, ProbeError> {
        self.run(&self.gateway, &addr.to_string()).await
    }
}

fn spawn_error(program: &Path, source: io::Error) -> ProbeError {
    match source.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            ProbeError::Unavailable(program.to_path_buf())
        }
        _ => ProbeError::Spawn {
            program: program.to_path_buf(),
            source,
        },
    }
}

/// Host discovery only (`-sn`), with the probes and timing the profile asks for.
pub fn build_args(profile: &SweepProfile, target: &str) -> Vec<String> {
    let mut args = vec!["-sn".to_string()];

    if profile.icmp_echo {
        args.push("-PE".to_string());
    }
    if !profile.syn_ports.is_empty() {
        let ports: Vec<String> = profile.syn_ports.iter().map(u16::to_string).collect();
        args.push(format!("-PS{}", ports.join(",")));
    }
    if !profile.resolve_dns {
        args.push("-n".to_string());
    }
    if let Some(timing) = profile.timing {
        args.push(format!("-T{timing}"));
    }

    args.push("--max-retries".to_string());
    args.push(profile.max_retries.to_string());
    args.push("--max-rtt-timeout".to_string());
    args.push(format!("{}ms", profile.max_rtt_timeout.as_millis()));

    if let Some(parallelism) = profile.min_parallelism {
        args.push("--min-parallelism".to_string());
        args.push(parallelism.to_string());
    }

    args.push(target.to_string());
    args
}

/// True if nmap's normal output shows at least one live host, either as a
/// `Host is up` line or a non-zero `(N hosts up)` summary.
pub fn reports_host_up(stdout: &str) -> bool {
    stdout
        .lines()
        .any(|line| line.contains("Host is up") || summary_hosts_up(line).is_some_and(|n| n > 0))
}

fn summary_hosts_up(line: &str) -> Option<u32> {
    let rest = line.strip_prefix("Nmap done:")?;
    let inner = &rest[rest.find('(')? + 1..];
    let inner = &inner[..inner.find(')')?];
    let mut words = inner.split_whitespace();
    let count = words.next()?.parse().ok()?;
    matches!((words.next(), words.next()), (Some("host" | "hosts"), Some("up"))).then_some(count)
}
