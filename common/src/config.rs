use std::path::PathBuf;
use std::time::Duration;

/// TCP SYN ping ports used by the host sweep: FTP, SSH, HTTP, HTTPS, SMB, RDP, alt-HTTP.
pub const SWEEP_PORTS: &[u16] = &[21, 22, 80, 443, 445, 3389, 8080];

pub struct Config {
    /// Keep logs and colors but hide the ASCII art.
    pub no_banner: bool,
    /// Leave the terminal as it is instead of clearing it on start.
    pub no_clear: bool,
    /// Reduce UI visual density (-q: no banner/headers, -qq: problem list only).
    pub quiet: u8,
    /// Logging detail (-v: debug, -vv: trace).
    pub verbosity: u8,
    /// Scanner binary, resolved through `PATH` when not absolute.
    pub scanner: PathBuf,
    /// Hard wall clock ceiling for a single scanner invocation.
    ///
    /// The scanner's own timing settings normally bound a probe; this only guards
    /// against one that hangs.
    pub deadline: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            no_clear: false,
            quiet: 0,
            verbosity: 0,
            scanner: PathBuf::from("nmap"),
            deadline: None,
        }
    }
}

/// How a liveness probe should be sent.
///
/// Scanner adapters translate this into their own arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepProfile {
    /// Send an ICMP echo request.
    pub icmp_echo: bool,
    /// Send TCP SYN probes to these ports.
    pub syn_ports: Vec<u16>,
    /// Timing template (0 paranoid .. 5 insane).
    pub timing: Option<u8>,
    pub max_retries: u8,
    /// Upper bound on how long to wait for any single probe response.
    pub max_rtt_timeout: Duration,
    /// Minimum number of probes kept in flight across addresses.
    pub min_parallelism: Option<u16>,
    /// Reverse DNS resolution of discovered hosts.
    pub resolve_dns: bool,
}

impl SweepProfile {
    /// Fast-fail host discovery across a whole subnet.
    pub fn host_sweep() -> Self {
        Self {
            icmp_echo: true,
            syn_ports: SWEEP_PORTS.to_vec(),
            timing: Some(4),
            max_retries: 1,
            max_rtt_timeout: Duration::from_millis(400),
            min_parallelism: Some(64),
            resolve_dns: false,
        }
    }

    /// Lightweight ICMP-only check of a single guessed gateway address.
    pub fn gateway_probe() -> Self {
        Self {
            icmp_echo: true,
            syn_ports: Vec::new(),
            timing: None,
            max_retries: 1,
            max_rtt_timeout: Duration::from_millis(200),
            min_parallelism: None,
            resolve_dns: false,
        }
    }
}
