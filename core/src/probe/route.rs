//! [`RouteTable`] backed by the operating system's routing tools.

use std::net::Ipv4Addr;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use super::{ProbeError, RouteTable};

/// Markers the routing tools print when a destination has no usable route.
const NO_ROUTE_MARKERS: &[&str] = &[
    "unreachable",
    "prohibit",
    "blackhole",
    "no route",
    "not in table",
];

pub struct SystemRoutes;

#[async_trait]
impl RouteTable for SystemRoutes {
    async fn lookup(&self, addr: Ipv4Addr) -> Result<bool, ProbeError> {
        let (program, args) = route_command(addr);
        let output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ProbeError::Spawn {
                program: program.into(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        trace!("{program} {}: {}{}", args.join(" "), stdout.trim(), stderr.trim());

        Ok(route_found(output.status.success(), &stdout, &stderr))
    }
}

#[cfg(target_os = "linux")]
fn route_command(addr: Ipv4Addr) -> (&'static str, Vec<String>) {
    ("ip", vec!["route".into(), "get".into(), addr.to_string()])
}

#[cfg(not(target_os = "linux"))]
fn route_command(addr: Ipv4Addr) -> (&'static str, Vec<String>) {
    ("route", vec!["-n".into(), "get".into(), addr.to_string()])
}

/// A lookup counts as routed when the tool succeeded and did not describe the
/// destination as unreachable.
pub fn route_found(success: bool, stdout: &str, stderr: &str) -> bool {
    if !success {
        return false;
    }
    let text = format!("{stdout}\n{stderr}").to_lowercase();
    !NO_ROUTE_MARKERS.iter().any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routed_destination() {
        let out = "10.0.0.1 via 192.168.1.1 dev wlan0 src 192.168.1.42 uid 1000\n    cache\n";
        assert!(route_found(true, out, ""));
    }

    #[test]
    fn failed_lookup_is_no_route() {
        assert!(!route_found(false, "", "RTNETLINK answers: Network is unreachable"));
        assert!(!route_found(false, "", ""));
    }

    #[test]
    fn unreachable_route_type_is_no_route() {
        assert!(!route_found(true, "unreachable 10.9.0.0 table main uid 0\n", ""));
        assert!(!route_found(true, "prohibit 10.9.0.0 uid 0\n", ""));
        assert!(!route_found(true, "blackhole 10.9.0.0 uid 0\n", ""));
    }

    #[test]
    fn bsd_not_in_table_is_no_route() {
        assert!(!route_found(true, "", "route: writing to routing socket: not in table"));
    }
}
