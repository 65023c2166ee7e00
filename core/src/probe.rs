//! The **probe executor**.
//!
//! External capabilities sit behind two traits: [`HostSweeper`] (the scanner) and
//! [`RouteTable`] (the local routing table). Implementations report honestly, failures
//! included, as `Result<bool, ProbeError>`.
//!
//! [`ProbeExecutor`] is the only consumer of those results. Every failure is turned into
//! the conservative fact in [`settle`], so an unknown answer always reads as "down" or
//! "no route" and a misbehaving probe can only worsen a verdict, never abort a run.

use std::io;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use scopehunter_common::network::subnet::Subnet;
use thiserror::Error;
use tracing::{debug, warn};

pub mod nmap;
pub mod route;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The capability's binary could not be found or does not run.
    #[error("'{}' is not available, is it installed and on PATH?", .0.display())]
    Unavailable(PathBuf),
    #[error("failed to run '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{}' failed with {status}", program.display())]
    Exit { program: PathBuf, status: ExitStatus },
    #[error("no answer within {0:?}")]
    DeadlineExceeded(Duration),
    #[error("{0} is too small to have gateway candidates")]
    NoGatewayCandidates(String),
}

/// Host discovery capability.
#[async_trait]
pub trait HostSweeper: Send + Sync {
    /// Full discovery sweep over every address in `subnet`.
    /// `Ok(true)` means at least one host answered.
    async fn sweep(&self, subnet: &Subnet) -> Result<bool, ProbeError>;

    /// Lightweight liveness check of a single address.
    async fn ping(&self, addr: Ipv4Addr) -> Result<bool, ProbeError>;
}

/// Local routing table lookup.
#[async_trait]
pub trait RouteTable: Send + Sync {
    /// `Ok(false)` when the table explicitly has no usable route to `addr`.
    async fn lookup(&self, addr: Ipv4Addr) -> Result<bool, ProbeError>;
}

/// Answers subnet-level questions with plain facts.
#[derive(Clone)]
pub struct ProbeExecutor {
    sweeper: Arc<dyn HostSweeper>,
    routes: Arc<dyn RouteTable>,
}

impl ProbeExecutor {
    pub fn new(sweeper: impl HostSweeper + 'static, routes: impl RouteTable + 'static) -> Self {
        Self {
            sweeper: Arc::new(sweeper),
            routes: Arc::new(routes),
        }
    }

    /// Did any host in the subnet answer the sweep?
    pub async fn sweep(&self, subnet: &Subnet) -> bool {
        settle("host sweep", subnet, self.sweeper.sweep(subnet).await)
    }

    /// Is there a route to the subnet's base address?
    pub async fn route_exists(&self, subnet: &Subnet) -> bool {
        settle("route lookup", subnet, self.routes.lookup(subnet.base()).await)
    }

    /// Did either guessed gateway address answer?
    pub async fn gateway_up(&self, subnet: &Subnet) -> bool {
        settle("gateway probe", subnet, self.probe_gateways(subnet).await)
    }

    async fn probe_gateways(&self, subnet: &Subnet) -> Result<bool, ProbeError> {
        let (first, last) = subnet
            .gateway_candidates()
            .ok_or_else(|| ProbeError::NoGatewayCandidates(subnet.to_string()))?;

        let mut failure = None;
        for addr in [first, last] {
            match self.sweeper.ping(addr).await {
                Ok(true) => {
                    debug!("{subnet}: gateway candidate {addr} answered");
                    return Ok(true);
                }
                Ok(false) => debug!("{subnet}: gateway candidate {addr} is silent"),
                Err(e) => {
                    debug!("{subnet}: probing gateway candidate {addr} failed: {e}");
                    failure.get_or_insert(e);
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(false),
        }
    }
}

/// Collapses a probe result into a fact. Failures count as "down".
pub fn settle(probe: &str, subnet: &Subnet, result: Result<bool, ProbeError>) -> bool {
    match result {
        Ok(fact) => fact,
        Err(e) => {
            warn!("{subnet}: {probe} failed, treating as unreachable ({e})");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::mock::{MockRoutes, MockSweeper};
    use super::*;

    fn subnet(s: &str) -> Subnet {
        s.parse().unwrap()
    }

    #[test]
    fn settle_maps_errors_to_false() {
        let net = subnet("10.0.0.0/24");
        assert!(settle("x", &net, Ok(true)));
        assert!(!settle("x", &net, Ok(false)));
        assert!(!settle(
            "x",
            &net,
            Err(ProbeError::DeadlineExceeded(Duration::from_secs(1)))
        ));
    }

    #[tokio::test]
    async fn failing_route_lookup_is_no_route() {
        let executor = ProbeExecutor::new(MockSweeper::silent(), MockRoutes::failing());
        assert!(!executor.route_exists(&subnet("10.0.0.0/24")).await);
    }

    #[tokio::test]
    async fn route_lookup_uses_base_address() {
        let routes = MockRoutes::reachable();
        let executor = ProbeExecutor::new(MockSweeper::silent(), routes.clone());
        executor.route_exists(&subnet("10.0.0.77/24")).await;
        assert_eq!(routes.queried(), vec![Ipv4Addr::new(10, 0, 0, 0)]);
    }

    #[tokio::test]
    async fn failing_sweep_is_hosts_down() {
        let executor = ProbeExecutor::new(MockSweeper::failing(), MockRoutes::reachable());
        assert!(!executor.sweep(&subnet("10.0.0.0/24")).await);
    }

    #[tokio::test]
    async fn gateway_probe_short_circuits_on_first_candidate() {
        let sweeper = MockSweeper::silent().answering(Ipv4Addr::new(10, 0, 0, 1));
        let executor = ProbeExecutor::new(sweeper.clone(), MockRoutes::reachable());
        assert!(executor.gateway_up(&subnet("10.0.0.0/24")).await);
        assert_eq!(sweeper.pinged(), vec![Ipv4Addr::new(10, 0, 0, 1)]);
    }

    #[tokio::test]
    async fn gateway_probe_falls_back_to_last_usable() {
        let sweeper = MockSweeper::silent().answering(Ipv4Addr::new(10, 0, 0, 254));
        let executor = ProbeExecutor::new(sweeper.clone(), MockRoutes::reachable());
        assert!(executor.gateway_up(&subnet("10.0.0.0/24")).await);
        assert_eq!(
            sweeper.pinged(),
            vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 254)]
        );
    }

    #[tokio::test]
    async fn gateway_probe_without_candidates_is_down() {
        let sweeper = MockSweeper::silent();
        let executor = ProbeExecutor::new(sweeper.clone(), MockRoutes::reachable());
        assert!(!executor.gateway_up(&subnet("10.0.0.8/31")).await);
        assert!(sweeper.pinged().is_empty());
    }

    #[tokio::test]
    async fn gateway_probe_errors_still_try_the_other_candidate() {
        let sweeper = MockSweeper::failing().answering(Ipv4Addr::new(10, 0, 0, 254));
        let executor = ProbeExecutor::new(sweeper, MockRoutes::reachable());
        assert!(executor.gateway_up(&subnet("10.0.0.0/24")).await);
    }
}
