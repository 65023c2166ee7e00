//! Per-subnet decision procedure.
//!
//! Probes are gathered lazily: a live host settles the question on its own, and the
//! gateway is only probed once a route is known to exist. Each extra probe costs real
//! wall clock time per subnet.

use scopehunter_common::network::subnet::Subnet;
use scopehunter_common::verdict::{ProbeFacts, Verdict};
use tracing::debug;

use crate::probe::ProbeExecutor;

pub async fn diagnose(executor: &ProbeExecutor, subnet: &Subnet) -> Verdict {
    let facts = gather(executor, subnet).await;
    let verdict = facts.classify();
    debug!(
        "{subnet}: hosts_up={} route_exists={} gateway_up={} => {verdict}",
        facts.hosts_up, facts.route_exists, facts.gateway_up
    );
    verdict
}

async fn gather(executor: &ProbeExecutor, subnet: &Subnet) -> ProbeFacts {
    if executor.sweep(subnet).await {
        return ProbeFacts {
            hosts_up: true,
            ..ProbeFacts::default()
        };
    }

    let route_exists = executor.route_exists(subnet).await;
    let gateway_up = route_exists && executor.gateway_up(subnet).await;

    ProbeFacts {
        hosts_up: false,
        route_exists,
        gateway_up,
    }
}
