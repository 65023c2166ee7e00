//! # Reachability classification
//!
//! Turns the three probe facts gathered for a subnet into one [`Verdict`].

use std::fmt;

/// What the probes found out about a single subnet.
///
/// `route_exists` and `gateway_up` are only meaningful when `hosts_up` is false; the
/// engine never probes for them otherwise, and [`ProbeFacts::classify`] never reads them
/// in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeFacts {
    /// The sweep reported at least one live host.
    pub hosts_up: bool,
    /// The local routing table has a path to the subnet's base address.
    pub route_exists: bool,
    /// One of the guessed gateway addresses answered.
    pub gateway_up: bool,
}

impl ProbeFacts {
    /// Classification policy.
    ///
    /// Host liveness wins outright. A missing route is reported as such whatever a
    /// gateway probe might say, because without a route that probe means nothing.
    pub fn classify(&self) -> Verdict {
        if self.hosts_up {
            Verdict::Accessible
        } else if !self.route_exists {
            Verdict::NoRoute
        } else if self.gateway_up {
            Verdict::EmptyButReachable
        } else {
            Verdict::Timeout
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// At least one host answered the sweep.
    Accessible,
    /// There is no local route to the subnet.
    NoRoute,
    /// Routed, no host answered, but a gateway address did.
    EmptyButReachable,
    /// Routed, yet neither hosts nor gateway answered.
    Timeout,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::Accessible,
        Verdict::NoRoute,
        Verdict::EmptyButReachable,
        Verdict::Timeout,
    ];

    /// Whether the subnet belongs on the problem list.
    pub fn is_problem(self) -> bool {
        matches!(self, Verdict::NoRoute | Verdict::Timeout)
    }

    /// Short tag used in the problem list, e.g. `10.0.0.0/24 (NoRoute)`.
    pub fn tag(self) -> &'static str {
        match self {
            Verdict::Accessible => "Accessible",
            Verdict::NoRoute => "NoRoute",
            Verdict::EmptyButReachable => "EmptyButReachable",
            Verdict::Timeout => "Timeout",
        }
    }

    /// Upper-case status label shown next to each subnet while scanning.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Accessible => "ACCESSIBLE",
            Verdict::NoRoute => "NO ROUTE",
            Verdict::EmptyButReachable => "EMPTY BUT REACHABLE",
            Verdict::Timeout => "TIMEOUT",
        }
    }

    /// One-line explanation for the report legend.
    pub fn description(self) -> &'static str {
        match self {
            Verdict::Accessible => "at least one host answered the sweep",
            Verdict::NoRoute => "this machine has no route to the subnet (VPN/routing scope)",
            Verdict::EmptyButReachable => {
                "routed and a gateway answered, but no hosts are up (likely empty)"
            }
            Verdict::Timeout => "routed, but nothing answered (firewall or dead network)",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
