use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// The entry was blank after trimming.
    #[error("empty network notation")]
    Empty,
    /// The entry looks like an IPv6 network.
    #[error("'{0}' is an IPv6 network, only IPv4 ranges are supported")]
    Ipv6(String),
    /// The entry could not be parsed as `address[/prefix]`.
    #[error("'{input}' is not valid network notation ({reason})")]
    Malformed { input: String, reason: String },
}

/// One IPv4 range from the scope file.
///
/// The notation is kept exactly as written (minus surrounding whitespace) since it is
/// what the operator will look for in the report and what the scanner receives as its
/// target. A bare address parses as a /32.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    notation: String,
    network: Ipv4Network,
}

impl Subnet {
    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn network(&self) -> Ipv4Network {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    /// The network address, e.g. `10.0.0.0` for `10.0.0.17/24`.
    pub fn base(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    /// Heuristic gateway guesses: the first usable address and the last one before
    /// broadcast. These are guesses, not the discovered default gateway, so a subnet
    /// whose router sits elsewhere will not be found this way.
    ///
    /// Returns `None` for /31 and /32, which have no such pair.
    pub fn gateway_candidates(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.prefix() > 30 {
            return None;
        }
        let base: u32 = self.base().into();
        let broadcast: u32 = self.broadcast().into();
        let first = base.checked_add(1)?;
        let last = broadcast.checked_sub(1)?;
        if first > last {
            return None;
        }
        Some((Ipv4Addr::from(first), Ipv4Addr::from(last)))
    }
}

impl FromStr for Subnet {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim();
        if notation.is_empty() {
            return Err(SubnetError::Empty);
        }
        if notation.contains(':') {
            return Err(SubnetError::Ipv6(notation.to_string()));
        }

        let network = Ipv4Network::from_str(notation).map_err(|e| SubnetError::Malformed {
            input: notation.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            notation: notation.to_string(),
            network,
        })
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}
