//! Scripted [`HostSweeper`] and [`RouteTable`] doubles.
//!
//! Built for unit tests and, behind the `test-util` feature, for the integration
//! crate. Both record every call so tests can assert what actually ran.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use scopehunter_common::network::subnet::Subnet;

use super::{HostSweeper, ProbeError, RouteTable};

#[derive(Clone, Copy)]
enum Behaviour {
    Answer(bool),
    Fail,
}

impl Behaviour {
    fn result(self) -> Result<bool, ProbeError> {
        match self {
            Behaviour::Answer(up) => Ok(up),
            Behaviour::Fail => Err(ProbeError::Unavailable(PathBuf::from("mock"))),
        }
    }
}

/// Scripted scanner.
///
/// Subnets listed with [`with_live_subnet`](Self::with_live_subnet) and addresses
/// listed with [`answering`](Self::answering) always answer. Anything else gets the
/// default behaviour, except that an `up()` sweeper still leaves unlisted pings silent.
#[derive(Clone)]
pub struct MockSweeper {
    behaviour: Behaviour,
    live_subnets: Vec<String>,
    answering: Vec<Ipv4Addr>,
    swept: Arc<Mutex<Vec<String>>>,
    pinged: Arc<Mutex<Vec<Ipv4Addr>>>,
}

impl MockSweeper {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            live_subnets: Vec::new(),
            answering: Vec::new(),
            swept: Arc::default(),
            pinged: Arc::default(),
        }
    }

    pub fn up() -> Self {
        Self::with(Behaviour::Answer(true))
    }

    pub fn silent() -> Self {
        Self::with(Behaviour::Answer(false))
    }

    pub fn failing() -> Self {
        Self::with(Behaviour::Fail)
    }

    /// Sweeps of `notation` report a live host.
    pub fn with_live_subnet(mut self, notation: &str) -> Self {
        self.live_subnets.push(notation.to_string());
        self
    }

    pub fn answering(mut self, addr: Ipv4Addr) -> Self {
        self.answering.push(addr);
        self
    }

    pub fn swept(&self) -> Vec<String> {
        self.swept.lock().unwrap().clone()
    }

    pub fn pinged(&self) -> Vec<Ipv4Addr> {
        self.pinged.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostSweeper for MockSweeper {
    async fn sweep(&self, subnet: &Subnet) -> Result<bool, ProbeError> {
        self.swept.lock().unwrap().push(subnet.to_string());
        if self.live_subnets.iter().any(|s| s == subnet.notation()) {
            return Ok(true);
        }
        self.behaviour.result()
    }

    async fn ping(&self, addr: Ipv4Addr) -> Result<bool, ProbeError> {
        self.pinged.lock().unwrap().push(addr);
        if self.answering.contains(&addr) {
            return Ok(true);
        }
        match self.behaviour {
            Behaviour::Answer(_) => Ok(false),
            Behaviour::Fail => Behaviour::Fail.result(),
        }
    }
}

/// Scripted routing table. Per-address overrides win over the default behaviour.
#[derive(Clone)]
pub struct MockRoutes {
    behaviour: Behaviour,
    overrides: HashMap<Ipv4Addr, bool>,
    queried: Arc<Mutex<Vec<Ipv4Addr>>>,
}

impl MockRoutes {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            overrides: HashMap::new(),
            queried: Arc::default(),
        }
    }

    pub fn reachable() -> Self {
        Self::with(Behaviour::Answer(true))
    }

    pub fn unreachable() -> Self {
        Self::with(Behaviour::Answer(false))
    }

    pub fn failing() -> Self {
        Self::with(Behaviour::Fail)
    }

    /// No route to `addr`, whatever the default says.
    pub fn without(mut self, addr: Ipv4Addr) -> Self {
        self.overrides.insert(addr, false);
        self
    }

    pub fn queried(&self) -> Vec<Ipv4Addr> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl RouteTable for MockRoutes {
    async fn lookup(&self, addr: Ipv4Addr) -> Result<bool, ProbeError> {
        self.queried.lock().unwrap().push(addr);
        match self.overrides.get(&addr) {
            Some(&routed) => Ok(routed),
            None => self.behaviour.result(),
        }
    }
}
