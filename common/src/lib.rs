//! # Scopehunter shared models
//!
//! Types shared between the probing core and the command line front end:
//!
//! * [`network::subnet`]: the parsed form of one scope entry.
//! * [`scope`]: loading a scope file into an ordered list of subnets.
//! * [`verdict`]: probe facts and the classification policy built on them.
//! * [`report`]: the ordered outcome of a run.
//! * [`config`]: runtime configuration and the probe profiles handed to the scanner.

pub mod config;
pub mod network;
pub mod report;
pub mod scope;
pub mod verdict;
