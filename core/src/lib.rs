//! # Scopehunter core
//!
//! * [`probe`]: the probe executor. Wraps the external scanner and the routing table
//!   and reduces whatever they say to plain facts.
//! * [`diagnosis`]: the per-subnet decision procedure built on those facts.
//! * [`engine`]: the sequential scan loop that produces a [`Report`](scopehunter_common::report::Report).

pub mod diagnosis;
pub mod engine;
pub mod probe;
