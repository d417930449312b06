//! Shared fixtures and fakes for crowdforge test suites.
//!
//! Everything here is deterministic and network-free: a canned contribution
//! catalogue, a scripted profile registry, and a stub HTTP transport that
//! records what was asked of it. The main crate consumes this as a
//! dev-dependency; downstream consumers can use it to test their own
//! composition roots without a backend.

pub mod fixtures;
pub mod registry;
pub mod transport;
