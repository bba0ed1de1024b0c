//! Common test utilities for integration tests
//!
//! - Topology builders for typical machines
//! - A backend that records every call instead of touching devices

#[allow(dead_code)]
pub mod recording_backend;
#[allow(dead_code)]
pub mod topologies;
