//! Shared utilities for hitrate
//!
//! Currently this is the tracing bootstrap used by binaries and tests that
//! embed the aggregator.

pub mod tracing;

pub use self::tracing::*;
