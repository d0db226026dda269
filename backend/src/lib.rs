//! Tennis string lifecycle tracking and usage aggregation.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, the string
//! lifecycle state machine, the usage aggregator, ports and services;
//! `outbound` provides persistence adapters; `example_data` wires demo
//! seeding at startup.

pub mod domain;
pub mod example_data;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
