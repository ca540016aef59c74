//! Integration tests for the credo-auth service
//!
//! Every test builds its own in-process service over an isolated in-memory
//! database, so suites can run in parallel without sharing state.

pub mod metrics_test;
pub mod register_test;
