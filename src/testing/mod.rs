//! Test support shared by the unit and integration suites.

pub mod instance;
pub mod setup;
