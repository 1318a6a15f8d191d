//! Crate-internal test suites and shared fixtures.

mod property;
