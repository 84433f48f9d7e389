//! Shared test utilities for the optfile workspace.
//!
//! This crate provides on-disk fixtures for directive and schema files so
//! crate test suites do not each hand-roll temp directory handling. It is a
//! dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixture`]: [`ConfigDir`] temporary directory with file helpers

pub mod fixture;

pub use fixture::ConfigDir;
