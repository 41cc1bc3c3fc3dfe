//! Integration test suite for polarion-artifacts-deployer
//!
//! These tests run the compiled binary against throwaway Polarion
//! installations and a fake `mvn` script that records its arguments, so no
//! real Maven or repository is needed. The fake is a POSIX shell script,
//! hence the whole suite is Unix-only.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **common**: command construction and output helpers
//! - **deploy**: successful install/deploy runs and the reports they print
//! - **failures**: Maven failures, exit codes and argument errors

#![cfg(unix)]

mod common;
mod deploy;
mod failures;
