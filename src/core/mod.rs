//! Core types shared by every part of the deployer
//!
//! - [`error`] - [`DeployerError`], [`ErrorContext`] and the mapping from
//!   errors to user-facing messages and process exit codes
//! - [`artifact`] - coordinates and descriptors of the artifacts being
//!   registered

pub mod artifact;
pub mod error;

pub use artifact::{ArtifactCoordinates, ArtifactDescriptor, ArtifactOrigin};
pub use error::{DeployerError, ErrorContext, exit_code_for, user_friendly_error};
