//! Cross-platform utilities
//!
//! - [`platform`] - Maven launcher name, path expansion, executable lookup

pub mod platform;

pub use platform::{expand_home, find_maven, get_home_dir, get_maven_command, is_windows, resolve_path};
