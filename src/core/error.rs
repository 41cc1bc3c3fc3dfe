//! Error handling for the deployer
//!
//! Domain failures are modelled by [`DeployerError`], a `thiserror` enum that
//! travels through the code inside [`anyhow::Error`]. At the top of the
//! program [`user_friendly_error`] turns whatever came back into an
//! [`ErrorContext`] carrying optional details and a suggestion, which
//! `main` prints to stderr with terminal colors.
//!
//! # Exit Codes
//!
//! A failed Maven invocation terminates the run with the child's exit status
//! modulo 255 (see [`DeployerError::exit_code`]). Every other failure exits
//! with status 1.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::constants::EXIT_CODE_MODULUS;

/// Errors raised while discovering and registering Polarion artifacts.
#[derive(Error, Debug)]
pub enum DeployerError {
    /// Maven returned a non-zero exit status.
    ///
    /// `exit_code` is `None` when the child was terminated by a signal.
    #[error("Maven {goal} failed with exit code {}", display_code(.exit_code))]
    MavenCommandFailed {
        /// Goal that was executed (e.g. `install:install-file`)
        goal: String,
        /// Raw exit status reported by the child
        exit_code: Option<i32>,
    },

    /// The Maven executable could not be located.
    #[error("Maven executable '{executable}' was not found")]
    MavenNotFound {
        /// Name or path that was looked up
        executable: String,
    },

    /// `<polarion-home>/polarion/plugins` does not exist or is not a directory.
    #[error("Polarion plugins directory not found: {path}")]
    PluginsDirNotFound {
        /// Path that was expected to hold the plugins
        path: String,
    },

    /// Rendering the POM or a dependency snippet failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateError {
        /// Name of the template
        template: String,
        /// Error reported by the template engine
        reason: String,
    },

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string())
}

impl DeployerError {
    /// Process exit code used when this error ends the run.
    ///
    /// Maven failures map to `exit_code % 255`. A remainder of zero (child
    /// exited with 255) and signal termination both map to 1, so a failed
    /// run never reports success.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MavenCommandFailed {
                exit_code: Some(code),
                ..
            } => match code.rem_euclid(EXIT_CODE_MODULUS) {
                0 => 1,
                derived => derived,
            },
            _ => 1,
        }
    }
}

/// Exit code for an arbitrary error coming back to `main`.
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error.downcast_ref::<DeployerError>().map_or(1, DeployerError::exit_code)
}

/// An error paired with optional details and a suggestion for the operator.
#[derive(Debug)]
pub struct ErrorContext {
    /// The message shown on the first line
    pub error: String,
    /// Extra explanation, printed in yellow
    pub details: Option<String>,
    /// Actionable next step, printed in green
    pub suggestion: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            suggestion: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// [`DeployerError`] variants get tailored suggestions; IO errors get
/// generic filesystem guidance; anything else is shown with its full
/// context chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(deployer_error) = error.downcast_ref::<DeployerError>() {
        return create_error_context(deployer_error, format!("{error:#}"));
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let context = ErrorContext::new(format!("{error:#}"));
        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => context
                .with_suggestion("Check the permissions of the Polarion installation directory"),
            std::io::ErrorKind::NotFound => context
                .with_suggestion("Check that the file or directory exists and the path is correct"),
            _ => context,
        };
    }

    ErrorContext::new(format!("{error:#}"))
}

fn create_error_context(error: &DeployerError, message: String) -> ErrorContext {
    let context = ErrorContext::new(message);
    match error {
        DeployerError::MavenCommandFailed { .. } => context
            .with_details("Artifacts after the failing one were not processed")
            .with_suggestion(
                "Check the Maven output above; for deploy, verify --repository-id, \
                 --repository-url and the credentials in settings.xml",
            ),
        DeployerError::MavenNotFound { .. } => context
            .with_details("Maven is invoked as a subprocess for every artifact")
            .with_suggestion("Install Maven and make sure 'mvn' is on PATH, or pass --mvn <path>"),
        DeployerError::PluginsDirNotFound { .. } => context
            .with_details("Artifacts are discovered under <polarion-home>/polarion/plugins")
            .with_suggestion("Check that --polarion-home points at the Polarion installation root"),
        DeployerError::ConfigError { .. } => {
            context.with_suggestion("Fix the configuration file or drop the --config option")
        }
        _ => context,
    }
}
