//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("no committee named '{0}'")]
    NotFound(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => exitcode::NOT_FOUND,
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => exitcode::DATAERR,
                    ApplicationError::ChartNotFound(_) => exitcode::NOINPUT,
                    ApplicationError::AlreadyExists(_) => exitcode::CANTCREAT,
                    ApplicationError::Config { .. } => exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => exitcode::IOERR,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_follow_error_layer() {
        assert_eq!(CliError::NotFound("x".into()).exit_code(), exitcode::NOT_FOUND);
        assert_eq!(
            CliError::from(ApplicationError::ChartNotFound(PathBuf::from("a.toml"))).exit_code(),
            exitcode::NOINPUT
        );
        let domain = ApplicationError::Domain(DomainError::InvalidDefinition {
            message: "bad".into(),
        });
        assert_eq!(CliError::from(domain).exit_code(), exitcode::DATAERR);
    }
}
