//! Error types for rbac-shell
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors that are part of the API,
//! and render them as status lines at the shell boundary. The binary wraps
//! whatever reaches it in `anyhow`.

use crate::access_control::AccessType;
use std::fmt;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },
}

/// Kind of entity held by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    AccessType,
    Resource,
    Role,
    User,
}

impl EntityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::AccessType => "Access type",
            EntityKind::Resource => "Resource",
            EntityKind::Role => "Role",
            EntityKind::User => "User",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by registry mutations
///
/// Every variant leaves the registry untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid access type: {0}")]
    InvalidAccessType(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: EntityKind, name: String },

    #[error("{kind} already exists: {name}")]
    AlreadyExists { kind: EntityKind, name: String },
}

impl RegistryError {
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// An access type that parsed but was never registered
    pub fn unregistered(access: AccessType) -> Self {
        Self::not_found(EntityKind::AccessType, access.as_str())
    }

    pub fn already_exists(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind,
            name: name.into(),
        }
    }

    /// Duplicate adds are reported but do not count as failures
    pub fn is_benign(&self) -> bool {
        matches!(self, RegistryError::AlreadyExists { .. })
    }
}

/// Command parsing and execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command or wrong number of arguments")]
    Invalid,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Interactive session errors
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for registry mutations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_messages() {
        let err = RegistryError::InvalidAccessType("read".into());
        assert_eq!(err.to_string(), "Invalid access type: read");

        let err = RegistryError::not_found(EntityKind::Resource, "file1");
        assert_eq!(err.to_string(), "Resource not found: file1");

        let err = RegistryError::unregistered(AccessType::Write);
        assert_eq!(err.to_string(), "Access type not found: WRITE");

        let err = RegistryError::already_exists(EntityKind::Role, "admin");
        assert_eq!(err.to_string(), "Role already exists: admin");
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::Missing {
            field: "logging.level".into(),
        };
        assert_eq!(err.to_string(), "Missing required configuration: logging.level");

        let err = ConfigError::Load("Configuration file not found: x.toml".into());
        assert_eq!(
            err.to_string(),
            "Failed to load configuration: Configuration file not found: x.toml"
        );
    }

    #[test]
    fn test_only_already_exists_is_benign() {
        assert!(RegistryError::already_exists(EntityKind::User, "alice").is_benign());
        assert!(!RegistryError::not_found(EntityKind::User, "alice").is_benign());
        assert!(!RegistryError::InvalidAccessType("x".into()).is_benign());
    }

    #[test]
    fn test_command_error_wraps_registry_message() {
        let err: CommandError = RegistryError::not_found(EntityKind::Role, "admin").into();
        assert_eq!(err.to_string(), "Role not found: admin");
        assert_eq!(
            CommandError::Invalid.to_string(),
            "Invalid command or wrong number of arguments"
        );
    }
}
