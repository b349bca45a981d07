//! Command dispatcher
//!
//! Routes a parsed command to the registry and turns the outcome into a
//! response the session can print.

use crate::error::CommandError;
use crate::registry::RbacRegistry;
use crate::shell::command::Command;
use std::fmt;
use tracing::{debug, instrument, trace, warn};

/// Outcome of executing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Blank line, nothing to report
    Empty,
    /// Status report of a mutation
    Status(String),
    /// Verdict of an access check
    Decision(bool),
    /// End of session requested
    Exit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Empty | Response::Exit => Ok(()),
            Response::Status(status) => f.write_str(status),
            Response::Decision(true) => f.write_str("Yes"),
            Response::Decision(false) => f.write_str("No"),
        }
    }
}

/// Executes command lines against the registry it owns
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: RbacRegistry,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing registry
    pub fn with_registry(registry: RbacRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RbacRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> RbacRegistry {
        self.registry
    }

    /// Parse and execute one line
    ///
    /// Unknown commands and wrong arity fail with `CommandError::Invalid`
    /// before the registry is touched.
    pub fn execute(&mut self, line: &str) -> Result<Response, CommandError> {
        let Some(command) = Command::parse(line).inspect_err(|_| {
            warn!(line = line.trim(), "Rejected command");
        })?
        else {
            return Ok(Response::Empty);
        };

        self.dispatch(command)
    }

    /// Execute an already parsed command
    #[instrument(skip_all, fields(command = command.name()))]
    pub fn dispatch(&mut self, command: Command<'_>) -> Result<Response, CommandError> {
        if command.is_query() {
            trace!("Dispatching query");
        } else {
            debug!("Dispatching command");
        }
        let registry = &mut self.registry;

        let status = match command {
            Command::AddAccess { access } => {
                let access = registry.add_access_type(access)?;
                format!("Added access type: {access}")
            }
            Command::AddResource { resource } => {
                registry.add_resource(resource)?;
                format!("Added resource: {resource}")
            }
            Command::AddAccessOnResource { access, resource } => {
                let access = registry.add_access_on_resource(access, resource)?;
                format!("Added {access} access to resource: {resource}")
            }
            Command::AddRole { role } => {
                registry.add_role(role)?;
                format!("Added role: {role}")
            }
            Command::AddAccessOnResourceToRole {
                access,
                resource,
                role,
            } => {
                let access = registry.add_access_on_resource_to_role(access, resource, role)?;
                format!("Added {access} access on {resource} to role: {role}")
            }
            Command::AddUser { user } => {
                registry.add_user(user)?;
                format!("Added user: {user}")
            }
            Command::AddRoleToUser { role, user } => {
                registry.add_role_to_user(role, user)?;
                format!("Added role {role} to user: {user}")
            }
            Command::CheckAccess {
                user,
                resource,
                access,
            } => {
                return Ok(Response::Decision(
                    registry.check_access(user, resource, access),
                ));
            }
            Command::Exit => return Ok(Response::Exit),
        };

        Ok(Response::Status(status))
    }
}
