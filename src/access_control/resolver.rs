//! Access control resolver
//!
//! Decides whether a user may perform an access on a resource:
//! 1. The request must name a registered user, resource and access type
//! 2. The resource must permit the access type
//! 3. At least one of the user's roles must grant the access on the resource

use crate::access_control::types::AccessType;
use crate::registry::RbacRegistry;
use std::fmt;
use tracing::{debug, trace};

/// Access control resolver
///
/// A read-only view over the registry. Building one is free, so callers
/// create it per check.
pub struct AccessResolver<'a> {
    registry: &'a RbacRegistry,
}

/// Why a request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    InvalidAccessType,
    UnknownUser,
    UnknownResource,
    AccessTypeNotRegistered,
    NotPermittedOnResource,
    NoGrantingRole,
}

impl DenyReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DenyReason::InvalidAccessType => "invalid access type",
            DenyReason::UnknownUser => "unknown user",
            DenyReason::UnknownResource => "unknown resource",
            DenyReason::AccessTypeNotRegistered => "access type not registered",
            DenyReason::NotPermittedOnResource => "access type not permitted on resource",
            DenyReason::NoGrantingRole => "no assigned role grants access",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access is allowed through the named role
    Allowed { role: String },
    /// Access is denied
    Denied(DenyReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed { .. })
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, AccessDecision::Denied(_))
    }
}

impl<'a> AccessResolver<'a> {
    pub fn new(registry: &'a RbacRegistry) -> Self {
        Self { registry }
    }

    /// Check whether `user` may perform `access` on `resource`
    ///
    /// Missing entities and malformed tokens are folded into a denial.
    pub fn check(&self, user: &str, resource: &str, access: &str) -> AccessDecision {
        let decision = self.resolve(user, resource, access);
        debug!(user, resource, access, decision = ?decision, "Checked access");
        decision
    }

    /// Convenience wrapper returning only the verdict
    pub fn check_access(&self, user: &str, resource: &str, access: &str) -> bool {
        self.check(user, resource, access).is_allowed()
    }

    fn resolve(&self, user_name: &str, resource_name: &str, access: &str) -> AccessDecision {
        let Some(access) = AccessType::try_parse(access) else {
            return AccessDecision::Denied(DenyReason::InvalidAccessType);
        };
        let Some(user) = self.registry.user(user_name) else {
            return AccessDecision::Denied(DenyReason::UnknownUser);
        };
        let Some(resource) = self.registry.resource(resource_name) else {
            return AccessDecision::Denied(DenyReason::UnknownResource);
        };
        if !self.registry.has_access_type(access) {
            return AccessDecision::Denied(DenyReason::AccessTypeNotRegistered);
        }

        if !resource.permits(access) {
            trace!("Resource gate rejected request");
            return AccessDecision::Denied(DenyReason::NotPermittedOnResource);
        }

        user.roles()
            .filter_map(|name| self.registry.role(name))
            .find(|role| role.grants(resource_name, access))
            .map(|role| AccessDecision::Allowed {
                role: role.name().to_string(),
            })
            .unwrap_or(AccessDecision::Denied(DenyReason::NoGrantingRole))
    }
}
