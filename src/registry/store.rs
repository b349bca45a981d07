//! The RBAC registry
//!
//! Owns the four name-keyed tables and every mutation over them. A failed
//! mutation never leaves a partial change behind: all lookups happen before
//! the first write.

use crate::access_control::{AccessResolver, AccessType};
use crate::error::{EntityKind, RegistryError, RegistryResult};
use crate::registry::entities::{Resource, Role, User};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Aggregate root for access types, resources, roles and users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RbacRegistry {
    access_types: BTreeSet<AccessType>,
    resources: HashMap<String, Resource>,
    roles: HashMap<String, Role>,
    users: HashMap<String, User>,
}

impl RbacRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an access type globally
    ///
    /// Registering a type twice is not an error.
    pub fn add_access_type(&mut self, token: &str) -> RegistryResult<AccessType> {
        let access: AccessType = token.parse()?;
        if self.access_types.insert(access) {
            debug!(access = %access, "Registered access type");
        }
        Ok(access)
    }

    pub fn add_resource(&mut self, name: &str) -> RegistryResult<()> {
        if self.resources.contains_key(name) {
            return Err(RegistryError::already_exists(EntityKind::Resource, name));
        }
        self.resources.insert(name.to_string(), Resource::new(name));
        debug!(resource = name, "Registered resource");
        Ok(())
    }

    /// Permit an access type on a resource
    pub fn add_access_on_resource(
        &mut self,
        token: &str,
        resource: &str,
    ) -> RegistryResult<AccessType> {
        let access: AccessType = token.parse()?;
        if !self.resources.contains_key(resource) {
            return Err(RegistryError::not_found(EntityKind::Resource, resource));
        }
        self.require_access_type(access)?;

        if let Some(entry) = self.resources.get_mut(resource) {
            entry.allow(access);
        }
        debug!(resource, access = %access, "Permitted access on resource");
        Ok(access)
    }

    pub fn add_role(&mut self, name: &str) -> RegistryResult<()> {
        if self.roles.contains_key(name) {
            return Err(RegistryError::already_exists(EntityKind::Role, name));
        }
        self.roles.insert(name.to_string(), Role::new(name));
        debug!(role = name, "Registered role");
        Ok(())
    }

    /// Grant an access type on a resource to a role
    ///
    /// Only checks that the resource exists and the type is registered. A
    /// grant the resource does not permit is accepted here and rejected by
    /// the resource gate at check time.
    pub fn add_access_on_resource_to_role(
        &mut self,
        token: &str,
        resource: &str,
        role: &str,
    ) -> RegistryResult<AccessType> {
        let access: AccessType = token.parse()?;
        if !self.roles.contains_key(role) {
            return Err(RegistryError::not_found(EntityKind::Role, role));
        }
        if !self.resources.contains_key(resource) {
            return Err(RegistryError::not_found(EntityKind::Resource, resource));
        }
        self.require_access_type(access)?;

        if let Some(entry) = self.roles.get_mut(role) {
            entry.grant(resource, access);
        }
        debug!(role, resource, access = %access, "Granted access to role");
        Ok(access)
    }

    pub fn add_user(&mut self, name: &str) -> RegistryResult<()> {
        if self.users.contains_key(name) {
            return Err(RegistryError::already_exists(EntityKind::User, name));
        }
        self.users.insert(name.to_string(), User::new(name));
        debug!(user = name, "Registered user");
        Ok(())
    }

    pub fn add_role_to_user(&mut self, role: &str, user: &str) -> RegistryResult<()> {
        if !self.roles.contains_key(role) {
            return Err(RegistryError::not_found(EntityKind::Role, role));
        }
        let entry = self
            .users
            .get_mut(user)
            .ok_or_else(|| RegistryError::not_found(EntityKind::User, user))?;

        entry.assign(role);
        debug!(role, user, "Assigned role to user");
        Ok(())
    }

    /// Check whether `user` may perform `access` on `resource`
    ///
    /// Never fails: unknown names and malformed tokens yield `false`.
    pub fn check_access(&self, user: &str, resource: &str, access: &str) -> bool {
        AccessResolver::new(self).check_access(user, resource, access)
    }

    fn require_access_type(&self, access: AccessType) -> RegistryResult<()> {
        if self.has_access_type(access) {
            Ok(())
        } else {
            Err(RegistryError::unregistered(access))
        }
    }

    pub fn has_access_type(&self, access: AccessType) -> bool {
        self.access_types.contains(&access)
    }

    /// Registered access types, in declaration order of the enumeration
    pub fn access_types(&self) -> impl Iterator<Item = AccessType> + '_ {
        self.access_types.iter().copied()
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}
