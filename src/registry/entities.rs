//! Registry entities
//!
//! Entities refer to each other by name only; the registry owns them all.

use crate::access_control::AccessType;
use std::collections::{BTreeSet, HashMap, HashSet};

/// A named protectable entity with the access types it supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    allowed_access: HashSet<AccessType>,
}

impl Resource {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allowed_access: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the resource supports this access type at all
    pub fn permits(&self, access: AccessType) -> bool {
        self.allowed_access.contains(&access)
    }

    pub fn allowed_access(&self) -> impl Iterator<Item = AccessType> + '_ {
        self.allowed_access.iter().copied()
    }

    pub(crate) fn allow(&mut self, access: AccessType) {
        self.allowed_access.insert(access);
    }
}

/// A named bundle of (resource, access type) grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    name: String,
    grants: HashMap<String, HashSet<AccessType>>,
}

impl Role {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grants: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this role grants `access` on `resource`
    pub fn grants(&self, resource: &str, access: AccessType) -> bool {
        self.grants
            .get(resource)
            .is_some_and(|granted| granted.contains(&access))
    }

    /// Access types granted on `resource`, if any were granted
    pub fn grants_on(&self, resource: &str) -> Option<&HashSet<AccessType>> {
        self.grants.get(resource)
    }

    pub(crate) fn grant(&mut self, resource: &str, access: AccessType) {
        self.grants
            .entry(resource.to_string())
            .or_default()
            .insert(access);
    }
}

/// A named principal holding role assignments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    roles: BTreeSet<String>,
}

impl User {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Assigned role names, in lexical order
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    pub(crate) fn assign(&mut self, role: &str) {
        self.roles.insert(role.to_string());
    }
}
