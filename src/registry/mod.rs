//! Entity registry
//!
//! Name-keyed tables of access types, resources, roles and users. The
//! registry only grows: entities are created once, extended in place, and
//! never removed.

pub mod entities;
pub mod store;

pub use entities::{Resource, Role, User};
pub use store::RbacRegistry;
