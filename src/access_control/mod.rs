//! Access control module
//!
//! Provides the access type enumeration and the authorization decision
//! over the entity registry.
//!
//! ## Decision Model
//!
//! A request `(user, resource, access)` is allowed only when all of the
//! following hold:
//!
//! 1. `access` is a canonical token (`READ` or `WRITE`) registered globally
//! 2. `user` and `resource` are registered
//! 3. The resource's allowed-access set contains `access`
//! 4. Some role assigned to `user` grants `access` on `resource`
//!
//! Step 3 dominates step 4: a role grant on a resource that never permits
//! the access is silently ineffective.

pub mod resolver;
pub mod types;

pub use resolver::{AccessDecision, AccessResolver, DenyReason};
pub use types::AccessType;
