//! RBAC Shell
//!
//! An in-memory role-based access control engine driven by a line-oriented
//! command shell.
//!
//! ## Model
//!
//! ```text
//! access types (READ, WRITE)
//! resources  → allowed access types
//! roles      → resource → granted access types
//! users      → assigned roles
//! ```
//!
//! All relationships are by name. An entity must exist before anything can
//! reference it, and nothing is ever removed.
//!
//! ## Example Session
//!
//! ```text
//! rbac> addAccess READ
//! Added access type: READ
//! rbac> addResource file1
//! Added resource: file1
//! rbac> addAccessOnResource READ file1
//! Added READ access to resource: file1
//! rbac> addRole admin
//! Added role: admin
//! rbac> addAccessOnResourceToRole READ file1 admin
//! Added READ access on file1 to role: admin
//! rbac> addUser alice
//! Added user: alice
//! rbac> addRoleToUser admin alice
//! Added role admin to user: alice
//! rbac> checkAccess alice file1 READ
//! Yes
//! ```

pub mod access_control;
pub mod config;
pub mod error;
pub mod registry;
pub mod shell;

// Re-export main types
pub use access_control::{AccessDecision, AccessResolver, AccessType};
pub use config::{AppConfig, load_config};
pub use error::{CommandError, ConfigError, RegistryError, ShellError};
pub use registry::RbacRegistry;
pub use shell::{Dispatcher, Response, Shell};
