//! Command parsing
//!
//! A command line is split on whitespace. The first token selects the
//! command, the rest are positional arguments, and the token count must
//! match the command's arity exactly.

use crate::error::CommandError;

/// Name and usage of a shell command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
}

/// Every registry command the shell understands
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "addAccess",
        usage: "addAccess <ACCESS_TYPE>",
    },
    CommandSpec {
        name: "addResource",
        usage: "addResource <RESOURCE_NAME>",
    },
    CommandSpec {
        name: "addAccessOnResource",
        usage: "addAccessOnResource <ACCESS_TYPE> <RESOURCE_NAME>",
    },
    CommandSpec {
        name: "addRole",
        usage: "addRole <ROLE_NAME>",
    },
    CommandSpec {
        name: "addAccessOnResourceToRole",
        usage: "addAccessOnResourceToRole <ACCESS_TYPE> <RESOURCE_NAME> <ROLE_NAME>",
    },
    CommandSpec {
        name: "addUser",
        usage: "addUser <USER_NAME>",
    },
    CommandSpec {
        name: "addRoleToUser",
        usage: "addRoleToUser <ROLE_NAME> <USER_NAME>",
    },
    CommandSpec {
        name: "checkAccess",
        usage: "checkAccess <USER_NAME> <RESOURCE_NAME> <ACCESS_TYPE>",
    },
];

/// A parsed shell command borrowing its arguments from the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    AddAccess {
        access: &'a str,
    },
    AddResource {
        resource: &'a str,
    },
    AddAccessOnResource {
        access: &'a str,
        resource: &'a str,
    },
    AddRole {
        role: &'a str,
    },
    AddAccessOnResourceToRole {
        access: &'a str,
        resource: &'a str,
        role: &'a str,
    },
    AddUser {
        user: &'a str,
    },
    AddRoleToUser {
        role: &'a str,
        user: &'a str,
    },
    CheckAccess {
        user: &'a str,
        resource: &'a str,
        access: &'a str,
    },
    Exit,
}

impl<'a> Command<'a> {
    /// Parse one line of input
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &'a str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        if line.eq_ignore_ascii_case("exit") {
            return Ok(Some(Command::Exit));
        }

        let tokens: Vec<&'a str> = line.split_whitespace().collect();
        let command = match tokens[..] {
            ["addAccess", access] => Command::AddAccess { access },
            ["addResource", resource] => Command::AddResource { resource },
            ["addAccessOnResource", access, resource] => {
                Command::AddAccessOnResource { access, resource }
            }
            ["addRole", role] => Command::AddRole { role },
            ["addAccessOnResourceToRole", access, resource, role] => {
                Command::AddAccessOnResourceToRole {
                    access,
                    resource,
                    role,
                }
            }
            ["addUser", user] => Command::AddUser { user },
            ["addRoleToUser", role, user] => Command::AddRoleToUser { role, user },
            ["checkAccess", user, resource, access] => Command::CheckAccess {
                user,
                resource,
                access,
            },
            _ => return Err(CommandError::Invalid),
        };

        Ok(Some(command))
    }

    /// The command keyword
    pub const fn name(&self) -> &'static str {
        match self {
            Command::AddAccess { .. } => "addAccess",
            Command::AddResource { .. } => "addResource",
            Command::AddAccessOnResource { .. } => "addAccessOnResource",
            Command::AddRole { .. } => "addRole",
            Command::AddAccessOnResourceToRole { .. } => "addAccessOnResourceToRole",
            Command::AddUser { .. } => "addUser",
            Command::AddRoleToUser { .. } => "addRoleToUser",
            Command::CheckAccess { .. } => "checkAccess",
            Command::Exit => "exit",
        }
    }

    /// Commands that only read the registry
    pub const fn is_query(&self) -> bool {
        matches!(self, Command::CheckAccess { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t "), Ok(None));
    }

    #[test]
    fn test_extra_whitespace_is_collapsed() {
        assert_eq!(
            Command::parse("  addAccessOnResource   READ\tfile1  "),
            Ok(Some(Command::AddAccessOnResource {
                access: "READ",
                resource: "file1"
            }))
        );
    }

    #[test]
    fn test_exit_is_case_insensitive() {
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse(" EXIT "), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse("exit now"), Err(CommandError::Invalid));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(Command::parse("addaccess READ"), Err(CommandError::Invalid));
        assert_eq!(Command::parse("CHECKACCESS a b READ"), Err(CommandError::Invalid));
    }

    #[test]
    fn test_every_listed_command_has_its_name() {
        for spec in COMMANDS {
            let command = Command::parse(spec.usage).unwrap().unwrap();
            assert_eq!(command.name(), spec.name);
        }
    }

    #[test]
    fn test_only_check_access_is_a_query() {
        let check = Command::parse("checkAccess alice file1 READ").unwrap().unwrap();
        assert!(check.is_query());
        let add = Command::parse("addUser alice").unwrap().unwrap();
        assert!(!add.is_query());
    }
}
