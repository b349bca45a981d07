//! Shell integration tests
//!
//! Drives whole sessions through `Shell::run` and checks the exact output.

use rbac_shell::config::ShellConfig;
use rbac_shell::shell::{COMMANDS, Dispatcher, Response, Shell};
use rbac_shell::error::CommandError;
use rstest::rstest;

const GRANT_SCRIPT: &str = "\
addAccess READ
addResource file1
addAccessOnResource READ file1
addRole admin
addAccessOnResourceToRole READ file1 admin
addUser alice
addRoleToUser admin alice
checkAccess alice file1 READ
";

fn run_script(script: &str) -> (Shell, String) {
    let mut shell = Shell::new(ShellConfig {
        banner: false,
        ..Default::default()
    });
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).unwrap();
    (shell, String::from_utf8(out).unwrap())
}

#[test]
fn test_grant_script_answers_yes() {
    let (_, output) = run_script(GRANT_SCRIPT);
    assert_eq!(
        output,
        "\
Added access type: READ
Added resource: file1
Added READ access to resource: file1
Added role: admin
Added READ access on file1 to role: admin
Added user: alice
Added role admin to user: alice
Yes
"
    );
}

#[test]
fn test_grant_script_without_assignment_answers_no() {
    let script = GRANT_SCRIPT.replace("addRoleToUser admin alice\n", "");
    let (_, output) = run_script(&script);
    assert_eq!(output.lines().last(), Some("No"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let script = "\
addAccess read
addResource file1
addResource file1
addRoleToUser admin alice
bogus
checkAccess ghost file1 READ
";
    let (_, output) = run_script(script);
    assert_eq!(
        output,
        "\
Invalid access type: read
Added resource: file1
Resource already exists: file1
Role not found: admin
Invalid command or wrong number of arguments
No
"
    );
}

#[test]
fn test_blank_lines_produce_no_output() {
    let (_, output) = run_script("\n   \naddUser alice\n\t\n");
    assert_eq!(output, "Added user: alice\n");
}

#[test]
fn test_exit_ends_the_session() {
    let (shell, output) = run_script("addUser alice\nExit\naddUser bob\n");
    assert_eq!(output, "Added user: alice\n");
    assert!(shell.registry().user("bob").is_none());
}

#[test]
fn test_undecodable_line_is_skipped() {
    let mut shell = Shell::new(ShellConfig {
        banner: false,
        ..Default::default()
    });
    let mut out = Vec::new();
    let input: &[u8] = b"addUser alice\naddUser b\xffob\naddUser carol\n";

    shell.run(input, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\
Added user: alice
Error: line 2 is not valid UTF-8
Added user: carol
"
    );
    assert!(shell.registry().user("alice").is_some());
    assert!(shell.registry().user("carol").is_some());
    assert_eq!(shell.registry().users().count(), 2);
    assert_eq!(shell.stats().failed, 1);
}

#[test]
fn test_crlf_line_endings() {
    let (shell, output) = run_script("addUser alice\r\naddUser bob\r\n");
    assert_eq!(output, "Added user: alice\nAdded user: bob\n");
    assert!(shell.registry().user("bob").is_some());
}

#[test]
fn test_end_of_input_without_newline() {
    let (shell, _) = run_script("addUser alice");
    assert!(shell.registry().user("alice").is_some());
}

#[test]
fn test_banner_precedes_output() {
    let mut shell = Shell::new(ShellConfig::default());
    let mut out = Vec::new();
    shell.run("checkAccess a b READ\n".as_bytes(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("RBAC CLI Application"));
    assert_eq!(lines.next(), Some("Type 'exit' to quit"));
    assert_eq!(lines.next(), Some("Available commands:"));
    for command in COMMANDS {
        assert_eq!(lines.next(), Some(format!("  {}", command.usage).as_str()));
    }
    assert_eq!(lines.next(), Some("No"));
    assert_eq!(lines.next(), None);
}

// =============================================================================
// State-preserving rejection
// =============================================================================

#[rstest]
#[case::unknown_command("grantEverything alice")]
#[case::too_few_args("addAccessOnResource READ")]
#[case::too_many_args("addUser alice bob")]
#[case::bare_keyword("addRole")]
#[case::check_missing_access("checkAccess alice file1")]
#[case::check_extra_arg("checkAccess alice file1 READ now")]
#[case::wrong_case_keyword("adduser carol")]
fn test_invalid_commands_never_mutate(#[case] line: &str) {
    let mut dispatcher = Dispatcher::new();
    for setup in GRANT_SCRIPT.lines() {
        dispatcher.execute(setup).unwrap();
    }
    let snapshot = dispatcher.registry().clone();

    assert_eq!(dispatcher.execute(line), Err(CommandError::Invalid));
    assert_eq!(dispatcher.registry(), &snapshot);
}

#[test]
fn test_lowercase_access_type_leaves_set_unchanged() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.execute("addAccess WRITE").unwrap();
    let snapshot = dispatcher.registry().clone();

    let err = dispatcher.execute("addAccess read").unwrap_err();
    assert_eq!(err.to_string(), "Invalid access type: read");
    assert_eq!(dispatcher.registry(), &snapshot);
}

#[test]
fn test_check_access_returns_decision() {
    let mut dispatcher = Dispatcher::new();
    for setup in GRANT_SCRIPT.lines() {
        dispatcher.execute(setup).unwrap();
    }

    assert_eq!(
        dispatcher.execute("checkAccess alice file1 READ"),
        Ok(Response::Decision(true))
    );
    assert_eq!(
        dispatcher.execute("checkAccess alice file1 WRITE"),
        Ok(Response::Decision(false))
    );
}
