#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

fn agile() -> Command {
    Command::cargo_bin("agile").unwrap()
}

// ---------------------------------------------------------------------------
// Command stubs
// ---------------------------------------------------------------------------

#[test]
fn init_prints_its_fixed_message_pair() {
    agile()
        .arg("init")
        .assert()
        .success()
        .stdout("Initializing a new AgileKit project...\nProject initialized successfully!\n");
}

#[test]
fn upgrade_prints_its_fixed_message_pair() {
    agile()
        .arg("upgrade")
        .assert()
        .success()
        .stdout("Upgrading the application...\nApplication upgraded successfully!\n");
}

#[test]
fn check_prints_its_fixed_message_pair() {
    agile()
        .arg("check")
        .assert()
        .success()
        .stdout("Checking the application...\nApplication check completed successfully!\n");
}

// ---------------------------------------------------------------------------
// Bare invocation
// ---------------------------------------------------------------------------

#[test]
fn bare_invocation_prints_banner_welcome_and_hint() {
    agile()
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .assert()
        .success()
        .stdout(predicate::str::contains("███"))
        .stdout(predicate::str::contains(
            "Wangkanai AgileKit - Agile Agent Development Toolkit",
        ))
        .stdout(predicate::str::contains(
            "Welcome to AgileKit CLI! Use --help to see available commands.",
        ))
        .stdout(predicate::str::contains(
            "Run 'agile --help' for usage information",
        ));
}

#[test]
fn piped_width_centers_as_if_eighty_columns() {
    // tagline is 52 chars and the hint 40: padded 14 and 20 at width 80
    agile()
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "\n{}Wangkanai AgileKit",
            " ".repeat(14)
        )))
        .stdout(predicate::str::contains(format!(
            "\n{}Run 'agile --help'",
            " ".repeat(20)
        )));
}

#[test]
fn redirected_output_carries_no_escape_sequences() {
    agile()
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .assert()
        .success()
        .stdout(predicate::str::contains('\u{1b}').not());
}

// ---------------------------------------------------------------------------
// Help and version
// ---------------------------------------------------------------------------

#[test]
fn help_lists_the_subcommand_descriptions() {
    agile()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AgileKit CLI tool"))
        .stdout(predicate::str::contains("Initialize a new AgileKit project"))
        .stdout(predicate::str::contains(
            "Upgrade the application to the latest version",
        ))
        .stdout(predicate::str::contains("Check the application for issues"))
        .stdout(predicate::str::contains("Generate shell completions"))
        .stdout(predicate::str::contains("output the version number"));
}

#[test]
fn short_version_flag_prints_the_version() {
    agile()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0"));
}

#[test]
fn long_version_flag_prints_the_version() {
    agile()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0"));
}

// ---------------------------------------------------------------------------
// Parser errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_subcommand_fails() {
    agile()
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn unknown_flag_on_subcommand_fails() {
    agile()
        .args(["init", "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

// ---------------------------------------------------------------------------
// Shell completions
// ---------------------------------------------------------------------------

#[test]
fn completions_emit_a_script_for_the_binary() {
    agile()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agile"));
}
