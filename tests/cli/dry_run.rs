//! Dry-run must never execute a mutating gh call.

use crate::support::*;

#[test]
fn dry_run_prints_but_does_not_execute() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["-R", "acme/widgets", "-e", "staging", "--dry-run"])
        .output()
        .unwrap();
    assert_success(&output);

    assert_stdout_contains(
        &output,
        "[dry-run] gh api -X PUT repos/acme/widgets/environments/staging",
    );
    assert_stdout_contains(&output, "[dry-run] gh secret set");
    assert_stdout_contains(&output, "[dry-run] gh variable set");

    // Only the read-only auth check actually ran
    let log = t.log();
    assert!(log.contains("gh auth status"));
    assert!(!log.contains("secret set"), "dry-run mutated: {log}");
    assert!(!log.contains("variable set"), "dry-run mutated: {log}");
    assert!(!log.contains("api -X PUT"), "dry-run mutated: {log}");
}

#[test]
fn dry_run_delete_missing_lists_but_never_deletes() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["-R", "acme/widgets", "-d", "--dry-run"])
        .env("GH_STUB_SECRETS", REMOTE_SECRETS_WITH_STALE)
        .env("GH_STUB_VARIABLES", REMOTE_VARIABLES_WITH_STALE)
        .output()
        .unwrap();
    assert_success(&output);

    assert_stdout_contains(&output, "[dry-run] gh secret delete STALE");
    assert_stdout_contains(&output, "[dry-run] gh variable delete OLD_VAR");

    let log = t.log();
    assert!(log.contains("gh secret list"), "list should still run: {log}");
    assert!(log.contains("gh variable list"));
    assert!(!log.contains("secret delete"), "dry-run deleted: {log}");
    assert!(!log.contains("variable delete"), "dry-run deleted: {log}");
}

#[test]
fn verbose_prints_invocations_before_running() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["-R", "acme/widgets", "--verbose"])
        .output()
        .unwrap();
    assert_success(&output);

    assert_stdout_contains(&output, "[run] gh secret set");
    assert_stdout_contains(&output, "acme/widgets");
    assert!(t.log().contains("gh secret set"), "verbose must still execute");
}

#[test]
fn quiet_run_prints_no_invocations() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.cmd().args(["-R", "acme/widgets"]).output().unwrap();
    assert_success(&output);

    assert_stdout_excludes(&output, "[run]");
    assert_stdout_excludes(&output, "[dry-run]");
}
