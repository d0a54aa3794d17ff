//! Tests for --delete-missing pruning.

use crate::support::*;

#[test]
fn prunes_extras_with_yes() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["-R", "acme/widgets", "-d", "--yes"])
        .env("GH_STUB_SECRETS", REMOTE_SECRETS_WITH_STALE)
        .env("GH_STUB_VARIABLES", REMOTE_VARIABLES_WITH_STALE)
        .output()
        .unwrap();
    assert_success(&output);

    let log = t.log();
    assert!(log.contains("gh secret delete STALE -R acme/widgets"));
    assert!(log.contains("gh variable delete OLD_VAR -R acme/widgets"));
    // Entries present in the file survive
    assert!(!log.contains("delete DB_PASS"));
    assert!(!log.contains("delete API_KEY"));
    assert!(!log.contains("delete DB_HOST"));
    assert!(!log.contains("delete LOG_LEVEL"));

    assert_stdout_contains(&output, "deleted secret STALE");
    assert_stdout_contains(&output, "deleted variable OLD_VAR");
}

#[test]
fn nothing_to_delete_when_converged() {
    let t = Test::with_env_file("DB_HOST=db\n");

    let output = t
        .cmd()
        .args(["-R", "acme/widgets", "-d", "--yes"])
        .env("GH_STUB_VARIABLES", r#"[{"name":"DB_HOST"}]"#)
        .output()
        .unwrap();
    assert_success(&output);

    assert_stdout_contains(&output, "nothing to delete");
    assert!(!t.log().contains("delete"));
}

#[test]
fn prune_respects_environment_scope() {
    let t = Test::with_env_file("DB_HOST=db\n");

    let output = t
        .cmd()
        .args(["-R", "acme/widgets", "-e", "staging", "-d", "--yes"])
        .env("GH_STUB_VARIABLES", r#"[{"name":"OLD_VAR"}]"#)
        .output()
        .unwrap();
    assert_success(&output);

    let log = t.log();
    assert!(log.contains("gh variable list --json name -R acme/widgets --env staging"));
    assert!(log.contains("gh variable delete OLD_VAR -R acme/widgets --env staging"));
}

#[test]
fn prune_honors_keep_prefix_names() {
    let t = Test::with_env_file("SECURED_DB_PASS=x\n");

    let output = t
        .cmd()
        .args(["-R", "acme/widgets", "-d", "--yes", "--keep-prefix"])
        .env(
            "GH_STUB_SECRETS",
            r#"[{"name":"SECURED_DB_PASS"},{"name":"DB_PASS"}]"#,
        )
        .output()
        .unwrap();
    assert_success(&output);

    let log = t.log();
    assert!(log.contains("gh secret delete DB_PASS"));
    assert!(!log.contains("delete SECURED_DB_PASS"));
}

#[test]
fn malformed_list_json_fails() {
    let t = Test::with_env_file("DB_HOST=db\n");

    let output = t
        .cmd()
        .args(["-R", "acme/widgets", "-d", "--yes"])
        .env("GH_STUB_SECRETS", "not json")
        .output()
        .unwrap();
    assert_failure(&output);

    assert_stderr_contains(&output, "parse gh list output");
}
