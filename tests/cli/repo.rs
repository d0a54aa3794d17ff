//! Repository detection via the git remote.

use crate::support::*;

#[test]
fn detects_repo_from_ssh_remote() {
    let t = Test::with_env_file("A=b\n");

    let output = t.cmd().output().unwrap();
    assert_success(&output);

    let log = t.log();
    assert!(log.contains("git remote get-url origin"));
    assert!(log.contains("-R acme/widgets"));
}

#[test]
fn detects_repo_from_https_remote() {
    let t = Test::with_env_file("A=b\n");

    let output = t
        .cmd()
        .env("GIT_STUB_REMOTE", "https://github.com/octo/app")
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.log().contains("-R octo/app"));
}

#[test]
fn unsupported_remote_fails_with_hint() {
    let t = Test::with_env_file("A=b\n");

    let output = t
        .cmd()
        .env("GIT_STUB_REMOTE", "ssh://gitlab.example.com/octo/app.git")
        .output()
        .unwrap();
    assert_failure(&output);

    assert_stderr_contains(&output, "unsupported origin url");
    assert_stdout_contains(&output, "-R owner/repo");
}

#[test]
fn git_failure_fails_detection() {
    let t = Test::with_env_file("A=b\n");

    let output = t.cmd().env("GIT_STUB_FAIL", "1").output().unwrap();
    assert_failure(&output);

    assert_stderr_contains(&output, "unable to detect repository");
}

#[test]
fn explicit_repo_skips_detection() {
    let t = Test::with_env_file("A=b\n");

    let output = t.cmd().args(["-R", "octo/app"]).output().unwrap();
    assert_success(&output);

    assert!(!t.log().contains("git remote get-url"));
}

#[test]
fn gh_repo_env_var_sets_repo() {
    let t = Test::with_env_file("A=b\n");

    let output = t.cmd().env("GH_REPO", "octo/app").output().unwrap();
    assert_success(&output);

    let log = t.log();
    assert!(log.contains("-R octo/app"));
    assert!(!log.contains("git remote get-url"));
}
