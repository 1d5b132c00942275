//! Integration tests for the `dap` binary.
//!
//! Bundles are built on the fly with the `tar` crate; the orchestration tool
//! is replaced by a shell script selected through `DAP_CONFIG`.

#![allow(clippy::expect_used, deprecated)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const COMPOSE: &[u8] = b"services: {}\n";
const META: &[u8] = b"version: \"1.0\"\nauthor: \"Acme\"\nindex: \"\"\n";

fn dap() -> Command {
    let mut cmd = Command::cargo_bin("dap").expect("dap binary should exist");
    cmd.env_remove("DAP_LOG");
    cmd
}

fn write_bundle(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let mut builder = tar::Builder::new(Vec::new());
    for (entry, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, entry, *data)
            .expect("append entry");
    }
    let path = dir.join(name);
    std::fs::write(&path, builder.into_inner().expect("finish tar")).expect("write bundle");
    path
}

// --- Argument handling ---

#[test]
fn test_no_args_exits_zero_silently() {
    dap()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help_describes_bundle_argument() {
    dap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("BUNDLE"));
}

// --- Fatal errors ---

#[test]
fn test_missing_bundle_is_fatal_and_logged_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    dap()
        .arg(dir.path().join("nope.dap"))
        .env("DAP_CONFIG", dir.path().join("config.yaml"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cannot open bundle"))
        .stdout(predicate::str::contains("Application:").not());
}

#[test]
fn test_malformed_metadata_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = write_bundle(
        dir.path(),
        "broken.dap",
        &[("docker-application.yml", b"version: [oops\n".as_slice())],
    );
    dap()
        .arg(bundle)
        .env("DAP_CONFIG", dir.path().join("config.yaml"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cannot decode docker-application.yml"));
}

// --- Full runs against a fake orchestration tool ---

#[cfg(unix)]
mod with_fake_compose {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    /// Install a fake orchestration tool that echoes what it was given and
    /// exits with `code`, and a config file selecting it.
    fn fake_compose(dir: &Path, code: i32) -> PathBuf {
        let script = dir.join("fake-compose");
        std::fs::write(
            &script,
            format!(
                "#!/bin/sh\n\
                 echo \"args: $*\"\n\
                 echo \"convert: $COMPOSE_CONVERT_WINDOWS_PATHS\"\n\
                 echo \"compose: $(cat \"$2\")\"\n\
                 echo \"file: $2\"\n\
                 exit {code}\n"
            ),
        )
        .expect("write script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");

        let config = dir.join("config.yaml");
        std::fs::write(
            &config,
            format!("compose:\n  command: {}\n", script.display()),
        )
        .expect("write config");
        config
    }

    fn compose_file_from(stdout: &[u8]) -> PathBuf {
        let stdout = String::from_utf8_lossy(stdout);
        let line = stdout
            .lines()
            .find_map(|l| l.strip_prefix("file: "))
            .expect("script should report the compose file");
        PathBuf::from(line)
    }

    #[test]
    fn test_runs_stack_and_cleans_up_working_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = fake_compose(dir.path(), 0);
        let bundle = write_bundle(
            dir.path(),
            "myapp.dap",
            &[("docker-compose.yml", COMPOSE), ("docker-application.yml", META)],
        );

        let assert = dap()
            .arg(&bundle)
            .env("DAP_CONFIG", &config)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Application: myapp\nVersion: 1.0\nAuthor: Acme\n",
            ))
            .stdout(predicate::str::contains("convert: 1"))
            .stdout(predicate::str::contains("compose: services: {}"))
            .stdout(predicate::str::is_match(r"args: -f \S*/docker-compose\.yml up").expect("regex"));

        let compose_file = compose_file_from(&assert.get_output().stdout);
        let workdir = compose_file.parent().expect("workdir");
        assert!(
            workdir
                .file_name()
                .expect("name")
                .to_string_lossy()
                .starts_with("dap-")
        );
        assert!(!workdir.exists(), "working directory should be removed");
    }

    #[test]
    fn test_stack_exit_stops_waiting_for_unreachable_index() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = fake_compose(dir.path(), 0);
        // Bind then release a port so nothing is listening on it.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .expect("bind")
            .local_addr()
            .expect("addr")
            .port();
        let meta = format!("version: \"2\"\nauthor: Acme\nindex: \"http://127.0.0.1:{port}\"\n");
        let bundle = write_bundle(
            dir.path(),
            "waiting.dap",
            &[("docker-compose.yml", COMPOSE), ("docker-application.yml", meta.as_bytes())],
        );

        dap()
            .arg(&bundle)
            .env("DAP_CONFIG", &config)
            .timeout(std::time::Duration::from_secs(30))
            .assert()
            .success()
            .stdout(predicate::str::contains("Application: waiting"));
    }

    #[test]
    fn test_failing_stack_is_fatal_and_still_cleans_up() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = fake_compose(dir.path(), 4);
        let bundle = write_bundle(
            dir.path(),
            "myapp.dap",
            &[("docker-compose.yml", COMPOSE), ("docker-application.yml", META)],
        );

        let assert = dap()
            .arg(&bundle)
            .env("DAP_CONFIG", &config)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Author: Acme"))
            .stdout(predicate::str::contains("failed"));

        let compose_file = compose_file_from(&assert.get_output().stdout);
        assert!(!compose_file.parent().expect("workdir").exists());
    }

    #[test]
    fn test_missing_compose_entry_fails_downstream() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = fake_compose(dir.path(), 0);
        let bundle = write_bundle(dir.path(), "empty.dap", &[("docker-application.yml", META)]);

        // The fake tool cannot read the descriptor but still exits 0; the
        // bundle itself is accepted.
        dap()
            .arg(&bundle)
            .env("DAP_CONFIG", &config)
            .assert()
            .success()
            .stdout(predicate::str::contains("Application: empty"))
            .stdout(predicate::str::contains("compose: \n"));
    }
}
