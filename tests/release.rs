//! End-to-end runs of the release binary against fake toolchain and signer scripts.

#![cfg(unix)]

mod common;

use common::{BUILD_TIME, Project, read_tar_gz, read_zip};
use predicates::prelude::*;

const VERSION: &str = "v1.2.3";
const PASSWORD: &str = "s3cr3t-pkcs12";

const ALL_ARCHIVES: [&str; 6] = [
    "slangd-v1_2_3-darwin-386.tar.gz",
    "slangd-v1_2_3-darwin-amd64.tar.gz",
    "slangd-v1_2_3-linux-386.tar.gz",
    "slangd-v1_2_3-linux-amd64.tar.gz",
    "slangd-v1_2_3-windows-386.zip",
    "slangd-v1_2_3-windows-amd64.zip",
];

#[test]
fn unsigned_release_builds_full_matrix() {
    let project = Project::new();

    project.command().arg(VERSION).assert().success();

    assert_eq!(project.released_files(), ALL_ARCHIVES);

    let calls = project.calls();
    assert_eq!(calls.len(), 6);
    assert!(calls.iter().all(|c| c.starts_with("go ")));
    assert!(calls[0].contains("GOOS=darwin GOARCH=386"));
    assert!(calls[5].contains("GOOS=windows GOARCH=amd64"));
    assert!(calls.iter().all(|c| c.contains("CGO_ENABLED=0")));

    let expected_flags =
        format!("-X main.Version={VERSION} -X main.BuildTime={BUILD_TIME} ");
    assert!(calls[0].contains(&expected_flags), "{}", calls[0]);
    assert!(calls[0].ends_with("./cmd/slangd"));

    let release_dir = project.release_dir();
    let (name, contents) = read_tar_gz(&release_dir.join("slangd-v1_2_3-linux-amd64.tar.gz"));
    assert_eq!(name, "slangd-v1_2_3-linux-amd64");
    assert_eq!(contents, "slangd linux/amd64\n");

    let (name, contents) = read_zip(&release_dir.join("slangd-v1_2_3-windows-386.zip"));
    assert_eq!(name, "slangd-v1_2_3-windows-386.exe");
    assert_eq!(contents, "slangd windows/386\n");
}

#[test]
fn compiler_runs_from_project_root() {
    let project = Project::new();
    project
        .command()
        .current_dir(std::env::temp_dir())
        .arg("--root")
        .arg(project.root())
        .arg(VERSION)
        .assert()
        .success();

    let root = project.root().canonicalize().unwrap();
    let calls = project.calls();
    assert!(
        calls
            .iter()
            .all(|c| c.contains(&format!("PWD={}", root.display()))
                || c.contains(&format!("PWD={}", project.root().display()))),
        "{calls:?}"
    );
    assert_eq!(project.released_files().len(), 6);
}

#[test]
fn signed_release_signs_only_windows_binaries() {
    let project = Project::new();

    project
        .command()
        .arg(VERSION)
        .arg(PASSWORD)
        .assert()
        .success()
        .stdout(predicate::str::contains(PASSWORD).not())
        .stderr(predicate::str::contains(PASSWORD).not());

    assert_eq!(project.released_files(), ALL_ARCHIVES);

    let signs: Vec<String> = project
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("sign "))
        .collect();
    assert_eq!(signs.len(), 2);
    assert!(signs[0].contains(&format!("-pass {PASSWORD}")));
    assert!(signs[0].contains("-pkcs12"));
    assert!(signs[0].contains("ci/b6k_csc.p12"));
    assert!(signs[0].contains("slangd-v1_2_3-windows-386.exe"));
    assert!(signs[0].contains("signed_slangd-v1_2_3-windows-386.exe"));

    let release_dir = project.release_dir();
    let (_, contents) = read_zip(&release_dir.join("slangd-v1_2_3-windows-amd64.zip"));
    assert_eq!(contents, "slangd windows/amd64\nsigned\n");

    let (_, contents) = read_tar_gz(&release_dir.join("slangd-v1_2_3-darwin-386.tar.gz"));
    assert_eq!(contents, "slangd darwin/386\n");
}

#[test]
fn password_from_environment_enables_signing() {
    let project = Project::new();

    project
        .command()
        .env("SLANGD_SIGNING_PASSWORD", PASSWORD)
        .arg(VERSION)
        .assert()
        .success();

    assert_eq!(
        project
            .calls()
            .iter()
            .filter(|c| c.starts_with("sign "))
            .count(),
        2
    );
}

#[test]
fn verbose_output_redacts_password() {
    let project = Project::new();

    project
        .command()
        .args(["--verbose", VERSION, PASSWORD])
        .assert()
        .success()
        .stdout(predicate::str::contains(PASSWORD).not())
        .stderr(predicate::str::contains(PASSWORD).not())
        .stderr(predicate::str::contains("<hidden>"));
}

#[test]
fn missing_version_prints_usage_and_builds_nothing() {
    let project = Project::new();

    project
        .command()
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("Usage"));

    assert!(project.calls().is_empty());
    assert!(!project.release_dir().exists());
}

#[test]
fn target_filter_builds_only_requested_entries() {
    let project = Project::new();

    project
        .command()
        .args([VERSION, "--target", "linux-amd64", "-t", "windows-386"])
        .assert()
        .success();

    assert_eq!(
        project.released_files(),
        [
            "slangd-v1_2_3-linux-amd64.tar.gz",
            "slangd-v1_2_3-windows-386.zip"
        ]
    );
}

#[test]
fn target_outside_matrix_is_rejected() {
    let project = Project::new();

    project
        .command()
        .args([VERSION, "--target", "freebsd-amd64"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not in the release matrix"));

    assert!(project.calls().is_empty());
}

#[test]
fn checksums_and_manifest_are_written() {
    let project = Project::new();

    project
        .command()
        .args([VERSION, "--checksums", "--manifest", "ci/release.json"])
        .assert()
        .success();

    let sums = std::fs::read_to_string(project.release_dir().join("SHA256SUMS")).unwrap();
    let lines: Vec<&str> = sums.lines().collect();
    assert_eq!(lines.len(), 6);
    for (line, archive) in lines.iter().zip(ALL_ARCHIVES) {
        let (hash, name) = line.split_once("  ").unwrap();
        assert_eq!(hash.len(), 64);
        assert_eq!(name, archive);
    }

    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(project.root().join("ci/release.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["version"], VERSION);
    assert_eq!(manifest["build_time"], 1_700_000_000);
    assert_eq!(manifest["artifacts"].as_array().unwrap().len(), 6);
    assert_eq!(manifest["artifacts"][4]["format"], "zip");
    assert_eq!(manifest["artifacts"][4]["signed"], false);
}

#[test]
fn config_file_overrides_matrix_and_names() {
    let project = Project::with_config(
        "binary = \"slang\"\nrelease_dir = \"dist\"\nos = [\"linux\"]\narch = [\"arm64\"]",
    );

    project.command().arg("v2.0.0").assert().success();

    let dist = project.root().join("dist");
    assert!(dist.join("slang-v2_0_0-linux-arm64.tar.gz").is_file());
    assert_eq!(std::fs::read_dir(dist).unwrap().count(), 1);
}

#[test]
fn compiler_exit_code_is_propagated() {
    let project = Project::new();

    project
        .command()
        .env("FAKE_GO_EXIT", "3")
        .arg(VERSION)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("simulated failure"));

    assert!(project.released_files().is_empty());
}

#[test]
fn missing_certificate_fails_before_compiling() {
    let project = Project::new();
    std::fs::remove_file(project.root().join("ci/b6k_csc.p12")).unwrap();

    project
        .command()
        .args([VERSION, PASSWORD])
        .assert()
        .failure()
        .stderr(predicate::str::contains("certificate not found"));

    assert!(project.calls().is_empty());
}

#[test]
fn signing_failure_stops_run_even_with_keep_going() {
    let project = Project::new();

    project
        .command()
        .env("FAKE_SIGN_EXIT", "7")
        .args(["--keep-going", VERSION, PASSWORD])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains(PASSWORD).not());

    let files = project.released_files();
    assert!(!files.iter().any(|f| f.ends_with(".zip")), "{files:?}");
    assert_eq!(files.iter().filter(|f| f.ends_with(".tar.gz")).count(), 4);

    let calls = project.calls();
    assert_eq!(calls.iter().filter(|c| c.starts_with("go ")).count(), 5);
    assert_eq!(calls.iter().filter(|c| c.starts_with("sign ")).count(), 1);
    assert!(!calls.iter().any(|c| c.contains("GOARCH=amd64") && c.contains("GOOS=windows")));
}

#[test]
fn version_with_path_separator_is_rejected_before_compiling() {
    let project = Project::new();

    project
        .command()
        .arg("v1.2.3/../../escape")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("path separators"));

    assert!(project.calls().is_empty());
}
