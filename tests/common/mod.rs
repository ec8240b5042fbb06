//! Shared fixtures: a project root with fake toolchain and signer scripts.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fixed build time used by every run.
pub const BUILD_TIME: &str = "1700000000";

/// Fake `go`: logs its environment and arguments, then writes the `-o` file.
/// Exits early with `$FAKE_GO_EXIT` when set.
const FAKE_GO: &str = r#"#!/bin/sh
if [ -n "$FAKE_GO_EXIT" ]; then
  echo "go: simulated failure" >&2
  exit "$FAKE_GO_EXIT"
fi
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then out="$arg"; fi
  prev="$arg"
done
echo "go GOOS=$GOOS GOARCH=$GOARCH CGO_ENABLED=$CGO_ENABLED PWD=$(pwd) $*" >> "$FAKE_LOG"
printf 'slangd %s/%s\n' "$GOOS" "$GOARCH" > "$out"
"#;

/// Fake `osslsigncode`: copies `-in` to `-out` and appends a marker.
/// Exits with `$FAKE_SIGN_EXIT` after logging when set.
const FAKE_SIGNER: &str = r#"#!/bin/sh
in=""
out=""
prev=""
for arg in "$@"; do
  case "$prev" in
    -in) in="$arg" ;;
    -out) out="$arg" ;;
  esac
  prev="$arg"
done
echo "sign $*" >> "$FAKE_LOG"
if [ -n "$FAKE_SIGN_EXIT" ]; then
  echo "osslsigncode: simulated failure" >&2
  exit "$FAKE_SIGN_EXIT"
fi
cat "$in" > "$out"
echo "signed" >> "$out"
"#;

/// Temporary project with fake tools and a `release.toml` pointing at them.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Creates the project; `extra` is appended to the top of `release.toml`.
    pub fn with_config(extra: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        let tools = root.join("tools");
        fs::create_dir_all(&tools).unwrap();
        write_script(&tools.join("go"), FAKE_GO);
        write_script(&tools.join("osslsigncode"), FAKE_SIGNER);

        fs::create_dir_all(root.join("ci")).unwrap();
        fs::write(root.join("ci/b6k_csc.p12"), b"not a real certificate").unwrap();

        let config = format!(
            "{extra}\n\n\
             [toolchain]\nprogram = \"{}\"\n\n\
             [toolchain.env]\nCGO_ENABLED = \"0\"\n\n\
             [signing]\nprogram = \"{}\"\n",
            tools.join("go").display(),
            tools.join("osslsigncode").display(),
        );
        fs::write(root.join("release.toml"), config).unwrap();

        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn release_dir(&self) -> PathBuf {
        self.root().join("ci/release")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root().join("calls.log")
    }

    /// Lines written by the fake tools, empty when they never ran.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Sorted file names in the release directory.
    pub fn released_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.release_dir())
            .map(|entries| {
                entries
                    .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// The release command, run from the project root with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("slangd_release").unwrap();
        cmd.current_dir(self.root())
            .env("FAKE_LOG", self.log_path())
            .env("SOURCE_DATE_EPOCH", BUILD_TIME)
            .env_remove("SLANGD_SIGNING_PASSWORD")
            .env_remove("FAKE_GO_EXIT")
            .env_remove("FAKE_SIGN_EXIT")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Contents of the single entry in a tar.gz archive.
pub fn read_tar_gz(path: &Path) -> (String, String) {
    let file = fs::File::open(path).unwrap();
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(file));
    let mut entries = archive.entries().unwrap();
    let mut entry = entries.next().unwrap().unwrap();
    let name = entry.path().unwrap().to_string_lossy().into_owned();
    let mut contents = String::new();
    std::io::Read::read_to_string(&mut entry, &mut contents).unwrap();
    assert!(entries.next().is_none(), "archive has more than one entry");
    (name, contents)
}

/// Contents of the single entry in a zip archive.
pub fn read_zip(path: &Path) -> (String, String) {
    let file = fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    assert_eq!(archive.len(), 1, "archive has more than one entry");
    let mut entry = archive.by_index(0).unwrap();
    let name = entry.name().to_string();
    let mut contents = String::new();
    std::io::Read::read_to_string(&mut entry, &mut contents).unwrap();
    (name, contents)
}
