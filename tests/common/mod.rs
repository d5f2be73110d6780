#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub site: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let site = tmp.path().join("site");
        fs::create_dir_all(&site).expect("create site dir");
        Self { _tmp: tmp, site }
    }

    pub fn write(&self, name: &str, content: &str) -> &Self {
        fs::write(self.site.join(name), content).expect("write fixture page");
        self
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pagecheck");
        cmd.arg("--dir").arg(&self.site).env_remove("RUST_LOG");
        cmd
    }

    /// Runs with `--json` and returns the parsed envelope plus the exit code.
    pub fn run_json(&self, args: &[&str]) -> (Value, i32) {
        let mut cmd = self.cmd();
        let out = cmd.arg("--json").args(args).output().expect("run pagecheck");
        let value = serde_json::from_slice(&out.stdout).expect("valid json output");
        (value, out.status.code().expect("exit code"))
    }
}

pub fn welcome_site() -> TestEnv {
    let env = TestEnv::new();
    env.write("index.html", "<h1>Welcome to our site</h1>")
        .write("goodbye.html", "<p>Goodbye, see you again soon</p>");
    env
}
