use assert_cmd::cargo::cargo_bin_cmd;

fn run_help(args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("pagecheck");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    run_help(&[]);
    run_help(&["run"]);
    run_help(&["list"]);
}
