use crate::*;
use std::path::Path;

/// Dispatches the parsed command and returns the process exit code.
pub fn handle_runtime_commands(cli: &Cli, config: &Config, base_dir: &Path) -> anyhow::Result<u8> {
    match &cli.command {
        None => run_suites(cli.json, config, base_dir, &[]),
        Some(Commands::Run { suites }) => run_suites(cli.json, config, base_dir, suites),
        Some(Commands::List) => {
            let listing: Vec<SuiteListing> = config
                .suites
                .iter()
                .map(|s| SuiteListing {
                    name: s.name.clone(),
                    file: s.file.clone(),
                    checks: s.checks.iter().map(|c| c.name.clone()).collect(),
                })
                .collect();
            print_out(cli.json, &listing, |s| {
                format!("{}\t{}\t{}", s.name, s.file, s.checks.join(","))
            })?;
            Ok(0)
        }
    }
}

fn run_suites(json: bool, config: &Config, base_dir: &Path, names: &[String]) -> anyhow::Result<u8> {
    let selected = config.select(names)?;
    let outcomes = selected.into_iter().map(|suite| verify_suite(base_dir, suite));

    if json {
        let outcomes = outcomes.collect::<Result<Vec<_>, _>>()?;
        let summary = RunSummary {
            overall_passed: outcomes.iter().all(|o| o.report.overall_passed),
            suites: outcomes,
        };
        let code = if summary.overall_passed { 0 } else { 1 };
        print_json(summary.overall_passed, summary)?;
        return Ok(code);
    }

    let mut reporter = ConsoleReporter::default();
    report_all(outcomes, &mut reporter)?;
    Ok(reporter.exit_code())
}
