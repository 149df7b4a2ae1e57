//! `waypoint`: solve a scenario file and print the plan.
//!
//! Usage: `waypoint <scenario-file> [--json] [--shallower-first]`
//!
//! Exit codes: 0 solved, 1 no solution, 2 usage, load, or run error.
//! Log verbosity comes from `RUST_LOG` (default `warn`); logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use waypoint_harness::runner::{solve_scenario, RunError, RunReport};
use waypoint_harness::scenario::Scenario;
use waypoint_search::error::SearchError;
use waypoint_search::policy::{SearchPolicyV1, TieBreakV1};

const USAGE: &str = "usage: waypoint <scenario-file> [--json] [--shallower-first]";

struct Args {
    path: PathBuf,
    json: bool,
    policy: SearchPolicyV1,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut path = None;
    let mut json = false;
    let mut policy = SearchPolicyV1::default();
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--shallower-first" => policy.tie_break = TieBreakV1::ShallowerFirst,
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            _ if path.is_some() => return Err("more than one scenario file given".into()),
            _ => path = Some(PathBuf::from(&arg)),
        }
    }
    let path = path.ok_or_else(|| "missing scenario file".to_string())?;
    Ok(Args { path, json, policy })
}

fn print_report(report: &RunReport) {
    println!("domain: {}", report.domain_id);
    for (i, state) in report.states.iter().enumerate() {
        if i > 0 {
            println!("step {i}: {}", report.plan[i - 1]);
        } else {
            println!("initial state:");
        }
        print!("{state}");
    }
    println!("plan length: {}", report.plan.len());
    println!("total cost: {}", report.total_cost);
    println!("expansions: {}", report.expansions);
    println!("graph digest: {}", report.graph_digest);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(detail) => {
            eprintln!("error: {detail}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let scenario = match Scenario::load(&args.path) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match solve_scenario(&scenario, &args.policy) {
        Ok(report) => {
            if args.json {
                match report.to_canonical_json_bytes() {
                    Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
                    Err(e) => {
                        eprintln!("error: {e}");
                        return ExitCode::from(2);
                    }
                }
            } else {
                print_report(&report);
            }
            ExitCode::SUCCESS
        }
        Err(RunError::Search(SearchError::NoSolution { expansions })) => {
            println!("no solution found ({expansions} expansions)");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
