use std::process::ExitCode;

use argh::FromArgs;
use u_stats::report::Report;
use u_stats::sample::Sample;
use u_stats::stats::Summary;
use u_stats::StatsError;

const PROGRAM: &str = "u-stats";

/// Mean, median and mode(s) of a list of integers.
#[derive(FromArgs, Debug)]
struct Args {
    /// integer observations, e.g. `u-stats 5 1 4 1 2`
    #[argh(positional)]
    values: Vec<String>,
}

/// Prefixes `--` so argh hands every token to the loader as a value.
///
/// Without it argh reads negative numbers as flags and a bare `help` as
/// its help request. Only a leading `--help` (or an existing `--`) is left
/// for argh to interpret.
fn separate_operands(mut args: Vec<String>) -> Vec<String> {
    let for_argh = matches!(
        args.first().map(String::as_str),
        None | Some("--help") | Some("--")
    );
    if !for_argh {
        args.insert(0, "--".to_owned());
    }
    args
}

fn run(args: &Args) -> u_stats::Result<String> {
    let sample = Sample::parse(&args.values)?;
    let summary = Summary::of(&sample)?;
    Ok(Report(&summary).to_string())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let raw = separate_operands(std::env::args().skip(1).collect());
    let raw: Vec<&str> = raw.iter().map(String::as_str).collect();
    let args = match Args::from_args(&[PROGRAM], &raw) {
        Ok(args) => args,
        Err(early) => {
            return match early.status {
                Ok(()) => {
                    println!("{}", early.output);
                    ExitCode::SUCCESS
                }
                Err(()) => {
                    eprintln!("{}", early.output);
                    ExitCode::FAILURE
                }
            };
        }
    };
    log::debug!("{args:?}");

    match run(&args) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(StatsError::InvalidInput) => {
            eprintln!("Usage: {PROGRAM} num1 num2 ...");
            ExitCode::FAILURE
        }
        Err(err @ StatsError::InvalidObservation { .. }) => {
            log::debug!("rejected input: {err:?}");
            eprintln!("All arguments must be integers: {err}");
            ExitCode::FAILURE
        }
    }
}
