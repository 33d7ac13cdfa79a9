//! Command-line wrapper: `u-timetable <request.json> [--seed N]`.
//!
//! Reads a generation request, runs it, and prints the timetable, the
//! elapsed milliseconds, and the KPI report as JSON on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use serde_json::json;
use u_timetable::{GenerationRequest, TimetableGenerator};

const USAGE: &str = "usage: u-timetable <request.json> [--seed N]";

struct Args {
    request: PathBuf,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut request = None;
    let mut seed = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid seed '{value}': {e}"))?;
                seed = Some(parsed);
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if request.is_none() => request = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument '{arg}'\n{USAGE}")),
        }
    }
    let request = request.ok_or_else(|| USAGE.to_string())?;
    Ok(Args { request, seed })
}

fn run(args: Args) -> Result<String, String> {
    let text = std::fs::read_to_string(&args.request)
        .map_err(|e| format!("cannot read {}: {e}", args.request.display()))?;
    let request: GenerationRequest =
        serde_json::from_str(&text).map_err(|e| format!("invalid request: {e}"))?;

    let mut generator = TimetableGenerator::new();
    if let Some(seed) = args.seed {
        generator = generator.with_seed(seed);
    }
    let generation = generator.generate(&request).map_err(|e| e.to_string())?;

    let response = json!({
        "timetable": generation.timetable,
        "elapsedMs": generation.elapsed.as_millis() as u64,
        "kpi": generation.kpi,
    });
    serde_json::to_string_pretty(&response).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match parse_args().and_then(run) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
