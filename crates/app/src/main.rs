//! `trailcare <script.json> [--restore <in>] [--snapshot <out>] [--date YYYY-MM-DD]`
//!
//! Replays a JSON action script through a headless tracker session and prints
//! the resulting profile summary and map projection as JSON on stdout. Logs
//! go to stderr.

mod runner;
mod session_script;
mod snapshot_file;

use std::path::PathBuf;
use std::process::ExitCode;

use tracker::geo::EntryDate;

use runner::{RunError, RunReport, RunnerOptions, SessionRunner};

const USAGE: &str =
    "usage: trailcare <script.json> [--restore <in>] [--snapshot <out>] [--date YYYY-MM-DD]";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    script: PathBuf,
    restore: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    date: Option<EntryDate>,
}

fn parse_args<I>(args: I) -> Result<CliArgs, RunError>
where
    I: IntoIterator<Item = String>,
{
    let mut script = None;
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| RunError::Usage(format!("{flag} needs a value\n{USAGE}")))
        };
        match arg.as_str() {
            "--restore" => cli.restore = Some(PathBuf::from(value("--restore")?)),
            "--snapshot" => cli.snapshot = Some(PathBuf::from(value("--snapshot")?)),
            "--date" => {
                let text = value("--date")?;
                let date = EntryDate::try_from(text.clone())
                    .map_err(|e| RunError::Usage(format!("invalid --date '{text}': {e}")))?;
                cli.date = Some(date);
            }
            flag if flag.starts_with("--") => {
                return Err(RunError::Usage(format!("unknown option {flag}\n{USAGE}")));
            }
            path if script.is_none() => script = Some(PathBuf::from(path)),
            extra => {
                return Err(RunError::Usage(format!(
                    "unexpected argument {extra}\n{USAGE}"
                )));
            }
        }
    }

    cli.script = script.ok_or_else(|| RunError::Usage(USAGE.to_string()))?;
    Ok(cli)
}

fn run(cli: &CliArgs) -> Result<RunReport, RunError> {
    let actions = session_script::load_script(&cli.script)?;

    let mut session = SessionRunner::new(RunnerOptions {
        logging: true,
        date: cli.date,
    });
    if let Some(path) = &cli.restore {
        let bytes = snapshot_file::read_snapshot(path)?;
        session.restore(&bytes)?;
    }

    let steps = session.run(actions);

    if let Some(path) = &cli.snapshot {
        let bytes = session.snapshot()?;
        snapshot_file::write_snapshot(path, &bytes)?;
    }

    Ok(session.report(steps))
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let output = run(&cli).and_then(|report| {
        let rejected = report.error_count();
        if rejected > 0 {
            eprintln!("trailcare: {rejected} action(s) rejected, see the report");
        }
        Ok(serde_json::to_string_pretty(&report)?)
    });
    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("trailcare: {e}");
            ExitCode::FAILURE
        }
    }
}
