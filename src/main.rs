use std::io::{stderr, stdout, BufWriter};
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use chrono::{Local, NaiveDate};
use tracing::level_filters::LevelFilter;
use tracing::warn;

use practice_dashboard::cache::SnapshotCache;
use practice_dashboard::dashboard::errors::ReportError;
use practice_dashboard::dashboard::{PracticeDashboard, Report};
use practice_dashboard::source::{load_locations, CsvSheetSource};
use practice_dashboard::types::parse_date;

const LOCATIONS_FILE: &str = "locations.csv";
const USAGE: &str = "Usage: practice-dashboard [sheets_dir] [report:optional] [log_level:optional] \
[--location NAME] [--from DATE --to DATE] > [output].csv
Available reports: summary, payments, overdue, doctors, monthly, timeline (default: summary)
Available log levels: off, error, warn, info, debug, trace (default: error)
Dates are DD/MM/YYYY or YYYY-MM-DD; without --from/--to the window is 90 days back to 180 days ahead";

/// Command line, parsed by hand: positional arguments first, then `--flag value` pairs.
struct CliArgs {
    directory: PathBuf,
    report: Report,
    log_level: LevelFilter,
    location: Option<String>,
    date_range: Option<(NaiveDate, NaiveDate)>
}

impl CliArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let (positional, flags): (Vec<&String>, Vec<&String>) = match args.iter().position(|arg| arg.starts_with("--")) {
            Some(index) => (args[..index].iter().collect(), args[index..].iter().collect()),
            None => (args.iter().collect(), Vec::new())
        };

        let directory = positional.first().map(|dir| PathBuf::from(dir.as_str())).ok_or_else(|| anyhow!("Missing sheets directory"))?;
        let report = positional.get(1).map(|s| Report::from_str(s)).transpose()?.unwrap_or_default();
        let log_level = positional.get(2).map_or(LevelFilter::ERROR, |s| log_level_or_default(s));

        let mut location = None;
        let mut from = None;
        let mut to = None;

        for pair in flags.chunks(2) {
            let [flag, value] = pair else {
                bail!("Flag '{}' is missing its value", pair[0]);
            };

            match flag.as_str() {
                "--location" => location = Some(value.to_string()),
                "--from" => from = Some(parse_date(value)?),
                "--to" => to = Some(parse_date(value)?),
                _ => bail!("Unknown flag '{flag}'")
            }
        }

        let date_range = match (from, to) {
            (Some(start), Some(end)) if start <= end => Some((start, end)),
            (Some(_), Some(_)) => bail!("--from must not be after --to"),
            (None, None) => None,
            _ => bail!("--from and --to must be given together")
        };

        Ok(Self { directory, report, log_level, location, date_range })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    setup_logging(cli.log_level);

    let locations = load_locations(&cli.directory.join(LOCATIONS_FILE)).unwrap_or_else(|error| {
        warn!("{error}, reporting without locations");
        Vec::new()
    });

    let source = Arc::new(CsvSheetSource::new(&cli.directory));
    let mut dashboard = PracticeDashboard::new(SnapshotCache::new(source), locations);

    if let Some((start, end)) = cli.date_range {
        dashboard = dashboard.with_date_range(start, end);
    }

    let location = match cli.location.as_deref() {
        Some(name) => match dashboard.location(name) {
            Some(location) => Some(location.clone()),
            None => {
                eprintln!("{}", ReportError::UnknownLocation(name.to_string()));
                exit(1);
            }
        },
        None => None
    };

    let output = BufWriter::new(stdout().lock());
    dashboard.write_report(cli.report, location.as_ref(), Local::now().date_naive(), output).await?;

    Ok(())
}

fn log_level_or_default(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{level}', defaulting to 'error'");
        LevelFilter::ERROR
    })
}

/// Logs go to stderr since stdout carries the report.
fn setup_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(stderr)
        .init();
}
