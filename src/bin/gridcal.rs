extern crate gridcal as lib;

use flexi_logger::{FileSpec, Logger};
use lib::config::{load_suitable_config, Config};
use lib::events::{parse_event_text, scan_events, EventSpec};
use lib::holidays::sample_holidays;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "gridcal",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "Gridcal - month grid calendars with events."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "print the calendar of a year as JSON")]
    Calendar {
        #[structopt(short = "y", long = "year", help = "year to build, defaults to the current one")]
        year: Option<i32>,

        #[structopt(
            short = "e",
            long = "events",
            help = "event file with 'Mmm d: description' lines",
            parse(from_os_str)
        )]
        events: Option<PathBuf>,

        #[structopt(long = "holidays", help = "add the sample holidays")]
        holidays: bool,

        #[structopt(long = "pretty", help = "pretty-print the JSON output")]
        pretty: bool,
    },

    #[structopt(about = "parse event text and print it grouped by date as JSON")]
    Parse {
        #[structopt(short = "y", long = "year", help = "year of the parsed events")]
        year: Option<i32>,

        #[structopt(help = "event file, reads stdin if omitted", parse(from_os_str))]
        input: Option<PathBuf>,

        #[structopt(long = "pretty", help = "pretty-print the JSON output")]
        pretty: bool,
    },

    #[structopt(about = "print the sample holidays of a year")]
    Holidays {
        #[structopt(short = "y", long = "year", help = "year of the holidays")]
        year: Option<i32>,
    },
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> lib::error::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn collect_events(
    config: &Config,
    year: i32,
    events_file: Option<&Path>,
    holidays: bool,
) -> io::Result<Vec<EventSpec>> {
    let mut specs = config.events.clone();

    if let Some(path) = events_file {
        let text = fs::read_to_string(path)?;
        let before = specs.len();
        specs.extend(scan_events(&text).map(EventSpec::from));
        log::info!(
            "Read {} events from '{}'",
            specs.len() - before,
            path.display()
        );
    }

    if holidays {
        specs.extend(scan_events(&sample_holidays(year)).map(EventSpec::from));
    }

    Ok(specs)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = load_suitable_config(args.configfile.as_deref())?;

    match args.cmd {
        Command::Calendar {
            year,
            events,
            holidays,
            pretty,
        } => {
            let year = year.unwrap_or_else(|| config.year_or_current());
            let events_file = events.or_else(|| config.events_file.clone());
            let specs = collect_events(
                &config,
                year,
                events_file.as_deref(),
                holidays || config.sample_holidays,
            )?;

            log::debug!("Building {} with {} events", year, specs.len());
            let calendar = lib::build_calendar(year, &specs);
            print_json(&calendar, pretty || config.pretty)?;
        }
        Command::Parse {
            year,
            input,
            pretty,
        } => {
            let year = year.unwrap_or_else(|| config.year_or_current());
            let text = read_input(input.as_deref())?;
            print_json(&parse_event_text(&text, year), pretty || config.pretty)?;
        }
        Command::Holidays { year } => {
            let year = year.unwrap_or_else(|| config.year_or_current());
            println!("{}", sample_holidays(year));
        }
    }

    Ok(())
}
