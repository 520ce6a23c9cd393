//! Geez CLI - Ethiopian / Gregorian calendar conversion
//!
//! Usage:
//!   geez to-ethiopian [YYYY-MM-DD]
//!   geez to-gregorian <year> <month> <day>
//!   geez month <year> <month> [--week-start monday]
//!   geez range <year> <month>
//!   geez anchors <year>
//!   geez today
//!
//! Examples:
//!   geez to-ethiopian 2025-09-11
//!   geez --locale english month 2018 1
//!   geez --output json to-gregorian 2018 13 5

use clap::{Parser, Subcommand, ValueEnum};
use geez::calendar::{GregorianDate, Weekday};
use geez::config::Settings;
use geez::names::Locale;
use geez::render::render_month;
use geez::EthiopianCalendar;
use serde_json::json;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geez")]
#[command(about = "Geez - Convert between the Ethiopian and Gregorian calendars")]
#[command(version)]
struct Cli {
    /// Path to a geez.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language for month and weekday names (overrides config)
    #[arg(short, long, global = true, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Gregorian date to the Ethiopian calendar
    ToEthiopian {
        /// ISO date (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Convert an Ethiopian date to the Gregorian calendar
    ToGregorian {
        /// Ethiopian year
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Ethiopian month (1-13)
        month: u8,
        /// Day of the month
        day: u8,
    },

    /// Show the month grid for an Ethiopian month
    Month {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        month: u8,

        /// First day of each week row (overrides config)
        #[arg(short, long, value_parser = parse_weekday)]
        week_start: Option<Weekday>,
    },

    /// Show the Gregorian span of an Ethiopian month
    Range {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        month: u8,
    },

    /// List where each month of an Ethiopian year starts
    Anchors {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Show today's Ethiopian date
    Today,
}

/// Accepts the `locale` config values plus short tags like `en` and `am`.
fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::from_str(s).ok_or_else(|| format!("unknown locale: {s} (expected amharic or english)"))
}

/// Accepts every `[grid] week_start` value plus three-letter forms.
fn parse_weekday(s: &str) -> Result<Weekday, String> {
    Weekday::from_str(s).ok_or_else(|| format!("unknown weekday: {s}"))
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let mut settings = match settings {
        Ok(s) => s,
        Err(e) => return fail(e),
    };
    if let Some(locale) = cli.locale {
        settings = settings.with_locale(locale);
    }

    let output = cli.output;
    match cli.command {
        Commands::ToEthiopian { date } => {
            cmd_to_ethiopian(&EthiopianCalendar::new(settings), date, output)
        }
        Commands::ToGregorian { year, month, day } => {
            cmd_to_gregorian(&EthiopianCalendar::new(settings), year, month, day, output)
        }
        Commands::Month {
            year,
            month,
            week_start,
        } => {
            if let Some(week_start) = week_start {
                settings = settings.with_week_start(week_start);
            }
            cmd_month(&EthiopianCalendar::new(settings), year, month, output)
        }
        Commands::Range { year, month } => {
            cmd_range(&EthiopianCalendar::new(settings), year, month, output)
        }
        Commands::Anchors { year } => cmd_anchors(&EthiopianCalendar::new(settings), year, output),
        Commands::Today => cmd_to_ethiopian(&EthiopianCalendar::new(settings), None, output),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn fail(e: impl Display) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::FAILURE
}

fn print_json(value: serde_json::Value) -> ExitCode {
    match serde_json::to_string_pretty(&value) {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn cmd_to_ethiopian(
    cal: &EthiopianCalendar,
    date: Option<String>,
    output: OutputFormat,
) -> ExitCode {
    let gregorian = match date {
        Some(s) => match s.parse::<GregorianDate>() {
            Ok(d) => d,
            Err(e) => return fail(e),
        },
        None => GregorianDate::today(),
    };

    let ethiopian = match cal.to_ethiopian(gregorian) {
        Ok(e) => e,
        Err(e) => return fail(e),
    };

    match output {
        OutputFormat::Text => {
            println!("{}  {}", ethiopian, cal.format(&ethiopian));
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(json!({
            "gregorian": gregorian,
            "ethiopian": ethiopian,
            "formatted": cal.format(&ethiopian),
        })),
    }
}

fn cmd_to_gregorian(
    cal: &EthiopianCalendar,
    year: i32,
    month: u8,
    day: u8,
    output: OutputFormat,
) -> ExitCode {
    let gregorian = match cal.to_gregorian(year, month, day) {
        Ok(g) => g,
        Err(e) => return fail(e),
    };

    match output {
        OutputFormat::Text => {
            println!("{}", gregorian);
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(json!({
            "ethiopian": { "year": year, "month": month, "day": day },
            "gregorian": gregorian,
            "weekday": gregorian.weekday(),
        })),
    }
}

fn cmd_month(cal: &EthiopianCalendar, year: i32, month: u8, output: OutputFormat) -> ExitCode {
    let cells = match cal.visible_dates(year, month) {
        Ok(c) => c,
        Err(e) => return fail(e),
    };

    match output {
        OutputFormat::Text => {
            let week_start = cal.settings().grid.week_start;
            println!("{}", render_month(year, month, &cells, cal.locale(), week_start));
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(json!({
            "year": year,
            "month": month,
            "name": cal.month_name(month),
            "cells": cells,
        })),
    }
}

fn cmd_range(cal: &EthiopianCalendar, year: i32, month: u8, output: OutputFormat) -> ExitCode {
    let range = match cal.month_range(year, month) {
        Ok(r) => r,
        Err(e) => return fail(e),
    };

    match output {
        OutputFormat::Text => {
            println!(
                "{} {}: {} .. {} ({} days)",
                cal.month_name(month),
                year,
                range.start,
                range.end,
                range.len_days()
            );
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(json!(range)),
    }
}

fn cmd_anchors(cal: &EthiopianCalendar, year: i32, output: OutputFormat) -> ExitCode {
    let table = cal.anchors(year);

    let mut rows = Vec::new();
    for entry in table.entries() {
        let start = match table.start_of(entry.ethiopian_month) {
            Ok(s) => s,
            Err(e) => return fail(e),
        };
        let days = match cal.days_in_month(entry.ethiopian_month, year) {
            Ok(d) => d,
            Err(e) => return fail(e),
        };
        rows.push((entry, start, days));
    }

    match output {
        OutputFormat::Text => {
            println!("Ethiopian year {}", year);
            println!();
            for (entry, start, days) in &rows {
                println!(
                    "{:>2}  {:<10} {}  ({} days)",
                    entry.ethiopian_month,
                    cal.month_name(entry.ethiopian_month),
                    start,
                    days
                );
            }
            ExitCode::SUCCESS
        }
        OutputFormat::Json => print_json(serde_json::Value::Array(
            rows.iter()
                .map(|(entry, start, days)| {
                    json!({
                        "month": entry.ethiopian_month,
                        "name": cal.month_name(entry.ethiopian_month),
                        "start": start,
                        "days": days,
                    })
                })
                .collect(),
        )),
    }
}
