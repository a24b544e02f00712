//! `ivy_trn_list`: loads a snapshot, aggregates it and prints the list.

pub mod render;

use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use ivy_config::ConfigManager;
use ivy_core::{
    present, record_issues, CalendarZone, Clock, FixedClock, ListFeed, SystemClock,
    TransactionSource,
};
use ivy_domain::DueKind;
use tracing::{debug, warn};

use crate::{errors::AppError, settings::ListSettings, snapshot::JsonFileSource, utils::build_info};

use self::render::{render, RenderStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Upcoming,
    Overdue,
}

impl From<SectionArg> for DueKind {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Upcoming => DueKind::Upcoming,
            SectionArg::Overdue => DueKind::Overdue,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ivy_trn_list",
    version,
    about = "Show the sectioned transactions list for a JSON record snapshot"
)]
pub struct Args {
    /// Snapshot file: `{ "transactions": [...] }` or a bare array of records.
    #[arg(required_unless_present = "build_info")]
    pub snapshot: Option<PathBuf>,

    /// Evaluate due dates against this instant instead of the system clock.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Calendar zone for day grouping, overriding the configured one.
    #[arg(long = "tz", value_name = "ZONE")]
    pub timezone: Option<String>,

    #[arg(long, value_enum)]
    pub expand: Vec<SectionArg>,

    #[arg(long, value_enum)]
    pub collapse: Vec<SectionArg>,

    /// Disable colors.
    #[arg(long)]
    pub plain: bool,

    /// Print the aggregated list as JSON.
    #[arg(long, conflicts_with = "check")]
    pub json: bool,

    /// Report record issues instead of printing the list; fails when any are found.
    #[arg(long)]
    pub check: bool,

    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print build metadata and exit.
    #[arg(long)]
    pub build_info: bool,
}

pub fn run_cli() -> Result<(), AppError> {
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, &mut out)
}

/// Executes parsed arguments, writing all regular output to `out`.
pub fn run(args: Args, out: &mut impl Write) -> Result<(), AppError> {
    if args.build_info {
        writeln!(out, "{}", build_info::current().summary())?;
        return Ok(());
    }
    let path = args.snapshot.clone().ok_or(AppError::MissingSnapshot)?;

    let manager = match &args.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::default_location(),
    };
    debug!(path = %manager.config_path().display(), "loading config");
    let settings = resolve_settings(&args, &ListSettings::from_config(&manager.load()?)?)?;

    let source = JsonFileSource::new(path);
    if args.check {
        return check(&source, out);
    }

    let clock: Box<dyn Clock> = match args.now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    };
    let list = ListFeed::new(settings.options).refresh(&source, clock.as_ref())?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &list)?;
        writeln!(out)?;
        return Ok(());
    }

    let presentation = present(&list, settings.expand, &settings.empty);
    let style = RenderStyle {
        color: settings.color && !args.plain && color_supported(),
        calendar: settings.options.calendar,
    };
    write!(out, "{}", render(&presentation, &style))?;
    Ok(())
}

/// Applies command-line overrides on top of the configured settings.
pub fn resolve_settings(args: &Args, base: &ListSettings) -> Result<ListSettings, AppError> {
    let mut settings = base.clone();
    if let Some(zone) = &args.timezone {
        settings = settings.with_calendar(CalendarZone::parse(zone)?);
    }
    for section in &args.expand {
        settings.set_expanded((*section).into(), true);
    }
    for section in &args.collapse {
        settings.set_expanded((*section).into(), false);
    }
    Ok(settings)
}

fn check(source: &dyn TransactionSource, out: &mut impl Write) -> Result<(), AppError> {
    let records = source.snapshot()?;
    let issues = record_issues(&records);
    for issue in &issues {
        warn!(%issue, "record issue");
        writeln!(out, "issue: {issue}")?;
    }
    if issues.is_empty() {
        writeln!(out, "{} record(s), no issues", records.len())?;
        Ok(())
    } else {
        Err(AppError::InvalidRecords {
            count: issues.len(),
        })
    }
}

fn color_supported() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_flags_override_configured_expansion() {
        let args = Args::parse_from([
            "ivy_trn_list",
            "snap.json",
            "--expand",
            "upcoming",
            "--collapse",
            "overdue",
            "--tz",
            "+02:00",
        ]);

        let settings = resolve_settings(&args, &ListSettings::default()).unwrap();

        assert!(settings.expand.upcoming);
        assert!(!settings.expand.overdue);
        assert_eq!(settings.options.calendar.to_string(), "+02:00");
    }

    #[test]
    fn snapshot_is_required_without_build_info() {
        assert!(Args::try_parse_from(["ivy_trn_list"]).is_err());
        assert!(Args::try_parse_from(["ivy_trn_list", "--build-info"]).is_ok());
    }
}
