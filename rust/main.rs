mod cli;
mod logging;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use nsefo::datestr;
use nsefo::json::JSON;
use nsefo::lines::{read_lines, write_lines};
use nsefo::scheduling::{get_calendar_by_name, Cal};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cal = load_calendar(cli.holidays.as_deref(), &cli.calendar)?;
    let lines = evaluate(cli.command, &cal)?;
    match cli.output {
        Some(path) => {
            write_lines(&lines, &path)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), count = lines.len(), "results written");
        }
        None => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn load_calendar(holidays: Option<&Path>, name: &str) -> Result<Cal> {
    let cal = match holidays {
        Some(path) if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) => {
            Cal::from_json_path(path).with_context(|| format!("loading {}", path.display()))?
        }
        Some(path) => {
            let dates =
                read_lines(path).with_context(|| format!("loading {}", path.display()))?;
            Cal::try_from_yyyymmdd(&dates)
                .with_context(|| format!("parsing holidays in {}", path.display()))?
        }
        None => get_calendar_by_name(name)?,
    };
    info!(holidays = cal.holidays().count(), "calendar loaded");
    Ok(cal)
}

fn evaluate(command: Command, cal: &Cal) -> Result<Vec<String>> {
    let lines = match command {
        Command::Monthly { date } => vec![datestr::get_nsefo_monthly_expiry_date(&date, cal)?],
        Command::PrevMonthly { date } => {
            vec![datestr::get_nsefo_prev_monthly_expiry_date(&date, cal)?]
        }
        Command::Weekly { date } => vec![datestr::get_nsefo_weekly_expiry_date(&date, cal)?],
        Command::Weekdays {
            year,
            month,
            weekday,
        } => datestr::get_dates_of_weekday(&year, &month, &weekday),
        Command::WorkingDays(args) => datestr::get_working_days(
            &args.start,
            &args.end,
            &args.num_days,
            &args.weekday,
            cal,
        )?,
        Command::Bhav { date } => vec![datestr::convert_date_to_bhav_style(&date)?],
        Command::Today => vec![datestr::get_todays_date()],
    };
    Ok(lines)
}
