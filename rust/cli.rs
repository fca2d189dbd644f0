use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NSE futures-and-options expiry calendar.
#[derive(Parser)]
#[command(name = "nsefo", version, about = "NSE F&O expiry and working-day calendar")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Holiday file: a JSON calendar if it ends in `.json`, otherwise one YYYYMMDD date per line.
    #[arg(long, global = true)]
    pub holidays: Option<PathBuf>,

    /// Named calendar used when no holiday file is given.
    #[arg(long, global = true, default_value = "nse")]
    pub calendar: String,

    /// Write the result lines to this file instead of stdout.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Monthly expiry of the contract live on DATE.
    Monthly {
        /// Reference date, YYYYMMDD.
        date: String,
    },
    /// Monthly expiry of the contract cycle before the one live on DATE.
    PrevMonthly {
        /// Reference date, YYYYMMDD.
        date: String,
    },
    /// Weekly expiry of the contract live on DATE.
    Weekly {
        /// Reference date, YYYYMMDD.
        date: String,
    },
    /// All dates of a weekday in a month.
    Weekdays {
        /// Year, YYYY.
        year: String,
        /// Month, 1-12.
        month: String,
        /// Weekday name.
        #[arg(long, default_value = "thursday")]
        weekday: String,
    },
    /// Working days by range and/or count.
    WorkingDays(WorkingDaysArgs),
    /// Convert DATE to DD-Mmm-YYYY.
    Bhav {
        /// Date, YYYYMMDD.
        date: String,
    },
    /// Today's local date.
    Today,
}

/// Arguments for the `working-days` subcommand.
#[derive(clap::Args)]
pub struct WorkingDaysArgs {
    /// First date of the range, YYYYMMDD.
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    pub start: String,

    /// Last date of the range, YYYYMMDD.
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    pub end: String,

    /// Number of working days counted from the start and/or back from the end.
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    pub num_days: String,

    /// Keep only dates on this weekday.
    #[arg(long, default_value = "")]
    pub weekday: String,
}
