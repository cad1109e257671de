use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use stillpoint_core::{current_streak, practice::STREAK_WINDOW_DAYS};

#[derive(Args)]
pub struct StreakArgs {
    /// Days a practice was completed (YYYY-MM-DD)
    dates: Vec<NaiveDate>,
    /// Count back from this day instead of today
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct StreakReport {
    today: NaiveDate,
    streak_days: u32,
    window_days: u32,
}

pub fn run(args: StreakArgs) -> Result<(), Box<dyn std::error::Error>> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let report = StreakReport {
        today,
        streak_days: current_streak(&args.dates, today),
        window_days: STREAK_WINDOW_DAYS,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}-day streak", report.streak_days);
    }
    Ok(())
}
