//! Daily practice streak.
//!
//! A streak is the run of consecutive days, counted back from today, on which
//! at least one practice was completed. Today not being done yet does not
//! break the streak; the first missed day before it does.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};

/// How far back the streak looks. Longer runs report this value.
pub const STREAK_WINDOW_DAYS: u32 = 30;

/// Count the current streak from a list of completion dates.
///
/// `completed` may contain duplicates (several practices done on one day)
/// and dates in any order. Dates after `today` are ignored.
pub fn current_streak<'a, I>(completed: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let days: HashSet<NaiveDate> = completed.into_iter().copied().collect();
    let mut streak = 0;

    for offset in 0..STREAK_WINDOW_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(u64::from(offset))) else {
            break;
        };
        if days.contains(&day) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn run_ending(last: NaiveDate, len: u32) -> Vec<NaiveDate> {
        (0..len)
            .map(|i| last.checked_sub_days(Days::new(u64::from(i))).unwrap())
            .collect()
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(current_streak(&[], day("2026-10-19")), 0);
    }

    #[test]
    fn consecutive_days_through_today() {
        let dates = run_ending(day("2026-10-19"), 3);
        assert_eq!(current_streak(&dates, day("2026-10-19")), 3);
    }

    #[test]
    fn today_not_done_yet_keeps_streak() {
        let dates = run_ending(day("2026-10-18"), 4);
        assert_eq!(current_streak(&dates, day("2026-10-19")), 4);
    }

    #[test]
    fn gap_before_yesterday_ends_streak() {
        let dates = [day("2026-10-19"), day("2026-10-18"), day("2026-10-16")];
        assert_eq!(current_streak(&dates, day("2026-10-19")), 2);
    }

    #[test]
    fn missed_yesterday_counts_only_today() {
        let dates = [day("2026-10-19"), day("2026-10-17")];
        assert_eq!(current_streak(&dates, day("2026-10-19")), 1);
        assert_eq!(current_streak(&[day("2026-10-17")], day("2026-10-19")), 0);
    }

    #[test]
    fn duplicates_and_order_do_not_matter() {
        let dates = [
            day("2026-10-18"),
            day("2026-10-19"),
            day("2026-10-18"),
            day("2026-10-19"),
        ];
        assert_eq!(current_streak(&dates, day("2026-10-19")), 2);
    }

    #[test]
    fn future_dates_are_ignored() {
        let dates = [day("2026-10-20"), day("2026-10-19")];
        assert_eq!(current_streak(&dates, day("2026-10-19")), 1);
    }

    #[test]
    fn streak_crosses_month_and_year() {
        let dates = run_ending(day("2027-01-02"), 5);
        assert_eq!(current_streak(&dates, day("2027-01-02")), 5);
    }

    #[test]
    fn streak_is_capped_at_window() {
        let dates = run_ending(day("2026-10-19"), 45);
        assert_eq!(current_streak(&dates, day("2026-10-19")), STREAK_WINDOW_DAYS);
    }
}
