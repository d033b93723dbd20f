// Date navigation for the schedule heading controls

use chrono::{Datelike, Local, NaiveDate};

use super::app::StudioApp;
use super::state::ScheduleViewMode;

impl StudioApp {
    pub(super) fn navigate_previous(&mut self) {
        self.set_active_date(step_date(self.active_date, self.schedule_view, -1));
    }

    pub(super) fn navigate_next(&mut self) {
        self.set_active_date(step_date(self.active_date, self.schedule_view, 1));
    }

    pub(super) fn jump_to_today(&mut self) {
        self.set_active_date(Local::now().date_naive());
    }
}

/// Advance the active date by one unit of the given view mode: a day,
/// seven days, or one calendar month.
pub fn step_date(date: NaiveDate, mode: ScheduleViewMode, steps: i32) -> NaiveDate {
    match mode {
        ScheduleViewMode::Day => date + chrono::Duration::days(steps as i64),
        ScheduleViewMode::Week => date + chrono::Duration::weeks(steps as i64),
        ScheduleViewMode::Month => shift_month_preserving_day(date, steps),
    }
}

/// Move by whole months keeping the day-of-month, clamped to the last
/// valid day of the target month (Oct 31 -> Nov 30).
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    clamp_day(new_year, new_month as u32, current.day())
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> NaiveDate {
    let max_day = last_day_of_month(year, month);
    let day = desired_day.min(max_day);
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, max_day))
        .expect("valid calendar date")
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(date(2023, 10, 14), 1, date(2023, 11, 14); "plain month step")]
    #[test_case(date(2023, 10, 31), 1, date(2023, 11, 30); "clamped to short month")]
    #[test_case(date(2023, 12, 14), 1, date(2024, 1, 14); "year rollover forward")]
    #[test_case(date(2024, 1, 14), -1, date(2023, 12, 14); "year rollover backward")]
    #[test_case(date(2024, 1, 31), 1, date(2024, 2, 29); "leap february")]
    #[test_case(date(2023, 1, 31), 1, date(2023, 2, 28); "non-leap february")]
    #[test_case(date(2023, 3, 31), -1, date(2023, 2, 28); "clamped going backward")]
    fn test_shift_month_preserving_day(start: NaiveDate, delta: i32, expected: NaiveDate) {
        assert_eq!(shift_month_preserving_day(start, delta), expected);
    }

    #[test_case(ScheduleViewMode::Day, date(2023, 10, 15); "day advances one day")]
    #[test_case(ScheduleViewMode::Week, date(2023, 10, 21); "week advances seven days")]
    #[test_case(ScheduleViewMode::Month, date(2023, 11, 14); "month advances one month")]
    fn test_step_date_forward_from_oct_14(mode: ScheduleViewMode, expected: NaiveDate) {
        assert_eq!(step_date(date(2023, 10, 14), mode, 1), expected);
    }

    #[test]
    fn test_step_date_month_clamps_end_of_month() {
        assert_eq!(
            step_date(date(2023, 10, 31), ScheduleViewMode::Month, 1),
            date(2023, 11, 30)
        );
    }

    #[test]
    fn test_step_date_backward_inverts_forward() {
        let start = date(2023, 10, 14);
        for mode in [
            ScheduleViewMode::Day,
            ScheduleViewMode::Week,
            ScheduleViewMode::Month,
        ] {
            assert_eq!(step_date(step_date(start, mode, 1), mode, -1), start);
        }
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2023, 11), 30);
        assert_eq!(last_day_of_month(2023, 12), 31);
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(2100, 2), 28);
    }
}
