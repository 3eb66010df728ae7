use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::schedule::DateWindow;
use crate::utils::{date_with_day, shift_months};

/// Selectable projection period lengths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodType {
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Semiannual,
    Annual,
}

/// How the period window is anchored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectionMode {
    /// The canonical calendar period containing `today` (whole month,
    /// quincena half, calendar year, ...).
    Calendar,
    /// A rolling `[today, today + period length)` window, used by the
    /// forecast view.
    Projection,
}

/// Resolves the `[start, end)` window for a period relative to `today`.
pub fn resolve_window(period: PeriodType, mode: ProjectionMode, today: NaiveDate) -> DateWindow {
    match mode {
        ProjectionMode::Projection => DateWindow {
            start: today,
            end: rolling_end(period, today),
        },
        ProjectionMode::Calendar => calendar_window(period, today),
    }
}

fn rolling_end(period: PeriodType, today: NaiveDate) -> NaiveDate {
    match period {
        PeriodType::Weekly => today + Duration::days(7),
        PeriodType::Biweekly => today + Duration::days(14),
        PeriodType::Monthly => shift_months(today, 1),
        PeriodType::Bimonthly => shift_months(today, 2),
        PeriodType::Semiannual => shift_months(today, 6),
        PeriodType::Annual => shift_months(today, 12),
    }
}

fn calendar_window(period: PeriodType, today: NaiveDate) -> DateWindow {
    let year = today.year();
    let month = today.month();
    match period {
        PeriodType::Weekly => {
            let start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            DateWindow {
                start,
                end: start + Duration::days(7),
            }
        }
        // Quincena halves: days 1-15, then 16 through month end.
        PeriodType::Biweekly => {
            if today.day() <= 15 {
                DateWindow {
                    start: date_with_day(year, month, 1),
                    end: date_with_day(year, month, 16),
                }
            } else {
                DateWindow {
                    start: date_with_day(year, month, 16),
                    end: first_of_next_month(today),
                }
            }
        }
        PeriodType::Monthly => DateWindow {
            start: date_with_day(year, month, 1),
            end: first_of_next_month(today),
        },
        PeriodType::Bimonthly => {
            let start_month = ((month - 1) / 2) * 2 + 1;
            let start = date_with_day(year, start_month, 1);
            DateWindow {
                start,
                end: shift_months(start, 2),
            }
        }
        PeriodType::Semiannual => {
            let start_month = if month <= 6 { 1 } else { 7 };
            let start = date_with_day(year, start_month, 1);
            DateWindow {
                start,
                end: shift_months(start, 6),
            }
        }
        PeriodType::Annual => {
            let start = date_with_day(year, 1, 1);
            DateWindow {
                start,
                end: date_with_day(year + 1, 1, 1),
            }
        }
    }
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    shift_months(date_with_day(date.year(), date.month(), 1), 1)
}
