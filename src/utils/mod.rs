//! Shared date arithmetic and rounding helpers, plus tracing setup.
//!
//! All calendar math lives here so the frequency calendar, billing-cycle
//! calculator, and installment resolver clamp day-of-month values the same
//! way. Dates are `chrono::NaiveDate`, so a date's "day" is the same
//! regardless of the runtime's local timezone.

use std::sync::Once;

use chrono::{Datelike, Duration, NaiveDate};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("planner_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Rounds a monetary amount to 2 decimal places, half away from zero.
///
/// Applied at output edges only; intermediate math keeps full precision.
/// Exact half-cents are not representable in f64 (1.005 scales to a hair
/// under 100.5), so the scaled value is nudged away from zero by a few ulps
/// before rounding. The nudge is far below a cent for any currency amount,
/// so only representation error at the boundary is affected.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0 * (1.0 + 4.0 * f64::EPSILON);
    scaled.round() / 100.0
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// Last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let day = days_in_month(date.year(), date.month());
    NaiveDate::from_ymd_opt(date.year(), date.month(), day).unwrap()
}

/// Resolves a 1-31 day-of-month against a concrete month, clamping to the
/// month's last valid day (day 31 on a 30-day month means month end).
pub fn date_with_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Shifts a date by whole calendar months, clamping the day-of-month when
/// the target month is shorter (Jan 31 + 1 month is Feb 28/29).
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    date_with_day(year, month as u32, date.day())
}

/// Shifts a date by whole years, clamping Feb 29 to Feb 28 off leap years.
pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    date_with_day(date.year() + years, date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        assert_eq!(round2(1.005), 1.01);
        assert_eq!(round2(-1.005), -1.01);
        assert_eq!(round2(2.344), 2.34);
        // 0.125 is exactly representable, so this is a true half-cent.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn round2_handles_half_cent_representation_boundaries() {
        // Both scale to just under the half-cent in f64; they must still
        // round away from zero.
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(-2.675), -2.68);
        assert_eq!(round2(8.835), 8.84);
        // Values genuinely below the boundary are untouched.
        assert_eq!(round2(1.0049), 1.0);
        assert_eq!(round2(2.6749), 2.67);
    }

    #[test]
    fn shift_months_clamps_to_month_end() {
        assert_eq!(shift_months(d(2025, 1, 31), 1), d(2025, 2, 28));
        assert_eq!(shift_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(shift_months(d(2025, 3, 31), -1), d(2025, 2, 28));
        assert_eq!(shift_months(d(2025, 11, 30), 3), d(2026, 2, 28));
    }

    #[test]
    fn shift_years_clamps_leap_day() {
        assert_eq!(shift_years(d(2024, 2, 29), 1), d(2025, 2, 28));
        assert_eq!(shift_years(d(2024, 2, 29), 4), d(2028, 2, 29));
    }

    #[test]
    fn date_with_day_clamps_day_31() {
        assert_eq!(date_with_day(2025, 4, 31), d(2025, 4, 30));
        assert_eq!(date_with_day(2025, 2, 31), d(2025, 2, 28));
        assert_eq!(date_with_day(2025, 1, 31), d(2025, 1, 31));
    }
}
