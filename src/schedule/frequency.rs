use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::window::DateWindow;
use crate::utils::{date_with_day, month_end, shift_months, shift_years};

const MAX_OCCURRENCES: usize = 1024;

// Catch-up bound for calendar cadences (semimonthly, monthly, yearly),
// whose clamped steps are path-dependent and cannot be jumped
// arithmetically. 24_000 steps reach a window ~1000 years past a
// semimonthly anchor and ~2000 years past a monthly one.
const MAX_CATCHUP_STEPS: usize = 24_000;

/// Recurrence cadence of a template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    /// Twice-monthly payroll cadence on the 15th and the last day of each
    /// month ("quincena").
    SemimonthlyFifteenEom,
    Monthly,
    Yearly,
}

impl Frequency {
    /// The occurrence following `from`.
    ///
    /// Month and year steps clamp the day-of-month to the target month's
    /// last valid day. The semimonthly step snaps onto the 15th/EOM grid:
    /// before the 15th the next stop is the 15th, from the 15th it is the
    /// end of the month, after the 15th it is the 15th of the next month.
    pub fn next_date(&self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => from + Duration::days(1),
            Frequency::Weekly => from + Duration::days(7),
            Frequency::Biweekly => from + Duration::days(14),
            Frequency::SemimonthlyFifteenEom => {
                if from.day() < 15 {
                    date_with_day(from.year(), from.month(), 15)
                } else if from.day() == 15 {
                    month_end(from)
                } else {
                    let next = shift_months(date_with_day(from.year(), from.month(), 1), 1);
                    date_with_day(next.year(), next.month(), 15)
                }
            }
            Frequency::Monthly => shift_months(from, 1),
            Frequency::Yearly => shift_years(from, 1),
        }
    }

    /// Step size in days for the fixed-length cadences; calendar-based
    /// cadences (semimonthly, monthly, yearly) have none.
    fn fixed_step_days(&self) -> Option<i64> {
        match self {
            Frequency::Daily => Some(1),
            Frequency::Weekly => Some(7),
            Frequency::Biweekly => Some(14),
            _ => None,
        }
    }

}

/// Lazy iterator over a template's occurrence dates inside a window.
///
/// Pure function of its inputs: restarting with the same arguments yields
/// the same sequence. Bounded by the window end, the optional template end
/// date (exclusive), and a hard occurrence cap.
#[derive(Debug, Clone)]
pub struct Occurrences {
    next: Option<NaiveDate>,
    frequency: Frequency,
    window_end: NaiveDate,
    end_date: Option<NaiveDate>,
    emitted: usize,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if self.emitted >= MAX_OCCURRENCES || !self.in_bounds(current) {
            self.next = None;
            return None;
        }
        let following = self.frequency.next_date(current);
        // A frequency step must advance; a stuck date would loop forever.
        self.next = (following > current).then_some(following);
        self.emitted += 1;
        Some(current)
    }
}

impl Occurrences {
    fn in_bounds(&self, date: NaiveDate) -> bool {
        date < self.window_end && self.end_date.map_or(true, |end| date < end)
    }
}

/// Occurrence dates of a recurring schedule falling inside `[window.start,
/// window.end)`.
///
/// Walks forward from `next_due` by the frequency step until the window is
/// reached, then emits until the window end or the schedule's own `end_date`
/// (no occurrence lands on or after it).
pub fn occurrences_in_window(
    next_due: NaiveDate,
    frequency: Frequency,
    end_date: Option<NaiveDate>,
    window: &DateWindow,
) -> Occurrences {
    let mut date = next_due;
    if date < window.start {
        if let Some(step) = frequency.fixed_step_days() {
            // Fixed-length cadences catch up in one jump, so a years-old
            // daily template costs the same as a fresh one.
            let behind = (window.start - date).num_days();
            date += Duration::days(behind.div_euclid(step) * step);
        }
        let mut steps = 0usize;
        while date < window.start && steps < MAX_CATCHUP_STEPS {
            let following = frequency.next_date(date);
            if following <= date {
                break;
            }
            date = following;
            steps += 1;
        }
    }
    Occurrences {
        next: (date >= window.start).then_some(date),
        frequency,
        window_end: window.end,
        end_date,
        emitted: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn window(start: NaiveDate, end: NaiveDate) -> DateWindow {
        DateWindow::new(start, end).unwrap()
    }

    #[test]
    fn semimonthly_snaps_to_fifteen_eom_grid() {
        let f = Frequency::SemimonthlyFifteenEom;
        assert_eq!(f.next_date(d(2025, 1, 10)), d(2025, 1, 15));
        assert_eq!(f.next_date(d(2025, 1, 15)), d(2025, 1, 31));
        assert_eq!(f.next_date(d(2025, 1, 31)), d(2025, 2, 15));
        assert_eq!(f.next_date(d(2025, 2, 15)), d(2025, 2, 28));
    }

    #[test]
    fn monthly_clamps_month_end() {
        let f = Frequency::Monthly;
        assert_eq!(f.next_date(d(2025, 1, 31)), d(2025, 2, 28));
        assert_eq!(f.next_date(d(2024, 1, 31)), d(2024, 2, 29));
    }

    #[test]
    fn yearly_clamps_leap_day() {
        assert_eq!(Frequency::Yearly.next_date(d(2024, 2, 29)), d(2025, 2, 28));
    }

    #[test]
    fn empty_when_next_due_past_window() {
        let w = window(d(2025, 3, 1), d(2025, 4, 1));
        let dates: Vec<_> =
            occurrences_in_window(d(2025, 5, 1), Frequency::Monthly, None, &w).collect();
        assert!(dates.is_empty());
    }

    #[test]
    fn end_date_is_exclusive() {
        let w = window(d(2025, 1, 1), d(2025, 4, 1));
        let dates: Vec<_> = occurrences_in_window(
            d(2025, 1, 5),
            Frequency::Monthly,
            Some(d(2025, 3, 5)),
            &w,
        )
        .collect();
        assert_eq!(dates, vec![d(2025, 1, 5), d(2025, 2, 5)]);
    }

    #[test]
    fn fast_forwards_into_window() {
        let w = window(d(2025, 6, 1), d(2025, 6, 15));
        let dates: Vec<_> =
            occurrences_in_window(d(2025, 1, 3), Frequency::Weekly, None, &w).collect();
        assert_eq!(dates, vec![d(2025, 6, 6), d(2025, 6, 13)]);
    }

    #[test]
    fn semimonthly_catches_up_from_a_century_old_anchor() {
        let w = window(d(2025, 6, 1), d(2025, 7, 1));
        let dates: Vec<_> = occurrences_in_window(
            d(1925, 1, 10),
            Frequency::SemimonthlyFifteenEom,
            None,
            &w,
        )
        .collect();
        assert_eq!(dates, vec![d(2025, 6, 15), d(2025, 6, 30)]);
    }

    #[test]
    fn monthly_catch_up_preserves_clamp_drift() {
        // Stepping month by month from Mar 31 clamps through Apr 30 and
        // settles on day 28 after the first short February.
        let w = window(d(2025, 3, 1), d(2025, 4, 1));
        let dates: Vec<_> =
            occurrences_in_window(d(1990, 3, 31), Frequency::Monthly, None, &w).collect();
        assert_eq!(dates, vec![d(2025, 3, 28)]);
    }

    #[test]
    fn restarting_yields_identical_sequence() {
        let w = window(d(2025, 1, 1), d(2026, 1, 1));
        let first: Vec<_> =
            occurrences_in_window(d(2025, 1, 10), Frequency::SemimonthlyFifteenEom, None, &w)
                .collect();
        let second: Vec<_> =
            occurrences_in_window(d(2025, 1, 10), Frequency::SemimonthlyFifteenEom, None, &w)
                .collect();
        assert_eq!(first, second);
        // Anchor plus the 15th and EOM of Jan, then two stops per month.
        assert_eq!(first.len(), 25);
        assert_eq!(first[0], d(2025, 1, 10));
        assert_eq!(first[1], d(2025, 1, 15));
        assert_eq!(first[2], d(2025, 1, 31));
    }
}
