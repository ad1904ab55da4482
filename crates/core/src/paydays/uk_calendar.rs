//! Working-day arithmetic over the England & Wales bank-holiday calendar.
//!
//! The holiday table covers 2024-2027 including substitute days. Dates
//! outside the table degrade to weekend-only adjustment.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::paydays_model::PayPeriod;
use crate::utils::time_utils::{date_clamped, next_month};

/// England & Wales bank holidays, as (year, month, day).
/// Substitute days are listed in place of the nominal date.
const UK_BANK_HOLIDAYS: &[(i32, u32, u32)] = &[
    // 2024
    (2024, 1, 1),   // New Year's Day
    (2024, 3, 29),  // Good Friday
    (2024, 4, 1),   // Easter Monday
    (2024, 5, 6),   // Early May bank holiday
    (2024, 5, 27),  // Spring bank holiday
    (2024, 8, 26),  // Summer bank holiday
    (2024, 12, 25), // Christmas Day
    (2024, 12, 26), // Boxing Day
    // 2025
    (2025, 1, 1),
    (2025, 4, 18),
    (2025, 4, 21),
    (2025, 5, 5),
    (2025, 5, 26),
    (2025, 8, 25),
    (2025, 12, 25),
    (2025, 12, 26),
    // 2026
    (2026, 1, 1),
    (2026, 4, 3),
    (2026, 4, 6),
    (2026, 5, 4),
    (2026, 5, 25),
    (2026, 8, 31),
    (2026, 12, 25),
    (2026, 12, 28), // Boxing Day substitute (26th is a Saturday)
    // 2027
    (2027, 1, 1),
    (2027, 3, 26),
    (2027, 3, 29),
    (2027, 5, 3),
    (2027, 5, 31),
    (2027, 8, 30),
    (2027, 12, 27), // Christmas Day substitute (25th is a Saturday)
    (2027, 12, 28), // Boxing Day substitute (26th is a Sunday)
];

/// True for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True when the date is an England & Wales bank holiday in the built-in table.
pub fn is_uk_bank_holiday(date: NaiveDate) -> bool {
    UK_BANK_HOLIDAYS
        .iter()
        .any(|&(y, m, d)| date.year() == y && date.month() == m && date.day() == d)
}

/// True when the date is neither a weekend nor a bank holiday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !is_weekend(date) && !is_uk_bank_holiday(date)
}

/// The closest working day strictly before `date`.
pub fn previous_working_day(date: NaiveDate) -> NaiveDate {
    let mut current = date - Duration::days(1);
    while !is_working_day(current) {
        current -= Duration::days(1);
    }
    current
}

/// The closest working day strictly after `date`.
pub fn next_working_day(date: NaiveDate) -> NaiveDate {
    let mut current = date + Duration::days(1);
    while !is_working_day(current) {
        current += Duration::days(1);
    }
    current
}

/// Number of working days in `[start, end)`; zero when start >= end.
pub fn working_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current < end {
        if is_working_day(current) {
            count += 1;
        }
        current += Duration::days(1);
    }
    count
}

/// The adjusted payday for a month: the nominal day (clamped to the month),
/// shifted back to the preceding working day when it lands on a weekend or
/// bank holiday.
pub fn payday_for_month(year: i32, month: u32, nominal_day: u32) -> Option<NaiveDate> {
    let nominal = date_clamped(year, month, nominal_day)?;
    if is_working_day(nominal) {
        Some(nominal)
    } else {
        Some(previous_working_day(nominal))
    }
}

/// The first adjusted payday on or after `today`.
pub fn next_payday(today: NaiveDate, nominal_day: u32) -> Option<NaiveDate> {
    let (mut year, mut month) = (today.year(), today.month());
    // The adjusted payday can only move earlier, so two months always cover it.
    for _ in 0..3 {
        if let Some(payday) = payday_for_month(year, month, nominal_day) {
            if payday >= today {
                return Some(payday);
            }
        }
        (year, month) = next_month(year, month);
    }
    None
}

/// The pay period containing `date`: from its payday (inclusive) to the day
/// before the next one.
pub fn pay_period_for(date: NaiveDate, nominal_day: u32) -> Option<PayPeriod> {
    let this_months = payday_for_month(date.year(), date.month(), nominal_day)?;

    let payday = if date >= this_months {
        this_months
    } else {
        // Still inside the previous month's period.
        let (prev_year, prev_month) = if date.month() == 1 {
            (date.year() - 1, 12)
        } else {
            (date.year(), date.month() - 1)
        };
        payday_for_month(prev_year, prev_month, nominal_day)?
    };

    let (next_year, next_month_num) = next_month(payday.year(), payday.month());
    let next = payday_for_month(next_year, next_month_num, nominal_day)?;

    Some(PayPeriod {
        payday,
        period_start: payday,
        period_end: next - Duration::days(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekends_and_holidays() {
        assert!(is_weekend(date(2025, 9, 20))); // Saturday
        assert!(!is_weekend(date(2025, 9, 19)));
        assert!(is_uk_bank_holiday(date(2025, 4, 18))); // Good Friday
        assert!(is_uk_bank_holiday(date(2026, 12, 28))); // Boxing Day substitute
        assert!(!is_uk_bank_holiday(date(2026, 12, 26)));
        assert!(is_working_day(date(2025, 6, 20)));
        assert!(!is_working_day(date(2025, 5, 5))); // Early May holiday
    }

    #[test]
    fn test_previous_and_next_working_day() {
        // Monday steps back over the whole weekend.
        assert_eq!(previous_working_day(date(2025, 9, 22)), date(2025, 9, 19));
        // Easter weekend 2025: Thu 17 Apr is the last working day before Tue 22.
        assert_eq!(previous_working_day(date(2025, 4, 22)), date(2025, 4, 17));
        assert_eq!(next_working_day(date(2025, 4, 17)), date(2025, 4, 22));
    }

    #[test]
    fn test_working_days_between() {
        // One full week contains five working days.
        assert_eq!(working_days_between(date(2025, 6, 16), date(2025, 6, 23)), 5);
        // Week containing Early May holiday (Mon 5 May 2025) has four.
        assert_eq!(working_days_between(date(2025, 5, 5), date(2025, 5, 12)), 4);
        assert_eq!(working_days_between(date(2025, 6, 23), date(2025, 6, 16)), 0);
    }

    #[test]
    fn test_payday_on_working_day_unmoved() {
        // 20 June 2025 is a Friday.
        assert_eq!(
            payday_for_month(2025, 6, 20),
            Some(date(2025, 6, 20))
        );
    }

    #[test]
    fn test_payday_shifts_off_weekend() {
        // 20 September 2025 is a Saturday; pay lands Friday the 19th.
        assert_eq!(
            payday_for_month(2025, 9, 20),
            Some(date(2025, 9, 19))
        );
        // 20 July 2025 is a Sunday; pay lands Friday the 18th.
        assert_eq!(
            payday_for_month(2025, 7, 20),
            Some(date(2025, 7, 18))
        );
    }

    #[test]
    fn test_payday_shifts_off_bank_holiday() {
        // A nominal day of 26 December 2025 (Boxing Day, Friday) walks back
        // past Christmas to Wednesday the 24th.
        assert_eq!(
            payday_for_month(2025, 12, 26),
            Some(date(2025, 12, 24))
        );
    }

    #[test]
    fn test_nominal_day_clamps() {
        // "31st" in February resolves before adjustment.
        // 28 Feb 2025 is a Friday.
        assert_eq!(
            payday_for_month(2025, 2, 31),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn test_next_payday_rolls_to_next_month() {
        // After June's payday, the next one is July's (shifted to the 18th).
        assert_eq!(
            next_payday(date(2025, 6, 21), 20),
            Some(date(2025, 7, 18))
        );
        // On the payday itself, that payday counts.
        assert_eq!(
            next_payday(date(2025, 6, 20), 20),
            Some(date(2025, 6, 20))
        );
    }

    #[test]
    fn test_pay_period_spans_month_boundary() {
        // 1 July 2025 falls in the period started by June's payday.
        let period = pay_period_for(date(2025, 7, 1), 20).unwrap();
        assert_eq!(period.payday, date(2025, 6, 20));
        assert_eq!(period.period_start, date(2025, 6, 20));
        // July's payday shifts to the 18th, so the period ends on the 17th.
        assert_eq!(period.period_end, date(2025, 7, 17));
    }

    #[test]
    fn test_pay_period_in_january_reaches_back_to_december() {
        let period = pay_period_for(date(2026, 1, 5), 20).unwrap();
        // 20 Dec 2025 is a Saturday; December pay lands Friday the 19th.
        assert_eq!(period.payday, date(2025, 12, 19));
    }
}
