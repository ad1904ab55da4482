use chrono::{Datelike, Duration, NaiveDate};

/// Returns the last day number of the given month (28-31).
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match first_of_next {
        Some(d) => (d - Duration::days(1)).day(),
        // Only reachable at the chrono date range limits.
        None => 28,
    }
}

/// Builds a date from year/month and a nominal day, clamping the day to the
/// month's last day (so "31st" resolves to Feb 28/29, Apr 30, and so on).
pub fn date_clamped(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.min(last_day_of_month(year, month)).max(1);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Steps a (year, month) pair forward by one month.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// All dates from `start` to `end` inclusive; empty when start > end.
pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2025, 1), 31);
        assert_eq!(last_day_of_month(2025, 2), 28);
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(2025, 4), 30);
        assert_eq!(last_day_of_month(2025, 12), 31);
    }

    #[test]
    fn test_date_clamped() {
        assert_eq!(
            date_clamped(2025, 2, 31),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert_eq!(
            date_clamped(2024, 2, 30),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            date_clamped(2025, 6, 15),
            NaiveDate::from_ymd_opt(2025, 6, 15)
        );
    }

    #[test]
    fn test_next_month_rolls_year() {
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(next_month(2025, 3), (2025, 4));
    }

    #[test]
    fn test_get_days_between() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 2, 2).unwrap();
        let days = get_days_between(start, end);
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], start);
        assert_eq!(days[3], end);
        assert!(get_days_between(end, start).is_empty());
    }
}
