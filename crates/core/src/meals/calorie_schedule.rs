//! Weekly calorie-target scheduling.

use chrono::NaiveDate;

use super::meals_model::{validate_week_start, SchedulePattern, WeeklyCalorieSchedule};
use crate::errors::{Error, Result, ValidationError};

/// Distributes a weekly calorie budget across seven days (Monday first).
///
/// The sum of the daily targets always equals `weekly_target` exactly:
/// rounding remainders are handed out one calorie per day starting Monday.
/// `WeekendHigher` puts Saturday and Sunday roughly 20% above the weekday
/// level before the remainder pass.
pub fn build_weekly_schedule(
    week_start: NaiveDate,
    weekly_target: i32,
    pattern: SchedulePattern,
) -> Result<WeeklyCalorieSchedule> {
    validate_week_start(week_start)?;
    if weekly_target <= 0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Weekly calorie target must be positive".to_string(),
        )));
    }

    let mut daily_targets = match pattern {
        SchedulePattern::Even => {
            let base = weekly_target / 7;
            [base; 7]
        }
        SchedulePattern::WeekendHigher => {
            // Weekday level w solves 5w + 2(1.2w) = weekly, i.e. w = 5T/37.
            let weekday = (weekly_target as i64 * 5 / 37) as i32;
            let weekend = (weekly_target as i64 * 6 / 37) as i32;
            [
                weekday, weekday, weekday, weekday, weekday, weekend, weekend,
            ]
        }
    };

    let allocated: i32 = daily_targets.iter().sum();
    let mut remainder = weekly_target - allocated;
    let mut day = 0usize;
    while remainder > 0 {
        daily_targets[day % 7] += 1;
        remainder -= 1;
        day += 1;
    }

    Ok(WeeklyCalorieSchedule {
        week_start,
        weekly_target,
        pattern,
        daily_targets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    #[test]
    fn test_even_split_exact() {
        let schedule = build_weekly_schedule(monday(), 14000, SchedulePattern::Even).unwrap();
        assert_eq!(schedule.daily_targets, [2000; 7]);
    }

    #[test]
    fn test_even_split_remainder_from_monday() {
        let schedule = build_weekly_schedule(monday(), 14003, SchedulePattern::Even).unwrap();
        assert_eq!(
            schedule.daily_targets,
            [2001, 2001, 2001, 2000, 2000, 2000, 2000]
        );
        assert_eq!(schedule.daily_targets.iter().sum::<i32>(), 14003);
    }

    #[test]
    fn test_weekend_higher_preserves_total() {
        let schedule =
            build_weekly_schedule(monday(), 14000, SchedulePattern::WeekendHigher).unwrap();
        assert_eq!(schedule.daily_targets.iter().sum::<i32>(), 14000);
        // Weekend days sit roughly 20% above weekdays.
        let weekday = schedule.daily_targets[0];
        let saturday = schedule.daily_targets[5];
        assert!(saturday > weekday);
        let ratio = saturday as f64 / weekday as f64;
        assert!((1.15..=1.25).contains(&ratio), "ratio was {}", ratio);
    }

    #[test]
    fn test_weekly_sum_invariant_over_many_targets() {
        for target in [1, 7, 100, 1234, 9999, 14000, 17503] {
            for pattern in [SchedulePattern::Even, SchedulePattern::WeekendHigher] {
                let schedule = build_weekly_schedule(monday(), target, pattern).unwrap();
                assert_eq!(
                    schedule.daily_targets.iter().sum::<i32>(),
                    target,
                    "target {} pattern {:?}",
                    target,
                    pattern
                );
            }
        }
    }

    #[test]
    fn test_rejects_non_monday_and_bad_target() {
        let tuesday = NaiveDate::from_ymd_opt(2025, 6, 17).unwrap();
        assert!(build_weekly_schedule(tuesday, 14000, SchedulePattern::Even).is_err());
        assert!(build_weekly_schedule(monday(), 0, SchedulePattern::Even).is_err());
    }
}
