//! Occurrence expansion and bank-transaction matching for recurring bills.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use super::bills_model::{Bill, BillFrequency, BillOccurrence, OccurrenceStatus};
use crate::constants::{BILL_DUE_SOON_DAYS, BILL_MATCH_DATE_TOLERANCE_DAYS};
use crate::transactions::Transaction;
use crate::utils::time_utils::{date_clamped, next_month};

/// Amount slack as a fraction of the bill amount (5%).
fn amount_tolerance(amount: Decimal) -> Decimal {
    let proportional = amount * Decimal::new(5, 2);
    proportional.max(Decimal::ONE)
}

/// Generates the due dates of a bill inside `[window_start, window_end]`.
///
/// Occurrences are returned in date order with `Upcoming` status; callers
/// refine statuses via [`match_transactions`]. Monthly bills due on day 29-31
/// clamp to short months. Quarterly and annual bills anchor their cycle on
/// the bill's start date.
pub fn expand_occurrences(
    bill: &Bill,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<BillOccurrence> {
    if window_start > window_end {
        return Vec::new();
    }

    let mut dates: Vec<NaiveDate> = Vec::new();
    match bill.frequency {
        BillFrequency::Monthly => {
            let (mut year, mut month) = (window_start.year(), window_start.month());
            loop {
                if let Some(date) = date_clamped(year, month, bill.due_day) {
                    if date > window_end {
                        break;
                    }
                    if date >= window_start {
                        dates.push(date);
                    }
                }
                (year, month) = next_month(year, month);
                if year > window_end.year() + 1 {
                    break;
                }
            }
        }
        BillFrequency::Weekly => {
            let mut current = window_start;
            while current <= window_end {
                if current.weekday().number_from_monday() == bill.due_day {
                    dates.push(current);
                }
                current += Duration::days(1);
            }
        }
        BillFrequency::Quarterly | BillFrequency::Annual => {
            let Some(anchor) = bill.start_date else {
                return Vec::new();
            };
            let months_step = if bill.frequency == BillFrequency::Quarterly {
                3
            } else {
                12
            };
            let (mut year, mut month) = (anchor.year(), anchor.month());
            loop {
                if let Some(date) = date_clamped(year, month, anchor.day()) {
                    if date > window_end {
                        break;
                    }
                    if date >= window_start {
                        dates.push(date);
                    }
                }
                for _ in 0..months_step {
                    (year, month) = next_month(year, month);
                }
            }
        }
    }

    // Bills that started mid-window produce no occurrences before their start.
    if let Some(start) = bill.start_date {
        dates.retain(|d| *d >= start);
    }

    dates
        .into_iter()
        .map(|due_date| BillOccurrence {
            bill_id: bill.id.clone(),
            bill_name: bill.name.clone(),
            due_date,
            amount: bill.amount,
            status: OccurrenceStatus::Upcoming,
            matched_transaction_id: None,
        })
        .collect()
}

/// Pairs bill occurrences with bank transactions and assigns statuses.
///
/// A transaction is a candidate for an occurrence when it is an outflow whose
/// absolute amount is within tolerance of the bill amount and whose date is
/// within the date window of the due date. Candidates are ranked by date
/// distance then amount distance, and each transaction settles at most one
/// occurrence. Unmatched occurrences become `Missed` once past due, `Due`
/// when due within the next few days, `Upcoming` otherwise.
pub fn match_transactions(
    occurrences: Vec<BillOccurrence>,
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<BillOccurrence> {
    let mut occurrences = occurrences;
    occurrences.sort_by_key(|o| o.due_date);

    let mut claimed: std::collections::HashSet<&str> = std::collections::HashSet::new();

    for occurrence in occurrences.iter_mut() {
        let tolerance = amount_tolerance(occurrence.amount);
        let mut best: Option<(i64, Decimal, &Transaction)> = None;

        for tx in transactions {
            if tx.amount >= Decimal::ZERO || claimed.contains(tx.id.as_str()) {
                continue;
            }
            let amount_dist = (tx.amount.abs() - occurrence.amount).abs();
            if amount_dist > tolerance {
                continue;
            }
            let date_dist = (tx.transaction_date - occurrence.due_date).num_days().abs();
            if date_dist > BILL_MATCH_DATE_TOLERANCE_DAYS {
                continue;
            }
            let better = match &best {
                None => true,
                Some((best_date, best_amount, _)) => {
                    (date_dist, amount_dist) < (*best_date, *best_amount)
                }
            };
            if better {
                best = Some((date_dist, amount_dist, tx));
            }
        }

        if let Some((_, _, tx)) = best {
            claimed.insert(tx.id.as_str());
            occurrence.status = OccurrenceStatus::Paid;
            occurrence.matched_transaction_id = Some(tx.id.clone());
        } else {
            let days_until = (occurrence.due_date - today).num_days();
            occurrence.status = if days_until < 0 {
                OccurrenceStatus::Missed
            } else if days_until <= BILL_DUE_SOON_DAYS {
                OccurrenceStatus::Due
            } else {
                OccurrenceStatus::Upcoming
            };
        }
    }

    occurrences
}

/// Normalizes a bill's amount to a monthly figure (weekly bills scale by
/// 52/12, quarterly by 1/3, annual by 1/12), rounded to 2 decimal places.
pub fn monthly_equivalent(amount: Decimal, frequency: BillFrequency) -> Decimal {
    let monthly = match frequency {
        BillFrequency::Weekly => amount * Decimal::from(52) / Decimal::from(12),
        BillFrequency::Monthly => amount,
        BillFrequency::Quarterly => amount / Decimal::from(3),
        BillFrequency::Annual => amount / Decimal::from(12),
    };
    monthly.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monthly_bill(name: &str, amount: Decimal, due_day: u32) -> Bill {
        Bill {
            id: format!("bill-{}", name.to_lowercase()),
            name: name.to_string(),
            amount,
            frequency: BillFrequency::Monthly,
            due_day,
            start_date: None,
            category: None,
            account_id: None,
            is_active: true,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    fn tx(id: &str, d: NaiveDate, amount: Decimal) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: "acc-1".to_string(),
            transaction_date: d,
            description: id.to_string(),
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn test_monthly_expansion_clamps_short_months() {
        let bill = monthly_bill("Rent", dec!(950), 31);
        let occurrences = expand_occurrences(&bill, date(2025, 1, 1), date(2025, 4, 30));
        let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.due_date).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 1, 31),
                date(2025, 2, 28),
                date(2025, 3, 31),
                date(2025, 4, 30),
            ]
        );
    }

    #[test]
    fn test_weekly_expansion_on_weekday() {
        let mut bill = monthly_bill("Cleaner", dec!(25), 5); // Friday
        bill.frequency = BillFrequency::Weekly;
        let occurrences = expand_occurrences(&bill, date(2025, 3, 1), date(2025, 3, 31));
        let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.due_date).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 3, 7),
                date(2025, 3, 14),
                date(2025, 3, 21),
                date(2025, 3, 28),
            ]
        );
    }

    #[test]
    fn test_quarterly_anchors_on_start_date() {
        let mut bill = monthly_bill("Water", dec!(120), 15);
        bill.frequency = BillFrequency::Quarterly;
        bill.start_date = Some(date(2025, 1, 15));
        let occurrences = expand_occurrences(&bill, date(2025, 3, 1), date(2025, 12, 31));
        let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.due_date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 4, 15), date(2025, 7, 15), date(2025, 10, 15)]
        );
    }

    #[test]
    fn test_no_occurrences_before_start_date() {
        let mut bill = monthly_bill("Gym", dec!(35), 10);
        bill.start_date = Some(date(2025, 3, 1));
        let occurrences = expand_occurrences(&bill, date(2025, 1, 1), date(2025, 4, 30));
        let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.due_date).collect();
        assert_eq!(dates, vec![date(2025, 3, 10), date(2025, 4, 10)]);
    }

    #[test]
    fn test_matching_marks_paid_within_tolerance() {
        let bill = monthly_bill("Netflix", dec!(10.99), 1);
        let occurrences = expand_occurrences(&bill, date(2025, 3, 1), date(2025, 3, 31));
        let transactions = vec![
            tx("t1", date(2025, 3, 2), dec!(-10.99)),
            tx("t2", date(2025, 3, 2), dec!(-89.00)),
        ];
        let matched = match_transactions(occurrences, &transactions, date(2025, 3, 20));
        assert_eq!(matched[0].status, OccurrenceStatus::Paid);
        assert_eq!(matched[0].matched_transaction_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_transaction_claimed_once() {
        let bill_a = monthly_bill("GymA", dec!(30), 5);
        let bill_b = monthly_bill("GymB", dec!(30), 6);
        let mut occurrences = expand_occurrences(&bill_a, date(2025, 3, 1), date(2025, 3, 31));
        occurrences.extend(expand_occurrences(&bill_b, date(2025, 3, 1), date(2025, 3, 31)));
        let transactions = vec![tx("t1", date(2025, 3, 5), dec!(-30))];
        let matched = match_transactions(occurrences, &transactions, date(2025, 3, 10));
        let paid: Vec<_> = matched
            .iter()
            .filter(|o| o.status == OccurrenceStatus::Paid)
            .collect();
        assert_eq!(paid.len(), 1);
        assert_eq!(paid[0].bill_name, "GymA");
        // The other occurrence stays unmatched and past due.
        assert!(matched
            .iter()
            .any(|o| o.bill_name == "GymB" && o.status == OccurrenceStatus::Missed));
    }

    #[test]
    fn test_closest_date_wins() {
        let bill = monthly_bill("Energy", dec!(80), 10);
        let occurrences = expand_occurrences(&bill, date(2025, 3, 1), date(2025, 3, 31));
        let transactions = vec![
            tx("far", date(2025, 3, 13), dec!(-80)),
            tx("near", date(2025, 3, 10), dec!(-80)),
        ];
        let matched = match_transactions(occurrences, &transactions, date(2025, 3, 20));
        assert_eq!(matched[0].matched_transaction_id.as_deref(), Some("near"));
    }

    #[test]
    fn test_statuses_without_match() {
        let bill = monthly_bill("Rent", dec!(950), 10);
        let occurrences = expand_occurrences(&bill, date(2025, 2, 1), date(2025, 4, 30));
        let matched = match_transactions(occurrences, &[], date(2025, 3, 9));
        assert_eq!(matched[0].status, OccurrenceStatus::Missed); // Feb 10
        assert_eq!(matched[1].status, OccurrenceStatus::Due); // Mar 10, tomorrow
        assert_eq!(matched[2].status, OccurrenceStatus::Upcoming); // Apr 10
    }

    #[test]
    fn test_inflows_never_match() {
        let bill = monthly_bill("Netflix", dec!(10.99), 1);
        let occurrences = expand_occurrences(&bill, date(2025, 3, 1), date(2025, 3, 31));
        let transactions = vec![tx("refund", date(2025, 3, 1), dec!(10.99))];
        let matched = match_transactions(occurrences, &transactions, date(2025, 2, 25));
        assert_eq!(matched[0].status, OccurrenceStatus::Upcoming);
    }

    #[test]
    fn test_monthly_equivalent() {
        assert_eq!(
            monthly_equivalent(dec!(12), BillFrequency::Weekly),
            dec!(52.00)
        );
        assert_eq!(
            monthly_equivalent(dec!(10.99), BillFrequency::Monthly),
            dec!(10.99)
        );
        assert_eq!(
            monthly_equivalent(dec!(120), BillFrequency::Quarterly),
            dec!(40.00)
        );
        assert_eq!(
            monthly_equivalent(dec!(600), BillFrequency::Annual),
            dec!(50.00)
        );
    }
}
