//! Month-by-month debt payoff simulation.
//!
//! Each simulated month: accrue interest on every open balance (APR / 12),
//! pay each debt its minimum, then pour whatever budget remains into the
//! priority debt for the chosen strategy. As debts clear, their minimums are
//! freed back into the budget automatically (the whole budget is re-applied
//! every month against the remaining debts).

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::debts_model::{
    Debt, DebtError, DebtPayment, PayoffMonth, PayoffPlan, PayoffStrategy,
};
use crate::constants::PAYOFF_MAX_MONTHS;
use crate::errors::{Error, Result};
use crate::utils::time_utils::next_month;

const MONTHS_PER_YEAR: u32 = 12;

struct OpenDebt {
    id: String,
    name: String,
    balance: Decimal,
    apr: Decimal,
    min_payment: Decimal,
}

fn monthly_rate(apr: Decimal) -> Decimal {
    apr / Decimal::from(100) / Decimal::from(MONTHS_PER_YEAR)
}

/// Index of the debt spare budget goes to under the strategy.
///
/// Avalanche prefers the highest APR, ties broken by lower balance;
/// snowball prefers the lowest balance, ties broken by higher APR.
fn priority_index(debts: &[OpenDebt], strategy: PayoffStrategy) -> Option<usize> {
    use std::cmp::Reverse;
    let open = debts
        .iter()
        .enumerate()
        .filter(|(_, d)| d.balance > Decimal::ZERO);
    match strategy {
        PayoffStrategy::Avalanche => open
            .max_by_key(|(_, d)| (d.apr, Reverse(d.balance)))
            .map(|(i, _)| i),
        PayoffStrategy::Snowball => open
            .min_by_key(|(_, d)| (d.balance, Reverse(d.apr)))
            .map(|(i, _)| i),
    }
}

/// Simulates paying off `debts` with a fixed monthly budget.
///
/// Fails when the budget does not cover the sum of minimum payments on
/// active debts. The simulation stops once every balance reaches zero or
/// after [`PAYOFF_MAX_MONTHS`] months, whichever comes first.
pub fn generate_payoff_plan(
    debts: &[Debt],
    monthly_budget: Decimal,
    strategy: PayoffStrategy,
    start_month: NaiveDate,
) -> Result<PayoffPlan> {
    let mut open: Vec<OpenDebt> = debts
        .iter()
        .filter(|d| d.is_active && d.balance > Decimal::ZERO)
        .map(|d| OpenDebt {
            id: d.id.clone(),
            name: d.name.clone(),
            balance: d.balance,
            apr: d.apr,
            min_payment: d.min_payment,
        })
        .collect();

    let minimum_total: Decimal = open.iter().map(|d| d.min_payment).sum();
    if monthly_budget < minimum_total {
        return Err(Error::Debt(DebtError::BudgetBelowMinimums {
            budget: monthly_budget,
            minimum_total,
        }));
    }

    let mut months: Vec<PayoffMonth> = Vec::new();
    let mut total_interest = Decimal::ZERO;
    let (mut year, mut month) = (start_month.year(), start_month.month());
    let mut truncated = false;

    while open.iter().any(|d| d.balance > Decimal::ZERO) {
        if months.len() >= PAYOFF_MAX_MONTHS {
            truncated = true;
            break;
        }

        let month_start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::Unexpected("Payoff month out of range".to_string()))?;
        let mut budget = monthly_budget;
        let mut payments: Vec<DebtPayment> = Vec::new();
        let mut month_interest = Decimal::ZERO;

        // Interest accrual, then minimum payments.
        for debt in open.iter_mut() {
            if debt.balance <= Decimal::ZERO {
                continue;
            }
            let interest = (debt.balance * monthly_rate(debt.apr)).round_dp(2);
            debt.balance += interest;
            month_interest += interest;

            let payment = debt.min_payment.min(debt.balance).min(budget);
            debt.balance -= payment;
            budget -= payment;

            payments.push(DebtPayment {
                debt_id: debt.id.clone(),
                debt_name: debt.name.clone(),
                interest,
                payment,
                remaining_balance: debt.balance,
            });
        }

        // Spare budget goes to the priority debt; repeat in case it clears
        // with budget left over.
        while budget > Decimal::ZERO {
            let Some(index) = priority_index(&open, strategy) else {
                break;
            };
            let debt = &mut open[index];
            let extra = budget.min(debt.balance);
            debt.balance -= extra;
            budget -= extra;

            if let Some(entry) = payments.iter_mut().find(|p| p.debt_id == debt.id) {
                entry.payment += extra;
                entry.remaining_balance = debt.balance;
            }
        }

        let total_paid: Decimal = payments.iter().map(|p| p.payment).sum();
        let remaining_balance: Decimal = open.iter().map(|d| d.balance).sum();
        total_interest += month_interest;

        months.push(PayoffMonth {
            month: month_start,
            payments,
            total_paid,
            total_interest: month_interest,
            remaining_balance,
        });

        (year, month) = next_month(year, month);
    }

    let debt_free_date = if truncated {
        None
    } else {
        months.last().map(|m| m.month)
    };

    Ok(PayoffPlan {
        strategy,
        monthly_budget,
        months,
        total_interest: total_interest.round_dp(2),
        debt_free_date,
        truncated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn debt(id: &str, balance: Decimal, apr: Decimal, min_payment: Decimal) -> Debt {
        Debt {
            id: id.to_string(),
            name: id.to_string(),
            balance,
            apr,
            min_payment,
            is_active: true,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    fn march() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_budget_must_cover_minimums() {
        let debts = vec![
            debt("card", dec!(1000), dec!(20), dec!(50)),
            debt("loan", dec!(5000), dec!(7), dec!(120)),
        ];
        let result = generate_payoff_plan(&debts, dec!(100), PayoffStrategy::Avalanche, march());
        assert!(matches!(
            result,
            Err(Error::Debt(DebtError::BudgetBelowMinimums { .. }))
        ));
    }

    #[test]
    fn test_zero_interest_debt_clears_on_schedule() {
        let debts = vec![debt("sofa", dec!(250), dec!(0), dec!(100))];
        let plan =
            generate_payoff_plan(&debts, dec!(100), PayoffStrategy::Avalanche, march()).unwrap();
        assert_eq!(plan.months.len(), 3);
        assert_eq!(plan.total_interest, Decimal::ZERO);
        assert_eq!(
            plan.debt_free_date,
            NaiveDate::from_ymd_opt(2025, 5, 1)
        );
        assert!(!plan.truncated);
        // Final month pays exactly the remaining balance, not the full budget.
        assert_eq!(plan.months[2].total_paid, dec!(50));
        assert_eq!(plan.months[2].remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_avalanche_prioritizes_high_apr() {
        let debts = vec![
            debt("cheap", dec!(1000), dec!(5), dec!(25)),
            debt("dear", dec!(1000), dec!(30), dec!(25)),
        ];
        let plan =
            generate_payoff_plan(&debts, dec!(300), PayoffStrategy::Avalanche, march()).unwrap();
        let first = &plan.months[0];
        let dear = first.payments.iter().find(|p| p.debt_id == "dear").unwrap();
        let cheap = first.payments.iter().find(|p| p.debt_id == "cheap").unwrap();
        assert_eq!(cheap.payment, dec!(25));
        assert_eq!(dear.payment, dec!(275));
    }

    #[test]
    fn test_snowball_prioritizes_low_balance() {
        let debts = vec![
            debt("small", dec!(400), dec!(5), dec!(25)),
            debt("large", dec!(4000), dec!(30), dec!(100)),
        ];
        let plan =
            generate_payoff_plan(&debts, dec!(600), PayoffStrategy::Snowball, march()).unwrap();
        let first = &plan.months[0];
        let small = first.payments.iter().find(|p| p.debt_id == "small").unwrap();
        assert_eq!(small.remaining_balance, Decimal::ZERO);
        // Spare budget after clearing the small debt flows to the large one.
        let large = first.payments.iter().find(|p| p.debt_id == "large").unwrap();
        assert!(large.payment > dec!(100));
    }

    #[test]
    fn test_interest_accrues_monthly() {
        let debts = vec![debt("card", dec!(1200), dec!(12), dec!(50))];
        let plan =
            generate_payoff_plan(&debts, dec!(50), PayoffStrategy::Avalanche, march()).unwrap();
        // 1% monthly on 1200 = 12.00 in the first month.
        assert_eq!(plan.months[0].total_interest, dec!(12.00));
        assert!(plan.total_interest > Decimal::ZERO);
    }

    #[test]
    fn test_minimum_only_plan_truncates() {
        // Interest exceeds the minimum payment, so the balance grows forever.
        let debts = vec![debt("trap", dec!(10000), dec!(30), dec!(100))];
        let plan =
            generate_payoff_plan(&debts, dec!(100), PayoffStrategy::Avalanche, march()).unwrap();
        assert!(plan.truncated);
        assert_eq!(plan.months.len(), crate::constants::PAYOFF_MAX_MONTHS);
        assert!(plan.debt_free_date.is_none());
    }

    #[test]
    fn test_freed_minimums_roll_forward() {
        let debts = vec![
            debt("a", dec!(100), dec!(0), dec!(100)),
            debt("b", dec!(500), dec!(0), dec!(50)),
        ];
        let plan =
            generate_payoff_plan(&debts, dec!(150), PayoffStrategy::Avalanche, march()).unwrap();
        // Month 1: a gets 100 and clears, b gets 50. Month 2 on: b gets 150.
        let second = &plan.months[1];
        assert_eq!(second.payments.len(), 1);
        assert_eq!(second.payments[0].debt_id, "b");
        assert_eq!(second.payments[0].payment, dec!(150));
        assert_eq!(plan.months.len(), 4);
    }

    #[test]
    fn test_no_debts_is_empty_plan() {
        let plan =
            generate_payoff_plan(&[], dec!(200), PayoffStrategy::Avalanche, march()).unwrap();
        assert!(plan.months.is_empty());
        assert!(plan.debt_free_date.is_none());
        assert!(!plan.truncated);
    }
}
