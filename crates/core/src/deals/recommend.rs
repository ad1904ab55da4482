//! Bill-switching comparison logic.

use rust_decimal::Decimal;

use super::deals_model::{ProviderOffer, SwitchRecommendation};
use crate::bills::{monthly_equivalent, Bill};

const MONTHS_PER_YEAR: i32 = 12;

/// What the first twelve months on an offer cost: the intro window at the
/// intro price, the rest at the standard price.
pub fn first_year_cost(offer: &ProviderOffer) -> Decimal {
    let (intro_months, intro_price) = match (offer.intro_months, offer.intro_price) {
        (Some(months), Some(price)) => (months.clamp(0, MONTHS_PER_YEAR), price),
        _ => (0, Decimal::ZERO),
    };
    let standard_months = MONTHS_PER_YEAR - intro_months;
    (intro_price * Decimal::from(intro_months)
        + offer.monthly_price * Decimal::from(standard_months))
    .round_dp(2)
}

/// Compares each active, categorized bill against active offers in the same
/// category and keeps the switches that save money in the first year.
///
/// Recommendations are grouped per bill with the best saving first, and
/// bills are ordered by their best saving descending.
pub fn recommend_switches(
    bills: &[Bill],
    offers: &[ProviderOffer],
) -> Vec<SwitchRecommendation> {
    let mut by_bill: Vec<Vec<SwitchRecommendation>> = Vec::new();

    for bill in bills.iter().filter(|b| b.is_active) {
        let Some(category) = bill.category.as_deref() else {
            continue;
        };
        let current_monthly = monthly_equivalent(bill.amount, bill.frequency);
        let current_year = current_monthly * Decimal::from(MONTHS_PER_YEAR);

        let mut recommendations: Vec<SwitchRecommendation> = offers
            .iter()
            .filter(|o| o.is_active && o.category.eq_ignore_ascii_case(category))
            .filter_map(|offer| {
                let cost = first_year_cost(offer);
                let saving = (current_year - cost).round_dp(2);
                if saving <= Decimal::ZERO {
                    return None;
                }
                let saving_pct = if current_year > Decimal::ZERO {
                    (saving / current_year * Decimal::from(100)).round_dp(1)
                } else {
                    Decimal::ZERO
                };
                Some(SwitchRecommendation {
                    bill_id: bill.id.clone(),
                    bill_name: bill.name.clone(),
                    current_monthly,
                    offer: offer.clone(),
                    first_year_cost: cost,
                    first_year_saving: saving,
                    saving_pct,
                })
            })
            .collect();

        if recommendations.is_empty() {
            continue;
        }
        recommendations.sort_by(|a, b| b.first_year_saving.cmp(&a.first_year_saving));
        by_bill.push(recommendations);
    }

    by_bill.sort_by(|a, b| b[0].first_year_saving.cmp(&a[0].first_year_saving));
    by_bill.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bills::BillFrequency;
    use rust_decimal_macros::dec;

    fn bill(id: &str, amount: Decimal, category: Option<&str>) -> Bill {
        Bill {
            id: id.to_string(),
            name: id.to_string(),
            amount,
            frequency: BillFrequency::Monthly,
            due_day: 1,
            start_date: None,
            category: category.map(str::to_string),
            account_id: None,
            is_active: true,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    fn offer(id: &str, category: &str, monthly: Decimal) -> ProviderOffer {
        ProviderOffer {
            id: id.to_string(),
            category: category.to_string(),
            provider: format!("{}-provider", id),
            monthly_price: monthly,
            term_months: Some(12),
            intro_months: None,
            intro_price: None,
            is_active: true,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    #[test]
    fn test_first_year_cost_with_intro_window() {
        let mut tariff = offer("bb", "Broadband", dec!(35));
        tariff.intro_months = Some(6);
        tariff.intro_price = Some(dec!(20));
        // 6 x 20 + 6 x 35.
        assert_eq!(first_year_cost(&tariff), dec!(330.00));

        let flat = offer("bb2", "Broadband", dec!(30));
        assert_eq!(first_year_cost(&flat), dec!(360.00));
    }

    #[test]
    fn test_only_cheaper_offers_recommended() {
        let bills = vec![bill("broadband", dec!(40), Some("Broadband"))];
        let offers = vec![
            offer("cheaper", "Broadband", dec!(30)),
            offer("dearer", "Broadband", dec!(45)),
        ];
        let recs = recommend_switches(&bills, &offers);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].offer.id, "cheaper");
        assert_eq!(recs[0].first_year_saving, dec!(120.00));
        assert_eq!(recs[0].saving_pct, dec!(25.0));
    }

    #[test]
    fn test_category_must_match() {
        let bills = vec![bill("energy", dec!(90), Some("Energy"))];
        let offers = vec![offer("bb", "Broadband", dec!(10))];
        assert!(recommend_switches(&bills, &offers).is_empty());
    }

    #[test]
    fn test_uncategorized_bills_skipped() {
        let bills = vec![bill("misc", dec!(50), None)];
        let offers = vec![offer("any", "Misc", dec!(1))];
        assert!(recommend_switches(&bills, &offers).is_empty());
    }

    #[test]
    fn test_best_saving_ordering() {
        let bills = vec![
            bill("broadband", dec!(40), Some("Broadband")),
            bill("energy", dec!(120), Some("Energy")),
        ];
        let offers = vec![
            offer("bb", "Broadband", dec!(35)),
            offer("en", "Energy", dec!(80)),
        ];
        let recs = recommend_switches(&bills, &offers);
        assert_eq!(recs.len(), 2);
        // Energy saves 480/year, broadband 60/year.
        assert_eq!(recs[0].bill_id, "energy");
        assert_eq!(recs[1].bill_id, "broadband");
    }

    #[test]
    fn test_intro_deal_beats_flat_rate() {
        let bills = vec![bill("broadband", dec!(35), Some("Broadband"))];
        let mut intro = offer("intro", "Broadband", dec!(35));
        intro.intro_months = Some(6);
        intro.intro_price = Some(dec!(15));
        let offers = vec![intro];
        let recs = recommend_switches(&bills, &offers);
        assert_eq!(recs.len(), 1);
        // Intro saves 6 x 20 over the year despite matching standard price.
        assert_eq!(recs[0].first_year_saving, dec!(120.00));
    }
}
