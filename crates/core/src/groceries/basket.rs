//! Shopping-list quantities and multi-buy basket pricing.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::groceries_model::{
    BasketPricing, DealRule, DealRuleType, GroceryProduct, QuantityUnit, ShoppingLine,
};
use crate::errors::{Error, Result, ValidationError};

/// Converts a quantity between compatible units (g↔kg, ml↔l, each↔each).
pub fn convert_quantity(
    quantity: Decimal,
    from: QuantityUnit,
    to: QuantityUnit,
) -> Result<Decimal> {
    if from.family() != to.family() {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Cannot convert {} to {}",
            from.as_str(),
            to.as_str()
        ))));
    }
    Ok(quantity * from.base_factor() / to.base_factor())
}

/// Computes how many packs of a product cover a required quantity.
///
/// The requirement is converted into the product's unit first; packs are the
/// ceiling of required / pack_size. The line price is undiscounted.
pub fn build_shopping_line(
    product: &GroceryProduct,
    required_quantity: Decimal,
    required_unit: QuantityUnit,
) -> Result<ShoppingLine> {
    if required_quantity <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Required quantity must be positive".to_string(),
        )));
    }
    let in_product_units = convert_quantity(required_quantity, required_unit, product.unit)?;
    let packs = (in_product_units / product.pack_size).ceil();
    let packs_to_buy = packs.to_u32().ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Pack count out of range for product '{}'",
            product.name
        )))
    })?;

    Ok(ShoppingLine {
        product: product.clone(),
        required_quantity,
        required_unit,
        packs_to_buy,
        line_price: (product.pack_price * Decimal::from(packs_to_buy)).round_dp(2),
    })
}

/// Price of `packs` under a deal rule, or None when the rule doesn't apply.
fn deal_price(rule: &DealRule, unit_price: Decimal, packs: u32) -> Option<Decimal> {
    if !rule.is_active || packs == 0 {
        return None;
    }
    let threshold = u32::try_from(rule.threshold_quantity).ok().filter(|t| *t > 0)?;
    match rule.rule_type {
        DealRuleType::MultiBuy => {
            let free = u32::try_from(rule.free_quantity?).ok()?;
            let group = threshold + free;
            if packs < group {
                return None;
            }
            let groups = packs / group;
            let remainder = packs % group;
            let payable = groups * threshold + remainder;
            Some(unit_price * Decimal::from(payable))
        }
        DealRuleType::BundlePrice => {
            let price = rule.deal_price?;
            if packs < threshold {
                return None;
            }
            let bundles = packs / threshold;
            let remainder = packs % threshold;
            Some(price * Decimal::from(bundles) + unit_price * Decimal::from(remainder))
        }
    }
}

/// Prices a basket of shopping lines, applying each product's best deal.
///
/// Multiple rules may target one product; the cheapest applicable outcome
/// wins. A rule never increases a line's price above the undiscounted total.
pub fn price_basket(lines: Vec<ShoppingLine>, rules: &[DealRule]) -> BasketPricing {
    let mut subtotal = Decimal::ZERO;
    let mut total = Decimal::ZERO;

    for line in &lines {
        let undiscounted = line.line_price;
        subtotal += undiscounted;

        let best = rules
            .iter()
            .filter(|r| r.product_id == line.product.id)
            .filter_map(|r| deal_price(r, line.product.pack_price, line.packs_to_buy))
            .min();
        let line_total = match best {
            Some(discounted) if discounted < undiscounted => discounted,
            _ => undiscounted,
        };
        total += line_total;
    }

    let subtotal = subtotal.round_dp(2);
    let total = total.round_dp(2);
    BasketPricing {
        lines,
        subtotal,
        discount: subtotal - total,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: &str, pack_size: Decimal, unit: QuantityUnit, price: Decimal) -> GroceryProduct {
        GroceryProduct {
            id: id.to_string(),
            name: id.to_string(),
            store: Some("Tesco".to_string()),
            pack_size,
            unit,
            pack_price: price,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    fn multi_buy(product_id: &str, threshold: i32, free: i32) -> DealRule {
        DealRule {
            id: format!("deal-{}", product_id),
            product_id: product_id.to_string(),
            rule_type: DealRuleType::MultiBuy,
            threshold_quantity: threshold,
            deal_price: None,
            free_quantity: Some(free),
            is_active: true,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    fn bundle(product_id: &str, threshold: i32, price: Decimal) -> DealRule {
        DealRule {
            id: format!("deal-{}", product_id),
            product_id: product_id.to_string(),
            rule_type: DealRuleType::BundlePrice,
            threshold_quantity: threshold,
            deal_price: Some(price),
            free_quantity: None,
            is_active: true,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(
            convert_quantity(dec!(1.5), QuantityUnit::Kilograms, QuantityUnit::Grams).unwrap(),
            dec!(1500)
        );
        assert_eq!(
            convert_quantity(dec!(500), QuantityUnit::Millilitres, QuantityUnit::Litres).unwrap(),
            dec!(0.5)
        );
        assert!(convert_quantity(dec!(1), QuantityUnit::Grams, QuantityUnit::Litres).is_err());
        assert!(convert_quantity(dec!(2), QuantityUnit::Each, QuantityUnit::Grams).is_err());
    }

    #[test]
    fn test_packs_round_up() {
        // 1.2 kg of pasta in 500 g packs -> 3 packs.
        let pasta = product("pasta", dec!(500), QuantityUnit::Grams, dec!(0.95));
        let line =
            build_shopping_line(&pasta, dec!(1.2), QuantityUnit::Kilograms).unwrap();
        assert_eq!(line.packs_to_buy, 3);
        assert_eq!(line.line_price, dec!(2.85));

        // Exact multiples don't over-buy.
        let line = build_shopping_line(&pasta, dec!(1000), QuantityUnit::Grams).unwrap();
        assert_eq!(line.packs_to_buy, 2);
    }

    #[test]
    fn test_three_for_two() {
        let beans = product("beans", dec!(1), QuantityUnit::Each, dec!(1.20));
        let line = build_shopping_line(&beans, dec!(7), QuantityUnit::Each).unwrap();
        let pricing = price_basket(vec![line], &[multi_buy("beans", 2, 1)]);
        // 7 packs under 3-for-2: two full groups (pay 4) + 1 remainder = 5 paid.
        assert_eq!(pricing.subtotal, dec!(8.40));
        assert_eq!(pricing.total, dec!(6.00));
        assert_eq!(pricing.discount, dec!(2.40));
    }

    #[test]
    fn test_bundle_price_with_remainder() {
        let yoghurt = product("yog", dec!(1), QuantityUnit::Each, dec!(2.00));
        let line = build_shopping_line(&yoghurt, dec!(5), QuantityUnit::Each).unwrap();
        let pricing = price_basket(vec![line], &[bundle("yog", 2, dec!(3.50))]);
        // Two bundles at 3.50 + one at unit price.
        assert_eq!(pricing.total, dec!(9.00));
        assert_eq!(pricing.discount, dec!(1.00));
    }

    #[test]
    fn test_deal_below_threshold_does_not_apply() {
        let beans = product("beans", dec!(1), QuantityUnit::Each, dec!(1.20));
        let line = build_shopping_line(&beans, dec!(2), QuantityUnit::Each).unwrap();
        let pricing = price_basket(vec![line], &[multi_buy("beans", 2, 1)]);
        assert_eq!(pricing.total, dec!(2.40));
        assert_eq!(pricing.discount, Decimal::ZERO);
    }

    #[test]
    fn test_inactive_rule_ignored() {
        let beans = product("beans", dec!(1), QuantityUnit::Each, dec!(1.20));
        let line = build_shopping_line(&beans, dec!(3), QuantityUnit::Each).unwrap();
        let mut rule = multi_buy("beans", 2, 1);
        rule.is_active = false;
        let pricing = price_basket(vec![line], &[rule]);
        assert_eq!(pricing.discount, Decimal::ZERO);
    }

    #[test]
    fn test_best_of_multiple_rules_wins() {
        let beans = product("beans", dec!(1), QuantityUnit::Each, dec!(1.20));
        let line = build_shopping_line(&beans, dec!(6), QuantityUnit::Each).unwrap();
        let rules = vec![
            multi_buy("beans", 2, 1),          // 6 packs -> pay 4 -> 4.80
            bundle("beans", 3, dec!(3.00)),    // 6 packs -> 6.00
        ];
        let pricing = price_basket(vec![line], &rules);
        assert_eq!(pricing.total, dec!(4.80));
    }

    #[test]
    fn test_unworsening_guarantee() {
        // A "bundle" priced above the unit cost must never be applied.
        let beans = product("beans", dec!(1), QuantityUnit::Each, dec!(1.00));
        let line = build_shopping_line(&beans, dec!(2), QuantityUnit::Each).unwrap();
        let pricing = price_basket(vec![line], &[bundle("beans", 2, dec!(5.00))]);
        assert_eq!(pricing.total, dec!(2.00));
    }
}
