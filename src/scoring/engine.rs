use super::rules::Rule;
use crate::receipt::ValidatedReceipt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContribution {
    pub rule: Rule,
    pub label: &'static str, // e.g. "Item pairs", "Odd purchase day"
    pub points: u64,
}

#[derive(Debug, Clone)]
pub struct PointsResult {
    pub points: u64,
    pub breakdown: Vec<RuleContribution>,
}

impl PointsResult {
    /// Contributions that awarded at least one point, for logging
    pub fn awarded(&self) -> impl Iterator<Item = &RuleContribution> {
        self.breakdown.iter().filter(|c| c.points > 0)
    }
}

/// Score a receipt. The total is the sum of every rule in [`Rule::ALL`];
/// rules don't read each other's results, so evaluation order is irrelevant.
pub fn calculate_points(receipt: &ValidatedReceipt) -> PointsResult {
    let breakdown: Vec<RuleContribution> = Rule::ALL
        .iter()
        .map(|rule| RuleContribution {
            rule: *rule,
            label: rule.label(),
            points: rule.evaluate(receipt),
        })
        .collect();

    PointsResult {
        points: breakdown.iter().map(|c| c.points).fold(0, u64::saturating_add),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::{Item, Receipt};
    use crate::validation::validate_receipt;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn validated(
        retailer: &str,
        date: &str,
        time: &str,
        items: Vec<Item>,
        total: &str,
    ) -> ValidatedReceipt {
        validate_receipt(&Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: total.to_string(),
        })
        .unwrap()
    }

    fn points_for(result: &PointsResult, rule: Rule) -> u64 {
        result
            .breakdown
            .iter()
            .find(|c| c.rule == rule)
            .map(|c| c.points)
            .unwrap()
    }

    #[test]
    fn test_target_receipt() {
        let receipt = validated(
            "Target",
            "2022-01-01",
            "02:01",
            vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        );
        let result = calculate_points(&receipt);
        // 6 retailer + 10 pairs + 6 descriptions + 6 odd day
        assert_eq!(result.points, 28);
        assert_eq!(points_for(&result, Rule::DescriptionLength), 6);
    }

    #[test]
    fn test_corner_market_receipt() {
        let receipt = validated(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
            "9.00",
        );
        let result = calculate_points(&receipt);
        // 14 retailer + 50 round + 25 quarter + 10 pairs + 10 afternoon
        assert_eq!(result.points, 109);
    }

    #[test]
    fn test_hyphenated_retailer_receipt() {
        let receipt = validated(
            "Target-Kroger",
            "2022-10-03",
            "18:00",
            vec![
                item("Pepsi - 12-oz", "1.25"),
                item("   Powerade Red  ", "5.00"),
                item("Cheese Pizza", "10.25"),
                item("Super-Duper  Hot  Cocoa Mix   ", "20.25"),
            ],
            "35.75",
        );
        let result = calculate_points(&receipt);
        // 12 retailer + 25 quarter + 10 pairs + 9 descriptions + 6 odd day
        assert_eq!(result.points, 62);
        assert_eq!(points_for(&result, Rule::DescriptionLength), 9);
        assert_eq!(points_for(&result, Rule::AfternoonPurchase), 0);
    }

    #[test]
    fn test_breakdown_covers_every_rule() {
        let receipt = validated("A", "2022-01-02", "10:00", vec![item("B", "1.01")], "1.01");
        let result = calculate_points(&receipt);
        assert_eq!(result.breakdown.len(), Rule::ALL.len());
        assert_eq!(
            result.points,
            result.breakdown.iter().map(|c| c.points).sum::<u64>()
        );
    }

    #[test]
    fn test_awarded_skips_zero_rules() {
        let receipt = validated("A", "2022-01-02", "10:00", vec![item("B", "1.01")], "1.01");
        let result = calculate_points(&receipt);
        let awarded: Vec<_> = result.awarded().map(|c| c.rule).collect();
        assert_eq!(awarded, vec![Rule::AlphanumericRetailer]);
        assert_eq!(result.points, 1);
    }

    #[test]
    fn test_huge_prices_saturate_total() {
        let items = (0..600)
            .map(|_| item("Gum", "184467440737095516.15"))
            .collect();
        let receipt = validated("A", "2022-01-01", "14:30", items, "1.00");
        let result = calculate_points(&receipt);
        assert_eq!(points_for(&result, Rule::DescriptionLength), u64::MAX);
        assert_eq!(points_for(&result, Rule::ItemPairs), 1500);
        assert_eq!(result.points, u64::MAX);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let receipt = validated(
            "Walgreens",
            "2022-01-02",
            "08:13",
            vec![item("Pepsi - 12-oz", "1.25"), item("Dasani", "1.40")],
            "2.65",
        );
        let first = calculate_points(&receipt).points;
        let second = calculate_points(&receipt).points;
        assert_eq!(first, second);
        // 9 retailer + 5 pair + ceil(0.28) for "Dasani"
        assert_eq!(first, 15);
    }
}
