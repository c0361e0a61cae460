use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::{OrderSource, UnavailabilityReason};

use crate::behavior::BehaviorComponent;
use crate::service::Service;

/// Limits availability of the service by the total weight of products.
///
/// Either bound may be absent; a zero bound counts as absent. Contradictory
/// bounds (min > max) are not rejected; both reasons are reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightLimits {
    pub min_weight: Option<Decimal>,
    pub max_weight: Option<Decimal>,
}

impl WeightLimits {
    pub fn new(min_weight: Option<Decimal>, max_weight: Option<Decimal>) -> Self {
        Self {
            min_weight,
            max_weight,
        }
    }

    pub fn total_weight(source: &dyn OrderSource) -> Decimal {
        source
            .lines()
            .iter()
            .map(|line| line.weight.unwrap_or(Decimal::ZERO))
            .sum()
    }
}

impl BehaviorComponent for WeightLimits {
    fn kind(&self) -> &'static str {
        "weight_limits"
    }

    fn unavailability_reasons(
        &self,
        _service: &Service,
        source: &dyn OrderSource,
    ) -> Vec<UnavailabilityReason> {
        let weight = Self::total_weight(source);
        let mut reasons = Vec::new();

        if let Some(min) = self.min_weight.filter(|m| !m.is_zero()) {
            if weight < min {
                reasons.push(UnavailabilityReason::new("min_weight", "Minimum weight not met."));
            }
        }
        if let Some(max) = self.max_weight.filter(|m| !m.is_zero()) {
            if weight > max {
                reasons.push(UnavailabilityReason::new("max_weight", "Maximum weight exceeded."));
            }
        }

        if !reasons.is_empty() {
            tracing::debug!(
                %weight,
                min = ?self.min_weight,
                max = ?self.max_weight,
                "Weight out of limits"
            );
        }
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{CustomCarrier, ServiceProvider};
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use storefront_core::BasketSource;

    fn basket_weighing(weights: &[Option<Decimal>]) -> BasketSource {
        let mut basket = BasketSource::default();
        for (i, weight) in weights.iter().enumerate() {
            basket.add_line(format!("Item {}", i), dec!(1), *weight);
        }
        basket
    }

    fn codes(limits: &WeightLimits, source: &BasketSource) -> Vec<String> {
        let service = CustomCarrier::new("DHL").create_service(None, "Parcel").unwrap();
        limits
            .unavailability_reasons(&service, source)
            .into_iter()
            .map(|r| r.code)
            .collect()
    }

    #[test]
    fn test_missing_weight_counts_as_zero() {
        let source = basket_weighing(&[Some(dec!(2)), Some(dec!(3)), None]);
        assert_eq!(WeightLimits::total_weight(&source), dec!(5));

        let limits = WeightLimits::new(Some(dec!(4)), Some(dec!(10)));
        assert!(codes(&limits, &source).is_empty());
    }

    #[rstest]
    #[case(Some(dec!(4)), None, dec!(3.999), vec!["min_weight"])]
    #[case(Some(dec!(4)), None, dec!(4), vec![])]
    #[case(None, Some(dec!(10)), dec!(10), vec![])]
    #[case(None, Some(dec!(10)), dec!(10.001), vec!["max_weight"])]
    #[case(None, None, dec!(1000), vec![])]
    #[case(Some(dec!(0)), Some(dec!(0)), dec!(0), vec![])]
    #[case(Some(dec!(0)), Some(dec!(0)), dec!(0.5), vec![])]
    #[case(None, Some(dec!(0)), dec!(0.5), vec![])]
    #[case(Some(dec!(0)), None, dec!(-1), vec![])]
    fn test_bounds(
        #[case] min: Option<Decimal>,
        #[case] max: Option<Decimal>,
        #[case] weight: Decimal,
        #[case] expected: Vec<&str>,
    ) {
        let source = basket_weighing(&[Some(weight)]);
        let limits = WeightLimits::new(min, max);
        assert_eq!(codes(&limits, &source), expected);
    }

    #[test]
    fn test_zero_max_weight_is_unbounded() {
        let source = basket_weighing(&[Some(dec!(0.5)), Some(dec!(120))]);
        let limits = WeightLimits::new(Some(dec!(0)), Some(dec!(0)));
        assert!(codes(&limits, &source).is_empty());

        let limits = WeightLimits::new(Some(dec!(0)), Some(dec!(100)));
        assert_eq!(codes(&limits, &source), vec!["max_weight"]);
    }

    #[test]
    fn test_contradictory_bounds_report_both() {
        let source = basket_weighing(&[Some(dec!(7))]);
        let limits = WeightLimits::new(Some(dec!(10)), Some(dec!(5)));
        assert_eq!(codes(&limits, &source), vec!["min_weight", "max_weight"]);
    }

    #[test]
    fn test_never_contributes_costs() {
        let source = basket_weighing(&[Some(dec!(7))]);
        let service = CustomCarrier::new("DHL").create_service(None, "Parcel").unwrap();
        assert!(WeightLimits::default().costs(&service, &source).is_empty());
    }
}
