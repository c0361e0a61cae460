use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::{OrderSource, ServiceCost};

use crate::behavior::BehaviorComponent;
use crate::service::Service;

/// Adds a fixed cost to the price of the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedCost {
    pub price_value: Decimal,
}

impl FixedCost {
    pub fn new(price_value: Decimal) -> Self {
        Self { price_value }
    }
}

impl BehaviorComponent for FixedCost {
    fn kind(&self) -> &'static str {
        "fixed_cost"
    }

    fn costs(&self, _service: &Service, source: &dyn OrderSource) -> Vec<ServiceCost> {
        vec![ServiceCost::new(source.create_price(self.price_value))]
    }
}

/// Adds a cost to the price of the service unless the total price of
/// products reaches the waive limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaivingCost {
    pub price_value: Decimal,
    pub waive_limit_value: Decimal,
}

impl WaivingCost {
    pub fn new(price_value: Decimal, waive_limit_value: Decimal) -> Self {
        Self {
            price_value,
            waive_limit_value,
        }
    }
}

impl BehaviorComponent for WaivingCost {
    fn kind(&self) -> &'static str {
        "waiving_cost"
    }

    fn costs(&self, _service: &Service, source: &dyn OrderSource) -> Vec<ServiceCost> {
        let waive_limit = source.create_price(self.waive_limit_value);
        let product_total = source.total_price_of_products();
        let price = source.create_price(self.price_value);

        // An empty basket never waives, even with a zero limit
        if !product_total.is_zero() && product_total >= waive_limit {
            tracing::debug!(total = %product_total, limit = %waive_limit, "Cost waived");
            vec![ServiceCost::new(source.create_price(Decimal::ZERO)).with_base_price(price)]
        } else {
            vec![ServiceCost::new(price)]
        }
    }
}
