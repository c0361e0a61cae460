use serde::{Deserialize, Serialize};
use storefront_shared::Price;

/// A price contribution of a behavior component.
///
/// `base_price` holds the nominal price when the effective one differs,
/// e.g. a waived shipping fee is priced at zero with the fee as base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCost {
    pub price: Price,
    pub description: Option<String>,
    pub base_price: Option<Price>,
}

impl ServiceCost {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            description: None,
            base_price: None,
        }
    }

    pub fn with_base_price(mut self, base_price: Price) -> Self {
        self.base_price = Some(base_price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn effective_base_price(&self) -> &Price {
        self.base_price.as_ref().unwrap_or(&self.price)
    }
}

/// Summed costs of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub price: Price,
    pub base_price: Price,
}

impl PriceInfo {
    pub fn new(price: Price, base_price: Price) -> Self {
        Self { price, base_price }
    }

    /// Fold costs onto `zero` (a zero price in the source's currency)
    pub fn sum<'a, I>(zero: Price, costs: I) -> Self
    where
        I: IntoIterator<Item = &'a ServiceCost>,
    {
        costs.into_iter().fold(
            PriceInfo::new(zero.clone(), zero),
            |acc, cost| PriceInfo {
                price: acc.price + &cost.price,
                base_price: acc.base_price + cost.effective_base_price(),
            },
        )
    }

    pub fn is_discounted(&self) -> bool {
        self.price < self.base_price
    }

    pub fn discount_amount(&self) -> Price {
        let mut discount = self.base_price.clone();
        discount.amount -= self.price.amount;
        discount
    }
}
