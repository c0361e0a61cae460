use uuid::Uuid;

use crate::money::Price;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct ReasonSummary {
    pub code: String,
    pub message: String,
}

/// Priced and availability-checked snapshot of one service for one basket
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct ServiceQuote {
    pub service_id: Uuid,
    pub kind: String,
    pub choice_identifier: String,
    pub name: String,
    pub available: bool,
    pub reasons: Vec<ReasonSummary>,
    pub price: Price,
    pub base_price: Price,
}

impl ServiceQuote {
    /// True when the quoted price is below the nominal one (e.g., waived shipping)
    pub fn is_discounted(&self) -> bool {
        self.price < self.base_price
    }
}
