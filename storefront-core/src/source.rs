use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_shared::{Currency, Price};

use crate::{CoreError, CoreResult};

/// A line of the order being priced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceLine {
    pub text: String,
    /// Line total, before any service costs
    pub price: Decimal,
    /// Total weight of the line; lines without a known weight count as zero
    #[serde(default)]
    pub weight: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShippingAddress {
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
}

impl ShippingAddress {
    pub fn in_country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

/// The priceable context a service is evaluated against (a basket or an order).
///
/// Behavior components only ever borrow the source immutably.
pub trait OrderSource {
    fn lines(&self) -> &[SourceLine];

    fn total_price_of_products(&self) -> Price;

    fn shipping_address(&self) -> Option<&ShippingAddress>;

    fn currency(&self) -> &Currency;

    /// Build a price in the source's currency
    fn create_price(&self, value: Decimal) -> Price {
        Price::new(value, self.currency().clone())
    }
}

/// In-memory basket used by the quoting tool and by tests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasketSource {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub lines: Vec<SourceLine>,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
}

impl BasketSource {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            lines: Vec::new(),
            shipping_address: None,
        }
    }

    pub fn from_json(raw: &str) -> CoreResult<Self> {
        let basket: BasketSource = serde_json::from_str(raw)
            .map_err(|e| CoreError::InvalidSource(e.to_string()))?;

        if let Some(line) = basket.lines.iter().find(|l| l.price.is_sign_negative()) {
            return Err(CoreError::InvalidSource(format!(
                "line '{}' has a negative price",
                line.text
            )));
        }

        tracing::debug!(
            lines = basket.lines.len(),
            currency = %basket.currency,
            "Loaded basket"
        );
        Ok(basket)
    }

    pub fn add_line(
        &mut self,
        text: impl Into<String>,
        price: Decimal,
        weight: Option<Decimal>,
    ) -> &mut Self {
        self.lines.push(SourceLine {
            text: text.into(),
            price,
            weight,
        });
        self
    }

    pub fn ship_to(&mut self, address: ShippingAddress) -> &mut Self {
        self.shipping_address = Some(address);
        self
    }
}

impl OrderSource for BasketSource {
    fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    fn total_price_of_products(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::zero(self.currency.clone()), |total, line| {
                total + self.create_price(line.price)
            })
    }

    fn shipping_address(&self) -> Option<&ShippingAddress> {
        self.shipping_address.as_ref()
    }

    fn currency(&self) -> &Currency {
        &self.currency
    }
}
