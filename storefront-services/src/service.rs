use serde::{Deserialize, Serialize};
use storefront_core::{OrderSource, PriceInfo, ServiceCost, UnavailabilityReason};
use storefront_shared::models::{ReasonSummary, ServiceQuote};
use storefront_shared::Price;
use uuid::Uuid;

use crate::behavior::BehaviorComponent;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceKind {
    Shipping,
    Payment,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Shipping => "SHIPPING",
            ServiceKind::Payment => "PAYMENT",
        }
    }
}

/// Order line produced for one cost of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service_id: Uuid,
    pub text: String,
    pub price: Price,
    pub base_price: Price,
}

/// A shipping or payment method offered to customers.
///
/// Costs and availability come from the attached behavior components,
/// evaluated in insertion order.
#[derive(Debug)]
pub struct Service {
    pub id: Uuid,
    pub kind: ServiceKind,
    pub choice_identifier: String,
    pub name: String,
    pub enabled: bool,
    pub provider_name: String,
    /// Provider state when the service was created
    provider_enabled: bool,
    components: Vec<Box<dyn BehaviorComponent>>,
}

impl Service {
    pub fn new(
        kind: ServiceKind,
        choice_identifier: impl Into<String>,
        name: impl Into<String>,
        provider_name: impl Into<String>,
        provider_enabled: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            choice_identifier: choice_identifier.into(),
            name: name.into(),
            enabled: true,
            provider_name: provider_name.into(),
            provider_enabled,
            components: Vec::new(),
        }
    }

    pub fn add_component(&mut self, component: Box<dyn BehaviorComponent>) -> &mut Self {
        self.components.push(component);
        self
    }

    pub fn with_component<C: BehaviorComponent + 'static>(mut self, component: C) -> Self {
        self.components.push(Box::new(component));
        self
    }

    pub fn provider_enabled(&self) -> bool {
        self.provider_enabled
    }

    pub fn components(&self) -> &[Box<dyn BehaviorComponent>] {
        &self.components
    }

    /// Name shown to the customer: the first name a component provides,
    /// otherwise the configured name
    pub fn effective_name(&self, source: &dyn OrderSource) -> String {
        self.components
            .iter()
            .find_map(|c| c.name(self, source))
            .unwrap_or_else(|| self.name.clone())
    }

    pub fn costs(&self, source: &dyn OrderSource) -> Vec<ServiceCost> {
        self.components
            .iter()
            .flat_map(|c| {
                let costs = c.costs(self, source);
                tracing::debug!(
                    service = %self.name,
                    component = c.kind(),
                    count = costs.len(),
                    "Component costs"
                );
                costs
            })
            .collect()
    }

    pub fn total_cost(&self, source: &dyn OrderSource) -> PriceInfo {
        PriceInfo::sum(source.create_price(rust_decimal::Decimal::ZERO), &self.costs(source))
    }

    pub fn unavailability_reasons(&self, source: &dyn OrderSource) -> Vec<UnavailabilityReason> {
        let mut reasons = Vec::new();

        if !self.enabled || !self.provider_enabled {
            reasons.push(UnavailabilityReason::new(
                "disabled",
                format!("{} is disabled", self.name),
            ));
        }

        for component in &self.components {
            let vetoes = component.unavailability_reasons(self, source);
            for reason in &vetoes {
                tracing::debug!(
                    service = %self.name,
                    component = component.kind(),
                    code = %reason.code,
                    "Service vetoed"
                );
            }
            reasons.extend(vetoes);
        }

        reasons
    }

    pub fn is_available_for(&self, source: &dyn OrderSource) -> bool {
        self.unavailability_reasons(source).is_empty()
    }

    /// One line per cost; costs without a description use the service name
    pub fn lines(&self, source: &dyn OrderSource) -> Vec<ServiceLine> {
        let name = self.effective_name(source);
        self.costs(source)
            .into_iter()
            .map(|cost| ServiceLine {
                service_id: self.id,
                text: cost.description.clone().unwrap_or_else(|| name.clone()),
                base_price: cost.effective_base_price().clone(),
                price: cost.price,
            })
            .collect()
    }

    pub fn quote(&self, source: &dyn OrderSource) -> ServiceQuote {
        let reasons = self.unavailability_reasons(source);
        let total = self.total_cost(source);

        ServiceQuote {
            service_id: self.id,
            kind: self.kind.as_str().to_string(),
            choice_identifier: self.choice_identifier.clone(),
            name: self.effective_name(source),
            available: reasons.is_empty(),
            reasons: reasons.iter().map(ReasonSummary::from).collect(),
            price: total.price,
            base_price: total.base_price,
        }
    }
}
