use std::fmt;

use storefront_core::{OrderSource, ServiceCost, UnavailabilityReason};

use crate::service::Service;

/// A configurable rule attached to a shipping or payment service.
///
/// Components contribute costs, availability vetoes, or both. Every method is
/// a pure function of the component configuration and the order source; the
/// defaults contribute nothing.
pub trait BehaviorComponent: Send + Sync + fmt::Debug {
    /// Short identifier used in logs (e.g., "fixed_cost")
    fn kind(&self) -> &'static str;

    /// Override the name shown for the service
    fn name(&self, _service: &Service, _source: &dyn OrderSource) -> Option<String> {
        None
    }

    fn costs(&self, _service: &Service, _source: &dyn OrderSource) -> Vec<ServiceCost> {
        Vec::new()
    }

    fn unavailability_reasons(
        &self,
        _service: &Service,
        _source: &dyn OrderSource,
    ) -> Vec<UnavailabilityReason> {
        Vec::new()
    }
}
