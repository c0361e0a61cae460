pub mod behavior;
pub mod costs;
pub mod weight;
pub mod service;
pub mod provider;

pub use behavior::BehaviorComponent;
pub use costs::{FixedCost, WaivingCost};
pub use weight::WeightLimits;
pub use service::{Service, ServiceKind, ServiceLine};
pub use provider::{
    CustomCarrier, CustomPaymentProcessor, ServiceChoice, ServiceError, ServiceProvider,
};
