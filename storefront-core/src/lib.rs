pub mod source;
pub mod cost;
pub mod reason;

pub use source::{BasketSource, OrderSource, ShippingAddress, SourceLine};
pub use cost::{PriceInfo, ServiceCost};
pub use reason::UnavailabilityReason;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid order source: {0}")]
    InvalidSource(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
