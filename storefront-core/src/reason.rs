use serde::{Deserialize, Serialize};
use std::fmt;
use storefront_shared::models::ReasonSummary;

/// Why a service cannot be used for a given order.
///
/// Not an evaluation failure: a domain signal with a stable `code` for
/// programmatic matching and a `message` for the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilityReason {
    pub code: String,
    pub message: String,
}

impl UnavailabilityReason {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for UnavailabilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl From<&UnavailabilityReason> for ReasonSummary {
    fn from(reason: &UnavailabilityReason) -> Self {
        ReasonSummary {
            code: reason.code.clone(),
            message: reason.message.clone(),
        }
    }
}
