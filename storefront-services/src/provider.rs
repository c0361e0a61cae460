use serde::{Deserialize, Serialize};

use crate::service::{Service, ServiceKind};

/// One kind of service a provider can create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceChoice {
    pub identifier: String,
    pub name: String,
}

impl ServiceChoice {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid service choice '{choice}' for provider {provider}")]
    InvalidChoice {
        provider: String,
        choice: String,
    },

    #[error("Provider {0} offers no service choices")]
    NoChoices(String),
}

/// Carrier or payment processor that creates services from its choices
pub trait ServiceProvider: Send + Sync {
    fn name(&self) -> &str;

    fn enabled(&self) -> bool;

    fn service_choices(&self) -> Vec<ServiceChoice>;

    /// Build the service for a validated choice
    fn build_service(&self, choice: &ServiceChoice, name: &str) -> Service;

    /// Create a service for `choice_identifier`, or for the first choice when
    /// none is given
    fn create_service(
        &self,
        choice_identifier: Option<&str>,
        name: &str,
    ) -> Result<Service, ServiceError> {
        let choices = self.service_choices();

        let choice = match choice_identifier {
            None => choices
                .first()
                .ok_or_else(|| ServiceError::NoChoices(self.name().to_string()))?,
            Some(identifier) => choices
                .iter()
                .find(|c| c.identifier == identifier)
                .ok_or_else(|| ServiceError::InvalidChoice {
                    provider: self.name().to_string(),
                    choice: identifier.to_string(),
                })?,
        };

        tracing::debug!(
            provider = self.name(),
            choice = %choice.identifier,
            service = name,
            "Creating service"
        );
        Ok(self.build_service(choice, name))
    }
}

/// Carrier with a single custom shipping choice
#[derive(Debug, Clone)]
pub struct CustomCarrier {
    pub name: String,
    pub enabled: bool,
}

impl CustomCarrier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl ServiceProvider for CustomCarrier {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn service_choices(&self) -> Vec<ServiceChoice> {
        vec![ServiceChoice::new("custom", "Custom shipping")]
    }

    fn build_service(&self, choice: &ServiceChoice, name: &str) -> Service {
        Service::new(ServiceKind::Shipping, &choice.identifier, name, &self.name, self.enabled)
    }
}

/// Payment processor with a single custom payment choice
#[derive(Debug, Clone)]
pub struct CustomPaymentProcessor {
    pub name: String,
    pub enabled: bool,
}

impl CustomPaymentProcessor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl ServiceProvider for CustomPaymentProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn service_choices(&self) -> Vec<ServiceChoice> {
        vec![ServiceChoice::new("custom", "Custom payment")]
    }

    fn build_service(&self, choice: &ServiceChoice, name: &str) -> Service {
        Service::new(ServiceKind::Payment, &choice.identifier, name, &self.name, self.enabled)
    }
}
