use std::collections::HashMap;

use storefront_core::OrderSource;
use storefront_services::{
    CustomCarrier, CustomPaymentProcessor, Service, ServiceError, ServiceKind, ServiceProvider,
};
use storefront_shared::models::ServiceQuote;

use crate::app_config::{Config, ProviderConfig, ProviderKind};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Service {service} refers to unknown provider {provider}")]
    UnknownProvider {
        service: String,
        provider: String,
    },

    #[error("Provider {0} is configured twice")]
    DuplicateProvider(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Shipping and payment methods built from configuration
#[derive(Debug, Default)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

fn build_provider(config: &ProviderConfig) -> Box<dyn ServiceProvider> {
    match config.kind {
        ProviderKind::Carrier => {
            let carrier = CustomCarrier::new(&config.name);
            Box::new(if config.enabled { carrier } else { carrier.disabled() })
        }
        ProviderKind::PaymentProcessor => {
            let processor = CustomPaymentProcessor::new(&config.name);
            Box::new(if config.enabled { processor } else { processor.disabled() })
        }
    }
}

impl ServiceCatalog {
    pub fn load() -> Result<Self, CatalogError> {
        let config = Config::load()?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let mut providers: HashMap<&str, Box<dyn ServiceProvider>> = HashMap::new();
        for provider in &config.providers {
            if providers.insert(provider.name.as_str(), build_provider(provider)).is_some() {
                return Err(CatalogError::DuplicateProvider(provider.name.clone()));
            }
        }

        let mut services = Vec::with_capacity(config.services.len());
        for service_config in &config.services {
            let provider = providers
                .get(service_config.provider.as_str())
                .ok_or_else(|| CatalogError::UnknownProvider {
                    service: service_config.name.clone(),
                    provider: service_config.provider.clone(),
                })?;

            let mut service =
                provider.create_service(service_config.choice.as_deref(), &service_config.name)?;
            service.enabled = service_config.enabled;
            for component in &service_config.components {
                service.add_component(component.build());
            }
            services.push(service);
        }

        tracing::info!(
            providers = providers.len(),
            services = services.len(),
            "Service catalog loaded"
        );
        Ok(Self { services })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn by_kind(&self, kind: ServiceKind) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(move |s| s.kind == kind)
    }

    pub fn available_for<'a>(
        &'a self,
        kind: ServiceKind,
        source: &'a dyn OrderSource,
    ) -> impl Iterator<Item = &'a Service> + 'a {
        self.by_kind(kind).filter(move |s| s.is_available_for(source))
    }

    pub fn quote_all(&self, source: &dyn OrderSource) -> Vec<ServiceQuote> {
        self.services.iter().map(|s| s.quote(source)).collect()
    }
}
