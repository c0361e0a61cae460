use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use storefront_services::{BehaviorComponent, FixedCost, WaivingCost, WeightLimits};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Carrier,
    PaymentProcessor,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub name: String,
    pub kind: ProviderKind,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub name: String,
    /// Name of the provider creating this service
    pub provider: String,
    /// Service choice of the provider; the provider's first choice if omitted
    pub choice: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentConfig {
    FixedCost {
        price: Decimal,
    },
    WaivingCost {
        price: Decimal,
        waive_limit: Decimal,
    },
    WeightLimits {
        #[serde(default)]
        min_weight: Option<Decimal>,
        #[serde(default)]
        max_weight: Option<Decimal>,
    },
}

impl ComponentConfig {
    pub fn build(&self) -> Box<dyn BehaviorComponent> {
        match self {
            ComponentConfig::FixedCost { price } => Box::new(FixedCost::new(*price)),
            ComponentConfig::WaivingCost { price, waive_limit } => {
                Box::new(WaivingCost::new(*price, *waive_limit))
            }
            ComponentConfig::WeightLimits { min_weight, max_weight } => {
                Box::new(WeightLimits::new(*min_weight, *max_weight))
            }
        }
    }
}

fn default_enabled() -> bool { true }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. STOREFRONT__SERVICES
            .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(raw: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
