pub mod app_config;
pub mod catalog;

pub use app_config::{ComponentConfig, Config, ProviderConfig, ProviderKind, ServiceConfig};
pub use catalog::{CatalogError, ServiceCatalog};
