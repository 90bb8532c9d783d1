//! Configuration system for CarbonSense.
//! TOML-based, 3-layer resolution: env > project file > defaults.
//! Provider credentials come from the environment only.

pub mod carbon_config;
pub mod context_config;
pub mod credentials;
pub mod defaults;
pub mod observability_config;
pub mod provider_config;

pub use carbon_config::CarbonConfig;
pub use context_config::ContextConfig;
pub use credentials::{BasicCredentials, ProviderCredentials};
pub use observability_config::ObservabilityConfig;
pub use provider_config::ProviderConfig;
