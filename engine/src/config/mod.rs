mod config_manager;
mod config_provider;
mod config_serializer;
mod validate;

pub use config_manager::ConfigManager;
pub use config_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
