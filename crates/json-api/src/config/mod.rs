//! Server configuration module

use clap::Parser;

use crate::config::{
    admin::AdminConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
    storage::StorageConfig,
};

pub(crate) mod admin;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod storage;

/// Vitrina JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "vitrina-json", about = "Vitrina JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Admin session settings.
    #[command(flatten)]
    pub admin: AdminConfig,

    /// Catalog and discount storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_the_documented_deployment() -> TestResult {
        let config = ServerConfig::try_parse_from(["vitrina-json"])?;

        assert_eq!(config.server.port, 3000);
        assert!(!config.server.is_production());
        assert_eq!(config.storage.discounts_path.to_str(), Some("discounts.json"));
        assert!(config.storage.catalog_path.is_none());

        Ok(())
    }

    #[test]
    fn production_environment_is_detected() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["vitrina-json", "--environment", "production"])?;

        assert!(config.server.is_production());

        Ok(())
    }
}
