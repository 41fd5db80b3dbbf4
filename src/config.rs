use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let catalog_path = PathBuf::from(var("CATALOG_PATH", "data/products.json"));
        let host = var("APP_HOST", "0.0.0.0");
        let port = var("APP_PORT", "8080")
            .parse::<u16>()
            .context("APP_PORT must be a valid port number")?;
        let store = StoreConfig {
            name: var("STORE_NAME", "LaythShop"),
            description: var(
                "STORE_DESCRIPTION",
                "Boutique e-commerce de démonstration par Latifa.",
            ),
        };
        Ok(Self {
            catalog_path,
            host,
            port,
            store,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
