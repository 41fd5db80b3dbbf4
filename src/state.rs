use crate::catalog::Catalog;
use crate::config::AppConfig;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Loads the catalog named by the config. A bad data file aborts startup.
    pub fn init(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = Catalog::load_from_path(&config.catalog_path).with_context(|| {
            format!("load catalog from {}", config.catalog_path.display())
        })?;
        Ok(Self::from_parts(Arc::new(catalog), Arc::new(config)))
    }

    pub fn from_parts(catalog: Arc<Catalog>, config: Arc<AppConfig>) -> Self {
        Self { catalog, config }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::catalog::model::Product;
        use crate::config::StoreConfig;
        use rust_decimal::Decimal;

        let catalog = Catalog::from_products(vec![Product {
            id: "1".into(),
            name: "Widget".into(),
            description: String::new(),
            price: Decimal::new(1999, 2),
            category: "Tools".into(),
            image_url: "/w.jpg".into(),
            stock: 5,
            created_at: None,
        }])
        .expect("fake catalog is valid");

        let config = AppConfig {
            catalog_path: "unused.json".into(),
            host: "127.0.0.1".into(),
            port: 0,
            store: StoreConfig {
                name: "TestShop".into(),
                description: "test".into(),
            },
        };

        Self::from_parts(Arc::new(catalog), Arc::new(config))
    }
}
