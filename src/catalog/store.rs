use std::collections::HashMap;
use std::path::Path;

use tracing::{info, instrument};
use uuid::Uuid;

use super::error::LoadError;
use super::model::Product;

/// Immutable product catalog, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Validates every record and indexes it by id, keeping source order.
    pub fn from_products(products: Vec<Product>) -> Result<Self, LoadError> {
        let mut by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            product.validate().map_err(|reason| LoadError::Invalid {
                index,
                id: product.id.clone(),
                reason,
            })?;
            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(LoadError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products, by_id })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::from_products(products)
    }

    #[instrument]
    pub fn load_from_path(path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// All products in source order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn get_product_by_id(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&i| &self.products[i])
    }

    /// Ids of every product, one per routable detail page.
    pub fn product_ids(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.id.as_str())
    }

    /// A fresh id for admitting a new product. Never collides with a
    /// product already in the catalog.
    pub fn new_product_id(&self) -> String {
        loop {
            let id = format!("prod_{}", Uuid::new_v4().simple());
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::Write;

    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::error::InvalidProduct;
    use crate::catalog::model::ProductCreateRequest;

    const ONE_WIDGET: &str = r#"[
        {"id":"1","name":"Widget","description":"","price":19.99,"stock":5,
         "category":"Tools","imageUrl":"/w.jpg"}
    ]"#;

    fn sample() -> Catalog {
        Catalog::from_json_str(
            r#"[
            {"id":"1","name":"Widget","description":"","price":19.99,"stock":5,
             "category":"Tools","imageUrl":"/w.jpg"},
            {"id":"2","name":"Gadget","description":"Pratique","price":0,"stock":10,
             "category":"Tools","imageUrl":"/g.jpg","createdAt":"2024-03-02"},
            {"id":"prod_abc123","name":"Lampe","description":"","price":1249.5,"stock":42,
             "category":"Maison","imageUrl":"/l.jpg","createdAt":"2024-05-20T10:00:00Z"}
        ]"#,
        )
        .expect("sample catalog is valid")
    }

    #[test]
    fn single_record_scenario() {
        let catalog = Catalog::from_json_str(ONE_WIDGET).unwrap();

        let widget = catalog.get_product_by_id("1").expect("widget present");
        assert_eq!(widget.name, "Widget");
        assert_eq!(widget.price, Decimal::new(1999, 2));
        assert_eq!(widget.stock, 5);
        assert_eq!(widget.category, "Tools");
        assert_eq!(widget.image_url, "/w.jpg");

        assert!(catalog.get_product_by_id("2").is_none());
        assert_eq!(catalog.list_products().len(), 1);
    }

    #[test]
    fn listed_products_respect_invariants() {
        let catalog = sample();
        let mut seen = HashSet::new();
        for p in catalog.list_products() {
            assert!(p.price >= Decimal::ZERO);
            assert!(seen.insert(p.id.clone()), "duplicate id {}", p.id);
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn lookup_returns_matching_record_or_none() {
        let catalog = sample();
        for p in catalog.list_products() {
            assert_eq!(catalog.get_product_by_id(&p.id), Some(p));
        }
        assert!(catalog.get_product_by_id("does-not-exist").is_none());
        assert!(catalog.get_product_by_id("").is_none());
    }

    #[test]
    fn listing_keeps_source_order() {
        let catalog = sample();
        assert_eq!(
            catalog.product_ids().collect::<Vec<_>>(),
            vec!["1", "2", "prod_abc123"]
        );
        let names: Vec<&str> = catalog.list_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Gadget", "Lampe"]);
    }

    #[test]
    fn missing_price_fails_to_load() {
        let err = Catalog::from_json_str(
            r#"[{"id":"1","name":"Widget","description":"","stock":5,
                 "category":"Tools","imageUrl":"/w.jpg"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn duplicate_ids_fail_to_load() {
        let err = Catalog::from_json_str(
            r#"[
            {"id":"1","name":"A","description":"","price":1,"stock":1,"category":"c","imageUrl":"/a"},
            {"id":"1","name":"B","description":"","price":2,"stock":2,"category":"c","imageUrl":"/b"}
        ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn invalid_record_reports_its_position() {
        let err = Catalog::from_json_str(
            r#"[
            {"id":"1","name":"A","description":"","price":1,"stock":1,"category":"c","imageUrl":"/a"},
            {"id":"2","name":"B","description":"","price":-3,"stock":2,"category":"c","imageUrl":"/b"}
        ]"#,
        )
        .unwrap_err();
        match err {
            LoadError::Invalid { index, id, reason } => {
                assert_eq!(index, 1);
                assert_eq!(id, "2");
                assert!(matches!(reason, InvalidProduct::NegativePrice(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_array_source_is_rejected() {
        assert!(matches!(
            Catalog::from_json_str(r#"{"id":"1"}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.list_products().is_empty());
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONE_WIDGET.as_bytes()).unwrap();

        let catalog = Catalog::load_from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load_from_path(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn bundled_catalog_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/products.json");
        let catalog = Catalog::load_from_path(&path).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn new_product_id_is_fresh_and_admits_create_request() {
        let catalog = sample();
        let original = catalog.get_product_by_id("1").unwrap().clone();

        let id = catalog.new_product_id();
        assert!(id.starts_with("prod_"));
        assert!(catalog.get_product_by_id(&id).is_none());

        let admitted = ProductCreateRequest::from(original.clone()).into_product(id.clone(), None);
        assert_eq!(admitted.id, id);
        assert_eq!(admitted.name, original.name);
        assert_eq!(admitted.price, original.price);
        assert_eq!(admitted.stock, original.stock);
    }
}
