use rust_decimal::Decimal;
use serde::Serialize;

use super::format::{format_date, format_price, stock_fill_percent};
use super::model::{Product, StockLevel};

pub const NOT_FOUND_TITLE: &str = "Produit introuvable";

/// One card on the listing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub formatted_price: String,
    pub stock: u32,
    pub availability: String,
    pub stock_level: StockLevel,
    pub stock_badge: &'static str,
    pub details_path: String,
}

/// Everything the detail page shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub formatted_price: String,
    pub stock: u32,
    pub availability: String,
    pub stock_level: StockLevel,
    pub stock_badge: &'static str,
    pub stock_fill_percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub added_on: String,
}

#[derive(Debug, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Title/description pair for a product page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
}

#[derive(Debug, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct RouteParam {
    pub id: String,
}

/// Reply to an "add to cart" click. Nothing is stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAck {
    pub product_id: String,
    pub product_name: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub error: &'static str,
    pub message: &'static str,
}

impl Default for NotFoundBody {
    fn default() -> Self {
        Self {
            error: NOT_FOUND_TITLE,
            message: "Ce produit n'existe pas.",
        }
    }
}

fn stock_badge(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Low => "Stock bas",
        StockLevel::InStock => "En stock",
    }
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        let level = p.stock_level();
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            image_url: p.image_url.clone(),
            price: p.price,
            formatted_price: format_price(p.price),
            stock: p.stock,
            availability: format!("{} en stock", p.stock),
            stock_level: level,
            stock_badge: stock_badge(level),
            details_path: format!("/product/{}", p.id),
        }
    }
}

impl From<&Product> for ProductDetails {
    fn from(p: &Product) -> Self {
        let level = p.stock_level();
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            image_url: p.image_url.clone(),
            price: p.price,
            formatted_price: format_price(p.price),
            stock: p.stock,
            availability: format!("{} unités en stock", p.stock),
            stock_level: level,
            stock_badge: stock_badge(level),
            stock_fill_percent: stock_fill_percent(p.stock),
            created_at: p.created_at.clone(),
            added_on: format_date(p.created_on()),
        }
    }
}

impl PageMetadata {
    /// Metadata for a product page; `None` yields the not-found title.
    pub fn for_product(product: Option<&Product>, store_name: &str) -> Self {
        match product {
            Some(p) => Self {
                title: format!("{} - {}", p.name, store_name),
                description: Some(p.description.clone()),
                open_graph: Some(OpenGraph {
                    title: p.name.clone(),
                    description: p.description.clone(),
                    images: vec![p.image_url.clone()],
                }),
            },
            None => Self {
                title: format!("{} - {}", NOT_FOUND_TITLE, store_name),
                description: None,
                open_graph: None,
            },
        }
    }
}

impl CartAck {
    pub fn for_product(p: &Product) -> Self {
        Self {
            product_id: p.id.clone(),
            product_name: p.name.clone(),
            message: format!(
                "\"{}\" ajouté au panier ! Cette fonctionnalité sera implémentée dans une prochaine étape.",
                p.name
            ),
        }
    }
}
