use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{
    format_description::well_known::{Iso8601, Rfc3339},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};

use super::error::InvalidProduct;

/// Products with fewer units than this are shown as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A product as stored in the catalog data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in Canadian dollars.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StockLevel {
    Low,
    InStock,
}

impl StockLevel {
    pub fn for_stock(stock: u32) -> Self {
        if stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::for_stock(self.stock)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_level() == StockLevel::Low
    }

    /// Calendar date of `created_at`, if present.
    ///
    /// Accepts RFC 3339 and ISO 8601 timestamps, with or without offset,
    /// seconds or fractional seconds, and plain `YYYY-MM-DD` dates.
    pub fn created_on(&self) -> Option<Date> {
        self.created_at.as_deref().and_then(parse_date)
    }

    /// Checks the constraints the type system does not enforce.
    pub fn validate(&self) -> Result<(), InvalidProduct> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("category", &self.category),
            ("imageUrl", &self.image_url),
        ] {
            if value.trim().is_empty() {
                return Err(InvalidProduct::EmptyField(field));
            }
        }
        if self.price < Decimal::ZERO {
            return Err(InvalidProduct::NegativePrice(self.price));
        }
        if let Some(raw) = &self.created_at {
            if parse_date(raw).is_none() {
                return Err(InvalidProduct::CreatedAt(raw.clone()));
            }
        }
        Ok(())
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(raw, &Iso8601::DEFAULT))
    {
        return Some(ts.date());
    }
    let local = PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
        .or_else(|_| {
            PrimitiveDateTime::parse(
                raw,
                format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
            )
        })
        .or_else(|_| {
            PrimitiveDateTime::parse(
                raw,
                format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
            )
        })
        .or_else(|_| {
            PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        });
    if let Ok(ts) = local {
        return Some(ts.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// A product about to be admitted into the catalog. The store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateRequest {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
}

impl ProductCreateRequest {
    pub fn into_product(self, id: impl Into<String>, created_at: Option<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image_url: self.image_url,
            stock: self.stock,
            created_at,
        }
    }
}

impl From<Product> for ProductCreateRequest {
    fn from(p: Product) -> Self {
        Self {
            name: p.name,
            description: p.description,
            price: p.price,
            category: p.category,
            image_url: p.image_url,
            stock: p.stock,
        }
    }
}

/// Partial patch of a product. The target id travels separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ProductUpdateRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `product` with every present field replaced.
    pub fn apply(self, mut product: Product) -> Product {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if self.created_at.is_some() {
            product.created_at = self.created_at;
        }
        product
    }
}
