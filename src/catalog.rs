//! Catalog

use std::collections::HashSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    discounts::DiscountMapping,
    prices::PriceParseError,
    pricing::{PriceInfo, PriceLabel, price_info},
};

const BUNDLED_CATALOG: &str = include_str!("../fixtures/catalog.yml");

/// Product identifier
pub type ProductId = u64;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not a valid catalog.
    #[error("failed to parse catalog")]
    Parse(#[source] serde_norway::Error),

    /// Two products share an id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
}

/// Storefront catalog: business details plus the product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Business name used in headings and the order greeting.
    #[serde(default)]
    pub business_name: String,

    /// Business logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,

    /// Phone number orders are sent to, in any human format.
    #[serde(default)]
    pub whatsapp_number: String,

    /// Products in display order.
    pub products: Vec<Product>,
}

/// Logo reference, either a bare URL or an image with alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Logo {
    /// Bare image URL.
    Url(String),

    /// Image with alternative text.
    Image {
        /// Image URL.
        src: String,
        /// Alternative text.
        #[serde(default)]
        alt: String,
    },
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Price string, `<currency prefix><amount>`.
    pub price: String,

    /// Media shown in the gallery, in order.
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// Gallery entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// What `content` holds.
    #[serde(rename = "type")]
    pub kind: MediaKind,

    /// URL for images and videos, literal text for placeholders.
    pub content: String,
}

/// Gallery entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image.
    Image,

    /// Video clip.
    Video,

    /// Text or emoji shown when no image exists.
    Placeholder,
}

impl Catalog {
    /// The catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the bundled document is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml(BUNDLED_CATALOG)
    }

    /// Parse a catalog from YAML (or JSON, which YAML accepts).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Parse`]: the document does not match the catalog shape.
    /// - [`CatalogError::DuplicateId`]: two products share an id.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_norway::from_str(source).map_err(CatalogError::Parse)?;

        catalog.validate()?;

        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.products.len());

        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(())
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

impl Product {
    /// Effective price under the given discounts.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceParseError`] if the price string has no amount.
    pub fn price_info(
        &self,
        discounts: &DiscountMapping,
        now: Timestamp,
    ) -> Result<PriceInfo, PriceParseError> {
        price_info(&self.price, discounts.record_for(self.id).as_ref(), now)
    }

    /// Display label under the given discounts.
    pub fn price_label(&self, discounts: &DiscountMapping, now: Timestamp) -> PriceLabel {
        PriceLabel::for_price(&self.price, discounts.record_for(self.id).as_ref(), now)
    }

    /// First media entry, used as the card thumbnail.
    pub fn cover(&self) -> Option<&MediaItem> {
        self.media.first()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn bundled_catalog_loads() -> TestResult {
        let catalog = Catalog::bundled()?;

        assert_eq!(catalog.business_name, "Vitrina Demo");
        assert_eq!(catalog.products.len(), 6);
        assert_eq!(
            catalog.product(4).and_then(Product::cover).map(|media| media.kind),
            Some(MediaKind::Placeholder)
        );

        Ok(())
    }

    #[test]
    fn unknown_product_is_none() -> TestResult {
        let catalog = Catalog::bundled()?;

        assert!(catalog.product(999_999).is_none());

        Ok(())
    }

    #[test]
    fn serializes_with_camel_case_keys() -> TestResult {
        let catalog = Catalog::from_yaml(
            "businessName: Demo\nlogo: https://example.com/logo.png\nwhatsappNumber: '1'\nproducts: []\n",
        )?;

        assert_eq!(
            serde_json::to_value(&catalog)?,
            json!({
                "businessName": "Demo",
                "logo": "https://example.com/logo.png",
                "whatsappNumber": "1",
                "products": []
            })
        );

        Ok(())
    }

    #[test]
    fn accepts_json_documents() -> TestResult {
        let catalog = Catalog::from_yaml(
            r#"{"products": [{"id": 9, "name": "Té", "price": "Q10", "media": [{"type": "video", "content": "t.mp4"}]}]}"#,
        )?;

        assert_eq!(catalog.product(9).map(|product| product.price.as_str()), Some("Q10"));

        Ok(())
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::from_yaml(
            "products:\n  - {id: 1, name: A, price: Q1}\n  - {id: 1, name: B, price: Q2}\n",
        );

        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn product_price_uses_discount_mapping() -> TestResult {
        let catalog = Catalog::bundled()?;
        let discounts =
            DiscountMapping::from_value(json!({ "1": { "percent": 20, "expiresAt": 10_000 } }))?;
        let now = Timestamp::from_millisecond(5_000)?;

        let product = catalog.product(1).ok_or("missing product")?;

        assert_eq!(product.price_label(&discounts, now).to_string(), "Q115 → Q92");

        Ok(())
    }
}
