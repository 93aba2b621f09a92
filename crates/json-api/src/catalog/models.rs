//! Catalog response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use vitrina::catalog::{Catalog, Logo, MediaItem, MediaKind, Product};

/// Catalog document as served to storefront clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogResponse {
    /// Business name
    pub business_name: String,

    /// Business logo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoResponse>,

    /// Order phone number
    pub whatsapp_number: String,

    /// Products in display order
    pub products: Vec<ProductResponse>,
}

/// Logo, served in the shape the catalog stores it
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum LogoResponse {
    /// Bare image URL
    Url(String),

    /// Image with alternative text
    Image {
        /// Image URL
        src: String,

        /// Alternative text
        alt: String,
    },
}

/// A catalog product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Price string with currency prefix, e.g. `Q115`
    pub price: String,

    /// Gallery entries in display order
    pub media: Vec<MediaResponse>,
}

/// Gallery entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MediaResponse {
    /// `image`, `video` or `placeholder`
    #[serde(rename = "type")]
    pub kind: String,

    /// URL, or literal text for placeholders
    pub content: String,
}

impl From<&Catalog> for CatalogResponse {
    fn from(catalog: &Catalog) -> Self {
        CatalogResponse {
            business_name: catalog.business_name.clone(),
            logo: catalog.logo.as_ref().map(LogoResponse::from),
            whatsapp_number: catalog.whatsapp_number.clone(),
            products: catalog.products.iter().cloned().map(Into::into).collect(),
        }
    }
}

impl From<&Logo> for LogoResponse {
    fn from(logo: &Logo) -> Self {
        match logo {
            Logo::Url(src) => LogoResponse::Url(src.clone()),
            Logo::Image { src, alt } => LogoResponse::Image {
                src: src.clone(),
                alt: alt.clone(),
            },
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            media: product.media.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MediaItem> for MediaResponse {
    fn from(item: MediaItem) -> Self {
        let kind = match item.kind {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Placeholder => "placeholder",
        };

        MediaResponse {
            kind: kind.to_string(),
            content: item.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn serialized_catalog_reads_back_as_a_catalog() -> TestResult {
        let catalog = Catalog::bundled()?;

        let json = serde_json::to_string(&CatalogResponse::from(&catalog))?;
        let served: Catalog = serde_json::from_str(&json)?;

        assert_eq!(served.products, catalog.products);
        assert_eq!(served.whatsapp_number, catalog.whatsapp_number);

        Ok(())
    }

    #[test]
    fn bare_logo_url_is_served_as_a_string() -> TestResult {
        let logo = LogoResponse::from(&Logo::Url("/logo.png".to_string()));

        assert_eq!(serde_json::to_value(&logo)?, json!("/logo.png"));

        Ok(())
    }

    #[test]
    fn logo_with_alt_text_is_served_as_an_object() -> TestResult {
        let logo = LogoResponse::from(&Logo::Image {
            src: "/logo.png".to_string(),
            alt: "Tienda".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&logo)?,
            json!({ "src": "/logo.png", "alt": "Tienda" })
        );

        Ok(())
    }

    #[test]
    fn served_catalog_matches_the_stored_document() -> TestResult {
        let catalog = Catalog::bundled()?;

        assert_eq!(
            serde_json::to_value(CatalogResponse::from(&catalog))?,
            serde_json::to_value(&catalog)?
        );

        Ok(())
    }
}
