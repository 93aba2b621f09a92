//! WhatsApp order links.

use jiff::Timestamp;
use reqwest::Url;
use thiserror::Error;
use url::form_urlencoded;
use vitrina::{
    catalog::{Catalog, Product},
    discounts::DiscountMapping,
    order::{OrderError, order_message, whatsapp_digits},
};

#[derive(Debug, Error)]
pub enum OrderLinkError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("failed to build order link")]
    Url(#[source] <Url as std::str::FromStr>::Err),
}

/// `wa.me` link that opens a chat with the order message prefilled.
///
/// # Errors
///
/// Returns an error if the catalog's WhatsApp number has no digits.
pub fn whatsapp_url(
    catalog: &Catalog,
    product: &Product,
    discounts: &DiscountMapping,
    now: Timestamp,
) -> Result<Url, OrderLinkError> {
    let digits = whatsapp_digits(&catalog.whatsapp_number)?;
    let message = order_message(catalog, product, discounts, now);

    Url::parse(&format!("https://wa.me/{digits}?text={}", encode_component(&message)))
        .map_err(OrderLinkError::Url)
}

/// Percent-encode a query component with spaces as `%20` rather than `+`.
fn encode_component(value: &str) -> String {
    // `byte_serialize` escapes a literal `+` as `%2B`, so every `+` left is a space.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn link_targets_number_digits_with_encoded_message() -> TestResult {
        let catalog = Catalog::bundled()?;
        let product = catalog.product(3).ok_or("missing product")?;

        let url = whatsapp_url(&catalog, product, &DiscountMapping::new(), Timestamp::UNIX_EPOCH)?;

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/50254394843");

        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .ok_or("missing text")?;

        assert_eq!(
            text,
            order_message(&catalog, product, &DiscountMapping::new(), Timestamp::UNIX_EPOCH)
        );

        Ok(())
    }

    #[test]
    fn spaces_are_encoded_as_percent_twenty() -> TestResult {
        let catalog = Catalog::bundled()?;
        let product = catalog.product(3).ok_or("missing product")?;

        let url = whatsapp_url(&catalog, product, &DiscountMapping::new(), Timestamp::UNIX_EPOCH)?;
        let query = url.query().ok_or("missing query")?;

        assert!(query.starts_with("text=Hola%20"), "{query}");
        assert!(!query.contains('+'), "{query}");

        Ok(())
    }

    #[test]
    fn literal_plus_and_ampersand_survive_encoding() {
        assert_eq!(encode_component("a+b & c"), "a%2Bb%20%26%20c");
    }

    #[test]
    fn missing_number_is_an_error() -> TestResult {
        let mut catalog = Catalog::bundled()?;
        catalog.whatsapp_number = "sin número".to_string();
        let product = catalog.product(1).ok_or("missing product")?.clone();

        let result = whatsapp_url(&catalog, &product, &DiscountMapping::new(), Timestamp::UNIX_EPOCH);

        assert!(
            matches!(result, Err(OrderLinkError::Order(OrderError::MissingNumber))),
            "expected MissingNumber, got {result:?}"
        );

        Ok(())
    }
}
