//! Order message
//!
//! Orders are placed over WhatsApp with a prefilled message naming the
//! product and the price the customer saw.

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    catalog::{Catalog, Product},
    countdown::Remaining,
    discounts::DiscountMapping,
    pricing::PriceLabel,
};

/// Errors raised while preparing an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The configured number has no digits.
    #[error("the business WhatsApp number is not configured")]
    MissingNumber,
}

/// Order message for `product` as priced at `now`.
pub fn order_message(
    catalog: &Catalog,
    product: &Product,
    discounts: &DiscountMapping,
    now: Timestamp,
) -> String {
    let greeting = if catalog.business_name.is_empty() {
        "Hola, ".to_string()
    } else {
        format!("Hola {}, ", catalog.business_name)
    };

    let (label, note) = match product.price_label(discounts, now) {
        PriceLabel::Discounted {
            original,
            discounted,
        } => {
            let note = discounts
                .active_for(product.id, now)
                .and_then(|record| Remaining::until(record.expires_at(), now))
                .map(|remaining| format!("\nTiempo restante de oferta: {remaining}"))
                .unwrap_or_default();

            (format!("{discounted} (antes {original})"), note)
        }
        label => (label.to_string(), String::new()),
    };

    format!(
        "{greeting}estoy interesado en:\n\n*{}*\nPrecio: {label}{note}\n\n¿Está disponible?",
        product.name
    )
}

/// Digits of a phone number, as used in `wa.me` links.
///
/// # Errors
///
/// Returns [`OrderError::MissingNumber`] if `number` contains no digits.
pub fn whatsapp_digits(number: &str) -> Result<String, OrderError> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(OrderError::MissingNumber);
    }

    Ok(digits)
}
