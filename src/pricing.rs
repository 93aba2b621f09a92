//! Pricing

use std::fmt;

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    discounts::DiscountRecord,
    prices::{PriceParseError, format_amount, parse_price},
};

/// Effective price of a product at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceInfo {
    /// Display prefix taken from the catalog price string.
    pub currency: String,

    /// Catalog amount before any discount.
    pub original: Decimal,

    /// Amount after the active discount, if one applies.
    pub discounted: Option<Decimal>,

    /// Percentage of the active discount, if one applies.
    pub percent: Option<Decimal>,
}

impl PriceInfo {
    /// Whether an active discount changes the price.
    pub fn is_discounted(&self) -> bool {
        self.discounted.is_some()
    }

    /// Original amount with its prefix, e.g. `Q115`.
    pub fn formatted_original(&self) -> String {
        format!("{}{}", self.currency, format_amount(self.original))
    }

    /// Discounted amount with its prefix, if a discount applies.
    pub fn formatted_discounted(&self) -> Option<String> {
        self.discounted
            .map(|amount| format!("{}{}", self.currency, format_amount(amount)))
    }

    /// Amount the customer pays.
    pub fn effective(&self) -> Decimal {
        self.discounted.unwrap_or(self.original)
    }
}

/// Apply `percent` off `original`, rounded to cents (midpoint away from zero).
pub fn discounted_amount(original: Decimal, percent: Decimal) -> Decimal {
    let factor = Decimal::ONE - percent / Decimal::ONE_HUNDRED;

    (original * factor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the effective price for a catalog price string.
///
/// The discount applies only when it is present and `now` is strictly before
/// its expiry.
///
/// # Errors
///
/// Returns a [`PriceParseError`] if the price string has no numeric amount.
pub fn price_info(
    price: &str,
    discount: Option<&DiscountRecord>,
    now: Timestamp,
) -> Result<PriceInfo, PriceParseError> {
    let parsed = parse_price(price)?;

    let active = discount.filter(|record| record.is_active(now));

    Ok(PriceInfo {
        discounted: active.map(|record| discounted_amount(parsed.value, record.percent())),
        percent: active.map(DiscountRecord::percent),
        currency: parsed.currency,
        original: parsed.value,
    })
}

/// How a price should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceLabel {
    /// The price string could not be parsed and is shown verbatim.
    Raw(String),

    /// No discount applies.
    Regular(String),

    /// A discount applies: the struck-through original and the new price.
    Discounted {
        /// Original price, shown struck through.
        original: String,
        /// Price after the discount.
        discounted: String,
    },
}

impl PriceLabel {
    /// Build the label for a price string, falling back to the raw string when
    /// it does not parse.
    pub fn for_price(price: &str, discount: Option<&DiscountRecord>, now: Timestamp) -> Self {
        match price_info(price, discount, now) {
            Ok(info) => Self::from(&info),
            Err(_) => Self::Raw(price.to_string()),
        }
    }
}

impl From<&PriceInfo> for PriceLabel {
    fn from(info: &PriceInfo) -> Self {
        match info.formatted_discounted() {
            Some(discounted) => Self::Discounted {
                original: info.formatted_original(),
                discounted,
            },
            None => Self::Regular(info.formatted_original()),
        }
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(price) | Self::Regular(price) => f.write_str(price),
            Self::Discounted {
                original,
                discounted,
            } => write!(f, "{original} → {discounted}"),
        }
    }
}
