//! Prices

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors raised while parsing a catalog price string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceParseError {
    /// No digit follows the currency prefix.
    #[error("price has no numeric amount: {0:?}")]
    MissingAmount(String),

    /// The numeric run could not be read as a decimal.
    #[error("invalid price amount: {0:?}")]
    InvalidAmount(String),
}

/// A catalog price split into its display prefix and numeric amount.
///
/// Catalog prices are free-form strings such as `"Q115"` or `"$1,299.50"`.
/// The prefix is kept verbatim so it can be glued back onto derived amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrice {
    /// Everything before the first digit.
    pub currency: String,

    /// Numeric amount.
    pub value: Decimal,
}

impl ParsedPrice {
    /// Render an amount with this price's prefix.
    pub fn display(&self, value: Decimal) -> String {
        format!("{}{}", self.currency, format_amount(value))
    }
}

impl fmt::Display for ParsedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(self.value))
    }
}

impl FromStr for ParsedPrice {
    type Err = PriceParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_price(raw)
    }
}

/// Parse a `<non-digit prefix><amount>` price string.
///
/// The amount is the run of digits, `.` and `,` that follows the prefix.
/// Commas are thousands separators and are dropped; the amount stops at a
/// second decimal point, so `"Q1.2.3"` reads as `1.2`.
///
/// # Errors
///
/// - [`PriceParseError::MissingAmount`]: the string contains no digit.
/// - [`PriceParseError::InvalidAmount`]: the numeric run is not a decimal.
pub fn parse_price(raw: &str) -> Result<ParsedPrice, PriceParseError> {
    let Some(start) = raw.find(|c: char| c.is_ascii_digit()) else {
        return Err(PriceParseError::MissingAmount(raw.to_string()));
    };

    let (currency, rest) = raw.split_at(start);

    let mut amount = String::with_capacity(rest.len());
    let mut seen_point = false;

    for c in rest.chars() {
        match c {
            '0'..='9' => amount.push(c),
            ',' => {}
            '.' if !seen_point => {
                seen_point = true;
                amount.push(c);
            }
            _ => break,
        }
    }

    let amount = amount.trim_end_matches('.');

    let value = amount
        .parse::<Decimal>()
        .map_err(|_err| PriceParseError::InvalidAmount(raw.to_string()))?;

    Ok(ParsedPrice {
        currency: currency.to_string(),
        value,
    })
}

/// Format an amount for display.
///
/// Whole amounts render without decimals, anything else with exactly two.
pub fn format_amount(value: Decimal) -> String {
    if value.fract().is_zero() {
        return value.trunc().normalize().to_string();
    }

    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_prefix_and_whole_amount() -> TestResult {
        let price = parse_price("Q115")?;

        assert_eq!(price.currency, "Q");
        assert_eq!(price.value, Decimal::from(115));

        Ok(())
    }

    #[test]
    fn parses_decimal_amount_with_spaced_prefix() -> TestResult {
        let price = parse_price("US$ 35.50")?;

        assert_eq!(price.currency, "US$ ");
        assert_eq!(price.value, Decimal::new(3550, 2));

        Ok(())
    }

    #[test]
    fn drops_thousands_separators() -> TestResult {
        let price = parse_price("$1,299.99")?;

        assert_eq!(price.value, Decimal::new(129_999, 2));

        Ok(())
    }

    #[test]
    fn stops_at_second_decimal_point() -> TestResult {
        assert_eq!(parse_price("Q1.2.3")?.value, Decimal::new(12, 1));
        assert_eq!(parse_price("Q12.")?.value, Decimal::from(12));

        Ok(())
    }

    #[test]
    fn trailing_text_is_ignored() -> TestResult {
        assert_eq!(parse_price("Q20 c/u")?.value, Decimal::from(20));

        Ok(())
    }

    #[test]
    fn rejects_strings_without_digits() {
        assert_eq!(
            parse_price("Consultar"),
            Err(PriceParseError::MissingAmount("Consultar".to_string()))
        );
        assert!(parse_price("").is_err());
    }

    #[test]
    fn whole_amounts_format_without_decimals() {
        assert_eq!(format_amount(Decimal::from(115)), "115");
        assert_eq!(format_amount(Decimal::new(2000, 2)), "20");
    }

    #[test]
    fn fractional_amounts_format_with_two_decimals() {
        assert_eq!(format_amount(Decimal::new(355, 1)), "35.50");
        assert_eq!(format_amount(Decimal::new(4999, 2)), "49.99");
        assert_eq!(format_amount(Decimal::new(10_005, 3)), "10.01");
    }

    #[test]
    fn display_keeps_prefix() -> TestResult {
        let price: ParsedPrice = "Q20.00".parse()?;

        assert_eq!(price.to_string(), "Q20");

        Ok(())
    }
}
