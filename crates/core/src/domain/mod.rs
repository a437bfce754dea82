//! Public request and response shapes.
//!
//! Requests are validated declaratively with `validator` before they reach a
//! builder; builders therefore never fail. Dates are strict `YYYY-MM-DD`
//! strings ([`DateOnly`](crate::dates::DateOnly)).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

pub mod covenant;
pub mod deal;
pub mod facility;
pub mod fee;
pub mod guarantee;
pub mod investor;
pub mod loan;
pub mod party;
pub mod transaction;

pub const UKEF_IDENTIFIER_LENGTH: usize = 10;
pub const PARTY_IDENTIFIER_LENGTH: usize = 8;

static UKEF_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("ukef identifier pattern compiles"));
static PARTY_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}$").expect("party identifier pattern compiles"));
static ISO_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("iso code pattern compiles"));

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Deal, facility, loan and covenant identifiers: ten digits.
pub fn ukef_identifier(value: &str) -> Result<(), ValidationError> {
    if UKEF_IDENTIFIER.is_match(value) {
        return Ok(());
    }
    Err(invalid("ukef_identifier", "must be a 10 digit identifier"))
}

pub fn party_identifier(value: &str) -> Result<(), ValidationError> {
    if PARTY_IDENTIFIER.is_match(value) {
        return Ok(());
    }
    Err(invalid("party_identifier", "must be an 8 digit party identifier"))
}

/// ISO 4217 currency codes and ISO 3166 alpha-3 country codes.
pub fn iso_code(value: &str) -> Result<(), ValidationError> {
    if ISO_CODE.is_match(value) {
        return Ok(());
    }
    Err(invalid("iso_code", "must be a 3 letter upper-case code"))
}

pub fn non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid("non_negative_amount", "must not be negative"));
    }
    Ok(())
}

pub fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        return Ok(());
    }
    Err(invalid("positive_amount", "must be greater than zero"))
}

pub fn non_zero_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_zero() {
        return Err(invalid("non_zero_amount", "must not be zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{
        iso_code, non_negative_amount, non_zero_amount, party_identifier, positive_amount,
        ukef_identifier,
    };

    #[test]
    fn identifiers_require_exact_digit_counts() {
        assert!(ukef_identifier("0030000321").is_ok());
        assert!(ukef_identifier("003000032").is_err());
        assert!(ukef_identifier("003000032A").is_err());
        assert!(party_identifier("00309999").is_ok());
        assert!(party_identifier("0030999").is_err());
    }

    #[test]
    fn iso_codes_are_three_upper_case_letters() {
        assert!(iso_code("GBP").is_ok());
        assert!(iso_code("gbp").is_err());
        assert!(iso_code("GB").is_err());
    }

    #[test]
    fn amount_rules() {
        assert!(non_negative_amount(&Decimal::ZERO).is_ok());
        assert!(non_negative_amount(&Decimal::NEGATIVE_ONE).is_err());
        assert!(positive_amount(&Decimal::ZERO).is_err());
        assert!(positive_amount(&Decimal::ONE).is_ok());
        assert!(non_zero_amount(&Decimal::NEGATIVE_ONE).is_ok());
        assert!(non_zero_amount(&Decimal::ZERO).is_err());
    }
}
