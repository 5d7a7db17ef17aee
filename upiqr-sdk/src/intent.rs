//! Validation and serialization of UPI payment intents.
//!
//! The wire format is:
//!
//! ```text
//! upi://pay?pa={addr}&pn={name}[&am=][&mam=][&cu=][&mc=][&tid=][&tr=][&tn=]
//! ```
//!
//! Values are `application/x-www-form-urlencoded` (space becomes `+`, `@`
//! becomes `%40`). Optional keys appear in the order above, and only when
//! the corresponding field carries a value.

use crate::objects::PaymentParameters;
use rust_decimal::{Decimal, RoundingStrategy};
use url::form_urlencoded;

/// URI scheme recognized by UPI payment apps.
pub const UPI_SCHEME: &str = "upi";

/// Errors produced while validating payment parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    /// `upiId` or `name` is absent or empty.
    #[error("UPI ID (upiId) and payee name (name) are mandatory, missing {0}")]
    MissingRequiredField(&'static str),
    #[error("invalid UPI ID format {0:?}, it should be like 'user@bank'")]
    InvalidAddressFormat(String),
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(String),
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the payment parameters, failing on the first violation.
///
/// Order: mandatory fields, then the UPI ID format, then the amount. Other
/// fields are passed through to the payment app unchecked.
pub fn validate(params: &PaymentParameters) -> Result<(), IntentError> {
    let upi_id = required(&params.upi_id, "upiId")?;
    required(&params.name, "name")?;

    if !is_valid_upi_id(upi_id) {
        return Err(IntentError::InvalidAddressFormat(upi_id.to_string()));
    }

    if let Some(amount) = params.amount
        && amount <= Decimal::ZERO
    {
        return Err(IntentError::InvalidAmount(amount.to_string()));
    }

    Ok(())
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, IntentError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(IntentError::MissingRequiredField(name)),
    }
}

/// `local@domain` where local is 2 to 256 of `[A-Za-z0-9._-]` and domain is
/// 2 to 64 ASCII letters.
pub fn is_valid_upi_id(upi_id: &str) -> bool {
    let Some((local, domain)) = upi_id.split_once('@') else {
        return false;
    };

    let local_ok = (2..=256).contains(&local.len())
        && local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'));
    let domain_ok =
        (2..=64).contains(&domain.len()) && domain.bytes().all(|b| b.is_ascii_alphabetic());

    local_ok && domain_ok
}

/// Parse an amount given as text.
///
/// Anything that is not a decimal number is reported as
/// [`IntentError::InvalidAmount`], the same as a non-positive one.
pub fn parse_amount(text: &str) -> Result<Decimal, IntentError> {
    text.trim()
        .parse::<Decimal>()
        .map_err(|_| IntentError::InvalidAmount(text.to_string()))
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Validate `params` and build the `upi://pay` intent URI.
pub fn build_intent(params: &PaymentParameters) -> Result<String, IntentError> {
    validate(params)?;
    let intent = format!("{UPI_SCHEME}://pay?{}", query_string(params));
    tracing::debug!(intent = %intent, "Built UPI intent");
    Ok(intent)
}

fn query_string(params: &PaymentParameters) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    // Validation guarantees both are present.
    query.append_pair("pa", params.upi_id.as_deref().unwrap_or_default());
    query.append_pair("pn", params.name.as_deref().unwrap_or_default());

    if let Some(amount) = nonzero(params.amount) {
        query.append_pair("am", &format_amount(amount));
    }
    if let Some(minimum) = nonzero(params.minimum_amount) {
        query.append_pair("mam", &format_amount(minimum));
    }

    let text_fields = [
        ("cu", &params.currency),
        ("mc", &params.payee_merchant_code),
        ("tid", &params.transaction_id),
        ("tr", &params.transaction_ref),
        ("tn", &params.transaction_note),
    ];
    for (key, value) in text_fields {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            query.append_pair(key, value);
        }
    }

    query.finish()
}

fn nonzero(amount: Option<Decimal>) -> Option<Decimal> {
    amount.filter(|a| !a.is_zero())
}

/// Format an amount with exactly two decimals, rounding half away from zero.
///
/// Rounding works on the exact decimal value, so `5.005` gives `5.01` and
/// `1.005` gives `1.01`. A binary-float `toFixed(2)` would give `5.00` and
/// `1.00` for the same inputs because neither value is representable.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
