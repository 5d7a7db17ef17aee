use super::overwrite;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of a UPI payment intent.
///
/// Every field is optional so the same type serves as a partial update:
/// a `None` field means "not supplied" and leaves the accumulated value
/// untouched. Required fields (`upi_id`, `name`) are only checked when an
/// intent is built.
///
/// There is no way to unset a field once it has been supplied; it can only
/// be overwritten with another value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentParameters {
    /// Virtual payment address of the payee, e.g. `user@bank`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    /// Registered name of the payee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Merchant category code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_merchant_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Reference for the transaction, e.g. an invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
    /// Free-text note shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_note: Option<String>,
    /// Amount to pay. When absent the payer is prompted for one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<Decimal>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl PaymentParameters {
    /// Parameters with only the two mandatory fields filled in.
    pub fn new(upi_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            upi_id: Some(upi_id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Overwrite every field that `update` supplies, keeping the rest.
    pub fn merge(&mut self, update: PaymentParameters) {
        let PaymentParameters {
            upi_id,
            name,
            payee_merchant_code,
            transaction_id,
            transaction_ref,
            transaction_note,
            amount,
            minimum_amount,
            currency,
        } = update;

        overwrite(&mut self.upi_id, upi_id);
        overwrite(&mut self.name, name);
        overwrite(&mut self.payee_merchant_code, payee_merchant_code);
        overwrite(&mut self.transaction_id, transaction_id);
        overwrite(&mut self.transaction_ref, transaction_ref);
        overwrite(&mut self.transaction_note, transaction_note);
        overwrite(&mut self.amount, amount);
        overwrite(&mut self.minimum_amount, minimum_amount);
        overwrite(&mut self.currency, currency);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_merge_keeps_unsupplied_fields() {
        let mut params = PaymentParameters::default();
        params.merge(PaymentParameters {
            amount: Some(dec!(10)),
            ..Default::default()
        });
        params.merge(PaymentParameters {
            currency: Some("USD".to_string()),
            ..Default::default()
        });

        assert_eq!(params.amount, Some(dec!(10)));
        assert_eq!(params.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut params = PaymentParameters::new("first@bank", "First");
        params.merge(PaymentParameters {
            name: Some("Second".to_string()),
            ..Default::default()
        });

        assert_eq!(params.upi_id.as_deref(), Some("first@bank"));
        assert_eq!(params.name.as_deref(), Some("Second"));
    }

    #[test]
    fn test_merge_cannot_unset() {
        let mut params = PaymentParameters::new("user@bank", "Test User");
        params.merge(PaymentParameters::default());
        assert_eq!(params, PaymentParameters::new("user@bank", "Test User"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"upiId":"shop@upi","name":"Shop","payeeMerchantCode":"5411","amount":"12.5"}"#;
        let params: PaymentParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.upi_id.as_deref(), Some("shop@upi"));
        assert_eq!(params.payee_merchant_code.as_deref(), Some("5411"));
        assert_eq!(params.amount, Some(dec!(12.5)));
        assert!(params.currency.is_none());
    }
}
