//! Merchant model and the requests that create and update merchants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MerchantId;

/// A seller account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    /// Unique identifier.
    pub id: MerchantId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    /// Contact email.
    pub email: String,
    /// Website where the integration lives.
    pub website: String,
    /// Text shown on cardholder bank statements.
    pub descriptor: String,
    /// Public key used by client-side integrations.
    pub key: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Whether this is a test merchant.
    #[serde(default)]
    pub test: bool,
    /// Current balance in minor units.
    pub balance: i64,
    /// Company registration details.
    pub company: MerchantCompany,
    /// Payout bank account.
    #[serde(default)]
    pub bank: Option<MerchantBank>,
    /// Capability flags.
    pub claim: MerchantClaim,
    /// Pricing schedule.
    pub pricing: MerchantPricing,
    /// 3-D Secure configuration.
    pub tds: MerchantTds,
}

/// Company registration details of a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantCompany {
    /// ISO 3166 country code (e.g. `DK`).
    pub country: String,
    /// Registration number ("CVR" in Denmark).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

impl MerchantCompany {
    /// Creates company details for the given country.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(country: T) -> Self {
        Self {
            country: country.into(),
            number: None,
        }
    }

    /// Sets the registration number.
    #[inline]
    #[must_use]
    pub fn number<T: Into<String>>(mut self, number: T) -> Self {
        self.number = Some(number.into());
        self
    }
}

/// Payout bank account of a merchant.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantBank {
    /// IBAN, `XX00000000` where `XX` is the country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

/// Operations a merchant is allowed to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[expect(
    clippy::struct_excessive_bools,
    reason = "mirrors the capability flags of the API"
)]
pub struct MerchantClaim {
    /// May charge cards.
    pub can_charge_card: bool,
    /// May save cards for later use.
    pub can_save_card: bool,
    /// May transfer funds to cards.
    pub can_transfer_to_card: bool,
    /// May capture reserved funds.
    pub can_capture: bool,
    /// May refund captured funds.
    pub can_refund: bool,
    /// May void reserved funds.
    pub can_void: bool,
}

/// An amount in a given currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    /// Amount in minor units.
    pub amount: i64,
}

/// Fee structure applied to a kind of operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Percentage fee as a fraction (`0.0125` is 1.25%).
    pub rate: f64,
    /// Flat fee per operation.
    pub flat: Amount,
    /// Fee per dispute.
    pub dispute: Amount,
}

/// Pricing of transfers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantTransfer {
    /// Pricing of transfers to cards.
    pub to_card: Pricing,
}

/// Full pricing schedule of a merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantPricing {
    /// Pricing of card payments.
    #[serde(flatten)]
    pub payments: Pricing,
    /// Pricing of transfers.
    pub transfer: MerchantTransfer,
}

/// 3-D Secure configuration of a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantTds {
    /// Enforcement mode.
    pub mode: String,
}

/// Request body for creating a merchant.
///
/// Optional fields left unset are omitted from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantCreate {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    /// Creates a test merchant when `true`; the server defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    /// Contact email.
    pub email: String,
    /// Website where the integration lives.
    pub website: String,
    /// Text shown on cardholder bank statements.
    pub descriptor: String,
    /// Company registration details.
    pub company: MerchantCompany,
    /// Payout bank account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<MerchantBank>,
}

impl MerchantCreate {
    /// Creates a request with every required field.
    #[inline]
    #[must_use]
    pub fn new<C, E, W, D>(
        currency: C,
        email: E,
        website: W,
        descriptor: D,
        company: MerchantCompany,
    ) -> Self
    where
        C: Into<String>,
        E: Into<String>,
        W: Into<String>,
        D: Into<String>,
    {
        Self {
            name: None,
            currency: currency.into(),
            test: None,
            email: email.into(),
            website: website.into(),
            descriptor: descriptor.into(),
            company,
            bank: None,
        }
    }

    /// Sets the display name.
    #[inline]
    #[must_use]
    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the merchant as a test merchant.
    #[inline]
    #[must_use]
    pub const fn test(mut self, test: bool) -> Self {
        self.test = Some(test);
        self
    }

    /// Sets the payout bank account.
    #[inline]
    #[must_use]
    pub fn bank(mut self, bank: MerchantBank) -> Self {
        self.bank = Some(bank);
        self
    }
}

/// Partial update of a merchant.
///
/// Only name, email and descriptor can be changed; anything else requires a
/// new merchant. Fields left unset are omitted so the server keeps its
/// current values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New statement descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
}

impl MerchantUpdate {
    /// Creates an update that changes nothing.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the display name.
    #[inline]
    #[must_use]
    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Changes the contact email.
    #[inline]
    #[must_use]
    pub fn email<T: Into<String>>(mut self, email: T) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Changes the statement descriptor.
    #[inline]
    #[must_use]
    pub fn descriptor<T: Into<String>>(mut self, descriptor: T) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A merchant as returned by the API.
    const MERCHANT_JSON: &str = r#"{
        "id": "merchant-001",
        "name": "Shop",
        "currency": "HUF",
        "email": "john@example.com",
        "website": "https://example.com",
        "descriptor": "1234567897891234",
        "key": "public-key",
        "created": "2018-03-01T12:00:00.000Z",
        "test": true,
        "balance": 0,
        "company": {"country": "HU"},
        "bank": {},
        "claim": {
            "canChargeCard": true,
            "canSaveCard": true,
            "canTransferToCard": false,
            "canCapture": true,
            "canRefund": true,
            "canVoid": true
        },
        "pricing": {
            "rate": 0.0125,
            "flat": {"currency": "EUR", "amount": 25},
            "dispute": {"currency": "EUR", "amount": 5000},
            "transfer": {
                "toCard": {
                    "rate": 0.0,
                    "flat": {"currency": "EUR", "amount": 0},
                    "dispute": {"currency": "EUR", "amount": 0}
                }
            }
        },
        "tds": {"mode": "attempt"}
    }"#;

    #[test]
    fn deserialize_merchant() {
        let merchant: Merchant = serde_json::from_str(MERCHANT_JSON).unwrap();
        assert_eq!(merchant.id, MerchantId::from("merchant-001"));
        assert_eq!(merchant.name.as_deref(), Some("Shop"));
        assert_eq!(merchant.company.country, "HU");
        assert!(merchant.company.number.is_none());
        assert_eq!(merchant.bank, Some(MerchantBank::default()));
        assert!(merchant.claim.can_capture);
        assert!(!merchant.claim.can_transfer_to_card);
        assert!((merchant.pricing.payments.rate - 0.0125).abs() < f64::EPSILON);
        assert_eq!(merchant.pricing.payments.flat.amount, 25);
        assert_eq!(merchant.pricing.transfer.to_card.dispute.amount, 0);
        assert_eq!(merchant.tds.mode, "attempt");
    }

    #[test]
    fn merchant_missing_required_field_fails() {
        let mut value: serde_json::Value = serde_json::from_str(MERCHANT_JSON).unwrap();
        let removed = value.as_object_mut().unwrap().remove("claim");
        assert!(removed.is_some());
        let result = serde_json::from_value::<Merchant>(value);
        assert!(result.is_err());
    }

    #[test]
    fn merchant_create_omits_unset_fields() {
        let dto = MerchantCreate::new(
            "HUF",
            "john@example.com",
            "https://example.com",
            "1234567897891234",
            MerchantCompany::new("HU"),
        );
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currency": "HUF",
                "email": "john@example.com",
                "website": "https://example.com",
                "descriptor": "1234567897891234",
                "company": {"country": "HU"}
            })
        );
    }

    #[test]
    fn merchant_create_with_optional_fields() {
        let dto = MerchantCreate::new(
            "DKK",
            "shop@example.com",
            "https://shop.example.com",
            "SHOP",
            MerchantCompany::new("DK").number("12345678"),
        )
        .name("Shop")
        .test(true)
        .bank(MerchantBank {
            iban: Some("DK5000400440116243".to_owned()),
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["name"], "Shop");
        assert_eq!(json["test"], true);
        assert_eq!(json["company"]["number"], "12345678");
        assert_eq!(json["bank"]["iban"], "DK5000400440116243");
    }

    #[test]
    fn empty_update_is_empty_object() {
        let json = serde_json::to_string(&MerchantUpdate::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn partial_update_sends_only_set_fields() {
        let update = MerchantUpdate::new().descriptor("NotNumbers");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"descriptor": "NotNumbers"}));
    }
}
