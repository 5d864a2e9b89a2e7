//! Card models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CardId, CardScheme, MerchantId, TransactionId};

/// Non-sensitive summary of a payment card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    /// Bank identification number (first six digits).
    pub bin: String,
    /// Last four digits.
    pub last4: String,
    /// Expiry, as the last moment the card is valid.
    pub expiry: DateTime<Utc>,
    /// Card network.
    pub scheme: CardScheme,
}

/// A saved card reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,
    /// Merchant the card is saved under.
    pub merchant_id: MerchantId,
    /// Transaction the card was derived from.
    #[serde(default)]
    pub transaction_id: Option<TransactionId>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Card details.
    #[serde(flatten)]
    pub summary: CardSummary,
    /// Merchant notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for saving a card from a prior transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCreate {
    /// Transaction whose card is saved.
    pub transaction_id: TransactionId,
    /// Optional merchant notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CardCreate {
    /// Creates a request saving the card used in `transaction_id`.
    #[inline]
    #[must_use]
    pub const fn new(transaction_id: TransactionId) -> Self {
        Self {
            transaction_id,
            notes: None,
        }
    }

    /// Attaches merchant notes.
    #[inline]
    #[must_use]
    pub fn notes<T: Into<String>>(mut self, notes: T) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_card_with_flattened_summary() {
        let json = r#"{
            "id": "card-1",
            "merchantId": "merchant-1",
            "transactionId": "tx-1",
            "created": "2018-03-02T09:15:00.000Z",
            "bin": "410000",
            "last4": "0000",
            "expiry": "2025-11-30T23:59:59.999Z",
            "scheme": "visa"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, CardId::from("card-1"));
        assert_eq!(card.summary.bin, "410000");
        assert_eq!(card.summary.last4, "0000");
        assert_eq!(card.summary.scheme, CardScheme::Visa);
        assert!(card.notes.is_none());
    }

    #[test]
    fn card_without_summary_fails() {
        let json = r#"{
            "id": "card-1",
            "merchantId": "merchant-1",
            "created": "2018-03-02T09:15:00.000Z"
        }"#;
        assert!(serde_json::from_str::<Card>(json).is_err());
    }

    #[test]
    fn card_create_omits_notes() {
        let dto = CardCreate::new(TransactionId::from("tx-1"));
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"transactionId": "tx-1"}));
    }

    #[test]
    fn card_create_with_notes() {
        let dto = CardCreate::new(TransactionId::from("tx-1")).notes("vip");
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"transactionId": "tx-1", "notes": "vip"}));
    }
}
