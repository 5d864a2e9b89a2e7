//! Transaction model and the requests that move a transaction through its
//! lifecycle.
//!
//! The lifecycle itself (authorized, then captured, refunded or voided,
//! partially or fully) is enforced by Paylike; the client only requests
//! transitions and reflects the returned snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CardSummary, MerchantId, TrailKind, TransactionId};

/// Free-form data attached to a transaction by the merchant.
pub type CustomData = serde_json::Map<String, serde_json::Value>;

/// A payment and its lifecycle amounts.
///
/// All amounts are in minor units of [`Transaction::currency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Merchant owning the transaction.
    pub merchant_id: MerchantId,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Whether this transaction belongs to test mode.
    #[serde(default)]
    pub test: bool,
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    /// Authorized amount.
    pub amount: i64,
    /// Amount still reserved and available for capture or void.
    pub pending_amount: i64,
    /// Amount captured so far.
    pub captured_amount: i64,
    /// Amount refunded so far.
    pub refunded_amount: i64,
    /// Amount voided so far.
    pub voided_amount: i64,
    /// Amount under dispute.
    pub disputed_amount: i64,
    /// Statement descriptor.
    #[serde(default)]
    pub descriptor: Option<String>,
    /// Card used for the payment.
    pub card: CardSummary,
    /// Merchant-supplied custom data.
    #[serde(default)]
    pub custom: Option<CustomData>,
    /// Whether the authorization succeeded.
    pub successful: bool,
    /// Whether the authorization failed.
    pub error: bool,
    /// Capture, refund and void events in the order they happened.
    #[serde(default)]
    pub trail: Vec<TransactionTrail>,
}

/// One capture, refund or void event on a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTrail {
    /// Amount moved by the event.
    pub amount: i64,
    /// Fee charged for the event.
    pub fee: TrailFee,
    /// Change to the merchant balance.
    pub balance: i64,
    /// When the event happened.
    pub created: DateTime<Utc>,
    /// Statement descriptor supplied with the event.
    #[serde(default)]
    pub descriptor: Option<String>,
    /// Set on capture events.
    #[serde(default)]
    pub capture: bool,
    /// Set on refund events.
    #[serde(default)]
    pub refund: bool,
    /// Set on void events.
    #[serde(default)]
    pub void: bool,
    /// Dispute attached to the event.
    #[serde(default)]
    pub dispute: Option<Dispute>,
}

impl TransactionTrail {
    /// Returns the kind of event this entry records.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TrailKind {
        if self.capture {
            TrailKind::Capture
        } else if self.refund {
            TrailKind::Refund
        } else if self.void {
            TrailKind::Void
        } else {
            TrailKind::Other
        }
    }
}

/// Fee charged for a trail event, in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailFee {
    /// Flat part of the fee.
    pub flat: i64,
    /// Rate-based part of the fee.
    pub rate: i64,
}

/// Dispute raised against a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    /// Outcome; `None` while the dispute is open.
    #[serde(default)]
    pub won: Option<bool>,
}

/// Request body for creating a transaction from a prior authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCreate {
    /// Prior transaction whose card is charged.
    pub transaction_id: TransactionId,
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Statement descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    /// Free-form custom data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
}

impl TransactionCreate {
    /// Creates a request charging `amount` of `currency` against the card
    /// behind `transaction_id`.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(transaction_id: TransactionId, currency: T, amount: i64) -> Self {
        Self {
            transaction_id,
            currency: currency.into(),
            amount,
            descriptor: None,
            custom: None,
        }
    }

    /// Sets the statement descriptor.
    #[inline]
    #[must_use]
    pub fn descriptor<T: Into<String>>(mut self, descriptor: T) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }

    /// Attaches custom data.
    #[inline]
    #[must_use]
    pub fn custom(mut self, custom: CustomData) -> Self {
        self.custom = Some(custom);
        self
    }
}

/// Request body for a capture, refund or void.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAdjustment {
    /// Amount in minor units.
    pub amount: i64,
    /// Expected currency; the server rejects the request on mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Statement descriptor for this event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
}

impl TransactionAdjustment {
    /// Creates a request for `amount` minor units.
    #[inline]
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self {
            amount,
            currency: None,
            descriptor: None,
        }
    }

    /// Sets the currency used for verification.
    #[inline]
    #[must_use]
    pub fn currency<T: Into<String>>(mut self, currency: T) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the statement descriptor.
    #[inline]
    #[must_use]
    pub fn descriptor<T: Into<String>>(mut self, descriptor: T) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }
}
