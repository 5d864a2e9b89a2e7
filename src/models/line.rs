//! Balance-history line model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LineId, MerchantId, TransactionId};

/// One entry in a merchant's balance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Unique identifier.
    pub id: LineId,
    /// Merchant whose balance changed.
    pub merchant_id: MerchantId,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    /// Signed change in minor units; negative for refunds and payouts.
    pub amount: i64,
    /// Merchant balance after this line, in minor units.
    pub balance: i64,
    /// Fee withheld, in minor units.
    pub fee: i64,
    /// Transaction that caused the line, absent for transfers.
    #[serde(default)]
    pub transaction_id: Option<TransactionId>,
    /// Free-text description.
    #[serde(default)]
    pub text: Option<String>,
    /// Whether this line is a refund.
    #[serde(default)]
    pub refund: bool,
    /// Whether this line belongs to test mode.
    #[serde(default)]
    pub test: bool,
}
