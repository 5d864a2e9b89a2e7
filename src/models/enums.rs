//! Enumeration types for constrained API values.

use serde::{Deserialize, Serialize};

/// Card network of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardScheme {
    /// Visa.
    Visa,
    /// Mastercard.
    Mastercard,
    /// Maestro.
    Maestro,
    /// Any scheme this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Kind of event recorded by a transaction trail entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailKind {
    /// Funds were captured.
    Capture,
    /// Captured funds were refunded.
    Refund,
    /// Reserved funds were released.
    Void,
    /// An entry with none of the capture, refund or void flags, such as a
    /// dispute.
    Other,
}
