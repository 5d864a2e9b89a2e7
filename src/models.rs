//! Data models for Paylike API resources.
//!
//! Response types are immutable snapshots of server state. Request types
//! omit every optional field the caller did not set, so partial updates
//! never blank out values on the server.

mod app;
mod card;
mod enums;
mod ids;
mod line;
mod merchant;
mod transaction;
mod user;

pub use app::{App, AppCreate, AppGrant, Identity};
pub use card::{Card, CardCreate, CardSummary};
pub use chrono::{DateTime, Utc};
pub use enums::{CardScheme, TrailKind};
pub use ids::{AppId, CardId, LineId, MerchantId, TransactionId, UserId};
pub use line::Line;
pub use merchant::{
    Amount, Merchant, MerchantBank, MerchantClaim, MerchantCompany, MerchantCreate,
    MerchantPricing, MerchantTds, MerchantTransfer, MerchantUpdate, Pricing,
};
pub use transaction::{
    CustomData, Dispute, TrailFee, Transaction, TransactionAdjustment, TransactionCreate,
    TransactionTrail,
};
pub use user::{Invitation, User, UserInvite, UserReference};
