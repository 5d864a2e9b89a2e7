//! Users with access to a merchant.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A person with access to a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Email address the user was invited with.
    pub email: String,
}

/// Reference to a user returned by an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReference {
    /// User identifier.
    pub id: UserId,
}

/// Result of inviting a user to a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    /// The invited user.
    pub user: UserReference,
    /// Whether the email already belonged to a registered user.
    pub is_member: bool,
}

/// Request body for inviting a user to a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvite {
    /// Email address to invite.
    pub email: String,
}
