//! Application and identity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AppId;

/// A registered API consumer.
///
/// The secret `key` is only returned when the application is created;
/// applications listed under a merchant carry no key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// Unique identifier.
    pub id: AppId,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Secret API key of the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// The application behind the credential in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Application identifier.
    pub id: AppId,
    /// Application name, if one was given at creation.
    #[serde(default)]
    pub name: Option<String>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
}

/// Request body for creating an application.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCreate {
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AppCreate {
    /// Creates an empty request; the application will be unnamed.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application name.
    #[inline]
    #[must_use]
    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Request body for granting an application access to a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppGrant {
    /// Application receiving access.
    pub app_id: AppId,
}
