//! Blocking HTTP client for the Paylike API.
//!
//! Every endpoint method maps its typed input to a verb, a path and an
//! optional JSON body, then hands off to a single request executor that
//! authenticates, sends, checks the status and decodes the response.
//!
//! Single resources arrive wrapped in an envelope keyed by the resource
//! name (`{"merchant": {...}}`) while collections arrive as bare arrays.
//! Each method states which shape it expects.

use std::collections::HashMap;

use reqwest::Method;
use reqwest::blocking::Response;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{PaylikeError, Result};
use crate::models::{
    App, AppCreate, AppGrant, AppId, Card, CardCreate, CardId, Identity, Invitation, Line,
    Merchant, MerchantCreate, MerchantId, MerchantUpdate, Transaction, TransactionAdjustment,
    TransactionCreate, TransactionId, User, UserId, UserInvite,
};

/// Base URL for the Paylike API.
const DEFAULT_BASE_URL: &str = "https://api.paylike.io";

/// Environment variable read by [`PaylikeClientBuilder::api_key_from_env`].
pub const API_KEY_ENV: &str = "PAYLIKE_API_KEY";

/// Builder for constructing a [`PaylikeClient`].
#[derive(Debug, Default)]
pub struct PaylikeClientBuilder {
    /// API key used as the Basic Auth password.
    api_key: Option<SecretString>,
    /// Base URL override (for testing).
    base_url: Option<String>,
}

impl PaylikeClientBuilder {
    /// Sets the API key.
    #[inline]
    #[must_use]
    pub fn api_key<T: Into<String>>(mut self, api_key: T) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Reads the API key from the `PAYLIKE_API_KEY` environment variable.
    ///
    /// Leaves any previously set key in place when the variable is unset.
    #[inline]
    #[must_use]
    pub fn api_key_from_env(self) -> Self {
        self.api_key_from_var(API_KEY_ENV)
    }

    /// Reads the API key from the environment variable `name`, keeping the
    /// current key when it is unset.
    fn api_key_from_var(mut self, name: &str) -> Self {
        if let Ok(api_key) = std::env::var(name) {
            self.api_key = Some(SecretString::from(api_key));
        }
        self
    }

    /// Overrides the base URL (useful for testing with a mock server).
    #[inline]
    #[must_use]
    pub fn base_url<T: Into<String>>(mut self, url: T) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`PaylikeError::MissingApiKey`] if no key was provided,
    /// [`PaylikeError::InvalidUrl`] if the base URL cannot be parsed, and
    /// [`PaylikeError::Transport`] if the HTTP client fails to build.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn build(self) -> Result<PaylikeClient> {
        let api_key = self.api_key.ok_or(PaylikeError::MissingApiKey)?;
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        tracing::debug!(base_url = %base_url, "building client");
        let http = reqwest::blocking::Client::builder().build()?;

        Ok(PaylikeClient {
            http,
            api_key,
            base_url,
        })
    }
}

/// Blocking client for the Paylike API.
///
/// The client holds no mutable state. Swapping the credential with
/// [`PaylikeClient::with_api_key`] yields a new handle and leaves this one
/// untouched, so handles can be shared freely between threads.
#[derive(Debug)]
pub struct PaylikeClient {
    /// Underlying HTTP client.
    http: reqwest::blocking::Client,
    /// API key sent as the Basic Auth password.
    api_key: SecretString,
    /// API base URL.
    base_url: Url,
}

impl PaylikeClient {
    /// Creates a new builder for configuring the client.
    #[inline]
    #[must_use]
    pub fn builder() -> PaylikeClientBuilder {
        PaylikeClientBuilder::default()
    }

    /// Creates a client for the production API with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`PaylikeError::Transport`] if the HTTP client fails to build.
    #[inline]
    pub fn new<T: Into<String>>(api_key: T) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Returns a handle that authenticates with `api_key` and shares this
    /// client's connection pool and base URL.
    #[inline]
    #[must_use]
    pub fn with_api_key<T: Into<String>>(&self, api_key: T) -> Self {
        Self {
            http: self.http.clone(),
            api_key: SecretString::from(api_key.into()),
            base_url: self.base_url.clone(),
        }
    }

    /// Returns the base URL requests are sent to.
    #[inline]
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Creates an unnamed application.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn create_app(&self) -> Result<App> {
        self.post_app(&AppCreate::new())
    }

    /// Creates an application with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn create_app_with_name<T: Into<String>>(&self, name: T) -> Result<App> {
        self.post_app(&AppCreate::new().name(name))
    }

    /// Fetches the application behind the current API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn current_identity(&self) -> Result<Identity> {
        let url = self.endpoint(&["me"])?;
        self.fetch_one(Method::GET, url, None, "identity")
    }

    /// Creates a merchant owned by the current application.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn create_merchant(&self, request: &MerchantCreate) -> Result<Merchant> {
        let url = self.endpoint(&["merchants"])?;
        self.fetch_one(Method::POST, url, encode(request)?, "merchant")
    }

    /// Fetches a merchant by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id))]
    pub fn get_merchant(&self, merchant_id: &MerchantId) -> Result<Merchant> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner()])?;
        self.fetch_one(Method::GET, url, None, "merchant")
    }

    /// Lists up to `limit` merchants owned by an application.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(app_id = %app_id, limit = limit))]
    pub fn list_merchants(&self, app_id: &AppId, limit: u32) -> Result<Vec<Merchant>> {
        let url = self.endpoint(&["identities", app_id.as_inner(), "merchants"])?;
        self.fetch_list(url, limit)
    }

    /// Updates the name, email or descriptor of a merchant.
    ///
    /// Fields not set on `update` keep their current values.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id))]
    pub fn update_merchant(&self, merchant_id: &MerchantId, update: &MerchantUpdate) -> Result<()> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner()])?;
        self.command(Method::PUT, url, encode(update)?)
    }

    /// Invites a user to a merchant by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id))]
    pub fn invite_user<T: Into<String>>(
        &self,
        merchant_id: &MerchantId,
        email: T,
    ) -> Result<Invitation> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner(), "users"])?;
        let invite = UserInvite {
            email: email.into(),
        };
        // Invitations are the one single-object response without an envelope.
        self.execute(Method::POST, url, encode(&invite)?)?
            .ok_or(PaylikeError::MissingResource { resource: "user" })
    }

    /// Lists up to `limit` users with access to a merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id, limit = limit))]
    pub fn list_users(&self, merchant_id: &MerchantId, limit: u32) -> Result<Vec<User>> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner(), "users"])?;
        self.fetch_list(url, limit)
    }

    /// Revokes a user's access to a merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id, user_id = %user_id))]
    pub fn revoke_user(&self, merchant_id: &MerchantId, user_id: &UserId) -> Result<()> {
        let url = self.endpoint(&[
            "merchants",
            merchant_id.as_inner(),
            "users",
            user_id.as_inner(),
        ])?;
        self.command(Method::DELETE, url, None)
    }

    /// Grants an application access to a merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id, app_id = %app_id))]
    pub fn add_app(&self, merchant_id: &MerchantId, app_id: &AppId) -> Result<()> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner(), "apps"])?;
        let grant = AppGrant {
            app_id: app_id.clone(),
        };
        self.command(Method::POST, url, encode(&grant)?)
    }

    /// Lists up to `limit` applications with access to a merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id, limit = limit))]
    pub fn list_apps(&self, merchant_id: &MerchantId, limit: u32) -> Result<Vec<App>> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner(), "apps"])?;
        self.fetch_list(url, limit)
    }

    /// Revokes an application's access to a merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id, app_id = %app_id))]
    pub fn revoke_app(&self, merchant_id: &MerchantId, app_id: &AppId) -> Result<()> {
        let url = self.endpoint(&[
            "merchants",
            merchant_id.as_inner(),
            "apps",
            app_id.as_inner(),
        ])?;
        self.command(Method::DELETE, url, None)
    }

    /// Lists up to `limit` balance-history lines of a merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id, limit = limit))]
    pub fn list_lines(&self, merchant_id: &MerchantId, limit: u32) -> Result<Vec<Line>> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner(), "lines"])?;
        self.fetch_list(url, limit)
    }

    /// Creates a transaction charging the card behind a prior
    /// authorization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id))]
    pub fn create_transaction(
        &self,
        merchant_id: &MerchantId,
        request: &TransactionCreate,
    ) -> Result<Transaction> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner(), "transactions"])?;
        self.fetch_one(Method::POST, url, encode(request)?, "transaction")
    }

    /// Lists up to `limit` transactions of a merchant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id, limit = limit))]
    pub fn list_transactions(
        &self,
        merchant_id: &MerchantId,
        limit: u32,
    ) -> Result<Vec<Transaction>> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner(), "transactions"])?;
        self.fetch_list(url, limit)
    }

    /// Fetches a transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(transaction_id = %transaction_id))]
    pub fn get_transaction(&self, transaction_id: &TransactionId) -> Result<Transaction> {
        let url = self.endpoint(&["transactions", transaction_id.as_inner()])?;
        self.fetch_one(Method::GET, url, None, "transaction")
    }

    /// Captures part or all of the reserved amount.
    ///
    /// Returns the updated transaction with the capture appended to its
    /// trail.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(transaction_id = %transaction_id, amount = request.amount))]
    pub fn capture_transaction(
        &self,
        transaction_id: &TransactionId,
        request: &TransactionAdjustment,
    ) -> Result<Transaction> {
        self.adjust(transaction_id, "captures", request)
    }

    /// Refunds part or all of the captured amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(transaction_id = %transaction_id, amount = request.amount))]
    pub fn refund_transaction(
        &self,
        transaction_id: &TransactionId,
        request: &TransactionAdjustment,
    ) -> Result<Transaction> {
        self.adjust(transaction_id, "refunds", request)
    }

    /// Releases part or all of the reserved amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(transaction_id = %transaction_id, amount = request.amount))]
    pub fn void_transaction(
        &self,
        transaction_id: &TransactionId,
        request: &TransactionAdjustment,
    ) -> Result<Transaction> {
        self.adjust(transaction_id, "voids", request)
    }

    /// Saves the card used in a prior transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(merchant_id = %merchant_id))]
    pub fn save_card(&self, merchant_id: &MerchantId, request: &CardCreate) -> Result<Card> {
        let url = self.endpoint(&["merchants", merchant_id.as_inner(), "cards"])?;
        self.fetch_one(Method::POST, url, encode(request)?, "card")
    }

    /// Fetches a saved card by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the response cannot be decoded.
    #[inline]
    #[tracing::instrument(skip_all, fields(card_id = %card_id))]
    pub fn get_card(&self, card_id: &CardId) -> Result<Card> {
        let url = self.endpoint(&["cards", card_id.as_inner()])?;
        self.fetch_one(Method::GET, url, None, "card")
    }

    /// Sends an application creation request.
    fn post_app(&self, request: &AppCreate) -> Result<App> {
        let url = self.endpoint(&["apps"])?;
        self.fetch_one(Method::POST, url, encode(request)?, "app")
    }

    /// Posts a capture, refund or void to the given transaction
    /// sub-collection.
    fn adjust(
        &self,
        transaction_id: &TransactionId,
        action: &str,
        request: &TransactionAdjustment,
    ) -> Result<Transaction> {
        let url = self.endpoint(&["transactions", transaction_id.as_inner(), action])?;
        self.fetch_one(Method::POST, url, encode(request)?, "transaction")
    }

    /// Builds an endpoint URL, percent-encoding each segment.
    ///
    /// Empty and dot segments are rejected: URL normalization would drop
    /// them (even percent-encoded) and address a different resource.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(PaylikeError::InvalidIdentifier {
                identifier: (*segment).to_owned(),
            });
        }
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            #[expect(
                unused_results,
                reason = "`PathSegmentsMut` setters return `&mut Self` for chaining"
            )]
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Executes a request whose response is a single resource wrapped in an
    /// envelope under `resource`.
    fn fetch_one<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        resource: &'static str,
    ) -> Result<T> {
        let envelope: Option<HashMap<String, T>> = self.execute(method, url, body)?;
        envelope
            .and_then(|mut fields| fields.remove(resource))
            .ok_or(PaylikeError::MissingResource { resource })
    }

    /// Executes a GET whose response is a bare array, capped at `limit`.
    fn fetch_list<T: DeserializeOwned>(&self, mut url: Url, limit: u32) -> Result<Vec<T>> {
        url.set_query(Some(&format!("limit={limit}")));
        let mut records: Vec<T> = self.execute(Method::GET, url, None)?.unwrap_or_default();
        records.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(records)
    }

    /// Executes a request and discards the response body.
    ///
    /// The body is still read to the end so the connection can be reused.
    fn command(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<()> {
        let response = self.send(method, url, body)?;
        let bytes = response.bytes()?;
        tracing::trace!(len = bytes.len(), "discarded response body");
        Ok(())
    }

    /// Executes a request and decodes the response body.
    ///
    /// Returns `Ok(None)` when the body is empty.
    fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Option<T>> {
        let response = self.send(method, url, body)?;
        let bytes = response.bytes()?;
        tracing::trace!(body_len = bytes.len(), "parsing response body");
        decode(&bytes)
    }

    /// Sends an authenticated request and rejects non-success statuses.
    fn send(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<Response> {
        tracing::debug!(method = %method, url = %url, "sending request");
        let mut request = self
            .http
            .request(method, url)
            .basic_auth("", Some(self.api_key.expose_secret()));
        if let Some(bytes) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }
        let response = request.send()?;

        let status = response.status();
        tracing::debug!(status = %status, "received response");
        if status.is_success() {
            Ok(response)
        } else {
            let message = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_owned());
            tracing::debug!(status = status.as_u16(), message = %message, "API error");
            Err(PaylikeError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Serializes a request DTO into a JSON body.
fn encode<T: Serialize>(value: &T) -> Result<Option<Vec<u8>>> {
    serde_json::to_vec(value)
        .map(Some)
        .map_err(PaylikeError::Encode)
}

/// Decodes a JSON body, treating an empty or blank body as no value.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|source| PaylikeError::Decode {
            source,
            body: body.to_vec(),
        })
}
