//! Rust client library for the Paylike payment API.
//!
//! This crate provides a typed, blocking client for the
//! [Paylike](https://github.com/paylike/api-docs) REST API: applications,
//! merchants and their access control, balance history, transactions and
//! saved cards.
//!
//! ```no_run
//! use paylike_rs::PaylikeClient;
//! use paylike_rs::models::{MerchantCompany, MerchantCreate};
//!
//! # fn main() -> paylike_rs::error::Result<()> {
//! let client = PaylikeClient::new("my-api-key")?;
//! let app = client.create_app_with_name("Shop backend")?;
//! let request = MerchantCreate::new(
//!     "DKK",
//!     "shop@example.com",
//!     "https://shop.example.com",
//!     "SHOP",
//!     MerchantCompany::new("DK"),
//! );
//! let _merchant = client
//!     .with_api_key(app.key.unwrap_or_default())
//!     .create_merchant(&request)?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod client;
pub mod error;
pub mod models;

#[cfg(feature = "blocking")]
pub use client::{PaylikeClient, PaylikeClientBuilder};
pub use error::{PaylikeError, Result};
