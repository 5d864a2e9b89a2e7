//! Newtype wrappers for Paylike resource identifiers.
//!
//! Paylike identifies every resource with an opaque hex string. Wrapping
//! each kind in its own type keeps a merchant ID from being passed where
//! a transaction ID is expected.

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapping a `String`.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from the given string.
            #[inline]
            #[must_use]
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            /// Returns a reference to the inner string.
            #[inline]
            #[must_use]
            pub fn as_inner(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id! {
    /// Identifier of an application (API consumer).
    AppId
}

define_string_id! {
    /// Identifier of a merchant account.
    MerchantId
}

define_string_id! {
    /// Identifier of a user with merchant access.
    UserId
}

define_string_id! {
    /// Identifier of a balance-history line.
    LineId
}

define_string_id! {
    /// Identifier of a transaction or prior authorization.
    TransactionId
}

define_string_id! {
    /// Identifier of a saved card.
    CardId
}
