//! Error types for the Paylike client library.

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PaylikeError>;

/// All errors that can occur when using the Paylike client.
#[derive(Debug, thiserror::Error)]
pub enum PaylikeError {
    /// The request never produced a response: DNS, connection, TLS or
    /// timeout failure, or the body could not be read. Nothing is retried.
    #[cfg(feature = "blocking")]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to decode response body: {source}")]
    Decode {
        /// Underlying parse failure.
        source: serde_json::Error,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response text.
        message: String,
    },

    /// A single-resource endpoint returned no body or an envelope without
    /// the expected key.
    #[error("response did not contain a `{resource}` object")]
    MissingResource {
        /// Envelope key that was expected.
        resource: &'static str,
    },

    /// The base URL or a derived endpoint URL is invalid.
    #[cfg(feature = "blocking")]
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An identifier cannot be sent as a URL path segment: it is empty or
    /// a dot segment that URL normalization would remove.
    #[error("identifier `{identifier}` cannot be used in a request path")]
    InvalidIdentifier {
        /// The rejected identifier.
        identifier: String,
    },

    /// The client was built without an API key.
    #[error("no API key was provided")]
    MissingApiKey,
}

impl PaylikeError {
    /// Consumes the error and returns the raw response body attached to a
    /// decode failure.
    #[inline]
    #[must_use]
    pub fn into_body(self) -> Option<Vec<u8>> {
        match self {
            Self::Decode { body, .. } => Some(body),
            #[cfg(feature = "blocking")]
            Self::Transport(_) | Self::InvalidUrl(_) => None,
            Self::Encode(_)
            | Self::Api { .. }
            | Self::MissingResource { .. }
            | Self::InvalidIdentifier { .. }
            | Self::MissingApiKey => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_keeps_body() {
        let source = serde_json::from_str::<String>("not json").unwrap_err();
        let err = PaylikeError::Decode {
            source,
            body: b"not json".to_vec(),
        };
        assert!(err.to_string().contains("failed to decode"));
        assert_eq!(err.into_body(), Some(b"not json".to_vec()));
    }

    #[test]
    fn encode_error_display() {
        let source = serde_json::from_str::<String>("{").unwrap_err();
        let err = PaylikeError::Encode(source);
        assert!(err.to_string().contains("failed to encode"));
        assert!(err.into_body().is_none());
    }

    #[test]
    fn api_error_display() {
        let err = PaylikeError::Api {
            status: 404,
            message: "not found".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn missing_resource_display() {
        let err = PaylikeError::MissingResource {
            resource: "merchant",
        };
        assert_eq!(err.to_string(), "response did not contain a `merchant` object");
    }

    #[test]
    fn invalid_identifier_display() {
        let err = PaylikeError::InvalidIdentifier {
            identifier: "..".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "identifier `..` cannot be used in a request path"
        );
    }

    #[test]
    fn missing_api_key_display() {
        assert!(PaylikeError::MissingApiKey.to_string().contains("API key"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaylikeError>();
    }
}
