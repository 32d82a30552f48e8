//! Credential wrappers passed explicitly into the gateway.

use std::fmt;

use crate::error::ExportError;

/// Trello developer API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates that the key is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingApiKey`] when the supplied string is blank.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ExportError> {
        let trimmed = key.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExportError::MissingApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the key value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

/// Member token authorising access to the account's boards.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingToken`] when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ExportError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExportError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

// Secrets never reach log output through `{:?}`.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Key and token pair used to authenticate every request.
///
/// Constructed once at program entry and handed to
/// [`TrelloGateway::new`](super::TrelloGateway::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrelloCredentials {
    key: ApiKey,
    token: ApiToken,
}

impl TrelloCredentials {
    /// Pairs a validated key with a validated token.
    #[must_use]
    pub const fn new(key: ApiKey, token: ApiToken) -> Self {
        Self { key, token }
    }

    /// Validates raw key and token strings.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingApiKey`] or [`ExportError::MissingToken`]
    /// when either value is blank.
    pub fn from_raw(key: &str, token: &str) -> Result<Self, ExportError> {
        Ok(Self::new(ApiKey::new(key)?, ApiToken::new(token)?))
    }

    /// Borrow the API key.
    #[must_use]
    pub const fn key(&self) -> &ApiKey {
        &self.key
    }

    /// Borrow the token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }
}
