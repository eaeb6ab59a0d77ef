use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// OAuth client-credentials access key id.
///
/// Invariant: non-empty after trimming.
pub struct KeyId(String);

impl KeyId {
    pub const FIELD: &'static str = "key_id";

    /// Create a validated [`KeyId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// OAuth client-credentials access key secret.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct KeySecret(String);

impl KeySecret {
    pub const FIELD: &'static str = "key_secret";

    /// Create a validated [`KeySecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Application key used by signed requests (Verification / Voice).
///
/// Invariant: non-empty after trimming.
pub struct AppKey(String);

impl AppKey {
    pub const FIELD: &'static str = "app_key";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Application secret used as the HMAC key of signed requests.
///
/// Invariant: the value is base64; it is decoded once at construction and the
/// decoded bytes are what the signer keys HMAC-SHA256 with.
pub struct AppSecret {
    value: String,
    key: Vec<u8>,
}

impl AppSecret {
    pub const FIELD: &'static str = "app_secret";

    /// Create a validated [`AppSecret`], decoding the base64 key material.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let key = BASE64
            .decode(trimmed)
            .map_err(|_| ValidationError::InvalidBase64 { field: Self::FIELD })?;
        Ok(Self {
            value: trimmed.to_owned(),
            key,
        })
    }

    /// Borrow the secret as provided (base64 text).
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Borrow the decoded HMAC key bytes.
    pub fn key_bytes(&self) -> &[u8] {
        &self.key
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Project identifier scoping the SMS and Numbers URL spaces.
///
/// Invariant: non-empty after trimming.
pub struct ProjectId(String);

impl ProjectId {
    pub const FIELD: &'static str = "project_id";

    /// Create a validated [`ProjectId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated project id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pre-issued bearer token supplied by the caller instead of OAuth.
///
/// Invariant: non-empty after trimming.
pub struct BearerToken(String);

impl BearerToken {
    pub const FIELD: &'static str = "bearer_token";

    /// Create a validated [`BearerToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Username of a static basic-auth pair.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Password of a static basic-auth pair.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
