//! Decoding of the generic API error body shared by every product API.
//!
//! The platform emits either a nested error object
//! (`{"error": {"code": ..., "message": ..., "status": ..., "details": [...]}}`)
//! or the flat SMS-style pair (`{"code": ..., "text": ...}`), sometimes both.
//! The nested object always wins when both are present.

use serde::Deserialize;
use serde::de::Error as DeError;
use serde_json::value::RawValue;

/// Structured fields recovered from a failed response body.
///
/// All fields are optional: the platform is not consistent about error bodies
/// and an unparsable body still produces an API error (with everything empty).
#[derive(Debug, Default)]
pub struct ApiErrorDetails {
    /// Numeric or symbolic error code, normalized to its JSON token text.
    pub code: Option<String>,
    /// Human-readable error message.
    pub message: Option<String>,
    /// Symbolic status such as `NOT_FOUND`.
    pub status: Option<String>,
    /// Raw JSON error-detail nodes, passed through unparsed.
    pub details: Vec<Box<RawValue>>,
}

impl ApiErrorDetails {
    /// Single-line message used by error displays.
    pub(crate) fn combined_message(&self) -> String {
        match (&self.message, &self.code) {
            (Some(message), _) => message.clone(),
            (None, Some(code)) => format!("error code {code}"),
            (None, None) => "no error details in response body".to_owned(),
        }
    }
}

/// Error code appearing as either a JSON string or a JSON number.
///
/// The raw token is preserved for numbers so `404` stays `"404"` without any
/// reformatting drift.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TransportCode(String);

impl<'de> Deserialize<'de> for TransportCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected error code to be JSON string or number",
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NestedError {
    #[serde(default)]
    code: Option<TransportCode>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<Box<RawValue>>,
}

#[derive(Debug, Deserialize)]
struct ErrorJsonBody {
    #[serde(default)]
    error: Option<NestedError>,
    #[serde(default)]
    code: Option<TransportCode>,
    #[serde(default)]
    text: Option<String>,
}

/// Best-effort decode of a failed response body.
///
/// Never fails: anything that is not the documented error shape degrades to
/// an empty [`ApiErrorDetails`].
pub(crate) fn decode_error_body(body: &str) -> ApiErrorDetails {
    let Ok(parsed) = serde_json::from_str::<ErrorJsonBody>(body) else {
        return ApiErrorDetails::default();
    };

    if let Some(nested) = parsed.error {
        return ApiErrorDetails {
            code: nested.code.map(|code| code.0),
            message: nested.message,
            status: nested.status,
            details: nested.details,
        };
    }

    ApiErrorDetails {
        code: parsed.code.map(|code| code.0),
        message: parsed.text,
        status: None,
        details: Vec::new(),
    }
}
