//! Wire payloads of the OAuth2 token endpoint.

use serde::Deserialize;

/// Success body of `POST /oauth2/token`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenJsonResponse {
    pub access_token: String,
    pub expires_in: i64,
}

/// Error body of the token endpoint. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TokenErrorJsonResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_verbose: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error_hint: Option<String>,
}

pub(crate) fn decode_token_response(json: &str) -> Result<TokenJsonResponse, serde_json::Error> {
    serde_json::from_str(json)
}

/// Best-effort decode of a token-endpoint error body; tolerates anything.
pub(crate) fn decode_token_error(json: &str) -> TokenErrorJsonResponse {
    serde_json::from_str(json).unwrap_or_default()
}
