//! Verification wire shapes (snake_case field names on the wire).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Identity kind; the platform currently only documents `number`.
    #[serde(rename = "type")]
    pub kind: String,
    pub endpoint: String,
}

impl Identity {
    /// Phone-number identity, the only kind the platform documents.
    pub fn number(endpoint: impl Into<String>) -> Self {
        Self {
            kind: "number".to_owned(),
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    Sms,
    Flashcall,
    Callout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartVerificationRequest {
    pub identity: Identity,
    pub method: VerificationMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StartVerificationResponse {
    pub id: String,
    pub method: VerificationMethod,
    #[serde(default)]
    pub sms: Option<SmsInitiation>,
    #[serde(default)]
    pub flashcall: Option<FlashcallInitiation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SmsInitiation {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub interception_timeout: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlashcallInitiation {
    #[serde(default)]
    pub cli_filter: Option<String>,
    #[serde(default)]
    pub interception_timeout: Option<u64>,
}

/// Code submitted to finish a verification, shaped by the chosen method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ReportVerificationRequest {
    Sms { sms: SmsReportPayload },
    Flashcall { flashcall: FlashcallReportPayload },
    Callout { callout: CalloutReportPayload },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsReportPayload {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcallReportPayload {
    pub cli: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalloutReportPayload {
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    Pending,
    Successful,
    Fail,
    Denied,
    Aborted,
    Error,
}

/// Verification report, discriminated by the wire `method` tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum VerificationReport {
    Sms {
        id: String,
        status: VerificationStatus,
        #[serde(default)]
        reason: Option<String>,
    },
    Flashcall {
        id: String,
        status: VerificationStatus,
        #[serde(default)]
        reason: Option<String>,
        #[serde(default)]
        call_complete: Option<bool>,
    },
    Callout {
        id: String,
        status: VerificationStatus,
        #[serde(default)]
        reason: Option<String>,
        #[serde(default)]
        call_complete: Option<bool>,
    },
}

impl VerificationReport {
    /// Verification id regardless of method.
    pub fn id(&self) -> &str {
        match self {
            Self::Sms { id, .. } | Self::Flashcall { id, .. } | Self::Callout { id, .. } => id,
        }
    }

    /// Final status regardless of method.
    pub fn status(&self) -> VerificationStatus {
        match self {
            Self::Sms { status, .. }
            | Self::Flashcall { status, .. }
            | Self::Callout { status, .. } => *status,
        }
    }
}
