//! Verification API sub-client: start a verification, report the received
//! code, and query verification status. Requests are application-signed.

use crate::client::Error;
use crate::client::dispatch::Dispatcher;
use crate::transport::http::HttpMethod;
use crate::transport::verification::{
    ReportVerificationRequest, StartVerificationRequest, StartVerificationResponse,
    VerificationReport,
};

pub struct VerificationClient {
    dispatcher: Dispatcher,
    base_url: String,
}

impl VerificationClient {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: String) -> Self {
        Self {
            dispatcher,
            base_url,
        }
    }

    fn verifications_url(&self) -> String {
        format!("{}/verification/v1/verifications", self.base_url)
    }

    /// Start a verification for an identity.
    pub async fn start(
        &self,
        request: &StartVerificationRequest,
    ) -> Result<StartVerificationResponse, Error> {
        self.dispatcher
            .request_with(HttpMethod::Post, &self.verifications_url(), request)
            .await
    }

    /// Report the received code for the identity that is being verified.
    pub async fn report_by_identity(
        &self,
        endpoint: &str,
        request: &ReportVerificationRequest,
    ) -> Result<VerificationReport, Error> {
        let url = format!("{}/number/{}", self.verifications_url(), endpoint);
        self.dispatcher
            .request_with(HttpMethod::Put, &url, request)
            .await
    }

    /// Report the received code for a verification id.
    pub async fn report_by_id(
        &self,
        id: &str,
        request: &ReportVerificationRequest,
    ) -> Result<VerificationReport, Error> {
        let url = format!("{}/id/{}", self.verifications_url(), id);
        self.dispatcher
            .request_with(HttpMethod::Put, &url, request)
            .await
    }

    /// Query the current status of a verification by id.
    pub async fn status_by_id(&self, id: &str) -> Result<VerificationReport, Error> {
        let url = format!("{}/id/{}", self.verifications_url(), id);
        self.dispatcher.request(HttpMethod::Get, &url).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::{ApplicationSigner, Authenticator, TIMESTAMP_HEADER};
    use crate::clock::MockClock;
    use crate::domain::{AppKey, AppSecret};
    use crate::transport::http::fake::{FakeTransport, request_header};
    use crate::transport::verification::{
        Identity, SmsReportPayload, VerificationMethod, VerificationStatus,
    };

    const APP_KEY: &str = "669E367E-6BBA-48AB-AF15-266871C28135";
    const APP_SECRET: &str = "BeIukql3pTKJ8RGL5zo0DA==";

    fn signer() -> ApplicationSigner {
        ApplicationSigner::new(
            AppKey::new(APP_KEY).unwrap(),
            AppSecret::new(APP_SECRET).unwrap(),
        )
    }

    fn client(transport: &FakeTransport) -> VerificationClient {
        VerificationClient::new(
            Dispatcher {
                http: Arc::new(transport.clone()),
                auth: Arc::new(Authenticator::Signed(signer())),
                clock: Arc::new(MockClock::at("2014-09-24T10:59:41Z")),
            },
            "https://verification.example.invalid".to_owned(),
        )
    }

    #[tokio::test]
    async fn start_sends_a_signed_request() {
        let transport =
            FakeTransport::scripted([(200, r#"{"id": "ver-1", "method": "sms"}"#)]);
        let client = client(&transport);

        let request = StartVerificationRequest {
            identity: Identity::number("+46700000000"),
            method: VerificationMethod::Sms,
            reference: None,
            custom: None,
        };
        let response = client.start(&request).await.unwrap();
        assert_eq!(response.id, "ver-1");
        assert_eq!(response.method, VerificationMethod::Sms);

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "https://verification.example.invalid/verification/v1/verifications"
        );
        assert_eq!(
            request_header(&requests[0], TIMESTAMP_HEADER),
            Some("2014-09-24T10:59:41Z")
        );

        // The header must be exactly what the signer computes over the sent
        // body, path, and frozen timestamp.
        let body = serde_json::to_vec(&request).unwrap();
        let expected = signer().authorization_header(
            &body,
            "POST",
            "/verification/v1/verifications",
            "x-timestamp:2014-09-24T10:59:41Z",
            "application/json",
        );
        assert_eq!(
            request_header(&requests[0], "authorization"),
            Some(expected.as_str())
        );
    }

    #[tokio::test]
    async fn report_by_identity_puts_to_the_number_scoped_url() {
        let transport = FakeTransport::scripted([(
            200,
            r#"{"id": "ver-1", "method": "sms", "status": "SUCCESSFUL"}"#,
        )]);
        let client = client(&transport);

        let request = ReportVerificationRequest::Sms {
            sms: SmsReportPayload {
                code: "1234".to_owned(),
            },
        };
        let report = client
            .report_by_identity("+46700000000", &request)
            .await
            .unwrap();
        assert_eq!(report.status(), VerificationStatus::Successful);

        let requests = transport.requests();
        assert!(
            requests[0]
                .url
                .ends_with("/verification/v1/verifications/number/+46700000000")
        );
    }

    #[tokio::test]
    async fn status_by_id_signs_a_bodyless_get() {
        let transport = FakeTransport::scripted([(
            200,
            r#"{"id": "ver-1", "method": "flashcall", "status": "PENDING"}"#,
        )]);
        let client = client(&transport);

        let report = client.status_by_id("ver-1").await.unwrap();
        assert_eq!(report.status(), VerificationStatus::Pending);

        let requests = transport.requests();
        let expected = signer().authorization_header(
            b"",
            "GET",
            "/verification/v1/verifications/id/ver-1",
            "x-timestamp:2014-09-24T10:59:41Z",
            "",
        );
        assert_eq!(
            request_header(&requests[0], "authorization"),
            Some(expected.as_str())
        );
    }
}
