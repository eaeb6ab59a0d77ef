//! SMS API sub-client: batch send/get/cancel, delivery feedback, and
//! auto-paginating batch listing (zero-based pages with a total count).

use serde::Serialize;

use crate::client::Error;
use crate::client::dispatch::Dispatcher;
use crate::domain::{PageStart, ProjectId, ValidationError, is_last_page};
use crate::transport::EmptyResponse;
use crate::transport::http::HttpMethod;
use crate::transport::sms::{Batch, BatchRequest, ListBatchesResponse};

const DEFAULT_PAGE_SIZE: u64 = 30;

pub struct SmsClient {
    dispatcher: Dispatcher,
    base_url: String,
    project_id: ProjectId,
}

impl SmsClient {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: String, project_id: ProjectId) -> Self {
        Self {
            dispatcher,
            base_url,
            project_id,
        }
    }

    fn batches_url(&self) -> String {
        format!(
            "{}/xms/v1/{}/batches",
            self.base_url,
            self.project_id.as_str()
        )
    }

    /// Submit a batch for delivery.
    pub async fn send_batch(&self, request: &BatchRequest) -> Result<Batch, Error> {
        self.dispatcher
            .request_with(HttpMethod::Post, &self.batches_url(), request)
            .await
    }

    /// Fetch one batch by id.
    pub async fn get_batch(&self, batch_id: &str) -> Result<Batch, Error> {
        let url = format!("{}/{}", self.batches_url(), batch_id);
        self.dispatcher.request(HttpMethod::Get, &url).await
    }

    /// Cancel a not-yet-delivered batch. Returns the batch in its canceled
    /// state.
    pub async fn cancel_batch(&self, batch_id: &str) -> Result<Batch, Error> {
        let url = format!("{}/{}", self.batches_url(), batch_id);
        self.dispatcher.request(HttpMethod::Delete, &url).await
    }

    /// Report which recipients of a batch received the message in-app.
    /// The endpoint acknowledges with an empty body.
    pub async fn send_delivery_feedback(
        &self,
        batch_id: &str,
        recipients: &[String],
    ) -> Result<EmptyResponse, Error> {
        #[derive(Serialize)]
        struct Feedback<'a> {
            recipients: &'a [String],
        }

        let url = format!("{}/{}/delivery_feedback", self.batches_url(), batch_id);
        self.dispatcher
            .request_with(HttpMethod::Post, &url, &Feedback { recipients })
            .await
    }

    /// Fetch one page of the batch listing. Pages are zero-based.
    pub async fn list_batches(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<ListBatchesResponse, Error> {
        let url = format!(
            "{}?page={}&page_size={}",
            self.batches_url(),
            page,
            page_size
        );
        self.dispatcher.request(HttpMethod::Get, &url).await
    }

    /// Fetch every batch across all pages, advancing the page number until
    /// the boundary predicate reports the final page.
    pub async fn list_all_batches(&self) -> Result<Vec<Batch>, Error> {
        self.list_all_batches_paged(DEFAULT_PAGE_SIZE).await
    }

    /// As [`Self::list_all_batches`] with an explicit page size.
    pub async fn list_all_batches_paged(&self, page_size: u64) -> Result<Vec<Batch>, Error> {
        if page_size == 0 {
            return Err(ValidationError::PageSizeZero.into());
        }

        let mut page = 0;
        let mut all = Vec::new();
        loop {
            let response = self.list_batches(page, page_size).await?;
            let last = is_last_page(
                response.page,
                response.page_size,
                response.count,
                PageStart::ZeroBased,
            );
            all.extend(response.batches);
            if last {
                return Ok(all);
            }
            page += 1;
        }
    }
}
