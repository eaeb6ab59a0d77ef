//! Numbers API sub-client: active-number listing with auto-pagination
//! (one-based pages with a total count) and available-number search.

use crate::client::Error;
use crate::client::dispatch::Dispatcher;
use crate::domain::{PageStart, ProjectId, ValidationError, is_last_page};
use crate::transport::http::HttpMethod;
use crate::transport::numbers::{
    ActiveNumber, ListActiveNumbersResponse, ListAvailableNumbersResponse, NumberType,
};

const DEFAULT_PAGE_SIZE: u64 = 100;

fn number_type_query(number_type: NumberType) -> &'static str {
    match number_type {
        NumberType::Mobile => "MOBILE",
        NumberType::Local => "LOCAL",
        NumberType::TollFree => "TOLL_FREE",
    }
}

pub struct NumbersClient {
    dispatcher: Dispatcher,
    base_url: String,
    project_id: ProjectId,
}

impl NumbersClient {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: String, project_id: ProjectId) -> Self {
        Self {
            dispatcher,
            base_url,
            project_id,
        }
    }

    fn project_url(&self, resource: &str) -> String {
        format!(
            "{}/v1/projects/{}/{resource}",
            self.base_url,
            self.project_id.as_str()
        )
    }

    /// Fetch one page of the numbers rented by the project. Pages are
    /// one-based.
    pub async fn list_active_numbers(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<ListActiveNumbersResponse, Error> {
        let url = format!(
            "{}?pageNumber={}&pageSize={}",
            self.project_url("activeNumbers"),
            page_number,
            page_size
        );
        self.dispatcher.request(HttpMethod::Get, &url).await
    }

    /// Fetch every active number across all pages.
    pub async fn list_all_active_numbers(&self) -> Result<Vec<ActiveNumber>, Error> {
        self.list_all_active_numbers_paged(DEFAULT_PAGE_SIZE).await
    }

    /// As [`Self::list_all_active_numbers`] with an explicit page size.
    pub async fn list_all_active_numbers_paged(
        &self,
        page_size: u64,
    ) -> Result<Vec<ActiveNumber>, Error> {
        if page_size == 0 {
            return Err(ValidationError::PageSizeZero.into());
        }

        let mut page_number = 1;
        let mut all = Vec::new();
        loop {
            let response = self.list_active_numbers(page_number, page_size).await?;
            let last = is_last_page(
                response.page_number,
                response.page_size,
                response.total_items,
                PageStart::OneBased,
            );
            all.extend(response.active_numbers);
            if last {
                return Ok(all);
            }
            page_number += 1;
        }
    }

    /// Search numbers available to rent in a region.
    pub async fn search_available_numbers(
        &self,
        region_code: &str,
        number_type: NumberType,
    ) -> Result<ListAvailableNumbersResponse, Error> {
        let url = format!(
            "{}?regionCode={}&type={}",
            self.project_url("availableNumbers"),
            region_code,
            number_type_query(number_type)
        );
        self.dispatcher.request(HttpMethod::Get, &url).await
    }
}
