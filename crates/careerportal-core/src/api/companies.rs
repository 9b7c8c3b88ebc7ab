//! Company directory endpoints.

use reqwest::Method;
use tracing::debug;

use super::client::{ApiClient, ApiError};
use super::types::{Company, CompanyFilters};

impl ApiClient {
    /// List companies, optionally filtered (`GET /employer/all`).
    pub async fn list_companies(&self, filters: &CompanyFilters) -> Result<Vec<Company>, ApiError> {
        let url = self.url_with_query(
            "/employer/all",
            &[
                ("companyName", filters.company_name.clone()),
                ("industry", filters.industry.clone()),
                ("foundedAfter", filters.founded_after.map(|y| y.to_string())),
            ],
        )?;
        debug!(url = %url, "listing companies");
        self.send_json(self.request(Method::GET, url)).await
    }

    pub async fn get_company(&self, id: i64) -> Result<Company, ApiError> {
        let url = self.api_url(&format!("/employer/{id}"));
        debug!(url = %url, "fetching company");
        self.send_json(self.request(Method::GET, &url)).await
    }
}
