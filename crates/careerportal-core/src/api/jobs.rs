//! Job posting endpoints.

use reqwest::Method;
use tracing::debug;

use super::client::{ApiClient, ApiError};
use super::types::{Job, JobFilters, JobForm};

impl ApiClient {
    /// List public job postings, optionally filtered (`GET /jobs`).
    pub async fn list_jobs(&self, filters: &JobFilters) -> Result<Vec<Job>, ApiError> {
        let url = self.url_with_query(
            "/jobs",
            &[
                ("keyword", filters.keyword.clone()),
                ("location", filters.location.clone()),
                ("experience", filters.experience.clone()),
            ],
        )?;
        debug!(url = %url, "listing jobs");
        self.send_json(self.request(Method::GET, url)).await
    }

    /// Postings owned by the signed-in employer (`GET /jobs/employer`).
    pub async fn list_employer_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let url = self.api_url("/jobs/employer");
        debug!(url = %url, "listing employer jobs");
        self.send_json(self.request(Method::GET, &url)).await
    }

    /// Get a single posting by ID.
    pub async fn get_job(&self, id: i64) -> Result<Job, ApiError> {
        let url = self.api_url(&format!("/jobs/{id}"));
        debug!(url = %url, "fetching job");
        self.send_json(self.request(Method::GET, &url)).await
    }

    pub async fn create_job(&self, form: &JobForm) -> Result<Job, ApiError> {
        let url = self.api_url("/jobs");
        debug!(url = %url, title = %form.job_title, "creating job");
        self.send_json(self.request(Method::POST, &url).json(form))
            .await
    }

    pub async fn update_job(&self, id: i64, form: &JobForm) -> Result<Job, ApiError> {
        let url = self.api_url(&format!("/jobs/{id}"));
        debug!(url = %url, "updating job");
        self.send_json(self.request(Method::PUT, &url).json(form))
            .await
    }

    pub async fn delete_job(&self, id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("/jobs/{id}"));
        debug!(url = %url, "deleting job");
        self.send_empty(self.request(Method::DELETE, &url)).await
    }
}
