//! Job application endpoints.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::Form;
use reqwest::Method;
use tracing::debug;

use super::client::{ApiClient, ApiError, file_part};
use super::types::{Application, ApplicationStatus, ResumeDownload, StatusUpdate};

/// Filename used when the server does not suggest one.
pub const DEFAULT_RESUME_FILENAME: &str = "resume.pdf";

static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="(.+)""#).expect("static regex is valid"));

impl ApiClient {
    /// Apply to a job, optionally attaching a resume (`POST /applications/{jobId}`).
    pub async fn apply(&self, job_id: i64, resume: Option<&Path>) -> Result<String, ApiError> {
        let url = self.api_url(&format!("/applications/{job_id}"));
        debug!(url = %url, with_resume = resume.is_some(), "applying to job");
        let mut form = Form::new();
        if let Some(path) = resume {
            form = form.part("resume", file_part(path).await?);
        }
        let text = self
            .send_text(self.request(Method::POST, &url).multipart(form))
            .await?;
        let text = text.trim();
        Ok(if text.is_empty() {
            "Application submitted".to_string()
        } else {
            text.to_string()
        })
    }

    /// Applications received for one of the employer's postings.
    pub async fn job_applications(&self, job_id: i64) -> Result<Vec<Application>, ApiError> {
        let url = self.api_url(&format!("/applications/job/{job_id}"));
        debug!(url = %url, "listing job applications");
        self.send_json(self.request(Method::GET, &url)).await
    }

    /// The signed-in job seeker's application history.
    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        let url = self.api_url("/applications/my-history");
        debug!(url = %url, "listing application history");
        self.send_json(self.request(Method::GET, &url)).await
    }

    pub async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
        notes: &str,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&format!("/applications/{application_id}/status"));
        debug!(url = %url, %status, "updating application status");
        let body = StatusUpdate {
            new_status: status,
            recruiter_notes: notes.to_string(),
        };
        self.send_empty(self.request(Method::PUT, &url).json(&body))
            .await
    }

    /// Download the resume attached to an application.
    pub async fn download_resume(&self, application_id: i64) -> Result<ResumeDownload, ApiError> {
        let url = self.api_url(&format!("/applications/{application_id}/resume"));
        debug!(url = %url, "downloading resume");
        self.run(async {
            let resp = self.send(self.request(Method::GET, &url)).await?;
            let filename = resp
                .headers()
                .get(CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok())
                .and_then(disposition_filename)
                .unwrap_or_else(|| DEFAULT_RESUME_FILENAME.to_string());
            let content = resp
                .bytes()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
            Ok(ResumeDownload {
                filename,
                content: content.to_vec(),
            })
        })
        .await
    }
}

/// Filename from a `Content-Disposition` header, reduced to its final path component.
fn disposition_filename(header: &str) -> Option<String> {
    let raw = FILENAME_RE.captures(header)?.get(1)?.as_str();
    let name = Path::new(raw).file_name()?.to_string_lossy().into_owned();
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_from_disposition() {
        assert_eq!(
            disposition_filename(r#"attachment; filename="jane_cv.pdf""#).as_deref(),
            Some("jane_cv.pdf")
        );
    }

    #[test]
    fn disposition_without_filename() {
        assert_eq!(disposition_filename("inline"), None);
    }

    #[test]
    fn disposition_path_is_reduced_to_file_name() {
        assert_eq!(
            disposition_filename(r#"attachment; filename="../../etc/passwd""#).as_deref(),
            Some("passwd")
        );
    }
}
