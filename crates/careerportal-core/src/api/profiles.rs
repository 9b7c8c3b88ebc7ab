//! Profile endpoints for both roles, plus the candidate listing used by reports.

use std::path::Path;

use reqwest::Method;
use tracing::{debug, info};

use super::client::{ApiClient, ApiError};
use super::types::{CandidateRecord, EmployerProfile, JobSeekerProfile};

/// Replacement files for a job-seeker profile save.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileFiles<'a> {
    pub resume: Option<&'a Path>,
    pub photo: Option<&'a Path>,
}

impl ApiClient {
    // =========================================================================
    // Job seeker
    // =========================================================================

    pub async fn job_seeker_profile(&self) -> Result<JobSeekerProfile, ApiError> {
        let url = self.api_url("/jobseeker/profile");
        debug!(url = %url, "fetching job seeker profile");
        self.send_json(self.request(Method::GET, &url)).await
    }

    pub async fn update_job_seeker_profile(
        &self,
        profile: &JobSeekerProfile,
    ) -> Result<JobSeekerProfile, ApiError> {
        let url = self.api_url("/jobseeker/profile");
        debug!(url = %url, "updating job seeker profile");
        self.send_json(self.request(Method::PUT, &url).json(profile))
            .await
    }

    /// Upload any replacement files, then save the profile with their paths.
    ///
    /// The profile is only written once every upload has succeeded.
    pub async fn save_job_seeker_profile(
        &self,
        mut profile: JobSeekerProfile,
        files: ProfileFiles<'_>,
    ) -> Result<JobSeekerProfile, ApiError> {
        if let Some(resume) = files.resume {
            let uploaded = self.upload_resume(resume).await?;
            info!(path = %uploaded.file_path, "Resume uploaded");
            profile.resume_file_path = Some(uploaded.file_path);
        }
        if let Some(photo) = files.photo {
            let uploaded = self.upload_photo(photo).await?;
            info!(path = %uploaded.file_path, "Photo uploaded");
            profile.photo_file_path = Some(uploaded.file_path);
        }
        self.update_job_seeker_profile(&profile).await
    }

    /// Every job seeker, the data source for candidate reports.
    pub async fn list_candidates(&self) -> Result<Vec<CandidateRecord>, ApiError> {
        let url = self.api_url("/jobseekers/all");
        debug!(url = %url, "listing candidates");
        self.send_json(self.request(Method::GET, &url)).await
    }

    // =========================================================================
    // Employer
    // =========================================================================

    pub async fn employer_profile(&self) -> Result<EmployerProfile, ApiError> {
        let url = self.api_url("/employer/profile");
        debug!(url = %url, "fetching employer profile");
        self.send_json(self.request(Method::GET, &url)).await
    }

    pub async fn update_employer_profile(
        &self,
        profile: &EmployerProfile,
    ) -> Result<EmployerProfile, ApiError> {
        let url = self.api_url("/employer/profile");
        debug!(url = %url, "updating employer profile");
        self.send_json(self.request(Method::PUT, &url).json(profile))
            .await
    }
}
