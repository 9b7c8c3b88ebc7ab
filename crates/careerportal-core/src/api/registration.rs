//! Account creation: validate, upload the referenced files, then register.

use tracing::info;

use super::client::ApiClient;
use crate::error::Result;
use crate::validation::{EmployerSignup, JobSeekerSignup, ValidationErrors};

impl ApiClient {
    /// Register a job seeker from the entered form.
    ///
    /// Nothing is sent when validation fails. The resume and photo are
    /// uploaded first, and registration only happens once both succeed.
    pub async fn sign_up_job_seeker(&self, signup: JobSeekerSignup) -> Result<String> {
        signup.validate()?;
        let (resume, photo) = match (signup.resume.clone(), signup.photo.clone()) {
            (Some(resume), Some(photo)) => (resume, photo),
            (resume, photo) => {
                let mut errors = ValidationErrors::default();
                if resume.is_none() {
                    errors.add("resume", "Please upload your resume");
                }
                if photo.is_none() {
                    errors.add("photo", "Please upload your photo");
                }
                return Err(errors.into());
            }
        };

        let resume = self.upload_resume(&resume).await?;
        info!(path = %resume.file_path, "Resume uploaded");
        let photo = self.upload_photo(&photo).await?;
        info!(path = %photo.file_path, "Photo uploaded");

        let registration = signup.into_registration(resume.file_path, photo.file_path);
        let message = self.register_job_seeker(&registration).await?;
        info!(username = %registration.username, "Job seeker registered");
        Ok(message)
    }

    /// Register an employer from the entered form.
    pub async fn sign_up_employer(&self, signup: EmployerSignup) -> Result<String> {
        signup.validate()?;
        let registration = signup.into_registration();
        let message = self.register_employer(&registration).await?;
        info!(username = %registration.username, "Employer registered");
        Ok(message)
    }
}
