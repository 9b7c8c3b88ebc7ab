//! Career Portal backend API.
//!
//! A reqwest-based client for the portal's REST endpoints: authentication,
//! registration, jobs, companies, profiles, applications and file uploads.

mod applications;
mod client;
mod companies;
mod jobs;
mod profiles;
mod registration;
pub mod types;


pub use applications::DEFAULT_RESUME_FILENAME;
pub use client::{ApiClient, ApiError};
pub use profiles::ProfileFiles;
pub use types::{
    Application, ApplicationStatus, CandidateRecord, Company, CompanyFilters, EmployerProfile,
    Job, JobFilters, JobForm, JobSeekerProfile, ResumeDownload, UploadedFile,
};
