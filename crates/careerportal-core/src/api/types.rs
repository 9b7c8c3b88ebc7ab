//! Request and response bodies exchanged with the portal backend.
//!
//! Field names follow the backend's camelCase JSON. Response structs default
//! every optional field so a partially populated record still deserializes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub username_or_email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register/jobseeker`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub mobile: String,
    /// Backend enum name, upper case (e.g. `FRESHER`, `EXPERIENCED`).
    pub status: String,
    /// Backend enum name, upper case (`MALE`, `FEMALE`, `OTHER`).
    pub gender: String,
    /// ISO date, `YYYY-MM-DD`.
    pub dob: String,
    pub education: String,
    pub work_experience: String,
    pub skills: String,
    pub resume_file_path: String,
    pub photo_file_path: String,
}

/// Body of `POST /auth/register/employer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub headquarters: String,
    pub company_type: String,
    pub founded: Option<i32>,
    pub specialities: String,
    pub company_address: String,
    pub company_phone: String,
}

/// Job posting as returned by `/jobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub id: i64,
    pub job_title: Option<String>,
    pub job_position: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<String>,
    pub location: Option<String>,
    pub experience_level: Option<String>,
    pub functional_area: Option<String>,
    pub industry: Option<String>,
    pub salary_details: Option<String>,
    pub is_active: Option<bool>,
    pub application_count: Option<u64>,
    pub company_name: Option<String>,
    pub date_posted: Option<String>,
    pub posted_on: Option<String>,
    pub created_at: Option<String>,
}

impl Job {
    pub fn title(&self) -> &str {
        self.job_title.as_deref().unwrap_or("(untitled)")
    }

    /// Posting date under whichever name the backend used.
    pub fn posted(&self) -> Option<&str> {
        self.date_posted
            .as_deref()
            .or(self.posted_on.as_deref())
            .or(self.created_at.as_deref())
    }
}

/// Body of `POST /jobs` and `PUT /jobs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobForm {
    pub job_title: String,
    pub job_position: String,
    pub description: String,
    pub required_skills: String,
    pub location: String,
    pub experience_level: String,
    pub functional_area: String,
    pub industry: String,
    pub salary_details: String,
}

impl From<&Job> for JobForm {
    fn from(job: &Job) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            job_title: text(&job.job_title),
            job_position: text(&job.job_position),
            description: text(&job.description),
            required_skills: text(&job.required_skills),
            location: text(&job.location),
            experience_level: text(&job.experience_level),
            functional_area: text(&job.functional_area),
            industry: text(&job.industry),
            salary_details: text(&job.salary_details),
        }
    }
}

/// Query filters for `GET /jobs`. Blank values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
}

/// Company record from `/employer/all` and `/employer/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub id: i64,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub headquarters: Option<String>,
    pub company_type: Option<String>,
    pub founded: Option<i32>,
    pub specialities: Option<String>,
    pub company_address: Option<String>,
    pub company_phone: Option<String>,
    pub created_at: Option<String>,
}

/// Query filters for `GET /employer/all`. Blank values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilters {
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub founded_after: Option<i32>,
}

/// `GET/PUT /jobseeker/profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSeekerProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub status: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub education: Option<String>,
    pub work_experience: Option<String>,
    pub skills: Option<String>,
    pub resume_file_path: Option<String>,
    pub photo_file_path: Option<String>,
}

/// `GET/PUT /employer/profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployerProfile {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub headquarters: Option<String>,
    pub company_type: Option<String>,
    pub founded: Option<i32>,
    pub specialities: Option<String>,
    pub company_address: Option<String>,
    pub company_phone: Option<String>,
}

/// Application record from `/applications/job/{jobId}` and `/applications/my-history`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub id: i64,
    pub job_id: Option<i64>,
    pub job_title: Option<String>,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub candidate_phone: Option<String>,
    pub status: Option<String>,
    pub application_date: Option<String>,
    pub has_resume: bool,
    pub recruiter_notes: Option<String>,
}

/// Review state an employer can set on an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Shortlisted, Self::Rejected, Self::Hired];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Shortlisted => "SHORTLISTED",
            Self::Rejected => "REJECTED",
            Self::Hired => "HIRED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown status '{s}' (expected pending, shortlisted, rejected or hired)")
            })
    }
}

/// Body of `PUT /applications/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub new_status: ApplicationStatus,
    pub recruiter_notes: String,
}

/// Response of `POST /files/upload/{resume,photo}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadedFile {
    pub file_path: String,
    pub original_name: Option<String>,
    pub message: Option<String>,
}

/// Downloaded resume bytes and the name the server suggested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDownload {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Row of `GET /jobseekers/all`, the report data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub gender: Option<String>,
    pub status: Option<String>,
    pub education: Option<String>,
    pub work_experience: Option<String>,
    pub skills: Option<String>,
    pub dob: Option<String>,
    pub created_at: Option<String>,
}
