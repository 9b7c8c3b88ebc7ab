//! Client-side form validation.
//!
//! Every check runs before any request is built. A form that fails
//! validation never reaches the backend.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::api::types::{EmployerRegistration, JobForm, JobSeekerRegistration};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex is valid"));
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("static regex is valid"));
static COMPANY_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9][\d\s\-\(\)]{7,15}$").expect("static regex is valid")
});

const PASSWORD_SPECIALS: &str = "@$!%*?&";
const PASSWORD_RULE: &str =
    "Password must be at least 8 characters with uppercase, lowercase, number, and special character";

/// Accepted resume extensions for registration and profile edits.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];
/// Accepted photo extensions.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
/// Accepted extensions for a resume attached to an application.
pub const APPLICATION_RESUME_EXTENSIONS: &[&str] = &["pdf"];

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-level messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    let mut out = String::from("Please fix the following:");
    for e in errors {
        let _ = write!(out, "\n  {}: {}", e.field, e.message);
    }
    out
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record `message` against `field` when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) -> bool {
        let present = !value.trim().is_empty();
        if !present {
            self.add(field, message);
        }
        present
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for a field, if it was rejected.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// At least 8 characters drawn from letters, digits and `@$!%*?&`, with at
/// least one of each class.
pub fn is_valid_password(password: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);
    password.chars().count() >= 8
        && password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Mobile number, whitespace ignored: optional `+`, no leading zero, up to 16 digits.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let compact: String = mobile.chars().filter(|c| !c.is_whitespace()).collect();
    MOBILE_RE.is_match(&compact)
}

pub fn is_valid_company_phone(phone: &str) -> bool {
    COMPANY_PHONE_RE.is_match(phone.trim())
}

/// Whether `path` has one of the given extensions, case-insensitively.
pub fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| allowed.contains(&ext.as_str()))
}

/// Check an optional file against the allowed extensions.
fn check_file(
    errors: &mut ValidationErrors,
    field: &'static str,
    path: Option<&Path>,
    allowed: &[&str],
    missing: &str,
) {
    match path {
        None => errors.add(field, missing),
        Some(path) if !has_extension(path, allowed) => errors.add(
            field,
            format!("Unsupported file type (expected {})", allowed.join(", ")),
        ),
        Some(_) => {}
    }
}

pub fn validate_login(identifier: &str, secret: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require("usernameOrEmail", identifier, "Please enter your username or email.");
    errors.require("password", secret, "Please enter your password.");
    errors.into_result()
}

/// Resume attached to a job application: optional, PDF only.
pub fn validate_application_resume(path: Option<&Path>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Some(path) = path
        && !has_extension(path, APPLICATION_RESUME_EXTENSIONS)
    {
        errors.add("resume", "Please upload a valid PDF file!");
    }
    errors.into_result()
}

/// Replacement files on a profile edit: both optional.
pub fn validate_profile_files(
    resume: Option<&Path>,
    photo: Option<&Path>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Some(resume) = resume {
        check_file(&mut errors, "resume", Some(resume), RESUME_EXTENSIONS, "");
    }
    if let Some(photo) = photo {
        check_file(&mut errors, "photo", Some(photo), PHOTO_EXTENSIONS, "");
    }
    errors.into_result()
}

pub fn validate_job_form(form: &JobForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require("jobTitle", &form.job_title, "Job title is required");
    errors.require("description", &form.description, "Description is required");
    errors.require("location", &form.location, "Location is required");
    errors.into_result()
}

/// Job-seeker registration as entered, before the files are uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSeekerSignup {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub mobile: String,
    pub status: String,
    pub gender: String,
    pub dob: String,
    pub education: String,
    pub work_experience: String,
    pub skills: String,
    pub resume: Option<PathBuf>,
    pub photo: Option<PathBuf>,
}

impl JobSeekerSignup {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("username", &self.username, "Username is required");
        if errors.require("email", &self.email, "Email is required")
            && !is_valid_email(&self.email)
        {
            errors.add("email", "Please enter a valid email address");
        }
        if errors.require("password", &self.password, "Password is required")
            && !is_valid_password(&self.password)
        {
            errors.add("password", PASSWORD_RULE);
        }
        if errors.require(
            "confirmPassword",
            &self.confirm_password,
            "Please confirm your password",
        ) && self.password != self.confirm_password
        {
            errors.add("confirmPassword", "Passwords do not match");
        }
        errors.require("name", &self.name, "Name is required");
        if errors.require("mobile", &self.mobile, "Mobile number is required")
            && !is_valid_mobile(&self.mobile)
        {
            errors.add("mobile", "Please enter a valid mobile number");
        }
        errors.require("status", &self.status, "Please select your status");
        errors.require("gender", &self.gender, "Please select your gender");
        errors.require("dob", &self.dob, "Date of birth is required");
        errors.require("education", &self.education, "Education details are required");
        errors.require("skills", &self.skills, "Skills are required");
        check_file(
            &mut errors,
            "resume",
            self.resume.as_deref(),
            RESUME_EXTENSIONS,
            "Please upload your resume",
        );
        check_file(
            &mut errors,
            "photo",
            self.photo.as_deref(),
            PHOTO_EXTENSIONS,
            "Please upload your photo",
        );
        errors.into_result()
    }

    /// Registration body referencing the uploaded files. Status and gender
    /// are sent as upper-case backend enum names.
    pub fn into_registration(
        self,
        resume_file_path: String,
        photo_file_path: String,
    ) -> JobSeekerRegistration {
        JobSeekerRegistration {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            name: self.name.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            status: self.status.trim().to_uppercase(),
            gender: self.gender.trim().to_uppercase(),
            dob: self.dob.trim().to_string(),
            education: self.education,
            work_experience: self.work_experience,
            skills: self.skills,
            resume_file_path,
            photo_file_path,
        }
    }
}

/// Employer registration as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployerSignup {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub headquarters: String,
    pub company_type: String,
    pub founded: String,
    pub specialities: String,
    pub company_address: String,
    pub company_phone: String,
}

impl EmployerSignup {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        const REQUIRED: &str = "Please fill all required fields!";
        let mut errors = ValidationErrors::new();
        errors.require("username", &self.username, REQUIRED);
        if errors.require("email", &self.email, REQUIRED) && !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address");
        }
        if errors.require("password", &self.password, REQUIRED)
            && self.password != self.confirm_password
        {
            errors.add("confirmPassword", "Passwords do not match!");
        }
        errors.require("companyName", &self.company_name, REQUIRED);
        errors.require("industry", &self.industry, REQUIRED);
        if !self.company_phone.trim().is_empty() && !is_valid_company_phone(&self.company_phone) {
            errors.add("companyPhone", "Please enter a valid phone number");
        }
        if !self.founded.trim().is_empty() && self.founded.trim().parse::<i32>().is_err() {
            errors.add("founded", "Founded must be a year");
        }
        errors.into_result()
    }

    pub fn into_registration(self) -> EmployerRegistration {
        EmployerRegistration {
            founded: self.founded.trim().parse().ok(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            company_name: self.company_name.trim().to_string(),
            industry: self.industry.trim().to_string(),
            company_size: self.company_size,
            headquarters: self.headquarters,
            company_type: self.company_type,
            specialities: self.specialities,
            company_address: self.company_address,
            company_phone: self.company_phone,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete_signup() -> JobSeekerSignup {
        JobSeekerSignup {
            username: "jo".into(),
            email: "jo@example.com".into(),
            password: "Passw0rd!".into(),
            confirm_password: "Passw0rd!".into(),
            name: "Jo Doe".into(),
            mobile: "+91 98765 43210".into(),
            status: "fresher".into(),
            gender: "female".into(),
            dob: "2000-01-31".into(),
            education: "B.Tech".into(),
            work_experience: String::new(),
            skills: "rust, sql".into(),
            resume: Some(PathBuf::from("cv.PDF")),
            photo: Some(PathBuf::from("me.jpeg")),
        }
    }

    #[test]
    fn email_needs_user_domain_and_tld() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
    }

    #[test]
    fn password_requires_every_class() {
        assert!(is_valid_password("Passw0rd!"));
        assert!(!is_valid_password("Pw0!"));
        assert!(!is_valid_password("password1!"));
        assert!(!is_valid_password("PASSWORD1!"));
        assert!(!is_valid_password("Password!!"));
        assert!(!is_valid_password("Password12"));
        // '#' is outside the allowed set.
        assert!(!is_valid_password("Passw0rd#"));
    }

    #[test]
    fn mobile_ignores_whitespace() {
        assert!(is_valid_mobile("+91 98765 43210"));
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("09876543210"));
        assert!(!is_valid_mobile("98-76"));
        assert!(!is_valid_mobile("12345678901234567"));
    }

    #[test]
    fn company_phone_allows_separators() {
        assert!(is_valid_company_phone("+1 (555) 123-4567"));
        assert!(!is_valid_company_phone("555"));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_extension(Path::new("cv.DOCX"), RESUME_EXTENSIONS));
        assert!(!has_extension(Path::new("cv.txt"), RESUME_EXTENSIONS));
        assert!(!has_extension(Path::new("photo"), PHOTO_EXTENSIONS));
    }

    #[test]
    fn login_requires_both_fields() {
        let err = validate_login(" ", "").unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(
            err.get("usernameOrEmail"),
            Some("Please enter your username or email.")
        );
        assert!(validate_login("jo", "x").is_ok());
    }

    #[test]
    fn complete_signup_is_valid() {
        complete_signup().validate().unwrap();
    }

    #[test]
    fn signup_errors_are_in_form_order() {
        let err = JobSeekerSignup::default().validate().unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                "username",
                "email",
                "password",
                "confirmPassword",
                "name",
                "mobile",
                "status",
                "gender",
                "dob",
                "education",
                "skills",
                "resume",
                "photo"
            ]
        );
        assert_eq!(err.get("photo"), Some("Please upload your photo"));
    }

    #[test]
    fn signup_rejects_mismatched_passwords_and_bad_files() {
        let signup = JobSeekerSignup {
            confirm_password: "Other0ne!".into(),
            resume: Some(PathBuf::from("cv.txt")),
            photo: Some(PathBuf::from("me.png")),
            ..complete_signup()
        };
        let err = signup.validate().unwrap_err();
        assert_eq!(err.get("confirmPassword"), Some("Passwords do not match"));
        assert!(err.get("resume").unwrap().contains("pdf, doc, docx"));
        assert!(err.get("photo").is_some());
        assert_eq!(err.len(), 3);
    }

    #[test]
    fn registration_upper_cases_enums() {
        let reg = complete_signup().into_registration("r/cv.pdf".into(), "p/me.jpg".into());
        assert_eq!(reg.status, "FRESHER");
        assert_eq!(reg.gender, "FEMALE");
        assert_eq!(reg.resume_file_path, "r/cv.pdf");
    }

    #[test]
    fn employer_signup_requires_core_fields() {
        let err = EmployerSignup::default().validate().unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["username", "email", "password", "companyName", "industry"]
        );
    }

    #[test]
    fn employer_signup_checks_optional_fields_when_present() {
        let signup = EmployerSignup {
            username: "acme".into(),
            email: "hr@acme.io".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
            company_name: "Acme".into(),
            industry: "Tools".into(),
            company_phone: "12".into(),
            founded: "nineteen".into(),
            ..Default::default()
        };
        let err = signup.validate().unwrap_err();
        assert!(err.get("companyPhone").is_some());
        assert!(err.get("founded").is_some());

        let ok = EmployerSignup {
            company_phone: String::new(),
            founded: "1999".into(),
            ..signup
        };
        ok.validate().unwrap();
        assert_eq!(ok.into_registration().founded, Some(1999));
    }

    #[test]
    fn job_form_requires_title_description_location() {
        let err = validate_job_form(&JobForm::default()).unwrap_err();
        assert_eq!(err.len(), 3);
        let form = JobForm {
            job_title: "Dev".into(),
            description: "Build".into(),
            location: "Remote".into(),
            ..Default::default()
        };
        assert!(validate_job_form(&form).is_ok());
    }

    #[test]
    fn application_resume_must_be_pdf() {
        assert!(validate_application_resume(None).is_ok());
        assert!(validate_application_resume(Some(Path::new("cv.pdf"))).is_ok());
        assert!(validate_application_resume(Some(Path::new("cv.docx"))).is_err());
    }

    #[test]
    fn display_lists_each_field() {
        let err = validate_login("", "").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("usernameOrEmail: Please enter your username or email."));
        assert!(text.contains("password: Please enter your password."));
    }
}
