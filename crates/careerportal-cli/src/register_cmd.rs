//! Registration subcommands for job seekers and employers.

use std::io::{self, Write};
use std::path::PathBuf;

use careerportal_core::Route;
use careerportal_core::validation::{EmployerSignup, JobSeekerSignup};

use crate::view::ViewContext;

/// Register subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum RegisterAction {
    /// Create a job seeker account.
    Jobseeker(JobSeekerArgs),
    /// Create an employer account.
    Employer(EmployerArgs),
}

#[derive(clap::Args, Debug)]
pub struct JobSeekerArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "CAREERPORTAL_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Repeat the password.
    #[arg(long)]
    pub confirm_password: String,
    /// Full name.
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub mobile: String,
    /// Career status (e.g. fresher, experienced).
    #[arg(long)]
    pub status: String,
    /// male, female or other.
    #[arg(long)]
    pub gender: String,
    /// Date of birth, YYYY-MM-DD.
    #[arg(long)]
    pub dob: String,
    #[arg(long)]
    pub education: String,
    #[arg(long, default_value = "")]
    pub work_experience: String,
    /// Comma-separated skills.
    #[arg(long)]
    pub skills: String,
    /// Resume file (.pdf, .doc, .docx).
    #[arg(long)]
    pub resume: PathBuf,
    /// Profile photo (.jpg, .jpeg).
    #[arg(long)]
    pub photo: PathBuf,
}

impl From<JobSeekerArgs> for JobSeekerSignup {
    fn from(a: JobSeekerArgs) -> Self {
        Self {
            username: a.username,
            email: a.email,
            password: a.password,
            confirm_password: a.confirm_password,
            name: a.name,
            mobile: a.mobile,
            status: a.status,
            gender: a.gender,
            dob: a.dob,
            education: a.education,
            work_experience: a.work_experience,
            skills: a.skills,
            resume: Some(a.resume),
            photo: Some(a.photo),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct EmployerArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "CAREERPORTAL_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Repeat the password.
    #[arg(long)]
    pub confirm_password: String,
    #[arg(long)]
    pub company_name: String,
    #[arg(long)]
    pub industry: String,
    #[arg(long, default_value = "")]
    pub company_size: String,
    #[arg(long, default_value = "")]
    pub headquarters: String,
    #[arg(long, default_value = "")]
    pub company_type: String,
    /// Year founded.
    #[arg(long, default_value = "")]
    pub founded: String,
    #[arg(long, default_value = "")]
    pub specialities: String,
    #[arg(long, default_value = "")]
    pub company_address: String,
    #[arg(long, default_value = "")]
    pub company_phone: String,
}

impl From<EmployerArgs> for EmployerSignup {
    fn from(a: EmployerArgs) -> Self {
        Self {
            username: a.username,
            email: a.email,
            password: a.password,
            confirm_password: a.confirm_password,
            company_name: a.company_name,
            industry: a.industry,
            company_size: a.company_size,
            headquarters: a.headquarters,
            company_type: a.company_type,
            founded: a.founded,
            specialities: a.specialities,
            company_address: a.company_address,
            company_phone: a.company_phone,
        }
    }
}

/// Execute a register subcommand.
pub async fn run(action: RegisterAction, ctx: &ViewContext) -> anyhow::Result<()> {
    let message = match action {
        RegisterAction::Jobseeker(args) => {
            ctx.enter(Route::RegisterCandidate)?;
            ctx.api.sign_up_job_seeker(args.into()).await?
        }
        RegisterAction::Employer(args) => {
            ctx.enter(Route::RegisterCompany)?;
            ctx.api.sign_up_employer(args.into()).await?
        }
    };
    let mut out = io::stdout();
    if !message.is_empty() {
        writeln!(out, "{message}")?;
    }
    writeln!(out, "Registration successful! Please login to continue: careerportal auth login")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Test wrapper to parse CLI arguments.
    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        action: RegisterAction,
    }

    #[test]
    fn parse_employer_with_defaults() {
        let cli = TestCli::parse_from([
            "test",
            "employer",
            "--username",
            "acme",
            "--email",
            "hr@acme.io",
            "--password",
            "S3cret!pw",
            "--confirm-password",
            "S3cret!pw",
            "--company-name",
            "Acme",
            "--industry",
            "Tools",
            "--founded",
            "1999",
        ]);
        match cli.action {
            RegisterAction::Employer(args) => {
                let signup = EmployerSignup::from(args);
                assert_eq!(signup.company_name, "Acme");
                assert_eq!(signup.company_phone, "");
                signup.validate().unwrap();
                assert_eq!(signup.into_registration().founded, Some(1999));
            }
            other => panic!("Expected Employer, got {other:?}"),
        }
    }

    #[test]
    fn parse_job_seeker_carries_files() {
        let cli = TestCli::parse_from([
            "test",
            "jobseeker",
            "--username",
            "jo",
            "--email",
            "jo@example.com",
            "--password",
            "Passw0rd!",
            "--confirm-password",
            "Passw0rd!",
            "--name",
            "Jo",
            "--mobile",
            "9876543210",
            "--status",
            "fresher",
            "--gender",
            "female",
            "--dob",
            "2000-01-01",
            "--education",
            "BSc",
            "--skills",
            "rust",
            "--resume",
            "cv.pdf",
            "--photo",
            "me.jpg",
        ]);
        match cli.action {
            RegisterAction::Jobseeker(args) => {
                let signup = JobSeekerSignup::from(args);
                assert_eq!(signup.resume, Some(PathBuf::from("cv.pdf")));
                assert_eq!(signup.work_experience, "");
                signup.validate().unwrap();
            }
            other => panic!("Expected Jobseeker, got {other:?}"),
        }
    }

    #[test]
    fn job_seeker_requires_resume() {
        assert!(
            TestCli::try_parse_from(["test", "jobseeker", "--username", "jo"]).is_err()
        );
    }
}
