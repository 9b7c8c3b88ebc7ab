//! Profile subcommands for the signed-in account, whichever role it holds.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::bail;
use careerportal_core::api::{EmployerProfile, JobSeekerProfile, ProfileFiles};
use careerportal_core::validation::validate_profile_files;
use careerportal_core::{Role, Route};

use crate::fmt::{write_employer_profile, write_job_seeker_profile};
use crate::view::ViewContext;

/// Profile subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum ProfileAction {
    /// Show your profile.
    Show,
    /// Update your profile; omitted fields keep their current value.
    Edit(ProfileEdit),
}

/// Editable profile fields. Personal fields apply to job seekers, company
/// fields to employers.
#[derive(clap::Args, Debug, Default)]
pub struct ProfileEdit {
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long, help_heading = "Job seeker")]
    pub name: Option<String>,
    #[arg(long, help_heading = "Job seeker")]
    pub mobile: Option<String>,
    #[arg(long, help_heading = "Job seeker")]
    pub status: Option<String>,
    #[arg(long, help_heading = "Job seeker")]
    pub gender: Option<String>,
    #[arg(long, help_heading = "Job seeker")]
    pub dob: Option<String>,
    #[arg(long, help_heading = "Job seeker")]
    pub education: Option<String>,
    #[arg(long, help_heading = "Job seeker")]
    pub work_experience: Option<String>,
    #[arg(long, help_heading = "Job seeker")]
    pub skills: Option<String>,
    /// Replacement resume (.pdf, .doc, .docx).
    #[arg(long, help_heading = "Job seeker")]
    pub resume: Option<PathBuf>,
    /// Replacement photo (.jpg, .jpeg).
    #[arg(long, help_heading = "Job seeker")]
    pub photo: Option<PathBuf>,

    #[arg(long, help_heading = "Employer")]
    pub company_name: Option<String>,
    #[arg(long, help_heading = "Employer")]
    pub industry: Option<String>,
    #[arg(long, help_heading = "Employer")]
    pub company_size: Option<String>,
    #[arg(long, help_heading = "Employer")]
    pub headquarters: Option<String>,
    #[arg(long, help_heading = "Employer")]
    pub company_type: Option<String>,
    #[arg(long, help_heading = "Employer")]
    pub founded: Option<i32>,
    #[arg(long, help_heading = "Employer")]
    pub specialities: Option<String>,
    #[arg(long, help_heading = "Employer")]
    pub company_address: Option<String>,
    #[arg(long, help_heading = "Employer")]
    pub company_phone: Option<String>,
}

fn set(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

impl ProfileEdit {
    pub fn apply_to_job_seeker(&self, p: &mut JobSeekerProfile) {
        set(&mut p.email, self.email.clone());
        set(&mut p.name, self.name.clone());
        set(&mut p.mobile, self.mobile.clone());
        set(&mut p.status, self.status.as_deref().map(str::to_uppercase));
        set(&mut p.gender, self.gender.as_deref().map(str::to_uppercase));
        set(&mut p.dob, self.dob.clone());
        set(&mut p.education, self.education.clone());
        set(&mut p.work_experience, self.work_experience.clone());
        set(&mut p.skills, self.skills.clone());
    }

    pub fn apply_to_employer(&self, p: &mut EmployerProfile) {
        set(&mut p.email, self.email.clone());
        set(&mut p.company_name, self.company_name.clone());
        set(&mut p.industry, self.industry.clone());
        set(&mut p.company_size, self.company_size.clone());
        set(&mut p.headquarters, self.headquarters.clone());
        set(&mut p.company_type, self.company_type.clone());
        if self.founded.is_some() {
            p.founded = self.founded;
        }
        set(&mut p.specialities, self.specialities.clone());
        set(&mut p.company_address, self.company_address.clone());
        set(&mut p.company_phone, self.company_phone.clone());
    }
}

/// Execute a profile subcommand.
pub async fn run(action: ProfileAction, ctx: &ViewContext) -> anyhow::Result<()> {
    let mut out = io::stdout();
    match action {
        ProfileAction::Show => {
            ctx.enter(Route::Profile)?;
            match ctx.role() {
                Some(Role::Employer) => {
                    write_employer_profile(&mut out, &ctx.api.employer_profile().await?)?;
                }
                Some(Role::JobSeeker) => {
                    write_job_seeker_profile(&mut out, &ctx.api.job_seeker_profile().await?)?;
                }
                _ => bail!("Your account role is not recognised"),
            }
        }
        ProfileAction::Edit(edit) => {
            if ctx.session.is_employer() {
                ctx.enter(Route::EditCompanyProfile)?;
                let mut profile = ctx.api.employer_profile().await?;
                edit.apply_to_employer(&mut profile);
                ctx.api.update_employer_profile(&profile).await?;
            } else {
                ctx.enter(Route::EditProfile)?;
                validate_profile_files(edit.resume.as_deref(), edit.photo.as_deref())?;
                let mut profile = ctx.api.job_seeker_profile().await?;
                edit.apply_to_job_seeker(&mut profile);
                let files = ProfileFiles {
                    resume: edit.resume.as_deref(),
                    photo: edit.photo.as_deref(),
                };
                ctx.api.save_job_seeker_profile(profile, files).await?;
            }
            writeln!(out, "Profile updated.")?;
        }
    }
    Ok(())
}
