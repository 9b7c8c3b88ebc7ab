//! Application subcommands: apply to jobs, review applicants, fetch resumes.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use careerportal_core::Route;
use careerportal_core::api::ApplicationStatus;
use careerportal_core::validation::validate_application_resume;

use crate::fmt::{write_application_history, write_received_applications};
use crate::view::ViewContext;

/// Arguments of `apply`.
#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    /// Job ID.
    pub job_id: i64,
    /// Resume to attach (.pdf).
    #[arg(long)]
    pub resume: Option<PathBuf>,
}

/// Applications subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum ApplicationAction {
    /// Applications received for one of your postings (employers).
    List {
        /// Job ID.
        job_id: i64,
    },
    /// Your application history (job seekers).
    Mine,
    /// Set the review status of an application (employers).
    Status {
        /// Job ID the application belongs to.
        job_id: i64,
        /// Application ID.
        application_id: i64,
        /// pending, shortlisted, rejected or hired.
        status: ApplicationStatus,
        /// Notes for the candidate record.
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Download the resume attached to an application (employers).
    Resume {
        /// Job ID the application belongs to.
        job_id: i64,
        /// Application ID.
        application_id: i64,
        /// Where to save it (default: the server's filename in the current directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute `apply`.
pub async fn apply(args: ApplyArgs, ctx: &ViewContext) -> anyhow::Result<()> {
    ctx.enter(Route::SubmitApplication(args.job_id))?;
    validate_application_resume(args.resume.as_deref())?;
    let message = ctx.api.apply(args.job_id, args.resume.as_deref()).await?;
    writeln!(io::stdout(), "{message}")?;
    Ok(())
}

/// Execute an applications subcommand.
pub async fn run(action: ApplicationAction, ctx: &ViewContext) -> anyhow::Result<()> {
    let mut out = io::stdout();
    match action {
        ApplicationAction::List { job_id } => {
            ctx.enter(Route::JobApplications(job_id))?;
            let apps = ctx.api.job_applications(job_id).await?;
            if apps.is_empty() {
                writeln!(out, "No applications yet.")?;
            } else {
                write_received_applications(&mut out, &apps)?;
            }
        }
        ApplicationAction::Mine => {
            ctx.enter(Route::Profile)?;
            if !ctx.session.is_job_seeker() {
                bail!("Only job seekers have an application history");
            }
            let apps = ctx.api.my_applications().await?;
            if apps.is_empty() {
                writeln!(out, "You have not applied to any jobs yet.")?;
            } else {
                write_application_history(&mut out, &apps)?;
            }
        }
        ApplicationAction::Status {
            job_id,
            application_id,
            status,
            notes,
        } => {
            ctx.enter(Route::JobApplications(job_id))?;
            ctx.api
                .update_application_status(application_id, status, &notes)
                .await?;
            writeln!(out, "Application {application_id} marked {status}.")?;
        }
        ApplicationAction::Resume {
            job_id,
            application_id,
            output,
        } => {
            ctx.enter(Route::JobApplications(job_id))?;
            let download = ctx.api.download_resume(application_id).await?;
            let path = output.unwrap_or_else(|| Path::new(".").join(&download.filename));
            tokio::fs::write(&path, &download.content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(
                out,
                "Saved {} ({} bytes)",
                path.display(),
                download.content.len()
            )?;
        }
    }
    Ok(())
}
