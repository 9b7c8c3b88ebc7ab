//! Job subcommands: browse postings as a job seeker, manage them as an employer.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};

use careerportal_core::Route;
use careerportal_core::api::{JobFilters, JobForm};
use careerportal_core::validation::validate_job_form;

use crate::fmt::{write_job_detail, write_job_table};
use crate::view::ViewContext;

/// Job subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum JobsAction {
    /// Browse open positions.
    List {
        /// Match title, description or skills.
        #[arg(short, long)]
        keyword: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
        /// Experience level.
        #[arg(short, long)]
        experience: Option<String>,
    },
    /// Show one posting.
    Show {
        /// Job ID.
        id: i64,
    },
    /// List the postings you own (employers).
    Mine,
    /// Create a posting (employers).
    Post(JobFields),
    /// Change a posting; omitted fields keep their current value (employers).
    Edit {
        /// Job ID.
        id: i64,
        #[command(flatten)]
        fields: JobFields,
    },
    /// Delete a posting (employers).
    Delete {
        /// Job ID.
        id: i64,
    },
}

/// Posting fields accepted by `post` and `edit`.
#[derive(clap::Args, Debug, Default)]
pub struct JobFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Comma-separated skills.
    #[arg(long)]
    pub skills: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub experience: Option<String>,
    #[arg(long)]
    pub functional_area: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(long)]
    pub salary: Option<String>,
}

impl JobFields {
    /// Overwrite the form fields that were given on the command line.
    pub fn apply_to(self, form: &mut JobForm) {
        let pairs = [
            (self.title, &mut form.job_title),
            (self.position, &mut form.job_position),
            (self.description, &mut form.description),
            (self.skills, &mut form.required_skills),
            (self.location, &mut form.location),
            (self.experience, &mut form.experience_level),
            (self.functional_area, &mut form.functional_area),
            (self.industry, &mut form.industry),
            (self.salary, &mut form.salary_details),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Execute a jobs subcommand.
pub async fn run(action: JobsAction, ctx: &ViewContext) -> anyhow::Result<()> {
    let mut out = io::stdout();
    match action {
        JobsAction::List {
            keyword,
            location,
            experience,
        } => {
            ctx.enter(Route::Jobs)?;
            let filters = JobFilters {
                keyword,
                location,
                experience,
            };
            let jobs = ctx.api.list_jobs(&filters).await?;
            if jobs.is_empty() {
                writeln!(out, "No jobs found.")?;
            } else {
                write_job_table(&mut out, &jobs)?;
                writeln!(out, "Apply with: careerportal apply <ID> --resume <file.pdf>")?;
            }
        }
        JobsAction::Show { id } => {
            ctx.enter(Route::Jobs)?;
            let job = ctx.api.get_job(id).await?;
            write_job_detail(&mut out, &job)?;
        }
        JobsAction::Mine => {
            ctx.enter(Route::Dashboard)?;
            let jobs = ctx.api.list_employer_jobs().await?;
            if jobs.is_empty() {
                writeln!(out, "You have not posted any jobs yet.")?;
            } else {
                write_job_table(&mut out, &jobs)?;
            }
        }
        JobsAction::Post(fields) => {
            ctx.enter(Route::PostJob)?;
            let mut form = JobForm::default();
            fields.apply_to(&mut form);
            validate_job_form(&form)?;
            let job = ctx.api.create_job(&form).await?;
            writeln!(out, "Job posted (ID {}).", job.id)?;
        }
        JobsAction::Edit { id, fields } => {
            ctx.enter(Route::EditJob(id))?;
            let current = ctx.api.get_job(id).await?;
            let mut form = JobForm::from(&current);
            fields.apply_to(&mut form);
            validate_job_form(&form)?;
            ctx.api.update_job(id, &form).await?;
            writeln!(out, "Job {id} updated.")?;
        }
        JobsAction::Delete { id } => {
            ctx.enter(Route::Dashboard)?;
            ctx.api.delete_job(id).await?;
            writeln!(out, "Job {id} deleted.")?;
        }
    }
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
        action: JobsAction,
    }

    #[test]
    fn parse_list_filters() {
        let cli = TestCli::parse_from(["test", "list", "-k", "rust", "--location", "Pune"]);
        match cli.action {
            JobsAction::List {
                keyword,
                location,
                experience,
            } => {
                assert_eq!(keyword.as_deref(), Some("rust"));
                assert_eq!(location.as_deref(), Some("Pune"));
                assert!(experience.is_none());
            }
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn edit_keeps_unspecified_fields() {
        let cli = TestCli::parse_from(["test", "edit", "7", "--salary", "20 LPA"]);
        let JobsAction::Edit { id, fields } = cli.action else {
            panic!("Expected Edit");
        };
        assert_eq!(id, 7);
        let mut form = JobForm {
            job_title: "Dev".into(),
            salary_details: "10 LPA".into(),
            ..Default::default()
        };
        fields.apply_to(&mut form);
        assert_eq!(form.job_title, "Dev");
        assert_eq!(form.salary_details, "20 LPA");
    }

    #[test]
    fn post_without_required_fields_fails_validation() {
        let cli = TestCli::parse_from(["test", "post", "--title", "Dev"]);
        let JobsAction::Post(fields) = cli.action else {
            panic!("Expected Post");
        };
        let mut form = JobForm::default();
        fields.apply_to(&mut form);
        let err = validate_job_form(&form).unwrap_err();
        assert!(err.get("description").is_some());
        assert!(err.get("location").is_some());
        assert!(err.get("jobTitle").is_none());
    }

    #[test]
    fn delete_requires_numeric_id() {
        assert!(TestCli::try_parse_from(["test", "delete", "abc"]).is_err());
    }
}
