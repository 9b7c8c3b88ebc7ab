//! Career Portal CLI
//!
//! Command-line client for the Career Portal backend: browse jobs and
//! companies, manage postings and applications, export candidate reports.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use careerportal_cli::application_cmd::{self, ApplicationAction, ApplyArgs};
use careerportal_cli::args::GlobalArgs;
use careerportal_cli::auth_cmd::{self, AuthAction};
use careerportal_cli::company_cmd::{self, CompanyAction};
use careerportal_cli::jobs_cmd::{self, JobsAction};
use careerportal_cli::profile_cmd::{self, ProfileAction};
use careerportal_cli::register_cmd::{self, RegisterAction};
use careerportal_cli::report_cmd::{self, ReportArgs};
use careerportal_cli::view::ViewContext;
use careerportal_core::api::ApiClient;
use careerportal_core::session::FileStorage;
use careerportal_core::{SessionStore, config, tracing_init};

#[derive(Parser, Debug)]
#[command(name = "careerportal")]
#[command(version, about = "Career Portal command-line client", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in, log out, or show who is signed in
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Create a job seeker or employer account
    Register {
        #[command(subcommand)]
        action: RegisterAction,
    },
    /// Browse or manage job postings
    Jobs {
        #[command(subcommand)]
        action: JobsAction,
    },
    /// Browse the company directory
    Companies {
        #[command(subcommand)]
        action: CompanyAction,
    },
    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Apply to a job
    Apply(ApplyArgs),
    /// Review applications
    Applications {
        #[command(subcommand)]
        action: ApplicationAction,
    },
    /// Candidate report (employers)
    Report(ReportArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_init::init_tracing("careerportal=warn", cli.global.log_json);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting careerportal CLI");

    let mut config = config::load_config()?;
    cli.global.apply(&mut config);

    let session_path = config
        .session_path()
        .context("Cannot determine home directory; pass --session-file")?;
    let mut session = SessionStore::new(FileStorage::new(session_path));
    session.restore()?;

    let api = ApiClient::new(&config)?.with_session(&session);

    // Ctrl-C tears the view down: abort whatever request is in flight.
    let cancel = api.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; cancelling requests");
            cancel.cancel();
        }
    });

    let mut ctx = ViewContext::new(session, api);
    match cli.command {
        Commands::Auth { action } => auth_cmd::run(action, &mut ctx).await,
        Commands::Register { action } => register_cmd::run(action, &ctx).await,
        Commands::Jobs { action } => jobs_cmd::run(action, &ctx).await,
        Commands::Companies { action } => company_cmd::run(action, &ctx).await,
        Commands::Profile { action } => profile_cmd::run(action, &ctx).await,
        Commands::Apply(args) => application_cmd::apply(args, &ctx).await,
        Commands::Applications { action } => application_cmd::run(action, &ctx).await,
        Commands::Report(args) => report_cmd::run(args, &ctx).await,
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_accepted_after_subcommand() {
        let cli = Cli::parse_from([
            "careerportal",
            "jobs",
            "list",
            "--api-url",
            "http://portal.test/api",
            "--timeout",
            "3",
        ]);
        assert_eq!(cli.global.api_url.as_deref(), Some("http://portal.test/api"));
        assert_eq!(cli.global.timeout, Some(3));
        assert!(matches!(cli.command, Commands::Jobs { action: JobsAction::List { .. } }));
    }

    #[test]
    fn parse_apply_with_resume() {
        let cli = Cli::parse_from(["careerportal", "apply", "42", "--resume", "cv.pdf"]);
        match cli.command {
            Commands::Apply(args) => {
                assert_eq!(args.job_id, 42);
                assert_eq!(args.resume.unwrap().to_str(), Some("cv.pdf"));
            }
            other => panic!("Expected Apply, got {other:?}"),
        }
    }
}
