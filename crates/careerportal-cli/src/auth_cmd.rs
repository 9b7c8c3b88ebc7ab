//! Auth subcommands: login, logout, status.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};

use careerportal_core::{Role, Route};

use crate::view::ViewContext;

/// Auth subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum AuthAction {
    /// Log in with a username or email.
    Login {
        /// Username or email.
        #[arg(short, long)]
        username: String,
        /// Password.
        #[arg(short, long, env = "CAREERPORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Log out and forget the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

/// Execute an auth subcommand.
pub async fn run(action: AuthAction, ctx: &mut ViewContext) -> anyhow::Result<()> {
    match action {
        AuthAction::Login { username, password } => login(ctx, &username, &password).await,
        AuthAction::Logout => logout(ctx),
        AuthAction::Status => status(ctx),
    }
}

async fn login(ctx: &mut ViewContext, username: &str, password: &str) -> anyhow::Result<()> {
    ctx.enter(Route::Login)?;
    let role = ctx.session.login(&ctx.api, username, password).await?;
    ctx.refresh_credential();

    let mut out = io::stdout();
    writeln!(out, "Login Successful! Signed in as {role}")?;
    match role {
        Role::Employer => writeln!(out, "Next: careerportal jobs mine")?,
        Role::JobSeeker => writeln!(out, "Next: careerportal jobs list")?,
        Role::Unknown => writeln!(
            out,
            "Your account role was not recognised; only public views are available."
        )?,
    }
    Ok(())
}

fn logout(ctx: &mut ViewContext) -> anyhow::Result<()> {
    ctx.session.logout()?;
    ctx.refresh_credential();
    writeln!(io::stdout(), "Logged out")?;
    Ok(())
}

fn status(ctx: &ViewContext) -> anyhow::Result<()> {
    let mut out = io::stdout();
    match ctx.role() {
        Some(role) if ctx.session.is_authenticated() => {
            writeln!(out, "Logged in as: {role}")?;
        }
        _ => writeln!(out, "Not logged in")?,
    }
    writeln!(out, "Server: {}", ctx.api.base_url())?;
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
        action: AuthAction,
    }

    #[test]
    fn parse_login() {
        let cli = TestCli::parse_from(["test", "login", "-u", "jo@example.com", "-p", "Passw0rd!"]);
        match cli.action {
            AuthAction::Login { username, password } => {
                assert_eq!(username, "jo@example.com");
                assert_eq!(password, "Passw0rd!");
            }
            other => panic!("Expected Login, got {other:?}"),
        }
    }

    #[test]
    fn parse_logout_and_status() {
        assert!(matches!(
            TestCli::parse_from(["test", "logout"]).action,
            AuthAction::Logout
        ));
        assert!(matches!(
            TestCli::parse_from(["test", "status"]).action,
            AuthAction::Status
        ));
    }

    #[test]
    fn login_requires_username() {
        assert!(TestCli::try_parse_from(["test", "login", "-p", "x"]).is_err());
    }
}
