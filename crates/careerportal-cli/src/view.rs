//! View context shared by every subcommand.

use anyhow::bail;
use careerportal_core::api::ApiClient;
use careerportal_core::{Access, Navigation, Role, Route, RouteGuard, SessionStore};

/// The restored session and the API client bound to it.
#[derive(Debug)]
pub struct ViewContext {
    pub session: SessionStore,
    pub api: ApiClient,
}

impl ViewContext {
    pub const fn new(session: SessionStore, api: ApiClient) -> Self {
        Self { session, api }
    }

    /// Open `route`, or fail with the reason the guard redirected.
    pub fn enter(&self, route: Route) -> anyhow::Result<()> {
        match RouteGuard::new(&self.session).navigate(route) {
            Navigation::Render => Ok(()),
            Navigation::Wait => bail!("Session is still loading; try again"),
            Navigation::Redirect(Route::Login) if self.session.is_authenticated() => bail!(
                "Your account role is not recognised. Log in again: careerportal auth login"
            ),
            Navigation::Redirect(Route::Login) => {
                bail!("Not logged in. Run: careerportal auth login")
            }
            Navigation::Redirect(Route::AccessDenied)
                if matches!(route.access(), Access::AllExcept(Role::Employer)) =>
            {
                bail!("Access denied: {route} is not available to employers")
            }
            Navigation::Redirect(Route::AccessDenied) => {
                bail!("Access denied: {route} is only available to employers")
            }
            Navigation::Redirect(Route::CandidateAccessDenied) => {
                bail!("Access denied: {route} is only available to job seekers")
            }
            Navigation::Redirect(other) => bail!("Redirected to {other}"),
        }
    }

    /// Re-bind the API client after the session credential changed.
    pub fn refresh_credential(&mut self) {
        self.api
            .set_token(self.session.credential().map(str::to_owned));
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }
}
