//! Route guard: decides, on every navigation, whether a view may render.
//!
//! Decisions are derived from the [`SessionStore`] each time and never cached,
//! so a logout is reflected on the very next navigation.

use std::fmt;

use tracing::debug;

use crate::session::{Role, SessionStore};

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any recognised role.
    SignedIn,
    Role(Role),
    /// Everyone, signed in or not, except holders of this role.
    AllExcept(Role),
}

/// Every view in the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Choose,
    RegisterCandidate,
    RegisterCompany,
    Login,
    Companies,
    AccessDenied,
    CandidateAccessDenied,
    Profile,
    Jobs,
    SubmitApplication(i64),
    EditProfile,
    Dashboard,
    PostJob,
    EditCompanyProfile,
    EditJob(i64),
    JobApplications(i64),
    Report,
}

impl Route {
    pub fn path(self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Choose => "/choose".into(),
            Self::RegisterCandidate => "/candidate".into(),
            Self::RegisterCompany => "/ascompany".into(),
            Self::Login => "/login".into(),
            Self::Companies => "/companies".into(),
            Self::AccessDenied => "/access-denied".into(),
            Self::CandidateAccessDenied => "/access-denied1".into(),
            Self::Profile => "/profile".into(),
            Self::Jobs => "/jobs".into(),
            Self::SubmitApplication(id) => format!("/submit/{id}"),
            Self::EditProfile => "/editprofile".into(),
            Self::Dashboard => "/dashboard".into(),
            Self::PostJob => "/jobpost".into(),
            Self::EditCompanyProfile => "/editcompanyprofile".into(),
            Self::EditJob(id) => format!("/editjob/{id}"),
            Self::JobApplications(id) => format!("/job-applications/{id}"),
            Self::Report => "/report".into(),
        }
    }

    /// Resolve a path. Unknown paths and non-numeric IDs yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        let id = |s: &str| s.parse::<i64>().ok();
        let route = match segments.as_slice() {
            [] => Self::Home,
            ["choose"] => Self::Choose,
            ["candidate"] => Self::RegisterCandidate,
            ["ascompany"] => Self::RegisterCompany,
            ["login"] => Self::Login,
            ["companies"] => Self::Companies,
            ["access-denied"] => Self::AccessDenied,
            ["access-denied1"] => Self::CandidateAccessDenied,
            ["profile"] => Self::Profile,
            ["jobs"] => Self::Jobs,
            ["submit", job] => Self::SubmitApplication(id(job)?),
            ["editprofile"] => Self::EditProfile,
            ["dashboard"] => Self::Dashboard,
            ["jobpost"] => Self::PostJob,
            ["editcompanyprofile"] => Self::EditCompanyProfile,
            ["editjob", job] => Self::EditJob(id(job)?),
            ["job-applications", job] => Self::JobApplications(id(job)?),
            ["report" | "reports"] => Self::Report,
            _ => return None,
        };
        path.starts_with('/').then_some(route)
    }

    pub const fn access(self) -> Access {
        match self {
            Self::Home
            | Self::Choose
            | Self::RegisterCandidate
            | Self::RegisterCompany
            | Self::Login
            | Self::Jobs
            | Self::AccessDenied
            | Self::CandidateAccessDenied => Access::Public,
            Self::Companies => Access::AllExcept(Role::Employer),
            Self::Profile => Access::SignedIn,
            Self::SubmitApplication(_) | Self::EditProfile => Access::Role(Role::JobSeeker),
            Self::Dashboard
            | Self::PostJob
            | Self::EditCompanyProfile
            | Self::EditJob(_)
            | Self::JobApplications(_)
            | Self::Report => Access::Role(Role::Employer),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Session state as seen by a single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// The store has not been restored yet.
    Loading,
    Unauthenticated,
    AuthorizedEmployer,
    AuthorizedJobSeeker,
    /// Signed in, but without the role the route needs.
    Unauthorized,
}

/// What the caller should do with a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show nothing role-dependent until the session is restored.
    Wait,
    Render,
    Redirect(Route),
}

#[derive(Debug, Clone, Copy)]
pub struct RouteGuard<'a> {
    session: &'a SessionStore,
}

impl<'a> RouteGuard<'a> {
    pub const fn new(session: &'a SessionStore) -> Self {
        Self { session }
    }

    /// Classify the session against a route's access rule.
    pub fn evaluate(&self, route: Route) -> GuardState {
        if !self.session.is_restored() {
            return GuardState::Loading;
        }
        if !self.session.is_authenticated() {
            return GuardState::Unauthenticated;
        }
        let role = self.session.role().unwrap_or(Role::Unknown);
        let allowed = match route.access() {
            Access::Public | Access::SignedIn => role != Role::Unknown,
            Access::Role(required) => role == required,
            Access::AllExcept(excluded) => role != excluded && role != Role::Unknown,
        };
        match (allowed, role) {
            (true, Role::Employer) => GuardState::AuthorizedEmployer,
            (true, Role::JobSeeker) => GuardState::AuthorizedJobSeeker,
            _ => GuardState::Unauthorized,
        }
    }

    /// Decide the navigation outcome for `route`.
    pub fn navigate(&self, route: Route) -> Navigation {
        let state = self.evaluate(route);
        let outcome = match (route.access(), state) {
            (_, GuardState::Loading) => Navigation::Wait,
            (Access::AllExcept(excluded), GuardState::Unauthorized)
                if self.session.role() == Some(excluded) =>
            {
                Navigation::Redirect(denied_route(excluded))
            }
            (Access::Public | Access::AllExcept(_), _)
            | (_, GuardState::AuthorizedEmployer | GuardState::AuthorizedJobSeeker) => {
                Navigation::Render
            }
            (_, GuardState::Unauthenticated) => Navigation::Redirect(Route::Login),
            (
                Access::Role(required @ (Role::Employer | Role::JobSeeker)),
                GuardState::Unauthorized,
            ) => Navigation::Redirect(denied_route(required)),
            (_, GuardState::Unauthorized) => Navigation::Redirect(Route::Login),
        };
        debug!(route = %route, ?state, ?outcome, "Route guard decision");
        outcome
    }
}

/// Access-denied view for a rule naming `role`.
const fn denied_route(role: Role) -> Route {
    match role {
        Role::JobSeeker => Route::CandidateAccessDenied,
        Role::Employer | Role::Unknown => Route::AccessDenied,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, ROLE_KEY, SessionStorage, TOKEN_KEY};

    fn session_with(role: Option<&str>) -> SessionStore {
        let mut storage = MemoryStorage::new();
        if let Some(role) = role {
            storage.set(TOKEN_KEY, "Bearer t").unwrap();
            storage.set(ROLE_KEY, role).unwrap();
        }
        let mut store = SessionStore::new(storage);
        store.restore().unwrap();
        store
    }

    const ALL_ROUTES: [Route; 18] = [
        Route::Home,
        Route::Choose,
        Route::RegisterCandidate,
        Route::RegisterCompany,
        Route::Login,
        Route::Companies,
        Route::AccessDenied,
        Route::CandidateAccessDenied,
        Route::Profile,
        Route::Jobs,
        Route::SubmitApplication(3),
        Route::EditProfile,
        Route::Dashboard,
        Route::PostJob,
        Route::EditCompanyProfile,
        Route::EditJob(4),
        Route::JobApplications(5),
        Route::Report,
    ];

    #[test]
    fn loading_never_renders() {
        let mut storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "Bearer t").unwrap();
        storage.set(ROLE_KEY, "ROLE_EMPLOYER").unwrap();
        let store = SessionStore::new(storage);
        let guard = RouteGuard::new(&store);
        for route in ALL_ROUTES {
            assert_eq!(guard.evaluate(route), GuardState::Loading);
            assert_eq!(guard.navigate(route), Navigation::Wait);
        }
    }

    #[test]
    fn signed_out_is_sent_to_login() {
        let store = session_with(None);
        let guard = RouteGuard::new(&store);
        assert_eq!(guard.evaluate(Route::Dashboard), GuardState::Unauthenticated);
        assert_eq!(guard.navigate(Route::Dashboard), Navigation::Redirect(Route::Login));
        assert_eq!(guard.navigate(Route::Profile), Navigation::Redirect(Route::Login));
        assert_eq!(guard.navigate(Route::Companies), Navigation::Render);
    }

    #[test]
    fn employer_on_job_seeker_route_is_redirected() {
        let store = session_with(Some("ROLE_EMPLOYER"));
        let guard = RouteGuard::new(&store);
        assert_eq!(guard.evaluate(Route::EditProfile), GuardState::Unauthorized);
        assert_eq!(
            guard.navigate(Route::EditProfile),
            Navigation::Redirect(Route::CandidateAccessDenied)
        );
        assert_eq!(
            guard.navigate(Route::SubmitApplication(7)),
            Navigation::Redirect(Route::CandidateAccessDenied)
        );
        assert_eq!(guard.navigate(Route::Dashboard), Navigation::Render);
        assert_eq!(guard.evaluate(Route::Report), GuardState::AuthorizedEmployer);
    }

    #[test]
    fn job_seeker_on_employer_route_is_redirected() {
        let store = session_with(Some("ROLE_JOB_SEEKER"));
        let guard = RouteGuard::new(&store);
        assert_eq!(
            guard.navigate(Route::JobApplications(1)),
            Navigation::Redirect(Route::AccessDenied)
        );
        assert_eq!(
            guard.evaluate(Route::SubmitApplication(1)),
            GuardState::AuthorizedJobSeeker
        );
        assert_eq!(guard.navigate(Route::Profile), Navigation::Render);
    }

    #[test]
    fn job_board_is_open_to_everyone() {
        for role in [None, Some("ROLE_EMPLOYER"), Some("ROLE_JOB_SEEKER"), Some("UNKNOWN")] {
            let store = session_with(role);
            assert_eq!(
                RouteGuard::new(&store).navigate(Route::Jobs),
                Navigation::Render,
                "{role:?}"
            );
        }
    }

    #[test]
    fn company_directory_is_closed_to_employers() {
        let employer = session_with(Some("ROLE_EMPLOYER"));
        let guard = RouteGuard::new(&employer);
        assert_eq!(guard.evaluate(Route::Companies), GuardState::Unauthorized);
        assert_eq!(
            guard.navigate(Route::Companies),
            Navigation::Redirect(Route::AccessDenied)
        );

        let job_seeker = session_with(Some("ROLE_JOB_SEEKER"));
        assert_eq!(
            RouteGuard::new(&job_seeker).evaluate(Route::Companies),
            GuardState::AuthorizedJobSeeker
        );
        for role in [None, Some("ROLE_JOB_SEEKER"), Some("UNKNOWN")] {
            let store = session_with(role);
            assert_eq!(
                RouteGuard::new(&store).navigate(Route::Companies),
                Navigation::Render,
                "{role:?}"
            );
        }
    }

    #[test]
    fn unknown_role_gets_public_routes_only() {
        let store = session_with(Some("UNKNOWN"));
        let guard = RouteGuard::new(&store);
        assert_eq!(guard.evaluate(Route::Profile), GuardState::Unauthorized);
        assert_eq!(guard.navigate(Route::Profile), Navigation::Redirect(Route::Login));
        assert_eq!(
            guard.navigate(Route::Dashboard),
            Navigation::Redirect(Route::AccessDenied)
        );
        assert_eq!(guard.navigate(Route::Home), Navigation::Render);
    }

    #[test]
    fn decision_follows_logout() {
        let mut store = session_with(Some("ROLE_EMPLOYER"));
        assert_eq!(RouteGuard::new(&store).navigate(Route::PostJob), Navigation::Render);
        store.logout().unwrap();
        assert_eq!(
            RouteGuard::new(&store).navigate(Route::PostJob),
            Navigation::Redirect(Route::Login)
        );
    }

    #[test]
    fn every_path_parses_back() {
        for route in ALL_ROUTES {
            assert_eq!(Route::parse(&route.path()), Some(route), "{route}");
        }
        assert_eq!(Route::parse("/reports"), Some(Route::Report));
        assert_eq!(Route::parse("/jobs/"), Some(Route::Jobs));
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::parse("/editjob/abc"), None);
        assert_eq!(Route::parse("jobs"), None);
    }
}
