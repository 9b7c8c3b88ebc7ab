use std::future::Future;

use tracing::{debug, info, warn};

use super::Role;
use super::claims::{RoleClaim, decode_role};
use super::storage::{ROLE_KEY, SessionStorage, TOKEN_KEY};
use crate::api::ApiError;
use crate::error::Result;
use crate::validation;

/// Exchanges login credentials for a bearer token.
pub trait Authenticator {
    fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> impl Future<Output = std::result::Result<String, ApiError>> + Send;
}

/// Holds the credential and role for the running client.
///
/// Created once at start-up, [`restore`](Self::restore)d before the first
/// route is evaluated, then passed to every view.
pub struct SessionStore {
    storage: Box<dyn SessionStorage + Send>,
    credential: Option<String>,
    role: Option<Role>,
    restored: bool,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.credential.is_some())
            .field("role", &self.role)
            .field("restored", &self.restored)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + Send + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            credential: None,
            role: None,
            restored: false,
        }
    }

    /// Rehydrate from storage. Authenticated only when both entries exist.
    pub fn restore(&mut self) -> Result<()> {
        let token = self.storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let role = self.storage.get(ROLE_KEY)?;
        match (token, role) {
            (Some(token), Some(role)) => {
                let role = Role::from_claim(&role);
                debug!(%role, "Restored session");
                self.credential = Some(token);
                self.role = Some(role);
            }
            _ => {
                debug!("No stored session");
                self.credential = None;
                self.role = None;
            }
        }
        self.restored = true;
        Ok(())
    }

    /// Authenticate, derive the role from the returned token, and persist both.
    ///
    /// A token whose role claim cannot be read still logs in, with
    /// `Role::Unknown`; the condition is reported as a warning.
    pub async fn login<A: Authenticator>(
        &mut self,
        auth: &A,
        identifier: &str,
        secret: &str,
    ) -> Result<Role> {
        validation::validate_login(identifier, secret)?;

        let token = auth.authenticate(identifier.trim(), secret).await?;
        let claim = decode_role(&token);
        if let RoleClaim::Unrecognized(reason) = &claim {
            warn!(%reason, "Token role claim not recognised; continuing with unknown role");
        }
        let role = claim.role();

        self.storage.set(TOKEN_KEY, &token)?;
        if let Err(err) = self.storage.set(ROLE_KEY, role.as_claim()) {
            // A lone token entry must not outlive a failed login.
            if let Err(cleanup) = self.storage.remove(TOKEN_KEY) {
                warn!(error = %cleanup, "Failed to discard token after role write failed");
            }
            return Err(err);
        }
        self.credential = Some(token);
        self.role = Some(role);
        self.restored = true;

        info!(%role, "Logged in");
        Ok(role)
    }

    /// Clear the persisted entries and in-memory state. Idempotent.
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(ROLE_KEY)?;
        if self.credential.take().is_some() {
            info!("Logged out");
        }
        self.role = None;
        Ok(())
    }

    pub const fn is_restored(&self) -> bool {
        self.restored
    }

    pub const fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_employer(&self) -> bool {
        self.role == Some(Role::Employer)
    }

    pub fn is_job_seeker(&self) -> bool {
        self.role == Some(Role::JobSeeker)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::Error;
    use crate::session::claims::tests::token_with;
    use crate::session::storage::{FileStorage, MemoryStorage};

    /// Authenticator returning a fixed response.
    struct FixedAuth(std::result::Result<String, u16>);

    impl Authenticator for FixedAuth {
        fn authenticate(
            &self,
            _identifier: &str,
            _secret: &str,
        ) -> impl Future<Output = std::result::Result<String, ApiError>> + Send {
            let result = self.0.clone().map_err(|status| ApiError::Api {
                status,
                message: "Invalid username or password".into(),
            });
            async move { result }
        }
    }

    fn bearer(payload: &str) -> FixedAuth {
        FixedAuth(Ok(format!("Bearer {}", token_with(payload))))
    }

    /// Shared in-memory storage that refuses to write the role entry.
    #[derive(Clone, Default)]
    struct RoleWriteFails(Arc<Mutex<MemoryStorage>>);

    impl SessionStorage for RoleWriteFails {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.lock().unwrap().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if key == ROLE_KEY {
                return Err(Error::Storage("disk full".into()));
            }
            self.0.lock().unwrap().set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.0.lock().unwrap().remove(key)
        }
    }

    #[tokio::test]
    async fn failed_role_write_leaves_nothing_behind() {
        let storage = RoleWriteFails::default();
        let mut store = SessionStore::new(storage.clone());
        store.restore().unwrap();
        let auth = bearer(r#"{"authorities":["ROLE_EMPLOYER"]}"#);

        let err = store.login(&auth, "acme", "S3cret!pw").await.unwrap_err();

        assert!(matches!(err, Error::Storage(_)));
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn login_with_authorities_yields_employer() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore().unwrap();
        let auth = bearer(r#"{"authorities":["ROLE_EMPLOYER"]}"#);

        let role = store.login(&auth, "acme", "S3cret!pw").await.unwrap();

        assert_eq!(role, Role::Employer);
        assert!(store.is_authenticated());
        assert!(store.is_employer());
        assert!(!store.is_job_seeker());
    }

    #[tokio::test]
    async fn login_persists_token_and_role_claim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let auth = bearer(r#"{"authorities":["ROLE_EMPLOYER"]}"#);

        let mut store = SessionStore::new(FileStorage::new(&path));
        store.restore().unwrap();
        store.login(&auth, "acme", "S3cret!pw").await.unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(
            storage.get(ROLE_KEY).unwrap().as_deref(),
            Some("ROLE_EMPLOYER")
        );
        let token = storage.get(TOKEN_KEY).unwrap().unwrap();
        assert!(token.starts_with("Bearer "));
        assert_eq!(store.credential(), Some(token.as_str()));
    }

    #[tokio::test]
    async fn login_without_role_claim_is_unknown_not_error() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let auth = bearer(r#"{"sub":"alice"}"#);

        let role = store.login(&auth, "alice", "pw").await.unwrap();

        assert_eq!(role, Role::Unknown);
        assert!(store.is_authenticated());
        assert!(!store.is_employer());
        assert!(!store.is_job_seeker());
    }

    #[tokio::test]
    async fn login_with_opaque_token_is_unknown_not_error() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let auth = FixedAuth(Ok("Bearer not-a-jwt".into()));
        assert_eq!(store.login(&auth, "alice", "pw").await.unwrap(), Role::Unknown);
        assert_eq!(store.credential(), Some("Bearer not-a-jwt"));
    }

    #[tokio::test]
    async fn rejected_login_leaves_session_untouched() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.restore().unwrap();
        let err = store
            .login(&FixedAuth(Err(401)), "alice", "wrong")
            .await
            .unwrap_err();
        match err {
            Error::Api(ApiError::Api { status, .. }) => assert_eq!(status, 401),
            other => panic!("Expected Api error, got {other:?}"),
        }
        assert!(!store.is_authenticated());
        assert_eq!(store.role(), None);
    }

    #[tokio::test]
    async fn blank_credentials_never_reach_the_backend() {
        let mut store = SessionStore::new(MemoryStorage::new());
        // A backend that would accept anything.
        let auth = bearer(r#"{"role":"ROLE_EMPLOYER"}"#);
        let err = store.login(&auth, "  ", "").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn restore_after_login_in_new_process() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let auth = bearer(r#"{"roles":"ROLE_JOB_SEEKER"}"#);
        SessionStore::new(FileStorage::new(&path))
            .login(&auth, "jo", "pw")
            .await
            .unwrap();

        let mut store = SessionStore::new(FileStorage::new(&path));
        assert!(!store.is_restored());
        store.restore().unwrap();
        assert!(store.is_restored());
        assert!(store.is_authenticated());
        assert!(store.is_job_seeker());
    }

    #[tokio::test]
    async fn logout_then_restore_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let auth = bearer(r#"{"authorities":["ROLE_EMPLOYER"]}"#);

        let mut store = SessionStore::new(FileStorage::new(&path));
        store.login(&auth, "acme", "pw").await.unwrap();
        store.logout().unwrap();
        store.logout().unwrap();

        let mut fresh = SessionStore::new(FileStorage::new(&path));
        fresh.restore().unwrap();
        assert!(!fresh.is_authenticated());
        assert_eq!(fresh.credential(), None);
        assert_eq!(fresh.role(), None);
    }

    #[test]
    fn restore_requires_both_entries() {
        let mut storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "Bearer abc").unwrap();
        let mut store = SessionStore::new(storage);
        store.restore().unwrap();
        assert!(store.is_restored());
        assert!(!store.is_authenticated());

        let mut storage = MemoryStorage::new();
        storage.set(ROLE_KEY, "ROLE_EMPLOYER").unwrap();
        let mut store = SessionStore::new(storage);
        store.restore().unwrap();
        assert!(!store.is_authenticated());
        assert_eq!(store.role(), None);
    }

    #[test]
    fn restore_maps_stored_role_string() {
        let mut storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "Bearer abc").unwrap();
        storage.set(ROLE_KEY, "ROLE_JOB_SEEKER").unwrap();
        let mut store = SessionStore::new(storage);
        store.restore().unwrap();
        assert!(store.is_job_seeker());
        assert_eq!(store.credential(), Some("Bearer abc"));
    }
}
