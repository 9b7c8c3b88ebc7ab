//! Client session: the persisted credential and the role derived from it.
//!
//! The role only gates navigation. The backend re-authorizes every request,
//! so nothing here is a security boundary.

pub mod claims;
mod role;
pub mod storage;
mod store;

pub use claims::{RoleClaim, Unrecognized, decode_role};
pub use role::Role;
pub use storage::{FileStorage, MemoryStorage, ROLE_KEY, SessionStorage, TOKEN_KEY};
pub use store::{Authenticator, SessionStore};
