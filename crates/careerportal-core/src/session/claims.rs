//! Role claim extraction from the bearer credential.
//!
//! The token is never verified here; only its payload segment is read to
//! decide which views to offer.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};
use thiserror::Error;

use super::Role;

const BEARER_PREFIX: &str = "Bearer ";

/// Outcome of reading the role claim out of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleClaim {
    /// A claim was present. The role is `Unknown` when the claim string is
    /// not one the client knows.
    Recognized(Role),
    /// No usable claim; the session continues with `Role::Unknown`.
    Unrecognized(Unrecognized),
}

impl RoleClaim {
    pub const fn role(&self) -> Role {
        match self {
            Self::Recognized(role) => *role,
            Self::Unrecognized(_) => Role::Unknown,
        }
    }
}

/// Why a token yielded no role claim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unrecognized {
    #[error("token is not three dot-separated segments")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not a JSON object")]
    Payload,
    #[error("token payload carries no role claim")]
    NoClaim,
}

/// Decode the role carried by a bearer token.
///
/// Claim precedence: `authorities` array, then a comma-separated `roles`
/// string, then a `roles` array, then a singular `role` string. A shape only
/// counts when it yields a non-empty name.
pub fn decode_role(token: &str) -> RoleClaim {
    match payload(token) {
        Ok(payload) => claim_name(&payload).map_or(
            RoleClaim::Unrecognized(Unrecognized::NoClaim),
            |name| RoleClaim::Recognized(Role::from_claim(name)),
        ),
        Err(reason) => RoleClaim::Unrecognized(reason),
    }
}

fn payload(token: &str) -> Result<Map<String, Value>, Unrecognized> {
    let token = token.trim();
    let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token).trim();

    let segments: Vec<&str> = token.split('.').collect();
    let [_, body, _] = segments.as_slice() else {
        return Err(Unrecognized::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(body.trim_end_matches('='))
        .map_err(|_| Unrecognized::Encoding)?;
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(Unrecognized::Payload),
    }
}

fn claim_name(payload: &Map<String, Value>) -> Option<&str> {
    let authorities = payload
        .get("authorities")
        .and_then(Value::as_array)
        .and_then(|list| first_name(list));
    let roles_string = payload
        .get("roles")
        .and_then(Value::as_str)
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let roles_array = payload
        .get("roles")
        .and_then(Value::as_array)
        .and_then(|list| first_name(list));
    let role = payload
        .get("role")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());

    authorities.or(roles_string).or(roles_array).or(role)
}

/// First entry of a claim list. Spring serializes authorities either as bare
/// strings or as `{"authority": "..."}` objects.
fn first_name(list: &[Value]) -> Option<&str> {
    let first = list.first()?;
    first
        .as_str()
        .or_else(|| first.get("authority").and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
