use std::fmt;

/// Coarse permission class carried by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Employer,
    JobSeeker,
    Unknown,
}

impl Role {
    pub const EMPLOYER_CLAIM: &'static str = "ROLE_EMPLOYER";
    pub const JOB_SEEKER_CLAIM: &'static str = "ROLE_JOB_SEEKER";
    pub const UNKNOWN_CLAIM: &'static str = "UNKNOWN";

    /// Map a backend authority string onto a role. Anything unfamiliar is `Unknown`.
    pub fn from_claim(claim: &str) -> Self {
        match claim.trim() {
            Self::EMPLOYER_CLAIM => Self::Employer,
            Self::JOB_SEEKER_CLAIM => Self::JobSeeker,
            _ => Self::Unknown,
        }
    }

    /// Canonical string persisted in session storage.
    pub const fn as_claim(self) -> &'static str {
        match self {
            Self::Employer => Self::EMPLOYER_CLAIM,
            Self::JobSeeker => Self::JOB_SEEKER_CLAIM,
            Self::Unknown => Self::UNKNOWN_CLAIM,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::JobSeeker => "job seeker",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
