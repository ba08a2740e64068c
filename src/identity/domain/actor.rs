//! Actor identity, email validation, and role derivation.

use super::{IdentityDomainError, ParseRoleError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated email address identifying an authenticated actor.
///
/// Equality is exact: creator matching never normalises case, mirroring the
/// identity provider's session email verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorEmail(String);

impl ActorEmail {
    /// Creates a validated actor email.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyEmail`] when the value is empty
    /// after trimming, or [`IdentityDomainError::EmailContainsWhitespace`]
    /// when interior whitespace remains.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(IdentityDomainError::EmptyEmail);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(IdentityDomainError::EmailContainsWhitespace(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActorEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorEmail {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Visibility role of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular operator; sees only records they created.
    Operator,
    /// Supervisor; sees every record in the matrix.
    Supervisor,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Supervisor => "supervisor",
        }
    }

    /// Returns whether this role is exempt from creator scoping.
    #[must_use]
    pub const fn sees_all_records(self) -> bool {
        matches!(self, Self::Supervisor)
    }

    /// Derives a role from the actor's email address.
    ///
    /// Supervisors are recognised when the lowercased email contains the
    /// substring `jack` or `admin`. This is the default derivation used when
    /// no role has been assigned explicitly.
    #[must_use]
    pub fn infer_from_email(email: &ActorEmail) -> Self {
        let lowered = email.as_str().to_ascii_lowercase();
        if lowered.contains("jack") || lowered.contains("admin") {
            Self::Supervisor
        } else {
            Self::Operator
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "operator" => Ok(Self::Operator),
            "supervisor" => Ok(Self::Supervisor),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Authenticated actor with a resolved visibility role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    email: ActorEmail,
    role: Role,
}

impl Actor {
    /// Creates an actor whose role is derived from the email address.
    #[must_use]
    pub fn from_email(email: ActorEmail) -> Self {
        let role = Role::infer_from_email(&email);
        Self { email, role }
    }

    /// Creates an actor with an explicitly assigned role.
    #[must_use]
    pub const fn with_role(email: ActorEmail, role: Role) -> Self {
        Self { email, role }
    }

    /// Returns the actor's email.
    #[must_use]
    pub const fn email(&self) -> &ActorEmail {
        &self.email
    }

    /// Returns the actor's visibility role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this actor may view a record created by `creator`.
    #[must_use]
    pub fn can_view(&self, creator: &ActorEmail) -> bool {
        self.role.sees_all_records() || self.email == *creator
    }
}
