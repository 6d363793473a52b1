//! User record and creation input.

use serde::Serialize;

use kontor_core::{DomainError, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// User creation/lookup error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    /// Email is the login identifier and must always be set.
    #[error("the email field must be set")]
    MissingEmail,

    /// Another user already owns this (normalized) email.
    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),

    /// The password hasher reported a failure.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

// ─────────────────────────────────────────────────────────────────────────────
// User record
// ─────────────────────────────────────────────────────────────────────────────

/// Identity record keyed by a unique email address.
///
/// # Invariants
/// - `email` is normalized (trimmed, domain part lowercased) and unique
///   within a [`crate::UserDirectory`].
/// - The password is stored as an Argon2 hash, never plaintext, and never
///   serialized outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub(crate) password_hash: Option<String>,
}

impl User {
    /// Whether this account has a password it can authenticate with.
    pub fn has_usable_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Input for [`crate::UserDirectory::create_user`] / `create_superuser`.
///
/// The `is_*` flags are optional so the factory can apply defaults and tell
/// "not given" apart from "explicitly set" (superuser creation rejects
/// explicitly-false staff/superuser flags).
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
}

impl NewUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }
}

/// Normalize an email for storage and uniqueness checks.
///
/// Trims surrounding whitespace and lowercases the domain part (the local
/// part is preserved as given).
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_domain_only() {
        assert_eq!(
            normalize_email("  Alice.Smith@EXAMPLE.Com "),
            "Alice.Smith@example.com"
        );
    }

    #[test]
    fn normalize_keeps_addresses_without_at_sign() {
        assert_eq!(normalize_email("nonsense"), "nonsense");
    }
}
