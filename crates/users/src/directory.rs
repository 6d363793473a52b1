//! In-memory user directory (email uniqueness, password hashing).

use std::collections::HashMap;
use std::sync::RwLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use kontor_core::{DomainError, UserId};

use crate::user::{normalize_email, NewUser, User, UserError};

/// Registry of users keyed by normalized email.
///
/// Check-then-insert runs under a single write lock, so two concurrent
/// creations of the same email cannot both succeed.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: RwLock<HashMap<String, User>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a regular user.
    ///
    /// Normalizes the email, hashes the password when one is given, and
    /// defaults `is_staff`/`is_superuser` to false and `is_active` to true.
    /// Fails with [`UserError::MissingEmail`] when no email is given and
    /// [`UserError::DuplicateEmail`] when the normalized email is taken.
    pub fn create_user(&self, new_user: NewUser) -> Result<User, UserError> {
        let email = normalize_email(&new_user.email);
        if email.is_empty() {
            return Err(UserError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(DomainError::validation("invalid email format").into());
        }

        let password_hash = match &new_user.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let user = User {
            id: UserId::new(),
            email: email.clone(),
            first_name: new_user.first_name.trim().to_string(),
            last_name: new_user.last_name.trim().to_string(),
            is_staff: new_user.is_staff.unwrap_or(false),
            is_superuser: new_user.is_superuser.unwrap_or(false),
            is_active: new_user.is_active.unwrap_or(true),
            password_hash,
        };

        let mut users = self.users.write().unwrap();
        if users.contains_key(&email) {
            return Err(UserError::DuplicateEmail(email));
        }
        users.insert(email, user.clone());

        tracing::info!(email = %user.email, is_superuser = user.is_superuser, "user created");
        Ok(user)
    }

    /// Create and store a superuser.
    ///
    /// Defaults `is_staff`, `is_superuser` and `is_active` to true and fails
    /// when `is_staff` or `is_superuser` is explicitly set false. First and
    /// last name are required for privileged-account creation.
    pub fn create_superuser(&self, mut new_user: NewUser) -> Result<User, UserError> {
        if new_user.is_staff == Some(false) {
            return Err(DomainError::validation("superuser must have is_staff=true").into());
        }
        if new_user.is_superuser == Some(false) {
            return Err(DomainError::validation("superuser must have is_superuser=true").into());
        }
        if new_user.first_name.trim().is_empty() || new_user.last_name.trim().is_empty() {
            return Err(DomainError::validation(
                "first and last name are required for superuser creation",
            )
            .into());
        }

        new_user.is_staff = Some(true);
        new_user.is_superuser = Some(true);
        new_user.is_active = Some(new_user.is_active.unwrap_or(true));

        self.create_user(new_user)
    }

    /// Look up a user by (raw) email.
    pub fn get_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().unwrap();
        users.get(&normalize_email(email)).cloned()
    }

    /// Verify a candidate password against the stored hash.
    ///
    /// Users without a usable password never verify.
    pub fn verify_password(&self, email: &str, candidate: &str) -> bool {
        let Some(user) = self.get_by_email(email) else {
            return false;
        };
        let Some(stored) = user.password_hash.as_deref() else {
            return false;
        };
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn hash_password(password: &str) -> Result<String, UserError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}
