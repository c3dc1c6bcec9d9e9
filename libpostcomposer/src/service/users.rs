//! User directory service
//!
//! List/create operations over user records. The identity provider stays the
//! source of truth for authentication; these records mirror profile data for
//! in-app display.

use std::sync::Arc;

use crate::error::ComposerError;
use crate::identity::SessionUser;
use crate::types::{NewUser, User, UserSummary};
use crate::{Database, Result};

/// Message returned when a create request carries no email
pub const EMAIL_REQUIRED: &str = "Email is required";

#[derive(Clone)]
pub struct UserService {
    db: Arc<Database>,
}

impl UserService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// List all users
    ///
    /// No pagination, filtering, or sorting beyond insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let users = self.db.list_users().await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }

    /// Create a user
    ///
    /// Only `email` is required. Its format is not validated and uniqueness is
    /// left to the store's constraint.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `email` is missing or empty, and a database
    /// error when the insert fails (including a duplicate email).
    pub async fn create_user(&self, input: NewUser) -> Result<User> {
        let email = match input.email {
            Some(email) if !email.is_empty() => email,
            _ => return Err(ComposerError::InvalidInput(EMAIL_REQUIRED.to_string())),
        };

        let user = User {
            name: input.name,
            username: input.username,
            clerk_id: input.clerk_id,
            ..User::new(email)
        };

        self.db.create_user(&user).await?;
        tracing::info!(user_id = %user.id, "Created user");

        Ok(user)
    }

    /// Make sure the signed-in principal has a directory record
    ///
    /// Returns the existing record when one with the same email is present,
    /// otherwise creates it from the session's profile fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the session user has no email, or a
    /// database error.
    pub async fn ensure_user(&self, session_user: &SessionUser) -> Result<User> {
        let email = session_user
            .primary_email
            .clone()
            .filter(|email| !email.is_empty())
            .ok_or_else(|| ComposerError::InvalidInput(EMAIL_REQUIRED.to_string()))?;

        if let Some(existing) = self.db.get_user_by_email(&email).await? {
            tracing::debug!(user_id = %existing.id, "Directory user already present");
            return Ok(existing);
        }

        self.create_user(NewUser {
            email: Some(email),
            name: session_user.full_name.clone(),
            username: session_user.username.clone(),
            clerk_id: session_user.external_id.clone(),
        })
        .await
    }
}
