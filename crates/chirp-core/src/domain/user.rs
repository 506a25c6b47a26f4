use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// User entity - an account that owns posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// URL-safe handle derived from the username, used for profile lookups.
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID, slug and timestamps.
    ///
    /// Username and email are trimmed and must not be blank. The username
    /// must also contain at least one letter or digit so the slug is
    /// non-empty.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: String,
    ) -> Result<Self, DomainError> {
        let username = required("username", username.into())?;
        let email = required("email", email.into())?;

        let slug = slugify(&username);
        if slug.is_empty() {
            return Err(DomainError::Validation(
                "username must contain a letter or digit".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            slug,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Derive the profile slug for a username.
pub fn slugify(username: &str) -> String {
    slug::slugify(username)
}

fn required(field: &str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_derives_slug() {
        let user = User::new("Becky 567", "starz@aol.com", "hash".to_string()).unwrap();

        assert_eq!(user.username, "Becky 567");
        assert_eq!(user.slug, "becky-567");
    }

    #[test]
    fn slug_transliterates_accents() {
        assert_eq!(slugify("Crème Brûlée!!"), "creme-brulee");
        assert_eq!(slugify("--Zoë  & Friends--"), "zoe-friends");
    }

    #[test]
    fn new_user_trims_fields() {
        let user = User::new("  becky567 ", " starz@aol.com", "hash".to_string()).unwrap();

        assert_eq!(user.username, "becky567");
        assert_eq!(user.email, "starz@aol.com");
    }

    #[test]
    fn blank_username_is_rejected() {
        let result = User::new("   ", "starz@aol.com", "hash".to_string());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn blank_email_is_rejected() {
        let result = User::new("becky567", "", "hash".to_string());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn username_without_alphanumerics_is_rejected() {
        let result = User::new("!!!", "starz@aol.com", "hash".to_string());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Silver  Stallion!"), "silver-stallion");
        assert_eq!(slugify("skittles123"), "skittles123");
    }
}
