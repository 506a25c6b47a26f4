//! Data Transfer Objects - the url-encoded forms the HTML pages submit.
//!
//! Every field defaults to empty so a missing field reads as blank instead
//! of failing extraction.

use serde::{Deserialize, Serialize};

/// Sign-up form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignupForm {
    /// True when any field is empty or whitespace.
    pub fn has_blank_field(&self) -> bool {
        [&self.username, &self.email, &self.password]
            .iter()
            .any(|v| v.trim().is_empty())
    }
}

/// Log-in form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn has_blank_field(&self) -> bool {
        self.username.trim().is_empty() || self.password.is_empty()
    }
}

/// New and edit post form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_form_detects_blank_fields() {
        let complete = SignupForm {
            username: "skittles123".into(),
            email: "skittles@aol.com".into(),
            password: "rainbows".into(),
        };
        assert!(!complete.has_blank_field());

        let missing_email = SignupForm {
            email: "  ".into(),
            ..complete.clone()
        };
        assert!(missing_email.has_blank_field());
        assert!(SignupForm::default().has_blank_field());
    }

    #[test]
    fn login_form_detects_blank_fields() {
        let form = LoginForm {
            username: "becky567".into(),
            password: String::new(),
        };
        assert!(form.has_blank_field());
    }
}
