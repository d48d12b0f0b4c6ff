use std::fmt;

use crate::error::{AppError, AppResult};

pub const NAME_KEY: &str = "user.name";
pub const EMAIL_KEY: &str = "user.email";

/// The git identity configured for the working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AppError::MissingConfiguration(NAME_KEY.to_string()));
        }
        let email = email.into();
        if email.is_empty() {
            return Err(AppError::MissingConfiguration(EMAIL_KEY.to_string()));
        }
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
