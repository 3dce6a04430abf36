//! Account schema - customers and staff

use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,

    pub name: String,

    /// Required and strict. Role gates and staff slots key on it, so an
    /// account with an unknown role is rejected instead of guessed.
    pub role: Role,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

impl Account {
    pub fn new(id: i64, name: impl Into<String>, role: Role) -> Self {
        Account {
            id,
            name: name.into(),
            role,
            email: None,
            phone_number: None,
            address: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
