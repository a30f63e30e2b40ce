//! Frontend Models
//!
//! Data structures matching the `/api` JSON payloads.

use serde::{Deserialize, Serialize};

/// Server-assigned key for notes and categories
pub type Key = i64;

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub id: Key,
    pub title: String,
    pub content: String,
    /// Set once the note has been triaged into a category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Key>,
}

impl Note {
    pub fn is_triaged(&self) -> bool {
        self.category_id.is_some()
    }
}

/// Triage category (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: Key,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAdmin {
    pub db_name: String,
}

/// Logged in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<UserAdmin>,
}

impl User {
    /// Label shown in the top bar
    pub fn display_name(&self) -> String {
        match &self.admin {
            Some(admin) => format!("{} ({})", self.username, admin.db_name),
            None => self.username.clone(),
        }
    }
}

// ========================
// Request Payloads
// ========================

/// Note body without a server key, used for create and edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtoNote {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProtoCategory<'a> {
    pub title: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub magic_word: &'a str,
}
