//! The authenticated user record.
//!
//! An `Identity` is created by a successful registration or login, replaced
//! wholesale by a successful profile update, and destroyed by logout. It is
//! either fully present or fully absent; no partial state exists.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Availability state as issued by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    #[default]
    Active,
    Inactive,
    OnBreak,
}

/// The authenticated user record, as returned by the auth endpoints.
///
/// `created_at` and `updated_at` are kept as the opaque strings the service
/// issues; the service emits naive ISO-8601 timestamps without an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub availability: Availability,
    pub created_at: String,
    pub updated_at: String,
}

impl Identity {
    /// When the account was created, if the stored stamp parses.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        Self::parse_timestamp(&self.created_at)
    }

    /// When the account was last updated, if the stored stamp parses.
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        Self::parse_timestamp(&self.updated_at)
    }

    /// The service emits naive ISO-8601 without an offset; treat it as UTC.
    /// Offset-carrying stamps are accepted too.
    fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        raw.parse::<DateTime<Utc>>()
            .ok()
            .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc()))
    }
}
