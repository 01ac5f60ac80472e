//! User profile data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A family member's profile.
///
/// Built exactly once by the creation rules in [`super::creation`], then
/// handed by value to the directory, which owns it from there on. This crate
/// never mutates a profile after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique ID, generated at creation time and never reused.
    pub id: Uuid,
    /// Display name, trimmed and non-empty.
    pub name: String,
    /// Emoji avatar shown next to the name.
    pub avatar_emoji: String,
    /// Accent color as a normalized `#RRGGBB` string.
    pub color: String,
    /// Whether this profile is the active session identity.
    pub is_current_user: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}
