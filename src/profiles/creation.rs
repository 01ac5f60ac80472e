//! Profile creation — the validation and defaulting rules.

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::{FALLBACK_COLOR, PLACEHOLDER_AVATAR};
use crate::error::ValidationError;

use super::model::UserProfile;

/// Build a [`UserProfile`] from raw user selections.
///
/// The single validation rule: `raw_name` must be non-empty after trimming
/// surrounding whitespace. There is no length cap, character-set restriction,
/// or duplicate-name check. Absent choices fall back to the catalog defaults.
///
/// No side effects beyond the returned value — registering the profile with
/// a directory is the caller's responsibility.
pub fn create_profile(
    raw_name: &str,
    avatar_choice: Option<&str>,
    color_choice: Option<&str>,
    mark_as_current: bool,
) -> Result<UserProfile, ValidationError> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    Ok(UserProfile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        avatar_emoji: avatar_choice.unwrap_or(PLACEHOLDER_AVATAR).to_string(),
        color: color_choice.unwrap_or(FALLBACK_COLOR).to_string(),
        is_current_user: mark_as_current,
        created_at: Utc::now(),
    })
}

/// Transient selection state owned by a flow while the user is editing.
///
/// Holds whatever the screen has collected so far; discarded once the
/// hand-off succeeds.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    /// Raw name text as typed, untrimmed.
    pub name: String,
    /// Chosen avatar symbol, if any.
    pub avatar: Option<String>,
    /// Chosen accent color, if any.
    pub color: Option<String>,
}

impl ProfileDraft {
    /// UI gating predicate — whether the submit action should be enabled.
    ///
    /// [`create_profile`] re-validates independently of this.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Run the creation rules over the current selections.
    pub fn create(&self, mark_as_current: bool) -> Result<UserProfile, ValidationError> {
        create_profile(
            &self.name,
            self.avatar.as_deref(),
            self.color.as_deref(),
            mark_as_current,
        )
    }
}
