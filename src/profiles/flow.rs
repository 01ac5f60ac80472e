//! Flow controllers — the two screens' decision logic without the screens.
//!
//! `OnboardingFlow` is the first-run name capture; `SetupFlow` is the
//! detailed screen that also picks an avatar and an accent color. Both are
//! call sites of the same creation contract and hand the finished record to
//! the injected [`UserDirectory`].

use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::error::{FlowError, Result};

use super::creation::ProfileDraft;
use super::model::UserProfile;
use super::state::FlowStage;

/// Shared submission path for both flows.
///
/// Validates, creates, registers, marks current where flagged, then advances
/// the stage. A failed submission leaves the stage untouched so the caller
/// can retry with corrected input.
async fn submit_draft(
    stage: &mut FlowStage,
    draft: &ProfileDraft,
    mark_as_current: bool,
    directory: &dyn UserDirectory,
) -> Result<UserProfile> {
    if stage.is_terminal() {
        return Err(FlowError::AlreadySubmitted.into());
    }

    let profile = draft.create(mark_as_current)?;
    directory.add_user(profile.clone()).await?;
    // Only profiles flagged current are ever passed to set_current_user.
    if profile.is_current_user {
        directory.set_current_user(profile.clone()).await?;
    }

    *stage = FlowStage::Submitted;
    tracing::info!(
        profile_id = %profile.id,
        name = %profile.name,
        "Profile created and handed to directory"
    );
    Ok(profile)
}

/// First-run onboarding: captures a name, defaults everything else.
pub struct OnboardingFlow {
    draft: ProfileDraft,
    stage: FlowStage,
    directory: Arc<dyn UserDirectory>,
}

impl OnboardingFlow {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            draft: ProfileDraft::default(),
            stage: FlowStage::default(),
            directory,
        }
    }

    /// Update the name text as the user types.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.stage.is_terminal() && self.draft.can_submit()
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    /// Create the profile and hand it to the directory.
    ///
    /// The first-run profile always becomes the active session identity;
    /// avatar and color take the catalog defaults.
    pub async fn submit(&mut self) -> Result<UserProfile> {
        let profile =
            submit_draft(&mut self.stage, &self.draft, true, self.directory.as_ref()).await?;
        self.draft = ProfileDraft::default();
        Ok(profile)
    }
}

/// Detailed setup: name plus avatar and accent color selections.
pub struct SetupFlow {
    draft: ProfileDraft,
    stage: FlowStage,
    directory: Arc<dyn UserDirectory>,
}

impl SetupFlow {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            draft: ProfileDraft::default(),
            stage: FlowStage::default(),
            directory,
        }
    }

    /// Update the name text as the user types.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Record an avatar selection from the offered set.
    pub fn choose_avatar(&mut self, avatar: impl Into<String>) {
        self.draft.avatar = Some(avatar.into());
    }

    /// Clear the avatar selection back to the placeholder default.
    pub fn clear_avatar(&mut self) {
        self.draft.avatar = None;
    }

    /// Record an accent color selection from the offered set.
    pub fn choose_color(&mut self, color: impl Into<String>) {
        self.draft.color = Some(color.into());
    }

    /// Clear the color selection back to the fallback default.
    pub fn clear_color(&mut self) {
        self.draft.color = None;
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.stage.is_terminal() && self.draft.can_submit()
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    /// Create the profile from the collected selections and hand it to the
    /// directory. The setup flow always marks the new profile current.
    pub async fn submit(&mut self) -> Result<UserProfile> {
        let profile =
            submit_draft(&mut self.stage, &self.draft, true, self.directory.as_ref()).await?;
        self.draft = ProfileDraft::default();
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use crate::catalog::{FALLBACK_COLOR, PLACEHOLDER_AVATAR};
    use crate::error::{DirectoryError, Error, FlowError, ValidationError};

    use super::*;

    /// Stub directory that records the calls it receives.
    #[derive(Default)]
    struct RecordingDirectory {
        calls: Mutex<Vec<(String, UserProfile)>>,
    }

    impl RecordingDirectory {
        async fn calls(&self) -> Vec<(String, UserProfile)> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl UserDirectory for RecordingDirectory {
        async fn add_user(&self, profile: UserProfile) -> std::result::Result<(), DirectoryError> {
            self.calls.lock().await.push(("add_user".to_string(), profile));
            Ok(())
        }

        async fn set_current_user(
            &self,
            profile: UserProfile,
        ) -> std::result::Result<(), DirectoryError> {
            self.calls
                .lock()
                .await
                .push(("set_current_user".to_string(), profile));
            Ok(())
        }
    }

    #[tokio::test]
    async fn onboarding_submit_defaults_and_marks_current() {
        let directory = Arc::new(RecordingDirectory::default());
        let mut flow = OnboardingFlow::new(Arc::clone(&directory) as Arc<dyn UserDirectory>);

        flow.set_name("  Alice  ");
        assert!(flow.can_submit());

        let profile = flow.submit().await.unwrap();
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.avatar_emoji, PLACEHOLDER_AVATAR);
        assert_eq!(profile.color, FALLBACK_COLOR);
        assert!(profile.is_current_user);
        assert_eq!(flow.stage(), FlowStage::Submitted);

        let calls = directory.calls().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "add_user");
        assert_eq!(calls[1].0, "set_current_user");
        assert_eq!(calls[0].1, profile);
        assert_eq!(calls[1].1, profile);
    }

    #[tokio::test]
    async fn setup_submit_carries_selections() {
        let directory = Arc::new(RecordingDirectory::default());
        let mut flow = SetupFlow::new(Arc::clone(&directory) as Arc<dyn UserDirectory>);

        flow.set_name("Bob");
        flow.choose_avatar("👦");
        flow.choose_color("#00FF00");

        let profile = flow.submit().await.unwrap();
        assert_eq!(profile.avatar_emoji, "👦");
        assert_eq!(profile.color, "#00FF00");
        assert!(profile.is_current_user);
    }

    #[tokio::test]
    async fn setup_cleared_selections_fall_back() {
        let directory = Arc::new(RecordingDirectory::default());
        let mut flow = SetupFlow::new(Arc::clone(&directory) as Arc<dyn UserDirectory>);

        flow.set_name("Carol");
        flow.choose_avatar("👩");
        flow.clear_avatar();
        flow.choose_color("#FF0000");
        flow.clear_color();

        let profile = flow.submit().await.unwrap();
        assert_eq!(profile.avatar_emoji, PLACEHOLDER_AVATAR);
        assert_eq!(profile.color, FALLBACK_COLOR);
    }

    #[tokio::test]
    async fn submit_revalidates_despite_ui_gating() {
        let directory = Arc::new(RecordingDirectory::default());
        let mut flow = OnboardingFlow::new(Arc::clone(&directory) as Arc<dyn UserDirectory>);

        // Submit without ever checking can_submit — the flow must refuse.
        flow.set_name("   ");
        let err = flow.submit().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NameRequired)
        ));

        // Nothing reached the directory, and the flow is still editable.
        assert!(directory.calls().await.is_empty());
        assert_eq!(flow.stage(), FlowStage::Editing);

        // Retry with corrected input succeeds.
        flow.set_name("Dana");
        assert!(flow.submit().await.is_ok());
    }

    #[tokio::test]
    async fn resubmit_is_rejected() {
        let directory = Arc::new(RecordingDirectory::default());
        let mut flow = SetupFlow::new(Arc::clone(&directory) as Arc<dyn UserDirectory>);

        flow.set_name("Eve");
        flow.submit().await.unwrap();
        assert!(!flow.can_submit());

        flow.set_name("Eve again");
        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, Error::Flow(FlowError::AlreadySubmitted)));

        // Only the first submission reached the directory.
        assert_eq!(directory.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn submit_discards_draft_after_hand_off() {
        let directory = Arc::new(RecordingDirectory::default());
        let mut flow = SetupFlow::new(Arc::clone(&directory) as Arc<dyn UserDirectory>);

        flow.set_name("Frank");
        flow.choose_avatar("👴");
        flow.submit().await.unwrap();

        // The terminal stage gates can_submit even though the draft is empty.
        assert!(!flow.can_submit());
        assert_eq!(flow.stage(), FlowStage::Submitted);
    }
}
