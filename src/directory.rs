//! UserDirectory — the collaborator that owns registered profiles.
//!
//! The creation flows hand completed profiles to this trait and assume
//! nothing about storage or durable format. [`MemoryDirectory`] is the
//! in-process reference implementation used by the demo binary and the
//! integration tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::DirectoryError;
use crate::profiles::UserProfile;

/// Backend-agnostic directory of user profiles.
///
/// Both operations accept the profile by value; the directory owns the
/// record from there on.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Register a new profile.
    async fn add_user(&self, profile: UserProfile) -> Result<(), DirectoryError>;

    /// Mark a registered profile as the active session identity.
    async fn set_current_user(&self, profile: UserProfile) -> Result<(), DirectoryError>;
}

#[derive(Debug, Default)]
struct DirectoryState {
    users: Vec<UserProfile>,
    current: Option<Uuid>,
}

/// In-memory [`UserDirectory`] — keeps profiles for the process lifetime only.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    state: RwLock<DirectoryState>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered profiles, in registration order.
    pub async fn users(&self) -> Vec<UserProfile> {
        self.state.read().await.users.clone()
    }

    /// The profile currently marked active, if any.
    pub async fn current_user(&self) -> Option<UserProfile> {
        let state = self.state.read().await;
        state
            .current
            .and_then(|id| state.users.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn add_user(&self, profile: UserProfile) -> Result<(), DirectoryError> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|p| p.id == profile.id) {
            return Err(DirectoryError::Duplicate { id: profile.id });
        }
        state.users.push(profile);
        Ok(())
    }

    async fn set_current_user(&self, profile: UserProfile) -> Result<(), DirectoryError> {
        let mut state = self.state.write().await;
        if !state.users.iter().any(|p| p.id == profile.id) {
            return Err(DirectoryError::Unknown { id: profile.id });
        }
        state.current = Some(profile.id);
        Ok(())
    }
}
