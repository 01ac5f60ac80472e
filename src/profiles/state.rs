//! Flow stage machine — a flow is editing until its profile is handed off.

use serde::{Deserialize, Serialize};

/// The stages of a creation flow.
///
/// Progresses linearly: Editing → Submitted. Submitted is terminal; a flow
/// that failed to submit stays in Editing so the user can correct the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStage {
    Editing,
    Submitted,
}

impl FlowStage {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: FlowStage) -> bool {
        matches!((self, target), (FlowStage::Editing, FlowStage::Submitted))
    }

    /// Whether this stage is terminal (the profile was handed off).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Get the next stage in the linear progression, if any.
    pub fn next(&self) -> Option<FlowStage> {
        match self {
            Self::Editing => Some(Self::Submitted),
            Self::Submitted => None,
        }
    }
}

impl Default for FlowStage {
    fn default() -> Self {
        Self::Editing
    }
}

impl std::fmt::Display for FlowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Editing => "editing",
            Self::Submitted => "submitted",
        };
        write!(f, "{s}")
    }
}
