//! Profile system — the two creation flows and their shared core.
//!
//! Two independent flows build a `UserProfile`: the first-run onboarding
//! captures just a name, the detailed setup also picks an avatar and an
//! accent color. Both run the same creation rules and hand the finished
//! record to the injected `UserDirectory` collaborator.

pub mod creation;
pub mod flow;
pub mod model;
pub mod state;

pub use creation::{ProfileDraft, create_profile};
pub use flow::{OnboardingFlow, SetupFlow};
pub use model::UserProfile;
pub use state::FlowStage;
