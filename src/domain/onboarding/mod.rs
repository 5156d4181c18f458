//! Onboarding domain - the wizard step machine, prompt table, agent state
//! mirror, and progress presentation.

mod mirror;
pub mod prompts;
mod progress;
mod state;
mod step;

pub use mirror::{AgentStateMirror, StepObservation};
pub use progress::{progress_percent, ProgressView, StepRow, StepVisual};
pub use state::{OnboardingState, ProfileNode};
pub use step::{OnboardingStep, TOTAL_STEPS};
