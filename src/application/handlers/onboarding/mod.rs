//! Onboarding command and query handlers.

mod get_onboarding_state;
mod submit_answer;

pub use get_onboarding_state::{
    GetOnboardingStateHandler, GetOnboardingStateQuery, OnboardingView,
};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
