//! Progress presentation for the onboarding wizard.
//!
//! Purely presentational: a percentage bar, the per-step visual states, and a
//! canned encouragement line. No business logic and no persisted state.

use serde::Serialize;

use crate::domain::onboarding::step::{OnboardingStep, TOTAL_STEPS};

/// Visual state of one row in the step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepVisual {
    Completed,
    Current,
    Pending,
}

/// One row of the rendered step list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRow {
    pub step: OnboardingStep,
    pub title: &'static str,
    pub hint: &'static str,
    pub visual: StepVisual,
}

/// The full progress view for a given step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub percent: u8,
    pub is_complete: bool,
    pub steps: Vec<StepRow>,
    pub encouragement: &'static str,
}

impl ProgressView {
    /// Builds the progress view for the current step.
    pub fn for_step(current: OnboardingStep) -> Self {
        Self {
            percent: progress_percent(current),
            is_complete: current.is_complete(),
            steps: step_rows(current),
            encouragement: encouragement(current),
        }
    }
}

/// `min(current/total, 1) * 100`, clamped at 100 and non-decreasing in the
/// step number.
pub fn progress_percent(current: OnboardingStep) -> u8 {
    let ratio = f64::from(current.number()) / f64::from(TOTAL_STEPS);
    (ratio.min(1.0) * 100.0).round() as u8
}

fn step_rows(current: OnboardingStep) -> Vec<StepRow> {
    OnboardingStep::all()
        .iter()
        .map(|step| {
            let visual = if step.number() < current.number() {
                StepVisual::Completed
            } else if *step == current {
                StepVisual::Current
            } else {
                StepVisual::Pending
            };
            StepRow {
                step: *step,
                title: step.display_name(),
                hint: step.short_hint(),
                visual,
            }
        })
        .collect()
}

fn encouragement(current: OnboardingStep) -> &'static str {
    if current.is_complete() {
        "🎉 Amazing! Let's find your perfect role."
    } else if current.number() <= 2 {
        "💪 Great start! Just a few more questions."
    } else {
        "🚀 Almost there! You're doing great."
    }
}
