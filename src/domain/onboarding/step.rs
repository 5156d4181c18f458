//! OnboardingStep enum representing the 5 wizard questions plus the terminal state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Total number of question steps in the wizard.
pub const TOTAL_STEPS: u8 = 5;

/// The five onboarding question steps, plus the terminal `Complete` pseudo-state.
///
/// Steps are numbered 1 through 5; any reported step number above 5 is `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Goals,
    EmploymentStatus,
    ProfessionalDomain,
    Location,
    Experience,
    Complete,
}

impl OnboardingStep {
    /// Returns the five question steps in wizard order (excludes `Complete`).
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Goals,
            OnboardingStep::EmploymentStatus,
            OnboardingStep::ProfessionalDomain,
            OnboardingStep::Location,
            OnboardingStep::Experience,
        ]
    }

    /// Returns the wizard step number (1..=5, or 6 for `Complete`).
    pub fn number(&self) -> u8 {
        match self {
            OnboardingStep::Goals => 1,
            OnboardingStep::EmploymentStatus => 2,
            OnboardingStep::ProfessionalDomain => 3,
            OnboardingStep::Location => 4,
            OnboardingStep::Experience => 5,
            OnboardingStep::Complete => 6,
        }
    }

    /// Maps an externally-reported step number onto a step, clamping to [1, 6].
    ///
    /// The remote agent owns step progression; the local side renders whatever
    /// step it is told. Values below 1 clamp to the first question, values
    /// above 5 all mean the wizard is finished.
    pub fn from_number(n: i64) -> OnboardingStep {
        match n {
            i64::MIN..=1 => OnboardingStep::Goals,
            2 => OnboardingStep::EmploymentStatus,
            3 => OnboardingStep::ProfessionalDomain,
            4 => OnboardingStep::Location,
            5 => OnboardingStep::Experience,
            _ => OnboardingStep::Complete,
        }
    }

    /// Returns the next step in order (`Complete` is a fixed point).
    pub fn next(&self) -> OnboardingStep {
        OnboardingStep::from_number(self.number() as i64 + 1)
    }

    /// Returns true once the wizard has finished all five questions.
    pub fn is_complete(&self) -> bool {
        matches!(self, OnboardingStep::Complete)
    }

    /// Returns true if this step comes before another in wizard order.
    pub fn is_before(&self, other: &OnboardingStep) -> bool {
        self.number() < other.number()
    }

    /// Returns the display name shown in the step list.
    pub fn display_name(&self) -> &'static str {
        match self {
            OnboardingStep::Goals => "Your Goals",
            OnboardingStep::EmploymentStatus => "Current Status",
            OnboardingStep::ProfessionalDomain => "Your Domain",
            OnboardingStep::Location => "Location",
            OnboardingStep::Experience => "Experience",
            OnboardingStep::Complete => "Complete",
        }
    }

    /// Returns the one-line hint shown under the step title.
    pub fn short_hint(&self) -> &'static str {
        match self {
            OnboardingStep::Goals => "Why are you here?",
            OnboardingStep::EmploymentStatus => "Your situation",
            OnboardingStep::ProfessionalDomain => "Professional area",
            OnboardingStep::Location => "Where you work",
            OnboardingStep::Experience => "Skills & expectations",
            OnboardingStep::Complete => "All set",
        }
    }
}

impl StateMachine for OnboardingStep {
    /// Steps only move forward. The agent may legitimately skip ahead
    /// (e.g. a voice answer covering two questions), so any later step is a
    /// valid target; regressions are not.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.number() < target.number()
    }

    fn valid_transitions(&self) -> Vec<Self> {
        ((self.number() + 1)..=6)
            .map(|n| OnboardingStep::from_number(n as i64))
            .collect()
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_5_question_steps() {
        assert_eq!(OnboardingStep::all().len(), TOTAL_STEPS as usize);
        assert!(!OnboardingStep::all().contains(&OnboardingStep::Complete));
    }

    #[test]
    fn numbers_run_1_through_6() {
        assert_eq!(OnboardingStep::Goals.number(), 1);
        assert_eq!(OnboardingStep::EmploymentStatus.number(), 2);
        assert_eq!(OnboardingStep::ProfessionalDomain.number(), 3);
        assert_eq!(OnboardingStep::Location.number(), 4);
        assert_eq!(OnboardingStep::Experience.number(), 5);
        assert_eq!(OnboardingStep::Complete.number(), 6);
    }

    #[test]
    fn from_number_clamps_low_values_to_first_step() {
        assert_eq!(OnboardingStep::from_number(0), OnboardingStep::Goals);
        assert_eq!(OnboardingStep::from_number(-3), OnboardingStep::Goals);
        assert_eq!(OnboardingStep::from_number(1), OnboardingStep::Goals);
    }

    #[test]
    fn from_number_clamps_high_values_to_complete() {
        assert_eq!(OnboardingStep::from_number(6), OnboardingStep::Complete);
        assert_eq!(OnboardingStep::from_number(7), OnboardingStep::Complete);
        assert_eq!(OnboardingStep::from_number(99), OnboardingStep::Complete);
    }

    #[test]
    fn from_number_roundtrips_for_all_steps() {
        for step in OnboardingStep::all() {
            assert_eq!(OnboardingStep::from_number(step.number() as i64), *step);
        }
    }

    #[test]
    fn next_advances_and_complete_is_fixed_point() {
        assert_eq!(
            OnboardingStep::Goals.next(),
            OnboardingStep::EmploymentStatus
        );
        assert_eq!(OnboardingStep::Experience.next(), OnboardingStep::Complete);
        assert_eq!(OnboardingStep::Complete.next(), OnboardingStep::Complete);
    }

    #[test]
    fn is_complete_only_for_terminal_state() {
        assert!(OnboardingStep::Complete.is_complete());
        for step in OnboardingStep::all() {
            assert!(!step.is_complete());
        }
    }

    #[test]
    fn forward_transitions_are_valid_including_skips() {
        assert!(OnboardingStep::Goals.can_transition_to(&OnboardingStep::EmploymentStatus));
        assert!(OnboardingStep::Goals.can_transition_to(&OnboardingStep::Location));
        assert!(OnboardingStep::Experience.can_transition_to(&OnboardingStep::Complete));
    }

    #[test]
    fn backward_transitions_are_invalid() {
        assert!(!OnboardingStep::Location.can_transition_to(&OnboardingStep::EmploymentStatus));
        assert!(!OnboardingStep::Complete.can_transition_to(&OnboardingStep::Experience));
        assert!(!OnboardingStep::Goals.can_transition_to(&OnboardingStep::Goals));
    }

    #[test]
    fn complete_is_terminal() {
        assert!(OnboardingStep::Complete.is_terminal());
        assert!(!OnboardingStep::Goals.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for step in [
            OnboardingStep::Goals,
            OnboardingStep::EmploymentStatus,
            OnboardingStep::ProfessionalDomain,
            OnboardingStep::Location,
            OnboardingStep::Experience,
            OnboardingStep::Complete,
        ] {
            for valid_target in step.valid_transitions() {
                assert!(
                    step.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    step,
                    valid_target
                );
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&OnboardingStep::EmploymentStatus).unwrap();
        assert_eq!(json, "\"employment_status\"");

        let step: OnboardingStep = serde_json::from_str("\"professional_domain\"").unwrap();
        assert_eq!(step, OnboardingStep::ProfessionalDomain);
    }
}
