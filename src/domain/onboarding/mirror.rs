//! AgentStateMirror - synchronization boundary with the remote agent.
//!
//! The agent runtime is the single writer of step progression; the service
//! mirrors its reports. Reconciliation is last-write-wins with one guard: the
//! mirrored step never moves backwards. Reports that skip ahead are accepted
//! as-is (a voice answer can legitimately cover more than one question).
//! When no fresh report is available the mirror falls back to the locally
//! known last-persisted step.

use chrono::Duration;

use crate::domain::foundation::{StateMachine, Timestamp};
use crate::domain::onboarding::OnboardingStep;

/// A step report received from the agent runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepObservation {
    pub step: OnboardingStep,
    pub observed_at: Timestamp,
}

/// Mirrors the remote agent's step state with a staleness tolerance.
#[derive(Debug, Clone)]
pub struct AgentStateMirror {
    last_persisted: OnboardingStep,
    observation: Option<StepObservation>,
    staleness_tolerance: Duration,
}

impl AgentStateMirror {
    /// Creates a mirror seeded with the last step persisted for this user.
    pub fn new(last_persisted: OnboardingStep, staleness_tolerance_secs: i64) -> Self {
        Self {
            last_persisted,
            observation: None,
            staleness_tolerance: Duration::seconds(staleness_tolerance_secs),
        }
    }

    /// Applies a raw step number reported by the agent.
    ///
    /// The number is clamped to [1, 6]; regressions below the current
    /// effective step are ignored (the freshness timestamp still updates, so
    /// a regressed-but-alive agent does not read as stale). Returns the
    /// effective step after the observation.
    pub fn observe(&mut self, reported_step: i64, now: Timestamp) -> OnboardingStep {
        let reported = OnboardingStep::from_number(reported_step);
        let current = self.effective_step(now);
        let effective = if current.can_transition_to(&reported) || reported == current {
            reported
        } else {
            current
        };
        self.observation = Some(StepObservation {
            step: effective,
            observed_at: now,
        });
        effective
    }

    /// Records that a step counter was persisted locally. Keeps the fallback
    /// monotonic as well.
    pub fn record_persisted(&mut self, step: OnboardingStep) {
        if step.number() > self.last_persisted.number() {
            self.last_persisted = step;
        }
    }

    /// Returns the step to display: the freshest observation when within
    /// tolerance, otherwise the last-persisted fallback.
    pub fn effective_step(&self, now: Timestamp) -> OnboardingStep {
        match &self.observation {
            Some(obs) if !self.is_stale_at(obs, now) => obs.step,
            _ => self.last_persisted,
        }
    }

    /// Returns true when the mirror has no usable observation.
    pub fn is_stale(&self, now: Timestamp) -> bool {
        match &self.observation {
            Some(obs) => self.is_stale_at(obs, now),
            None => true,
        }
    }

    fn is_stale_at(&self, obs: &StepObservation, now: Timestamp) -> bool {
        now.duration_since(&obs.observed_at) > self.staleness_tolerance
    }
}
