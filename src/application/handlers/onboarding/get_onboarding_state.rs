//! GetOnboardingState - Query handler assembling the wizard view for a session.
//!
//! Loads the Profile Store item list, polls the agent runtime through the
//! state mirror, and composes everything the UI needs: the mirrored state,
//! the step prompt and quick options, the greeting, the progress view, and
//! the instruction prompt for the agent.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::onboarding::{
    prompts, AgentStateMirror, OnboardingState, OnboardingStep, ProgressView,
};
use crate::domain::profile::ProfileItem;
use crate::ports::{AgentGateway, ProfileRepository};

/// Query for the current onboarding view.
#[derive(Debug, Clone)]
pub struct GetOnboardingStateQuery {
    pub user_id: UserId,
    pub first_name: String,
}

/// Everything the wizard UI renders for one step.
#[derive(Debug, Clone)]
pub struct OnboardingView {
    pub state: OnboardingState,
    pub progress: ProgressView,
    pub step_title: &'static str,
    pub step_message: &'static str,
    pub quick_options: Vec<String>,
    pub greeting: String,
    pub agent_instructions: String,
    /// False when the agent runtime could not be reached and the view fell
    /// back to the last persisted step.
    pub agent_synced: bool,
}

/// Handler assembling the onboarding view.
pub struct GetOnboardingStateHandler {
    repository: Arc<dyn ProfileRepository>,
    gateway: Arc<dyn AgentGateway>,
    staleness_tolerance_secs: i64,
}

impl GetOnboardingStateHandler {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        gateway: Arc<dyn AgentGateway>,
        staleness_tolerance_secs: i64,
    ) -> Self {
        Self {
            repository,
            gateway,
            staleness_tolerance_secs,
        }
    }

    pub async fn handle(
        &self,
        query: GetOnboardingStateQuery,
    ) -> Result<OnboardingView, DomainError> {
        let items = self.repository.list_for_user(&query.user_id).await?;
        let last_persisted = self
            .repository
            .load_step(&query.user_id)
            .await?
            .unwrap_or(OnboardingStep::Goals);

        let mut mirror = AgentStateMirror::new(last_persisted, self.staleness_tolerance_secs);
        let now = Timestamp::now();

        let agent_synced = match self.gateway.fetch_state(&query.user_id).await {
            Ok(report) => {
                let step = mirror.observe(report.current_step, now);
                if step.number() > last_persisted.number() {
                    // Keep the fallback counter in sync with confirmed progress.
                    match self.repository.save_step(&query.user_id, step).await {
                        Ok(()) => mirror.record_persisted(step),
                        Err(e) => {
                            tracing::warn!(user_id = %query.user_id, error = %e, "step counter save failed");
                        }
                    }
                }
                true
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %query.user_id,
                    error = %e,
                    "agent state fetch failed, falling back to last persisted step"
                );
                false
            }
        };

        let step = mirror.effective_step(now);
        Ok(self.compose_view(step, &query.first_name, items, agent_synced))
    }

    fn compose_view(
        &self,
        step: OnboardingStep,
        first_name: &str,
        items: Vec<ProfileItem>,
        agent_synced: bool,
    ) -> OnboardingView {
        let prompt = prompts::prompt_for(step);
        let greeting = prompts::greeting(step, first_name);
        let agent_instructions = prompts::agent_instructions(step, first_name, &items);
        let state = OnboardingState::rebuild(step, &items);

        OnboardingView {
            progress: ProgressView::for_step(step),
            step_title: prompt.title,
            step_message: prompt.message,
            quick_options: prompt.quick_options.iter().map(|s| s.to_string()).collect(),
            greeting,
            agent_instructions,
            state,
            agent_synced,
        }
    }
}
