//! In-memory agent gateway for local development and tests.
//!
//! Simulates the wizard-driving agent: each user message advances the session
//! one step, capped at the terminal step. No network, no model.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::onboarding::OnboardingStep;
use crate::ports::{AgentGateway, AgentStateReport, ChatRole};

/// Deterministic stand-in for the hosted agent runtime.
pub struct InMemoryAgentGateway {
    steps: Mutex<HashMap<String, OnboardingStep>>,
}

impl InMemoryAgentGateway {
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(HashMap::new()),
        }
    }

    fn current(&self, user_id: &UserId) -> OnboardingStep {
        self.steps
            .lock()
            .unwrap()
            .get(user_id.as_str())
            .copied()
            .unwrap_or(OnboardingStep::Goals)
    }
}

impl Default for InMemoryAgentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentGateway for InMemoryAgentGateway {
    async fn send_message(
        &self,
        user_id: &UserId,
        role: ChatRole,
        _text: &str,
    ) -> Result<(), DomainError> {
        // Only user answers advance the wizard.
        if role == ChatRole::User {
            let mut steps = self.steps.lock().unwrap();
            let current = steps
                .entry(user_id.as_str().to_string())
                .or_insert(OnboardingStep::Goals);
            *current = current.next();
        }
        Ok(())
    }

    async fn fetch_state(&self, user_id: &UserId) -> Result<AgentStateReport, DomainError> {
        Ok(AgentStateReport {
            current_step: self.current(user_id).number() as i64,
            session_active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_session_sits_on_step_one() {
        let gateway = InMemoryAgentGateway::new();
        let user = UserId::new("usr_1").unwrap();

        let report = gateway.fetch_state(&user).await.unwrap();
        assert_eq!(report.current_step, 1);
    }

    #[tokio::test]
    async fn each_user_answer_advances_one_step() {
        let gateway = InMemoryAgentGateway::new();
        let user = UserId::new("usr_1").unwrap();

        gateway
            .send_message(&user, ChatRole::User, "Job Search")
            .await
            .unwrap();
        assert_eq!(gateway.fetch_state(&user).await.unwrap().current_step, 2);

        gateway
            .send_message(&user, ChatRole::User, "Freelancing")
            .await
            .unwrap();
        assert_eq!(gateway.fetch_state(&user).await.unwrap().current_step, 3);
    }

    #[tokio::test]
    async fn assistant_messages_do_not_advance() {
        let gateway = InMemoryAgentGateway::new();
        let user = UserId::new("usr_1").unwrap();

        gateway
            .send_message(&user, ChatRole::Assistant, "Welcome!")
            .await
            .unwrap();
        assert_eq!(gateway.fetch_state(&user).await.unwrap().current_step, 1);
    }

    #[tokio::test]
    async fn wizard_caps_at_terminal_step() {
        let gateway = InMemoryAgentGateway::new();
        let user = UserId::new("usr_1").unwrap();

        for _ in 0..10 {
            gateway
                .send_message(&user, ChatRole::User, "answer text")
                .await
                .unwrap();
        }
        assert_eq!(gateway.fetch_state(&user).await.unwrap().current_step, 6);
    }
}
