//! Shared in-memory port mocks for handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileItemId, UserId};
use crate::domain::onboarding::OnboardingStep;
use crate::domain::profile::ProfileItem;
use crate::ports::{AgentGateway, AgentStateReport, ChatRole, MemoryStore, ProfileRepository};

// ─────────────────────────────────────────────────────────────────
// Profile repository mocks
// ─────────────────────────────────────────────────────────────────

/// In-memory ProfileRepository tracking items and step counters per user.
pub struct MockProfileRepository {
    items: Mutex<HashMap<String, Vec<ProfileItem>>>,
    steps: Mutex<HashMap<String, OnboardingStep>>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            steps: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_items(self, user_id: &UserId, items: Vec<ProfileItem>) -> Self {
        self.items
            .lock()
            .unwrap()
            .insert(user_id.as_str().to_string(), items);
        self
    }

    pub fn with_step(self, user_id: &UserId, step: OnboardingStep) -> Self {
        self.steps
            .lock()
            .unwrap()
            .insert(user_id.as_str().to_string(), step);
        self
    }

    pub fn items(&self, user_id: &UserId) -> Vec<ProfileItem> {
        self.items
            .lock()
            .unwrap()
            .get(user_id.as_str())
            .cloned()
            .unwrap_or_default()
    }

    pub fn step(&self, user_id: &UserId) -> Option<OnboardingStep> {
        self.steps.lock().unwrap().get(user_id.as_str()).copied()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn upsert(
        &self,
        user_id: &UserId,
        item: ProfileItem,
    ) -> Result<ProfileItem, DomainError> {
        let mut items = self.items.lock().unwrap();
        let list = items.entry(user_id.as_str().to_string()).or_default();
        match list
            .iter_mut()
            .find(|i| i.item_type == item.item_type && i.value == item.value)
        {
            Some(existing) => {
                existing.metadata = item.metadata;
                existing.confirmed = item.confirmed;
                Ok(existing.clone())
            }
            None => {
                list.push(item.clone());
                Ok(item)
            }
        }
    }

    async fn delete(&self, user_id: &UserId, id: ProfileItemId) -> Result<(), DomainError> {
        let mut items = self.items.lock().unwrap();
        let list = items.entry(user_id.as_str().to_string()).or_default();
        match list.iter().position(|i| i.id == id) {
            Some(pos) => {
                list.remove(pos);
                Ok(())
            }
            None => Err(DomainError::item_not_found(id)),
        }
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ProfileItem>, DomainError> {
        Ok(self.items(user_id))
    }

    async fn load_step(&self, user_id: &UserId) -> Result<Option<OnboardingStep>, DomainError> {
        Ok(self.step(user_id))
    }

    async fn save_step(&self, user_id: &UserId, step: OnboardingStep) -> Result<(), DomainError> {
        self.steps
            .lock()
            .unwrap()
            .insert(user_id.as_str().to_string(), step);
        Ok(())
    }
}

/// ProfileRepository that rejects every write, for no-optimistic-update tests.
pub struct FailingProfileRepository {
    touched: Mutex<bool>,
}

impl FailingProfileRepository {
    pub fn new() -> Self {
        Self {
            touched: Mutex::new(false),
        }
    }

    /// True while no write has mutated anything (it never does).
    pub fn untouched(&self) -> bool {
        !*self.touched.lock().unwrap()
    }

    fn db_error() -> DomainError {
        DomainError::new(ErrorCode::DatabaseError, "connection refused")
    }
}

#[async_trait]
impl ProfileRepository for FailingProfileRepository {
    async fn upsert(
        &self,
        _user_id: &UserId,
        _item: ProfileItem,
    ) -> Result<ProfileItem, DomainError> {
        Err(Self::db_error())
    }

    async fn delete(&self, _user_id: &UserId, _id: ProfileItemId) -> Result<(), DomainError> {
        Err(Self::db_error())
    }

    async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<ProfileItem>, DomainError> {
        Err(Self::db_error())
    }

    async fn load_step(&self, _user_id: &UserId) -> Result<Option<OnboardingStep>, DomainError> {
        Err(Self::db_error())
    }

    async fn save_step(&self, _user_id: &UserId, _step: OnboardingStep) -> Result<(), DomainError> {
        Err(Self::db_error())
    }
}

// ─────────────────────────────────────────────────────────────────
// Memory store mock
// ─────────────────────────────────────────────────────────────────

/// Recording MemoryStore; optionally fails every call.
pub struct MockMemoryStore {
    facts: Mutex<Vec<String>>,
    transcripts: Mutex<Vec<(ChatRole, String)>>,
    fail: bool,
}

impl MockMemoryStore {
    pub fn new() -> Self {
        Self {
            facts: Mutex::new(Vec::new()),
            transcripts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn facts(&self) -> Vec<String> {
        self.facts.lock().unwrap().clone()
    }

    pub fn transcripts(&self) -> Vec<(ChatRole, String)> {
        self.transcripts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemoryStore for MockMemoryStore {
    async fn record_transcript(
        &self,
        _user_id: &UserId,
        role: ChatRole,
        content: &str,
        _metadata: &HashMap<String, serde_json::Value>,
    ) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::network("memory service unreachable"));
        }
        self.transcripts
            .lock()
            .unwrap()
            .push((role, content.to_string()));
        Ok(())
    }

    async fn record_fact(&self, _user_id: &UserId, fact: &str) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::network("memory service unreachable"));
        }
        self.facts.lock().unwrap().push(fact.to_string());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// Agent gateway mock
// ─────────────────────────────────────────────────────────────────

/// Scripted AgentGateway: records sent messages, serves a fixed state report.
pub struct MockAgentGateway {
    messages: Mutex<Vec<(ChatRole, String)>>,
    report: Option<AgentStateReport>,
}

impl MockAgentGateway {
    /// Gateway that reports the given step number.
    pub fn reporting(step: i64) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            report: Some(AgentStateReport {
                current_step: step,
                session_active: true,
            }),
        }
    }

    /// Gateway whose state endpoint is down.
    pub fn unavailable() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            report: None,
        }
    }

    pub fn sent_messages(&self) -> Vec<(ChatRole, String)> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentGateway for MockAgentGateway {
    async fn send_message(
        &self,
        _user_id: &UserId,
        role: ChatRole,
        text: &str,
    ) -> Result<(), DomainError> {
        self.messages.lock().unwrap().push((role, text.to_string()));
        Ok(())
    }

    async fn fetch_state(&self, _user_id: &UserId) -> Result<AgentStateReport, DomainError> {
        self.report.clone().ok_or_else(|| {
            DomainError::new(ErrorCode::AgentUnavailable, "agent runtime unreachable")
        })
    }
}
