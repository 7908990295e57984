//! Run history: an append-only, process-lifetime log of completed advisory runs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::advisory::agents::Role;
use crate::advisory::category::RequestCategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStep {
    pub role: Role,
    pub action: &'static str,
}

impl RunStep {
    pub fn completed(role: Role) -> Self {
        Self {
            role,
            action: role.action(),
        }
    }
}

/// One completed end-to-end run. Never mutated after it is appended.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub category: RequestCategory,
    pub timestamp: DateTime<Utc>,
    pub advisors: Vec<&'static str>,
    pub steps: Vec<RunStep>,
}

impl RunRecord {
    pub fn new(category: RequestCategory, steps: Vec<RunStep>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            timestamp: Utc::now(),
            advisors: Role::ORDER.iter().map(|r| r.persona().name).collect(),
            steps,
        }
    }
}

/// Owned by the orchestrator. Appends are serialised by the lock; readers get copies.
#[derive(Debug, Default)]
pub struct RunHistory {
    records: RwLock<Vec<RunRecord>>,
}

impl RunHistory {
    pub async fn append(&self, record: RunRecord) {
        self.records.write().await.push(record);
    }

    /// All records, oldest first.
    pub async fn snapshot(&self) -> Vec<RunRecord> {
        self.records.read().await.clone()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
