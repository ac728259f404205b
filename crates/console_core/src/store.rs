//! Local reactive store: the console's copy of server-side truth,
//! repopulated section by section through reconciliation refetches.

use shared::domain::{Category, LogEntry, LogType, Question, QuestionnaireData, User, UserRole, UserStatus};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreState {
    admins: Vec<User>,
    users: Vec<User>,
    categories: Vec<Category>,
    questions: Vec<Question>,
    logs: Vec<LogEntry>,
}

#[derive(Debug, Default)]
pub struct ConsoleStore {
    inner: RwLock<StoreState>,
}

impl ConsoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_admins(&self, admins: Vec<User>) {
        self.inner.write().await.admins = admins;
    }

    pub async fn admins(&self) -> Vec<User> {
        self.inner.read().await.admins.clone()
    }

    pub async fn set_users(&self, users: Vec<User>) {
        self.inner.write().await.users = users;
    }

    pub async fn users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Users still awaiting approval, restricted to one role at a time the
    /// way the approvals panel filters them.
    pub async fn pending_users(&self, role: UserRole) -> Vec<User> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .filter(|user| user.status == UserStatus::Pending && user.role == role)
            .cloned()
            .collect()
    }

    /// Categories and questions always refresh together; partial updates
    /// would let a question point at a category the store no longer knows.
    pub async fn set_questionnaire(&self, data: QuestionnaireData) {
        let mut guard = self.inner.write().await;
        guard.categories = data.categories;
        guard.questions = data.questions;
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.inner.read().await.categories.clone()
    }

    pub async fn questions(&self) -> Vec<Question> {
        self.inner.read().await.questions.clone()
    }

    /// Replaces all stored entries of one log type, leaving the other type
    /// untouched; approval and login logs arrive from separate endpoints.
    pub async fn replace_logs_of_type(&self, log_type: LogType, entries: Vec<LogEntry>) {
        let mut guard = self.inner.write().await;
        guard.logs.retain(|entry| entry.log_type != log_type);
        guard.logs.extend(entries);
    }

    pub async fn logs(&self) -> Vec<LogEntry> {
        self.inner.read().await.logs.clone()
    }
}
