//! Seam to the remote scoring service. The service is an opaque
//! collaborator: every mutating operation answers with a [`CommitResult`]
//! envelope, fetches repopulate sections of the local store.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::domain::{
    AdminUpdate, Category, CommitResult, LogEntry, NewAdmin, NewQuestion, Question,
    QuestionnaireData, User,
};

#[async_trait]
pub trait ScoreBackend: Send + Sync {
    async fn add_admin(&self, admin: &NewAdmin) -> Result<CommitResult>;
    async fn update_admin(&self, admin: &User, updates: &AdminUpdate) -> Result<CommitResult>;
    async fn delete_admin(&self, admin: &User) -> Result<CommitResult>;
    async fn add_category(&self, name: &str) -> Result<CommitResult>;
    async fn update_category(&self, category: &Category, new_name: &str) -> Result<CommitResult>;
    async fn delete_category(&self, category: &Category) -> Result<CommitResult>;
    async fn add_question(&self, question: &NewQuestion) -> Result<CommitResult>;
    async fn update_question(&self, question: &Question) -> Result<CommitResult>;
    async fn delete_question(&self, question: &Question) -> Result<CommitResult>;
    async fn approve_user(&self, user: &User) -> Result<CommitResult>;

    async fn fetch_admins(&self) -> Result<Vec<User>>;
    async fn fetch_pending_users(&self) -> Result<Vec<User>>;
    async fn fetch_questionnaire_data(&self) -> Result<QuestionnaireData>;
    async fn fetch_approval_logs(&self) -> Result<Vec<LogEntry>>;
    async fn fetch_login_logs(&self) -> Result<Vec<LogEntry>>;
}

/// Fallback used when no backend has been wired up.
pub struct MissingScoreBackend;

macro_rules! backend_unavailable {
    () => {
        Err(anyhow!("score backend is unavailable"))
    };
}

#[async_trait]
impl ScoreBackend for MissingScoreBackend {
    async fn add_admin(&self, _admin: &NewAdmin) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn update_admin(&self, _admin: &User, _updates: &AdminUpdate) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn delete_admin(&self, _admin: &User) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn add_category(&self, _name: &str) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn update_category(
        &self,
        _category: &Category,
        _new_name: &str,
    ) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn delete_category(&self, _category: &Category) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn add_question(&self, _question: &NewQuestion) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn update_question(&self, _question: &Question) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn delete_question(&self, _question: &Question) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn approve_user(&self, _user: &User) -> Result<CommitResult> {
        backend_unavailable!()
    }

    async fn fetch_admins(&self) -> Result<Vec<User>> {
        backend_unavailable!()
    }

    async fn fetch_pending_users(&self) -> Result<Vec<User>> {
        backend_unavailable!()
    }

    async fn fetch_questionnaire_data(&self) -> Result<QuestionnaireData> {
        backend_unavailable!()
    }

    async fn fetch_approval_logs(&self) -> Result<Vec<LogEntry>> {
        backend_unavailable!()
    }

    async fn fetch_login_logs(&self) -> Result<Vec<LogEntry>> {
        backend_unavailable!()
    }
}
