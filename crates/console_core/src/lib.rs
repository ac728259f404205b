//! Core of the admin console: a single owning controller that stages every
//! mutating operation behind a confirmation gate, executes confirmed actions
//! against the remote scoring service, and reconciles the local store with
//! targeted refetches afterward.

use std::sync::Arc;

use shared::domain::{
    Category, DayBucket, LogEntry, LogType, Question, User, UserRole,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

pub mod action;
pub mod backend;
pub mod gate;
pub mod logs;
pub mod refresh;
pub mod store;

pub use action::{ActionDescriptor, ActionPreview, ConfirmStyle};
pub use backend::{MissingScoreBackend, ScoreBackend};
pub use gate::{ConfirmationGate, GateError, GateState};
pub use refresh::{RefreshKind, RefreshSequencer};
pub use store::ConsoleStore;

const GENERIC_FAILURE_MESSAGE: &str = "The operation failed.";

/// Events the UI layer subscribes to. `Notification` is the one-shot
/// user-visible failure channel; a frontend may route it to a toast or a
/// blocking alert without changing the contract.
#[derive(Debug, Clone)]
pub enum ConsoleEvent {
    Notification(String),
    Refreshed(RefreshKind),
    SubmittingChanged(bool),
}

/// Gate state, submitting flag, log filter and refresh generations are
/// single-writer state owned by this one mutex; there is no other writer.
struct ConsoleState {
    gate: ConfirmationGate,
    submitting: bool,
    log_filter: LogType,
    refreshes: RefreshSequencer,
}

pub struct AdminConsole {
    backend: Arc<dyn ScoreBackend>,
    store: ConsoleStore,
    inner: Mutex<ConsoleState>,
    events: broadcast::Sender<ConsoleEvent>,
}

impl AdminConsole {
    pub fn new(backend: Arc<dyn ScoreBackend>) -> Arc<Self> {
        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            backend,
            store: ConsoleStore::new(),
            inner: Mutex::new(ConsoleState {
                gate: ConfirmationGate::new(),
                submitting: false,
                log_filter: LogType::Approval,
                refreshes: RefreshSequencer::new(),
            }),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    /// Stages an action for confirmation. Rejected while another action is
    /// pending or a commit is in flight.
    pub async fn open_confirmation(&self, descriptor: ActionDescriptor) -> Result<(), GateError> {
        let mut state = self.inner.lock().await;
        if state.submitting {
            return Err(GateError::CommitInFlight);
        }
        debug!(action = descriptor.kind(), "gate: staging action");
        state.gate.open(descriptor)
    }

    /// Discards the pending descriptor, if any. No external call was issued
    /// for it, so there is nothing to compensate.
    pub async fn cancel(&self) {
        let mut state = self.inner.lock().await;
        if let Some(descriptor) = state.gate.cancel() {
            debug!(action = descriptor.kind(), "gate: staged action cancelled");
        }
    }

    pub async fn current_preview(&self) -> Option<ActionPreview> {
        let state = self.inner.lock().await;
        state.gate.pending().map(ActionDescriptor::preview)
    }

    pub async fn is_submitting(&self) -> bool {
        self.inner.lock().await.submitting
    }

    /// Commits the pending action: closes the gate, raises the submitting
    /// flag, dispatches exactly one primary call, then runs the variant's
    /// reconciliation refetches in order. Failures of any shape surface as a
    /// notification; the flag is cleared on every exit path.
    pub async fn confirm(&self) {
        let descriptor = {
            let mut state = self.inner.lock().await;
            if state.submitting {
                warn!("commit: confirm ignored while another commit is in flight");
                return;
            }
            let Some(descriptor) = state.gate.confirm() else {
                return;
            };
            state.submitting = true;
            descriptor
        };
        let _ = self.events.send(ConsoleEvent::SubmittingChanged(true));
        info!(action = descriptor.kind(), "commit: dispatching confirmed action");

        if let Err(message) = self.execute(&descriptor).await {
            warn!(action = descriptor.kind(), "commit: action failed: {message}");
            self.notify(message);
        }

        {
            let mut state = self.inner.lock().await;
            state.submitting = false;
        }
        let _ = self.events.send(ConsoleEvent::SubmittingChanged(false));
    }

    async fn execute(&self, descriptor: &ActionDescriptor) -> Result<(), String> {
        let result = self
            .dispatch_primary(descriptor)
            .await
            .map_err(|fault| fault.to_string())?;

        if !result.success {
            return Err(result
                .message
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()));
        }

        self.reconcile(descriptor).await;
        Ok(())
    }

    async fn dispatch_primary(
        &self,
        descriptor: &ActionDescriptor,
    ) -> anyhow::Result<shared::domain::CommitResult> {
        match descriptor {
            ActionDescriptor::AddAdmin(admin) => self.backend.add_admin(admin).await,
            ActionDescriptor::EditAdmin { admin, updates } => {
                self.backend.update_admin(admin, updates).await
            }
            ActionDescriptor::DeleteAdmin { admin } => self.backend.delete_admin(admin).await,
            ActionDescriptor::AddCategory { name } => self.backend.add_category(name).await,
            ActionDescriptor::EditCategory { category, new_name } => {
                self.backend.update_category(category, new_name).await
            }
            ActionDescriptor::DeleteCategory { category } => {
                self.backend.delete_category(category).await
            }
            ActionDescriptor::AddQuestion(question) => self.backend.add_question(question).await,
            ActionDescriptor::EditQuestion { question } => {
                self.backend.update_question(question).await
            }
            ActionDescriptor::DeleteQuestion { question } => {
                self.backend.delete_question(question).await
            }
            ActionDescriptor::ApproveUser { user } => self.backend.approve_user(user).await,
        }
    }

    /// Fixed per-variant refetch lists, awaited in order. Each refetch fails
    /// independently: a failure is notified without aborting the rest.
    async fn reconcile(&self, descriptor: &ActionDescriptor) {
        match descriptor {
            ActionDescriptor::AddAdmin(_)
            | ActionDescriptor::EditAdmin { .. }
            | ActionDescriptor::DeleteAdmin { .. } => {
                self.refresh_admins().await;
            }
            ActionDescriptor::AddCategory { .. }
            | ActionDescriptor::EditCategory { .. }
            | ActionDescriptor::DeleteCategory { .. }
            | ActionDescriptor::AddQuestion(_)
            | ActionDescriptor::EditQuestion { .. }
            | ActionDescriptor::DeleteQuestion { .. } => {
                self.refresh_questionnaire().await;
            }
            ActionDescriptor::ApproveUser { .. } => {
                // Pending users are refetched after the approval logs so the
                // second fetch observes post-mutation state.
                self.refresh_approval_logs().await;
                self.refresh_pending_users().await;
            }
        }
    }

    /// Runs the fetches the console needs on mount: pending approvals,
    /// approval logs, the admin list and the questionnaire, in that order.
    pub async fn initial_refresh(&self) {
        self.refresh_pending_users().await;
        self.refresh_approval_logs().await;
        self.refresh_admins().await;
        self.refresh_questionnaire().await;
    }

    /// Switches the activity log filter and refreshes the matching log
    /// stream. An older fetch that completes after a newer filter change is
    /// dropped by the generation check.
    pub async fn set_log_filter(&self, log_type: LogType) {
        {
            let mut state = self.inner.lock().await;
            state.log_filter = log_type;
        }
        match log_type {
            LogType::Approval => self.refresh_approval_logs().await,
            LogType::Login => self.refresh_login_logs().await,
        }
    }

    pub async fn log_filter(&self) -> LogType {
        self.inner.lock().await.log_filter
    }

    pub async fn bucket_logs_for_chart(&self, log_type: LogType) -> Vec<DayBucket> {
        let entries = self.store.logs().await;
        logs::bucket(&entries, log_type)
    }

    pub async fn sorted_log_details(&self, log_type: LogType) -> Vec<LogEntry> {
        let entries = self.store.logs().await;
        logs::detail_list(&entries, log_type)
    }

    pub async fn admins(&self) -> Vec<User> {
        self.store.admins().await
    }

    pub async fn pending_users(&self, role: UserRole) -> Vec<User> {
        self.store.pending_users(role).await
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.store.categories().await
    }

    pub async fn questions(&self) -> Vec<Question> {
        self.store.questions().await
    }

    async fn refresh_admins(&self) {
        let generation = self.begin_refresh(RefreshKind::Admins).await;
        match self.backend.fetch_admins().await {
            Ok(admins) => {
                if !self.finish_refresh(RefreshKind::Admins, generation).await {
                    return;
                }
                self.store.set_admins(admins).await;
                let _ = self.events.send(ConsoleEvent::Refreshed(RefreshKind::Admins));
            }
            Err(err) => {
                error!("refresh: admin list fetch failed: {err}");
                self.notify(format!("Failed to refresh administrators: {err}"));
            }
        }
    }

    async fn refresh_pending_users(&self) {
        let generation = self.begin_refresh(RefreshKind::PendingUsers).await;
        match self.backend.fetch_pending_users().await {
            Ok(users) => {
                if !self.finish_refresh(RefreshKind::PendingUsers, generation).await {
                    return;
                }
                self.store.set_users(users).await;
                let _ = self
                    .events
                    .send(ConsoleEvent::Refreshed(RefreshKind::PendingUsers));
            }
            Err(err) => {
                error!("refresh: pending user fetch failed: {err}");
                self.notify(format!("Failed to refresh pending users: {err}"));
            }
        }
    }

    async fn refresh_questionnaire(&self) {
        let generation = self.begin_refresh(RefreshKind::Questionnaire).await;
        match self.backend.fetch_questionnaire_data().await {
            Ok(data) => {
                if !self.finish_refresh(RefreshKind::Questionnaire, generation).await {
                    return;
                }
                self.store.set_questionnaire(data).await;
                let _ = self
                    .events
                    .send(ConsoleEvent::Refreshed(RefreshKind::Questionnaire));
            }
            Err(err) => {
                error!("refresh: questionnaire fetch failed: {err}");
                self.notify(format!("Failed to refresh categories and questions: {err}"));
            }
        }
    }

    async fn refresh_approval_logs(&self) {
        let generation = self.begin_refresh(RefreshKind::ApprovalLogs).await;
        match self.backend.fetch_approval_logs().await {
            Ok(entries) => {
                if !self.finish_refresh(RefreshKind::ApprovalLogs, generation).await {
                    return;
                }
                self.store
                    .replace_logs_of_type(LogType::Approval, entries)
                    .await;
                let _ = self
                    .events
                    .send(ConsoleEvent::Refreshed(RefreshKind::ApprovalLogs));
            }
            Err(err) => {
                error!("refresh: approval log fetch failed: {err}");
                self.notify(format!("Failed to refresh approval logs: {err}"));
            }
        }
    }

    async fn refresh_login_logs(&self) {
        let generation = self.begin_refresh(RefreshKind::LoginLogs).await;
        match self.backend.fetch_login_logs().await {
            Ok(entries) => {
                if !self.finish_refresh(RefreshKind::LoginLogs, generation).await {
                    return;
                }
                self.store.replace_logs_of_type(LogType::Login, entries).await;
                let _ = self
                    .events
                    .send(ConsoleEvent::Refreshed(RefreshKind::LoginLogs));
            }
            Err(err) => {
                error!("refresh: login log fetch failed: {err}");
                self.notify(format!("Failed to refresh login logs: {err}"));
            }
        }
    }

    async fn begin_refresh(&self, kind: RefreshKind) -> u64 {
        self.inner.lock().await.refreshes.begin(kind)
    }

    /// Returns false when a newer refresh of the same kind superseded this
    /// one; the stale result must be discarded.
    async fn finish_refresh(&self, kind: RefreshKind, generation: u64) -> bool {
        let current = self.inner.lock().await.refreshes.is_current(kind, generation);
        if !current {
            debug!(?kind, generation, "refresh: dropping stale fetch result");
        }
        current
    }

    fn notify(&self, message: String) {
        let _ = self.events.send(ConsoleEvent::Notification(message));
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
