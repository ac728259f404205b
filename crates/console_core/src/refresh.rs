//! Refresh sequencing. Each store section refreshes under a generation
//! counter; a fetch completion whose generation is no longer current is
//! dropped so an older in-flight fetch can never overwrite newer data.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshKind {
    Admins,
    PendingUsers,
    Questionnaire,
    ApprovalLogs,
    LoginLogs,
}

#[derive(Debug, Default)]
pub struct RefreshSequencer {
    generations: HashMap<RefreshKind, u64>,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new refresh of the given kind, invalidating any fetch still
    /// in flight for it. Returns the generation token to present on
    /// completion.
    pub fn begin(&mut self, kind: RefreshKind) -> u64 {
        let generation = self.generations.entry(kind).or_insert(0);
        *generation += 1;
        *generation
    }

    pub fn is_current(&self, kind: RefreshKind, generation: u64) -> bool {
        self.generations.get(&kind).copied().unwrap_or(0) == generation
    }
}
