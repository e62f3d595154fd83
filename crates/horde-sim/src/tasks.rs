//! Scheduled tasks: delayed effects resolved by the frame step.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Due times are in
//! simulation seconds, which only advance while the session is playing.

/// What happens when a task comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Magazine refilled.
    ReloadComplete,
    /// Contact damage may be applied again.
    DamageCooldownEnd,
    /// Weapon kick animation ends.
    RecoilReset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTask {
    pub due_at: f64,
    pub kind: TaskKind,
}

/// At most one pending task per kind.
#[derive(Debug, Clone, Default)]
pub struct ScheduledTasks {
    pending: Vec<ScheduledTask>,
}

impl ScheduledTasks {
    /// Schedule `kind` at `due_at`, replacing any pending task of the same kind.
    pub fn schedule(&mut self, kind: TaskKind, due_at: f64) {
        self.pending.retain(|t| t.kind != kind);
        self.pending.push(ScheduledTask { due_at, kind });
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    pub fn due_at(&self, kind: TaskKind) -> Option<f64> {
        self.pending.iter().find(|t| t.kind == kind).map(|t| t.due_at)
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: f64) -> Vec<TaskKind> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        self.pending.retain(|t| {
            if t.due_at <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_at.total_cmp(&b.due_at));
        due.into_iter().map(|t| t.kind).collect()
    }

    /// Drop the pending task of `kind`, if any. Returns whether one was pending.
    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.kind != kind);
        self.pending.len() != before
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
