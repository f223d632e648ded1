//! Deferred window tasks
//!
//! Window transitions finish after a short delay (the open fade-in, the
//! minimize shrink). The queue holds those pending completions so they can
//! be cancelled when the user acts on the window again before the delay
//! elapses. The host drives it by calling [`TaskQueue::take_due`] with its
//! monotonic clock.

/// Duration of the window open transition, in milliseconds
pub const OPEN_TRANSITION_MS: f64 = 200.0;

/// Delay before a minimizing window is hidden, in milliseconds
pub const MINIMIZE_DELAY_MS: f64 = 200.0;

/// What a scheduled task does when it fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    /// Drop the opening flag once the open transition has played
    ClearOpening,
    /// Hide a minimizing window once the shrink has played
    FinishMinimize,
}

/// A deferred completion for one window
#[derive(Clone, Debug)]
pub struct ScheduledTask {
    pub window_id: String,
    pub kind: TaskKind,
    /// Host-clock time at which the task fires, in milliseconds
    pub due_ms: f64,
}

/// Pending deferred tasks, cancellable per window
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Vec<ScheduledTask>,
}

impl TaskQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if no tasks are pending
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Schedule a task, replacing any pending task of the same kind for the
    /// same window
    pub fn schedule(&mut self, window_id: &str, kind: TaskKind, due_ms: f64) {
        self.tasks
            .retain(|t| !(t.window_id == window_id && t.kind == kind));
        self.tasks.push(ScheduledTask {
            window_id: window_id.to_string(),
            kind,
            due_ms,
        });
    }

    /// Cancel every pending task for a window; returns how many were dropped
    pub fn cancel_window(&mut self, window_id: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.window_id != window_id);
        before - self.tasks.len()
    }

    /// Check if a task of the given kind is pending for a window
    pub fn is_pending(&self, window_id: &str, kind: TaskKind) -> bool {
        self.tasks
            .iter()
            .any(|t| t.window_id == window_id && t.kind == kind)
    }

    /// Remove and return every task due at or before `now_ms`, in the order
    /// they were scheduled
    pub fn take_due(&mut self, now_ms: f64) -> Vec<ScheduledTask> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.tasks.len());
        for task in self.tasks.drain(..) {
            if task.due_ms <= now_ms {
                due.push(task);
            } else {
                remaining.push(task);
            }
        }
        self.tasks = remaining;
        due
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
