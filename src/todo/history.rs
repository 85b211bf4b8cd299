use super::models::{Task, TaskFilter, TaskId};
use super::store::TaskStore;
use chrono::NaiveDate;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Full copy of the task list at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    tasks: Vec<Task>,
}

impl Snapshot {
    fn capture(store: &TaskStore) -> Self {
        Self {
            tasks: store.tasks().to_vec(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Owns the live `TaskStore` and snapshots it after every mutation.
///
/// The top of the undo stack always mirrors the live list. Undo never pops
/// the last remaining entry; it is the baseline the list rewinds to.
#[derive(Debug, Default)]
pub struct HistoryManager {
    store: TaskStore,
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    limit: Option<usize>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` undo entries, evicting the oldest first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    pub fn add_task(&mut self, description: String, due_date: Option<NaiveDate>) -> TaskId {
        let id = self.store.add(description, due_date);
        self.record_mutation();
        id
    }

    /// Returns false, and records nothing, when no task matches.
    pub fn mark_completed(&mut self, match_text: &str) -> bool {
        match self.store.mark_completed(match_text) {
            Some(_) => {
                self.record_mutation();
                true
            }
            None => {
                trace!(match_text, "mark_completed matched nothing");
                false
            }
        }
    }

    /// Records a history entry even when nothing was removed.
    pub fn delete_task(&mut self, match_text: &str) -> usize {
        let removed = self.store.delete(match_text);
        self.record_mutation();
        removed
    }

    pub fn complete_by_id(&mut self, id: TaskId) -> bool {
        let found = self.store.complete_by_id(id);
        if found {
            self.record_mutation();
        }
        found
    }

    pub fn delete_by_id(&mut self, id: TaskId) -> bool {
        let found = self.store.delete_by_id(id);
        if found {
            self.record_mutation();
        }
        found
    }

    pub fn resolve(&self, match_text: &str) -> Vec<TaskId> {
        self.store.resolve(match_text)
    }

    /// Rendered tasks for `filter`; anything but the three literals yields nothing.
    pub fn view_tasks(&self, filter: &str) -> Vec<String> {
        match TaskFilter::parse(filter) {
            Some(filter) => self.view(filter).iter().map(Task::to_string).collect(),
            None => Vec::new(),
        }
    }

    pub fn view(&self, filter: TaskFilter) -> Vec<Task> {
        self.store.view(filter)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    fn record_mutation(&mut self) {
        self.undo_stack.push_back(Snapshot::capture(&self.store));
        self.redo_stack.clear();

        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }

        debug!(
            tasks = self.store.len(),
            undo_depth = self.undo_stack.len(),
            "recorded history entry"
        );
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            trace!("undo: nothing to revert to");
            return false;
        }

        if let Some(current) = self.undo_stack.pop_back() {
            self.redo_stack.push(current);
        }
        if let Some(previous) = self.undo_stack.back() {
            self.store.replace_all(previous.tasks());
        }

        debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo"
        );
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            trace!("redo: nothing to replay");
            return false;
        };

        self.store.replace_all(next.tasks());
        self.undo_stack.push_back(next);

        debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo"
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
