use super::models::{Task, TaskFilter, TaskId};
use chrono::NaiveDate;

/// Ordered, in-memory task list. Mutations here are not snapshotted;
/// go through `HistoryManager` for that.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, description: String, due_date: Option<NaiveDate>) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Task::new(id, description, due_date));
        id
    }

    /// Completes the first task whose rendered form starts with `match_text`.
    pub fn mark_completed(&mut self, match_text: &str) -> Option<TaskId> {
        let task = self.tasks.iter_mut().find(|task| task.matches(match_text))?;
        task.mark_completed();
        Some(task.id())
    }

    /// Removes every task whose rendered form starts with `match_text`.
    pub fn delete(&mut self, match_text: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.matches(match_text));
        before - self.tasks.len()
    }

    pub fn complete_by_id(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.mark_completed();
                true
            }
            None => false,
        }
    }

    pub fn delete_by_id(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        before != self.tasks.len()
    }

    pub fn resolve(&self, match_text: &str) -> Vec<TaskId> {
        self.tasks
            .iter()
            .filter(|task| task.matches(match_text))
            .map(Task::id)
            .collect()
    }

    pub fn view(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.accepts(task))
            .cloned()
            .collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Wholesale restore used by undo/redo. The id counter is left alone so
    /// ids handed out before a restore are never issued again.
    pub(crate) fn replace_all(&mut self, tasks: &[Task]) {
        self.tasks.clear();
        self.tasks.extend_from_slice(tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(Task::description).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = TaskStore::new();
        store.add("First".to_string(), None);
        store.add("Second".to_string(), None);
        store.add("Third".to_string(), None);

        assert_eq!(descriptions(store.tasks()), vec!["First", "Second", "Third"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut store = TaskStore::new();
        let a = store.add("Same".to_string(), None);
        let b = store.add("Same".to_string(), None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_mark_completed_first_match_only() {
        let mut store = TaskStore::new();
        store.add("Call mom".to_string(), None);
        store.add("Call dad".to_string(), None);

        let id = store.mark_completed("Call");
        assert_eq!(id, Some(store.tasks()[0].id()));
        assert!(store.tasks()[0].is_completed());
        assert!(!store.tasks()[1].is_completed());
    }

    #[test]
    fn test_mark_completed_no_match_is_silent() {
        let mut store = TaskStore::new();
        store.add("Buy milk".to_string(), None);

        assert_eq!(store.mark_completed("Sell milk"), None);
        assert!(!store.tasks()[0].is_completed());
    }

    #[test]
    fn test_mark_completed_can_target_status_suffix() {
        let mut store = TaskStore::new();
        store.add("Buy".to_string(), None);
        store.add("Buy milk".to_string(), None);

        // "Buy - Pending, ..." does not start with "Buy milk - Pending"
        store.mark_completed("Buy milk - Pending");
        assert!(!store.tasks()[0].is_completed());
        assert!(store.tasks()[1].is_completed());
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let mut store = TaskStore::new();
        store.add("Call mom".to_string(), None);
        store.add("Buy milk".to_string(), None);
        store.add("Call dad".to_string(), None);

        assert_eq!(store.delete("Call"), 2);
        assert_eq!(descriptions(store.tasks()), vec!["Buy milk"]);
    }

    #[test]
    fn test_delete_without_match_leaves_list() {
        let mut store = TaskStore::new();
        store.add("Buy milk".to_string(), None);

        assert_eq!(store.delete("Walk dog"), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_view_partitions_tasks() {
        let mut store = TaskStore::new();
        store.add("A".to_string(), None);
        store.add("B".to_string(), None);
        store.add("C".to_string(), None);
        store.mark_completed("B");

        let all = store.view(TaskFilter::All);
        let completed = store.view(TaskFilter::Completed);
        let pending = store.view(TaskFilter::Pending);

        assert_eq!(all.len(), 3);
        assert_eq!(descriptions(&completed), vec!["B"]);
        assert_eq!(descriptions(&pending), vec!["A", "C"]);
        assert_eq!(completed.len() + pending.len(), all.len());
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn test_view_returns_independent_copies() {
        let mut store = TaskStore::new();
        store.add("A".to_string(), None);
        let view = store.view(TaskFilter::All);
        store.mark_completed("A");

        assert!(!view[0].is_completed());
    }

    #[test]
    fn test_id_operations() {
        let mut store = TaskStore::new();
        let a = store.add("Call mom".to_string(), None);
        let b = store.add("Call mom".to_string(), None);

        assert_eq!(store.resolve("Call mom"), vec![a, b]);
        assert!(store.complete_by_id(b));
        assert!(!store.tasks()[0].is_completed());
        assert!(store.tasks()[1].is_completed());

        assert!(store.delete_by_id(a));
        assert!(!store.delete_by_id(a));
        assert_eq!(store.resolve("Call mom"), vec![b]);
    }

    #[test]
    fn test_replace_all_keeps_id_counter() {
        let mut store = TaskStore::new();
        let first = store.add("A".to_string(), None);
        store.replace_all(&[]);
        let second = store.add("B".to_string(), None);

        assert!(!store.is_empty());
        assert_ne!(first, second);
    }
}
