use crate::config::Config;
use crate::todo::history::HistoryManager;
use crate::todo::models::{Task, TaskFilter};
use crate::todo::parser::parse_due_date;
use crate::tui::edit::{PromptKind, PromptState};
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction, PromptModeAction};
use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::{debug, info};

#[derive(Debug)]
pub struct App {
    pub history: HistoryManager,
    pub filter: TaskFilter,
    pub selected_index: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    pub prompt: PromptState,
    pub status: Option<String>,
}

impl App {
    pub fn new(history: HistoryManager, filter: TaskFilter) -> Self {
        Self {
            history,
            filter,
            selected_index: 0,
            should_quit: false,
            help_mode: false,
            prompt: PromptState::new(),
            status: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let history = match config.history_limit {
            Some(limit) => HistoryManager::with_limit(limit),
            None => HistoryManager::new(),
        };
        Self::new(history, config.filter())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else if self.prompt.is_open() {
            self.handle_prompt_mode_key(key_event);
        } else {
            self.handle_normal_mode_key(key_event);
        }
        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::MoveSelectionUp => self.move_selection_up(),
            NormalModeAction::MoveSelectionDown => self.move_selection_down(),
            NormalModeAction::AddTask => self.open_prompt(PromptKind::AddDescription),
            NormalModeAction::MarkCompleted => self.open_prompt(PromptKind::MarkCompleted),
            NormalModeAction::DeleteTask => self.open_prompt(PromptKind::DeleteTask),
            NormalModeAction::CycleFilter => self.cycle_filter(),
            NormalModeAction::Undo => self.undo(),
            NormalModeAction::Redo => self.redo(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.help_mode = false;
        }
    }

    fn handle_prompt_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_prompt_mode_key(key_event) {
            PromptModeAction::Cancel => {
                self.prompt.close();
                self.status = Some("Cancelled".to_string());
            }
            PromptModeAction::Confirm => self.confirm_prompt(),
            PromptModeAction::Backspace => self.prompt.backspace(),
            PromptModeAction::Delete => self.prompt.delete(),
            PromptModeAction::MoveCursorLeft => self.prompt.move_cursor_left(),
            PromptModeAction::MoveCursorRight => self.prompt.move_cursor_right(),
            PromptModeAction::MoveCursorHome => self.prompt.move_cursor_home(),
            PromptModeAction::MoveCursorEnd => self.prompt.move_cursor_end(),
            PromptModeAction::InsertChar(c) => self.prompt.insert_char(c),
            PromptModeAction::None => {}
        }
    }

    /// Tasks shown under the current filter, in list order.
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.history.view(self.filter)
    }

    pub fn selected_task(&self) -> Option<Task> {
        self.visible_tasks().into_iter().nth(self.selected_index)
    }

    pub fn total_items(&self) -> usize {
        self.history.store().len()
    }

    pub fn completed_items(&self) -> usize {
        self.history.store().completed_count()
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.status = None;
        self.prompt.open(kind);
    }

    fn confirm_prompt(&mut self) {
        let Some((kind, input)) = self.prompt.take() else {
            return;
        };

        match kind {
            PromptKind::AddDescription => {
                if input.trim().is_empty() {
                    self.status = Some("Task description cannot be empty. Task not created.".to_string());
                } else {
                    self.prompt.open(PromptKind::AddDueDate { description: input });
                }
            }
            PromptKind::AddDueDate { description } => match parse_due_date(&input) {
                Ok(due_date) => {
                    let id = self.history.add_task(description, due_date);
                    info!(%id, "task added");
                    self.status = Some("Task added".to_string());
                }
                Err(e) => {
                    debug!("rejected due date: {}", e);
                    self.status = Some("Invalid date format. Task not created.".to_string());
                }
            },
            PromptKind::MarkCompleted if input.is_empty() => self.complete_selected(),
            PromptKind::MarkCompleted => {
                let matches = self.history.resolve(&input).len();
                let completed = self.history.mark_completed(&input);
                self.status = Some(match matches {
                    _ if !completed => format!("No task matches '{}'", input),
                    1 => format!("Marked '{}' as completed", input),
                    n => format!("Marked the first of {} tasks matching '{}' as completed", n, input),
                });
            }
            PromptKind::DeleteTask if input.is_empty() => self.delete_selected(),
            PromptKind::DeleteTask => {
                let removed = self.history.delete_task(&input);
                self.status = Some(match removed {
                    0 => format!("No task matches '{}'", input),
                    1 => "Deleted 1 task".to_string(),
                    n => format!("Deleted {} tasks", n),
                });
            }
        }

        self.clamp_selection();
    }

    /// An empty prompt acts on the highlighted task itself, by id.
    fn complete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            self.status = Some("No task selected".to_string());
            return;
        };
        self.history.complete_by_id(task.id());
        self.status = Some(format!("Marked '{}' as completed", task.description()));
    }

    fn delete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            self.status = Some("No task selected".to_string());
            return;
        };
        self.history.delete_by_id(task.id());
        self.status = Some(format!("Deleted '{}'", task.description()));
    }

    fn undo(&mut self) {
        self.status = Some(if self.history.undo() {
            "Undid last change".to_string()
        } else {
            "Nothing to undo".to_string()
        });
        self.clamp_selection();
    }

    fn redo(&mut self) {
        self.status = Some(if self.history.redo() {
            "Redid last change".to_string()
        } else {
            "Nothing to redo".to_string()
        });
        self.clamp_selection();
    }

    fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected_index = 0;
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        if self.selected_index < self.visible_tasks().len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_tasks().len();
        self.selected_index = self.selected_index.min(visible.saturating_sub(1));
    }
}
