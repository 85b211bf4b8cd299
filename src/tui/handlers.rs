use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Char('r') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Redo
            }
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Char('a') => NormalModeAction::AddTask,
            KeyCode::Char('c') => NormalModeAction::MarkCompleted,
            KeyCode::Char('d') => NormalModeAction::DeleteTask,
            KeyCode::Char('f') => NormalModeAction::CycleFilter,
            KeyCode::Char('u') => NormalModeAction::Undo,
            KeyCode::Char('r') => NormalModeAction::Redo,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_prompt_mode_key(key_event: KeyEvent) -> PromptModeAction {
        match key_event.code {
            KeyCode::Esc => PromptModeAction::Cancel,
            KeyCode::Enter => PromptModeAction::Confirm,
            KeyCode::Backspace => PromptModeAction::Backspace,
            KeyCode::Delete => PromptModeAction::Delete,
            KeyCode::Left => PromptModeAction::MoveCursorLeft,
            KeyCode::Right => PromptModeAction::MoveCursorRight,
            KeyCode::Home => PromptModeAction::MoveCursorHome,
            KeyCode::End => PromptModeAction::MoveCursorEnd,
            KeyCode::Char(c) => PromptModeAction::InsertChar(c),
            _ => PromptModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    AddTask,
    MarkCompleted,
    DeleteTask,
    CycleFilter,
    Undo,
    Redo,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum PromptModeAction {
    None,
    Cancel,
    Confirm,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}
