use crate::todo::models::TaskFilter;
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs},
};

const FILTERS: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Filter tabs
            Constraint::Min(0),    // Task list
            Constraint::Length(3), // Prompt / status
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_task_list(frame, chunks[1], app);
    draw_footer(frame, chunks[2], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = FILTERS
        .iter()
        .map(|filter| Line::from(filter.as_str()))
        .collect();
    let selected = FILTERS.iter().position(|f| *f == app.filter).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .select(selected)
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn draw_task_list(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.visible_tasks();
    let items: Vec<ListItem> = if app.history.store().is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No tasks. Press 'a' to add one.",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        visible
            .iter()
            .map(|task| {
                let style = if task.is_completed() {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(Span::styled(task.to_string(), style)))
            })
            .collect()
    };

    let title = format!(
        "Undo: {} | Redo: {}",
        app.history.undo_depth().saturating_sub(1),
        app.history.redo_depth()
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if !visible.is_empty() {
        list_state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer = if let Some(kind) = &app.prompt.kind {
        let (before_cursor, after_cursor) = app.prompt.buffer.split_at(app.prompt.cursor);
        Paragraph::new(format!("{}█{}", before_cursor, after_cursor))
            .block(Block::default().borders(Borders::ALL).title(kind.label()))
            .style(Style::default().fg(Color::White))
    } else {
        let counts = format!(
            "Tasks: {} | Completed: {} | a: add | c: complete | d: delete | f: filter | u/r: undo/redo | ?: help | q: quit",
            app.total_items(),
            app.completed_items()
        );
        let text = match &app.status {
            Some(status) => format!("{} | {}", status, counts),
            None => counts,
        };
        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow))
    };

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "Task List - Keyboard Commands",
        "",
        "TASKS:",
        "  a                 Add task (description, then optional due date)",
        "  c                 Mark first match completed (empty input: highlighted task)",
        "  d                 Delete all matches (empty input: highlighted task only)",
        "  f                 Cycle filter: all / pending / completed",
        "",
        "HISTORY:",
        "  u                 Undo last change",
        "  r / Ctrl+R        Redo",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move highlight",
        "",
        "PROMPTS:",
        "  Enter             Confirm",
        "  Esc               Cancel",
        "",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow))
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
