//! Draws the cleaner screen: folder field, entry checkboxes, delete button,
//! log panel, and the confirmation dialog on top.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::model::{AppModel, ConfirmChoice, ConfirmDialog, Focus};
use crate::cleaner::COMPLETION_MARKER;
use crate::common::format;
use crate::common::safety;

/// Tallest the checkbox panel grows before it starts scrolling
const MAX_ENTRY_ROWS: usize = 10;

const FOLDER_LABEL: &str = "Path to the translation folder";
const ENTRIES_LABEL: &str = "Select the translation that you want to delete:";
const BUTTON_LABEL: &str = " Delete selected translation ";
const HELP: &str =
    "Tab/↑↓ move  Space toggle  a all  Enter activate  PgUp/PgDn scroll log  Esc quit";

pub fn render(model: &AppModel, frame: &mut Frame) {
    let entry_rows = model.selection.len().clamp(1, MAX_ENTRY_ROWS);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(entry_rows as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_folder(model, frame, chunks[0]);
    render_entries(model, frame, chunks[1], entry_rows);
    render_button(model, frame, chunks[2]);
    render_log(model, frame, chunks[3]);
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );

    if let Some(dialog) = &model.confirm {
        render_confirm(dialog, frame);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn render_folder(model: &AppModel, frame: &mut Frame, area: Rect) {
    let focused = model.focus == Focus::Folder;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(FOLDER_LABEL)
        .border_style(focus_style(focused));

    let inner_width = area.width.saturating_sub(2) as usize;
    let (visible, cursor_col) = visible_input(model.folder.value(), model.folder.cursor(), inner_width);
    let text = if visible.is_empty() && !focused {
        Span::styled("Enter the path", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(visible)
    };
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if focused && model.confirm.is_none() {
        frame.set_cursor_position((area.x + 1 + cursor_col as u16, area.y + 1));
    }
}

/// Slice of the input that fits `width` columns with the cursor in view,
/// and the cursor's column inside that slice
pub fn visible_input(value: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let start = cursor.saturating_sub(width - 1);
    let visible: String = value.chars().skip(start).take(width).collect();
    (visible, cursor - start)
}

fn render_entries(model: &AppModel, frame: &mut Frame, area: Rect, rows: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(ENTRIES_LABEL, Style::default().add_modifier(Modifier::BOLD)));

    if model.selection.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No entries configured",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let focused_index = match model.focus {
        Focus::Entry(i) => Some(i),
        _ => None,
    };
    let offset = focused_index
        .map(|i| (i + 1).saturating_sub(rows))
        .unwrap_or(0);

    let lines: Vec<Line> = model
        .selection
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(i, (name, checked))| {
            let mark = if checked { "[x]" } else { "[ ]" };
            let style = if focused_index == Some(i) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{} {}", mark, name), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_button(model: &AppModel, frame: &mut Frame, area: Rect) {
    let focused = model.focus == Focus::DeleteButton;
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };
    let label = format!(
        "{}({} of {})",
        BUTTON_LABEL,
        model.selection.checked_count(),
        format::format_entries(model.selection.len())
    );
    let button = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(focus_style(focused)));
    frame.render_widget(button, area);
}

fn log_style(line: &str) -> Style {
    if line.starts_with('✅') {
        Style::default().fg(Color::Green)
    } else if line.starts_with('❌') {
        Style::default().fg(Color::Red)
    } else if line.starts_with('⚠') {
        Style::default().fg(Color::Yellow)
    } else if line == COMPLETION_MARKER {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// First visible line so the view sits `scroll_from_bottom` lines above the end
pub fn log_viewport(total: usize, height: usize, scroll_from_bottom: usize) -> usize {
    total.saturating_sub(height).saturating_sub(scroll_from_bottom)
}

fn render_log(model: &AppModel, frame: &mut Frame, area: Rect) {
    let height = area.height.saturating_sub(2) as usize;
    let top = log_viewport(model.log.len(), height, model.log_scroll);
    let title = if model.log_scroll > 0 {
        format!("Log (↑{})", model.log_scroll)
    } else {
        "Log".to_string()
    };

    let lines: Vec<Line> = model
        .log
        .iter()
        .skip(top)
        .take(height)
        .map(|l| Line::from(Span::styled(l.as_str(), log_style(l))))
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(log, area);
}

/// Rectangle of `width` x `height` centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_confirm(dialog: &ConfirmDialog, frame: &mut Frame) {
    let area = centered_rect(60, 8, frame.area());
    let button = |label: &str, selected: bool| {
        let style = if selected {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        Span::styled(format!("[ {} ]", label), style)
    };

    let exd = safety::data_root(&dialog.target);
    let width = area.width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from("Do you want to delete selected translation?"),
        Line::from(Span::styled(
            format!(
                "{} under {}",
                format::format_entries(dialog.items.len()),
                format::truncate_left(&format::format_path(&exd), width.saturating_sub(20))
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            button("Delete", dialog.choice == ConfirmChoice::Delete),
            Span::raw("   "),
            button("Cancel", dialog.choice == ConfirmChoice::Cancel),
        ]),
    ];

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirmation")
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::settings::Settings;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;

    fn model() -> AppModel {
        let settings = Settings {
            target_folder: "/game".into(),
            files_to_delete: vec!["addon".into(), "warp".into()],
        };
        AppModel::new(&settings, &[])
    }

    fn draw(model: &AppModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(model, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_log_viewport() {
        assert_eq!(log_viewport(3, 10, 0), 0);
        assert_eq!(log_viewport(30, 10, 0), 20);
        assert_eq!(log_viewport(30, 10, 5), 15);
        assert_eq!(log_viewport(30, 10, 50), 0);
    }

    #[test]
    fn test_visible_input_keeps_cursor_in_view() {
        assert_eq!(visible_input("abc", 3, 10), ("abc".to_string(), 3));
        assert_eq!(visible_input("abcdefgh", 8, 4), ("fgh".to_string(), 3));
        assert_eq!(visible_input("abcdefgh", 0, 4), ("abcd".to_string(), 0));
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(60, 8, area);
        assert_eq!(r, Rect::new(0, 1, 40, 8));
    }

    #[test]
    fn test_screen_shows_form_and_log() {
        let screen = draw(&model());
        assert!(screen.contains("/game"));
        assert!(screen.contains("[x] addon"));
        assert!(screen.contains("[x] warp"));
        assert!(screen.contains("Delete selected translation"));
        assert!(screen.contains("Welcome to XIV Translation Cleaner"));
    }

    #[test]
    fn test_unchecked_entry_rendered() {
        let mut m = model();
        m.selection.toggle(1);
        let screen = draw(&m);
        assert!(screen.contains("[ ] warp"));
        assert!(screen.contains("(1 of 2 entries)"));
    }

    #[test]
    fn test_confirm_dialog_rendered() {
        let mut m = model();
        m.confirm = Some(ConfirmDialog {
            target: PathBuf::from("/game"),
            items: vec!["addon".into()],
            choice: ConfirmChoice::Cancel,
        });
        let screen = draw(&m);
        assert!(screen.contains("Do you want to delete selected translation?"));
        assert!(screen.contains("[ Delete ]"));
        assert!(screen.contains("[ Cancel ]"));
    }
}
