use crate::app::{Focus, TaskRow};
use crate::ui::styles::{
    border_style, date_style, default_style, delete_style, focused_border_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list, one row per task in store order
pub fn render_list_pane(f: &mut Frame, rows: &[TaskRow], selected_index: usize, focus: Focus, area: Rect) {
    let focused = focus == Focus::List;

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let style = if focused && idx == selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(create_task_line(row)).style(style)
        })
        .collect();

    let title = format!(" Tasks ({}) ", rows.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { focused_border_style() } else { border_style() })
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Format: Go for walk  2024-05-01  [delete]
fn create_task_line(row: &TaskRow) -> Line<'static> {
    // Dates are opaque text; show the calendar part when it looks like one
    let day = row.date.get(..10).unwrap_or(&row.date).to_string();

    Line::from(vec![
        Span::raw(row.description.clone()),
        Span::raw("  "),
        Span::styled(day, date_style()),
        Span::raw("  "),
        Span::styled("[delete]", delete_style()),
    ])
}
