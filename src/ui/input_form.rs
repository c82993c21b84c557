use crate::app::{Focus, InputFormState};
use crate::ui::styles::{border_style, error_style, focused_border_style, hint_style, input_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Description";

/// Render the add form: the description field, the Add control and any validation error
pub fn render_input_form(f: &mut Frame, form: &InputFormState, focus: Focus, area: Rect) {
    let focused = focus == Focus::Form;
    let mut lines = Vec::new();

    let mut field = vec![Span::raw("> ")];
    if form.description.is_empty() && !focused {
        field.push(Span::styled(PLACEHOLDER, hint_style()));
    } else {
        field.push(Span::styled(form.description.clone(), input_style()));
    }
    if focused {
        field.push(Span::styled("█", input_style())); // Cursor
    }
    field.push(Span::raw("  "));
    let add_style = if form.submit_enabled() { title_style() } else { hint_style() };
    field.push(Span::styled("[Add]", add_style));
    lines.push(Line::from(field));

    match &form.error {
        Some(err) => lines.push(Line::from(Span::styled(err.to_string(), error_style()))),
        None => lines.push(Line::raw("")),
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { focused_border_style() } else { border_style() })
            .title(Span::styled(" To Do ", title_style())),
    );

    f.render_widget(paragraph, area);
}
