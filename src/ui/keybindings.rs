use crate::app::Focus;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the focused pane
pub fn render_keybindings(f: &mut Frame, focus: Focus, area: Rect) {
    let hints = match focus {
        Focus::Form => Line::from(vec![
            Span::raw(" type description   "),
            Span::raw("Enter add   "),
            Span::raw("Tab/Esc list   "),
            Span::raw("Ctrl+C quit"),
        ]),
        Focus::List => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("d delete   "),
            Span::raw("a/Tab add   "),
            Span::raw("q quit"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
