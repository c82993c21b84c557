use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub form_area: Rect,
    pub list_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Form: input line + error line inside a border
/// - List: everything else
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(4), // Form
            Constraint::Min(0),    // Task list
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        form_area: chunks[1],
        list_area: chunks[2],
    }
}
