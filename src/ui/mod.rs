pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::App;
use crate::persistence::StoragePort;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI from current state
pub fn render<P: StoragePort>(f: &mut Frame, app: &App<P>) {
    let layout = create_layout(f.size());

    render_keybindings(f, app.focus, layout.keybindings_area);
    render_input_form(f, &app.form, app.focus, layout.form_area);
    render_list_pane(f, &app.rows(), app.selected_index, app.focus, layout.list_area);
}
