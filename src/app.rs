use crate::domain::{Intent, Task, ValidationError};
use crate::persistence::StoragePort;
use crate::store::Store;
use crate::sync::SyncPolicy;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    List,
}

/// Input form state for adding tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFormState {
    pub description: String,
    pub error: Option<ValidationError>,
}

impl InputFormState {
    /// The Add control is disabled while an error is showing
    pub fn submit_enabled(&self) -> bool {
        self.error.is_none()
    }
}

/// One rendered list row with its delete control payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub description: String,
    pub date: String,
    /// JSON snapshot of the task taken when the row was built
    pub delete_payload: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            description: task.description.clone(),
            date: task.date.clone(),
            delete_payload: task.snapshot(),
        }
    }
}

/// Presentation shell: the store plus UI-only state
pub struct App<P: StoragePort> {
    pub store: Store<P>,
    pub form: InputFormState,
    pub focus: Focus,
    pub selected_index: usize,
    pub sync_policy: SyncPolicy,
}

impl<P: StoragePort> App<P> {
    pub fn new(store: Store<P>, sync_policy: SyncPolicy) -> Self {
        Self {
            store,
            form: InputFormState::default(),
            focus: Focus::Form,
            selected_index: 0,
            sync_policy,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.store.state().tasks
    }

    /// Rows in store order, each carrying its own delete payload
    pub fn rows(&self) -> Vec<TaskRow> {
        self.tasks().iter().map(TaskRow::from_task).collect()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    /// Add character to the description field
    pub fn form_add_char(&mut self, c: char) {
        self.form.description.push(c);
        self.form_changed();
    }

    /// Backspace in the description field
    pub fn form_backspace(&mut self) {
        self.form.description.pop();
        self.form_changed();
    }

    // Any edit clears the error, whatever the new value is
    fn form_changed(&mut self) {
        self.form.error = None;
    }

    /// Submit the form using the current time
    pub fn submit_form(&mut self) -> Result<()> {
        self.submit_form_at(Utc::now())
    }

    /// Submit the form with an explicit creation time
    pub fn submit_form_at(&mut self, now: DateTime<Utc>) -> Result<()> {
        if !self.form.submit_enabled() {
            return Ok(());
        }

        match Task::draft(&self.form.description, now) {
            Ok(task) => {
                self.store
                    .dispatch(Intent::add(task))
                    .context("Failed to persist new task")?;
                self.form.description.clear();
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected form submission");
                self.form.error = Some(err);
            }
        }
        Ok(())
    }

    /// Run a row's delete control. Unparsable payloads dispatch nothing.
    pub fn activate_delete(&mut self, payload: &str) -> Result<()> {
        if let Some(task) = Task::from_snapshot(payload) {
            self.store
                .dispatch(Intent::delete(task))
                .context("Failed to persist deletion")?;
            self.clamp_selection();
        }
        Ok(())
    }

    /// Activate the delete control of the selected row
    pub fn delete_selected(&mut self) -> Result<()> {
        let payload = self
            .rows()
            .get(self.selected_index)
            .map(|row| row.delete_payload.clone());
        match payload {
            Some(payload) => self.activate_delete(&payload),
            None => Ok(()),
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.tasks().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// React to a storage-change notification.
    ///
    /// Returns true when the in-memory list was replaced.
    pub fn handle_storage_change(&mut self) -> Result<bool> {
        let Some(persisted) = self
            .store
            .read_persisted()
            .context("Failed to read persisted tasks")?
        else {
            return Ok(false);
        };

        if !self.sync_policy.needs_reload(self.store.state(), &persisted) {
            return Ok(false);
        }

        tracing::info!(
            current = self.store.state().len(),
            persisted = persisted.len(),
            "reloading tasks changed by another session"
        );
        self.store
            .dispatch(Intent::reload(persisted))
            .context("Failed to reload tasks")?;
        self.clamp_selection();
        Ok(true)
    }
}
