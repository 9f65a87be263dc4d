use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::agenda::{TaskChange, TaskCommand, TaskId, TaskList};
use crate::error::AppResult;
use crate::ui::{text_button, StyleTokens};
use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, CheckButton, Orientation};

const DONE_ROW_CLASS: &str = "task-done";

/// Checklist widgets rendered from a [`TaskList`]. Row signals only send
/// commands; the model decides, and rows are updated from the outcome.
pub(super) struct AgendaView {
    tokens: StyleTokens,
    model: RefCell<TaskList>,
    container: GtkBox,
    rows: RefCell<HashMap<TaskId, GtkBox>>,
}

impl AgendaView {
    pub(super) fn new(tokens: StyleTokens) -> Rc<Self> {
        let container = GtkBox::new(Orientation::Vertical, 0);
        container.set_valign(Align::Start);
        container.add_css_class("task-list");
        Rc::new(Self {
            tokens,
            model: RefCell::new(TaskList::new()),
            container,
            rows: RefCell::new(HashMap::new()),
        })
    }

    pub(super) fn widget(&self) -> &GtkBox {
        &self.container
    }

    pub(super) fn add_task(self: &Rc<Self>, text: &str) -> Option<TaskId> {
        let id = self.model.borrow_mut().add(text)?;
        let label = self
            .model
            .borrow()
            .get(id)
            .map(|task| task.text.clone())
            .unwrap_or_default();
        let row = self.build_row(id, &label);
        self.container.append(&row);
        self.rows.borrow_mut().insert(id, row);
        tracing::debug!(?id, pending = self.model.borrow().pending_count(), "task row added");
        Some(id)
    }

    pub(super) fn dispatch(&self, command: TaskCommand) -> AppResult<TaskChange> {
        let change = self.model.borrow_mut().apply(command)?;
        match &change {
            TaskChange::Updated { id, done } => {
                if let Some(row) = self.rows.borrow().get(id) {
                    if *done {
                        row.add_css_class(DONE_ROW_CLASS);
                    } else {
                        row.remove_css_class(DONE_ROW_CLASS);
                    }
                }
            }
            TaskChange::Removed { id, .. } => {
                if let Some(row) = self.rows.borrow_mut().remove(id) {
                    self.container.remove(&row);
                }
            }
        }
        Ok(change)
    }

    fn build_row(self: &Rc<Self>, id: TaskId, text: &str) -> GtkBox {
        let row = GtkBox::new(Orientation::Horizontal, self.tokens.spacing_4);
        row.add_css_class("task-row");

        let check = CheckButton::with_label(text);
        check.set_hexpand(true);
        check.set_halign(Align::Start);
        let view = Rc::downgrade(self);
        check.connect_toggled(move |check| {
            dispatch_from_signal(
                &view,
                TaskCommand::SetDone {
                    id,
                    done: check.is_active(),
                },
            );
        });

        let size = self.tokens.delete_button_size;
        let delete = text_button("x", "Remove task", size, &["task-delete"]);
        delete.set_valign(Align::Center);
        let view = Rc::downgrade(self);
        delete.connect_clicked(move |_| {
            dispatch_from_signal(&view, TaskCommand::Remove(id));
        });

        row.append(&check);
        row.append(&delete);
        row
    }
}

fn dispatch_from_signal(view: &Weak<AgendaView>, command: TaskCommand) {
    let Some(view) = view.upgrade() else {
        return;
    };
    if let Err(err) = view.dispatch(command) {
        tracing::warn!(?err, ?command, "task command rejected");
    }
}
