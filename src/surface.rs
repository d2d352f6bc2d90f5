//! View Surface
//!
//! What the controller needs from the page: loading indicator, list area,
//! filter controls, forms, edit modal, confirmation and notifications.
//! Also the render model handed to the list area.

use crate::models::{Filter, Task};
use crate::toast::ToastKind;

/// UI collaborators driven by the controller
pub trait Surface {
    /// Show the spinner and visually clear the list
    fn begin_loading(&self);
    fn end_loading(&self);
    /// Replace the whole list area
    fn show_tasks(&self, view: ListView);
    /// Mark exactly one filter control active
    fn mark_active_filter(&self, filter: Filter);
    fn reset_new_task_form(&self);
    fn fill_edit_form(&self, title: &str, description: &str);
    fn open_edit_modal(&self);
    fn close_edit_modal(&self);
    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str, kind: ToastKind);
}

/// Content of the list area
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListView {
    /// Nothing rendered (while loading or after a failed load)
    #[default]
    Cleared,
    /// No tasks: the empty-state placeholder is shown
    Empty,
    /// One card per task, in server order
    Cards(Vec<TaskCard>),
}

impl ListView {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        if tasks.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(tasks.into_iter().map(TaskCard::from_task).collect())
        }
    }

    pub fn cards(&self) -> &[TaskCard] {
        match self {
            ListView::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        matches!(self, ListView::Empty)
    }
}

/// A rendered task card
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard {
    pub task: Task,
    pub created_label: String,
}

impl TaskCard {
    pub fn from_task(task: Task) -> Self {
        let created_label = task.created_label();
        Self { task, created_label }
    }

    pub fn card_class(&self) -> &'static str {
        if self.task.completed { "task-card completed" } else { "task-card" }
    }

    pub fn badge_class(&self) -> &'static str {
        if self.task.completed { "status-badge" } else { "status-badge pending" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.task.completed { "Undo" } else { "Complete" }
    }

    pub fn toggle_button_class(&self) -> &'static str {
        if self.task.completed { "btn btn-sm btn-secondary" } else { "btn btn-sm btn-success" }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.task.completed { "fas fa-undo" } else { "fas fa-check" }
    }
}
