//! Task List Controller
//!
//! Owns the view-state loop: user action → request → full reload → render.
//! Framework-free; the page is reached only through [`Surface`] and the
//! server only through [`TaskApi`].

use std::cell::Cell;

use futures::lock::Mutex;
use log::{debug, error, info, warn};

use crate::api::TaskApi;
use crate::models::{CreateTaskArgs, Filter, Task, TaskId, UpdateTaskArgs};
use crate::surface::{ListView, Surface};
use crate::toast::ToastKind;

#[cfg(test)]
mod tests;

// ========================
// Messages
// ========================

pub const MSG_TITLE_REQUIRED: &str = "Task title is required";
pub const MSG_NO_EDIT_TARGET: &str = "No task selected for editing";
pub const MSG_LOAD_FAILED: &str = "Failed to load tasks";
pub const MSG_ADDED: &str = "Task added successfully!";
pub const MSG_ADD_FAILED: &str = "Failed to add task";
pub const MSG_COMPLETED: &str = "Task completed!";
pub const MSG_PENDING: &str = "Task marked as pending";
pub const MSG_UPDATED: &str = "Task updated successfully!";
pub const MSG_UPDATE_FAILED: &str = "Failed to update task";
pub const MSG_DELETED: &str = "Task deleted successfully!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete task";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this task?";

/// Clears the loading indicator however the load ends
struct LoadingGuard<'a, S: Surface>(&'a S);

impl<S: Surface> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.end_loading();
    }
}

/// Application state and orchestration for the task list
pub struct TaskListController<A, S> {
    api: A,
    surface: S,
    current_filter: Cell<Filter>,
    editing_task_id: Cell<Option<TaskId>>,
    initialized: Cell<bool>,
    /// Held for a whole network operation, follow-up reload included,
    /// so overlapping operations run one after another.
    queue: Mutex<()>,
}

impl<A: TaskApi, S: Surface> TaskListController<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self {
            api,
            surface,
            current_filter: Cell::new(Filter::All),
            editing_task_id: Cell::new(None),
            initialized: Cell::new(false),
            queue: Mutex::new(()),
        }
    }

    /// Sync the filter controls and run the initial load. Runs once.
    pub async fn init(&self) {
        if self.initialized.replace(true) {
            debug!("Controller already initialized");
            return;
        }
        info!("Task list starting");
        self.surface.mark_active_filter(self.current_filter.get());
        self.list().await;
    }

    /// Reload the list under the current filter
    pub async fn list(&self) {
        let _turn = self.queue.lock().await;
        self.load().await;
    }

    /// Reload; caller holds the queue
    async fn load(&self) {
        let filter = self.current_filter.get();
        self.surface.begin_loading();
        let _loading = LoadingGuard(&self.surface);

        match self.api.list_tasks(filter).await {
            Ok(tasks) => {
                debug!("Loaded {} tasks (filter={})", tasks.len(), filter.as_str());
                self.render(tasks);
            }
            Err(e) => {
                error!("Error loading tasks: {}", e);
                self.notify(MSG_LOAD_FAILED, ToastKind::Error);
            }
        }
    }

    pub async fn create(&self, title: &str, description: &str) {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            self.notify(MSG_TITLE_REQUIRED, ToastKind::Error);
            return;
        }

        let _turn = self.queue.lock().await;
        match self.api.create_task(&CreateTaskArgs { title, description }).await {
            Ok(()) => {
                info!("Created task {:?}", title);
                self.surface.reset_new_task_form();
                self.load().await;
                self.notify(MSG_ADDED, ToastKind::Success);
            }
            Err(e) => {
                error!("Error adding task: {}", e);
                self.notify(MSG_ADD_FAILED, ToastKind::Error);
            }
        }
    }

    pub async fn set_completion(&self, task_id: TaskId, completed: bool) {
        let _turn = self.queue.lock().await;
        match self.api.update_task(task_id, &UpdateTaskArgs::completion(completed)).await {
            Ok(()) => {
                info!("Task {} completed={}", task_id, completed);
                self.load().await;
                let message = if completed { MSG_COMPLETED } else { MSG_PENDING };
                self.notify(message, ToastKind::Success);
            }
            Err(e) => {
                error!("Error updating task {}: {}", task_id, e);
                self.notify(MSG_UPDATE_FAILED, ToastKind::Error);
            }
        }
    }

    /// Delete after the user confirms; declining does nothing at all
    pub async fn delete(&self, task_id: TaskId) {
        if !self.surface.confirm(MSG_CONFIRM_DELETE) {
            return;
        }

        let _turn = self.queue.lock().await;
        match self.api.delete_task(task_id).await {
            Ok(()) => {
                info!("Deleted task {}", task_id);
                self.load().await;
                self.notify(MSG_DELETED, ToastKind::Success);
            }
            Err(e) => {
                error!("Error deleting task {}: {}", task_id, e);
                self.notify(MSG_DELETE_FAILED, ToastKind::Error);
            }
        }
    }

    /// Start an edit session for `task` and open the modal
    pub fn begin_edit(&self, task: &Task) {
        self.editing_task_id.set(Some(task.id));
        self.surface
            .fill_edit_form(&task.title, task.description.as_deref().unwrap_or(""));
        self.surface.open_edit_modal();
    }

    /// Save the edit form against the task being edited
    pub async fn commit_edit(&self, title: &str, description: &str) {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            self.notify(MSG_TITLE_REQUIRED, ToastKind::Error);
            return;
        }
        let Some(task_id) = self.editing_task_id.get() else {
            warn!("Edit saved without an edit session");
            self.notify(MSG_NO_EDIT_TARGET, ToastKind::Error);
            return;
        };

        let _turn = self.queue.lock().await;
        match self.api.update_task(task_id, &UpdateTaskArgs::content(title, description)).await {
            Ok(()) => {
                info!("Updated task {}", task_id);
                self.surface.close_edit_modal();
                // a newer session may have started while this one was queued
                if self.editing_task_id.get() == Some(task_id) {
                    self.editing_task_id.set(None);
                }
                self.load().await;
                self.notify(MSG_UPDATED, ToastKind::Success);
            }
            Err(e) => {
                error!("Error updating task {}: {}", task_id, e);
                self.notify(MSG_UPDATE_FAILED, ToastKind::Error);
            }
        }
    }

    /// Modal dismissed without saving: end the edit session
    pub fn cancel_edit(&self) {
        if let Some(task_id) = self.editing_task_id.take() {
            debug!("Edit of task {} cancelled", task_id);
        }
        self.surface.close_edit_modal();
    }

    pub async fn set_filter(&self, filter: Filter) {
        self.current_filter.set(filter);
        self.surface.mark_active_filter(filter);
        self.list().await;
    }

    /// Full replacement of the list area, in server order
    pub fn render(&self, tasks: Vec<Task>) {
        self.surface.show_tasks(ListView::from_tasks(tasks));
    }

    pub fn notify(&self, message: &str, kind: ToastKind) {
        self.surface.notify(message, kind);
    }
}
