//! Task List App
//!
//! Builds the controller once, provides it to every component, and kicks
//! off the initial load.

use leptos::prelude::*;

use crate::api::HttpTaskApi;
use crate::components::{EditModal, FilterBar, NewTaskForm, TaskList, ToastArea};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TaskListController;
use crate::view_state::ViewState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let state = ViewState::new(config.toast_delay_ms);
    let controller = TaskListController::new(HttpTaskApi::new(config.api_base), state);

    // Provide context to all children
    let ctx = AppContext::new(state, controller);
    provide_context(ctx);

    // Event bindings are attached by the view below; load once mounted
    ctx.spawn(|ctl| async move { ctl.init().await });

    let task_count = move || {
        let count = state.list.with(|list| list.cards().len());
        match count {
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        }
    };

    view! {
        <main class="container py-4">
            <h1 class="mb-4">
                <i class="fas fa-tasks"></i>
                " Task Manager"
            </h1>

            <NewTaskForm />

            <div class="d-flex justify-content-between align-items-center">
                <FilterBar />
                <p class="task-count text-muted mb-3">{task_count}</p>
            </div>

            <TaskList />
            <EditModal />
            <ToastArea />
        </main>
    }
}
