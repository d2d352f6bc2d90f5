//! New Task Form Component
//!
//! Title + description inputs; submit hands the values to the controller.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.view;

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = state.new_title.get_untracked();
        let description = state.new_description.get_untracked();
        ctx.spawn(move |ctl| async move { ctl.create(&title, &description).await });
    };

    view! {
        <form class="card card-body mb-4" id="taskForm" on:submit=create_task>
            <div class="mb-3">
                <input
                    type="text"
                    class="form-control"
                    id="taskTitle"
                    placeholder="What needs to be done?"
                    prop:value=move || state.new_title.get()
                    on:input=move |ev| state.new_title.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <textarea
                    class="form-control"
                    id="taskDescription"
                    rows="2"
                    placeholder="Description (optional)"
                    prop:value=move || state.new_description.get()
                    on:input=move |ev| state.new_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-plus"></i>
                " Add Task"
            </button>
        </form>
    }
}
