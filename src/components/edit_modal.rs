//! Edit Modal Component
//!
//! Modal dialog for editing a task's title and description. Closing it
//! without saving ends the edit session.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.view;

    let save_changes = move |_: ev::MouseEvent| {
        let title = state.edit_title.get_untracked();
        let description = state.edit_description.get_untracked();
        ctx.spawn(move |ctl| async move { ctl.commit_edit(&title, &description).await });
    };
    let dismiss = move |_: ev::MouseEvent| ctx.controller().cancel_edit();

    view! {
        <Show when=move || state.edit_open.get()>
            <div class="modal fade show d-block" id="editModal" tabindex="-1" role="dialog">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Edit Task"</h5>
                            <button type="button" class="btn-close" on:click=dismiss></button>
                        </div>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label for="editTitle" class="form-label">"Title"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="editTitle"
                                    prop:value=move || state.edit_title.get()
                                    on:input=move |ev| state.edit_title.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-3">
                                <label for="editDescription" class="form-label">"Description"</label>
                                <textarea
                                    class="form-control"
                                    id="editDescription"
                                    rows="3"
                                    prop:value=move || state.edit_description.get()
                                    on:input=move |ev| state.edit_description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=dismiss>"Cancel"</button>
                            <button type="button" class="btn btn-primary" id="saveChanges" on:click=save_changes>
                                "Save Changes"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop fade show"></div>
        </Show>
    }
}
