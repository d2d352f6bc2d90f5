//! Task Card Component
//!
//! One task: status badge, checkbox, text, creation date and actions.
//! Handlers close over the card's own task.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::surface::TaskCard;

#[component]
pub fn TaskCardView(card: TaskCard) -> impl IntoView {
    let ctx = use_app_context();

    let id = card.task.id;
    let completed = card.task.completed;
    let task = card.task.clone();
    let description = card.task.description_text().map(str::to_string);

    view! {
        <div class=card.card_class() style="position: relative;">
            <div class=card.badge_class()></div>
            <div class="card-body">
                <div class="d-flex align-items-start">
                    <input
                        type="checkbox"
                        class="task-checkbox"
                        prop:checked=completed
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.spawn(move |ctl| async move { ctl.set_completion(id, checked).await });
                        }
                    />
                    <div class="flex-grow-1">
                        // Text nodes only, never parsed as markup
                        <h6 class="task-title">{card.task.title.clone()}</h6>
                        {description.map(|text| view! { <p class="task-description">{text}</p> })}
                        <small class="task-meta">
                            <i class="fas fa-calendar-alt"></i>
                            " Created: "
                            {card.created_label.clone()}
                        </small>
                    </div>
                </div>
                <div class="task-actions mt-3">
                    <button
                        class="btn btn-sm btn-warning"
                        on:click=move |_| ctx.controller().begin_edit(&task)
                    >
                        <i class="fas fa-edit"></i>
                        " Edit"
                    </button>
                    <button
                        class="btn btn-sm btn-danger"
                        on:click=move |_| ctx.spawn(move |ctl| async move { ctl.delete(id).await })
                    >
                        <i class="fas fa-trash"></i>
                        " Delete"
                    </button>
                    <button
                        class=card.toggle_button_class()
                        on:click=move |_| ctx.spawn(move |ctl| async move { ctl.set_completion(id, !completed).await })
                    >
                        <i class=card.toggle_icon()></i>
                        " "
                        {card.toggle_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
