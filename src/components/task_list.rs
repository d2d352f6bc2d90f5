//! Task List Component
//!
//! Loading spinner, the cards, and the empty-state placeholder. Cards are
//! mapped straight from the list signal with no keyed `<For>`, so every
//! change to the signal drops all card nodes and builds them again.

use leptos::prelude::*;

use crate::components::TaskCardView;
use crate::context::use_app_context;

#[component]
pub fn TaskList() -> impl IntoView {
    let state = use_app_context().view;

    let placeholder_class = move || {
        if state.list.with(|list| list.shows_placeholder()) {
            "empty-state text-center text-muted my-5"
        } else {
            "empty-state text-center text-muted my-5 d-none"
        }
    };

    view! {
        <div
            id="loadingSpinner"
            class=move || if state.loading.get() { "text-center my-4" } else { "text-center my-4 d-none" }
        >
            <div class="spinner-border" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>

        <div id="tasksList">
            {move || {
                let cards = state.list.with(|list| list.cards().to_vec());
                cards.into_iter()
                    .map(|card| view! { <TaskCardView card=card /> })
                    .collect_view()
            }}
        </div>

        <div id="emptyState" class=placeholder_class>
            <i class="fas fa-clipboard-list fa-3x mb-3"></i>
            <p>"No tasks found"</p>
        </div>
    }
}
