//! Filter Bar Component
//!
//! Mutually exclusive All / Active / Completed buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let active_filter = ctx.view.active_filter;

    view! {
        <div class="btn-group mb-3" role="group">
            {Filter::ALL.into_iter().map(|filter| {
                let is_active = move || active_filter.get() == filter;
                let button_class = move || {
                    if is_active() { "btn btn-outline-primary active" } else { "btn btn-outline-primary" }
                };

                view! {
                    <button
                        type="button"
                        class=button_class
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.spawn(move |ctl| async move { ctl.set_filter(filter).await })
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
