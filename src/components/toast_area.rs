//! Toast Area Component
//!
//! Fixed top-right notification stack. Only mounted once the first toast
//! arrives.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastArea() -> impl IntoView {
    let state = use_app_context().view;
    let toasts = state.toasts;

    view! {
        <Show when=move || toasts.with(|stack| stack.area_created())>
            <div
                id="toastContainer"
                class="toast-container position-fixed top-0 end-0 p-3"
                style="z-index: 9999;"
            >
                {move || {
                    let current = toasts.with(|stack| stack.toasts().to_vec());
                    current.into_iter().map(|toast| {
                        let id = toast.id;
                        let toast_class = format!(
                            "toast align-items-center text-bg-{} border-0 fade{}",
                            toast.kind.css_variant(),
                            if toast.hiding { "" } else { " show" },
                        );
                        view! {
                            <div class=toast_class role="alert">
                                <div class="d-flex">
                                    <div class="toast-body">
                                        <i class=format!("fas {}", toast.kind.icon())></i>
                                        " "
                                        {toast.message}
                                    </div>
                                    <button
                                        type="button"
                                        class="btn-close btn-close-white me-2 m-auto"
                                        on:click=move |_| state.hide_toast(id)
                                    ></button>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </Show>
    }
}
