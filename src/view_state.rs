//! View State
//!
//! Signals backing the page, and the [`Surface`] implementation the
//! controller drives them through.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::models::Filter;
use crate::surface::{ListView, Surface};
use crate::toast::{ToastKind, ToastStack, TOAST_FADE_MS};

/// Page-wide signals (all `Copy` handles)
#[derive(Clone, Copy)]
pub struct ViewState {
    pub loading: RwSignal<bool>,
    pub list: RwSignal<ListView>,
    pub active_filter: RwSignal<Filter>,
    pub new_title: RwSignal<String>,
    pub new_description: RwSignal<String>,
    pub edit_title: RwSignal<String>,
    pub edit_description: RwSignal<String>,
    pub edit_open: RwSignal<bool>,
    pub toasts: RwSignal<ToastStack>,
    toast_delay_ms: u32,
}

impl ViewState {
    pub fn new(toast_delay_ms: u32) -> Self {
        Self {
            loading: RwSignal::new(false),
            list: RwSignal::new(ListView::Cleared),
            active_filter: RwSignal::new(Filter::All),
            new_title: RwSignal::new(String::new()),
            new_description: RwSignal::new(String::new()),
            edit_title: RwSignal::new(String::new()),
            edit_description: RwSignal::new(String::new()),
            edit_open: RwSignal::new(false),
            toasts: RwSignal::new(ToastStack::default()),
            toast_delay_ms,
        }
    }

    /// Fade a toast out, then drop it from the tree
    pub fn hide_toast(&self, id: u64) {
        let toasts = self.toasts;
        let mut started = false;
        toasts.update(|stack| started = stack.begin_hide(id));
        if started {
            Timeout::new(TOAST_FADE_MS, move || toasts.update(|stack| stack.remove(id))).forget();
        }
    }
}

impl Surface for ViewState {
    fn begin_loading(&self) {
        self.loading.set(true);
        self.list.set(ListView::Cleared);
    }

    fn end_loading(&self) {
        self.loading.set(false);
    }

    fn show_tasks(&self, view: ListView) {
        self.list.set(view);
    }

    fn mark_active_filter(&self, filter: Filter) {
        self.active_filter.set(filter);
    }

    fn reset_new_task_form(&self) {
        self.new_title.set(String::new());
        self.new_description.set(String::new());
    }

    fn fill_edit_form(&self, title: &str, description: &str) {
        self.edit_title.set(title.to_string());
        self.edit_description.set(description.to_string());
    }

    fn open_edit_modal(&self) {
        self.edit_open.set(true);
    }

    fn close_edit_modal(&self) {
        self.edit_open.set(false);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str, kind: ToastKind) {
        let mut id = 0;
        self.toasts.update(|stack| id = stack.push(message, kind));
        let state = *self;
        Timeout::new(self.toast_delay_ms, move || state.hide_toast(id)).forget();
    }
}
