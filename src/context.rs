//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::api::HttpTaskApi;
use crate::controller::TaskListController;
use crate::view_state::ViewState;

pub type AppController = TaskListController<HttpTaskApi, ViewState>;

/// Page signals plus the one controller instance
#[derive(Clone, Copy)]
pub struct AppContext {
    pub view: ViewState,
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    pub fn new(view: ViewState, controller: AppController) -> Self {
        Self {
            view,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn controller(&self) -> Rc<AppController> {
        self.controller.get_value()
    }

    /// Run an async controller operation on the local executor
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<AppController>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller()));
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
