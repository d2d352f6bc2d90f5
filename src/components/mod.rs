//! UI Components
//!
//! Leptos components for the task page.

mod new_task_form;
mod filter_bar;
mod task_list;
mod task_card;
mod edit_modal;
mod toast_area;

pub use new_task_form::NewTaskForm;
pub use filter_bar::FilterBar;
pub use task_list::TaskList;
pub use task_card::TaskCardView;
pub use edit_modal::EditModal;
pub use toast_area::ToastArea;
