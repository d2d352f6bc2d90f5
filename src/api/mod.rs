//! Task API Bindings
//!
//! The remote data source behind the task list, plus its HTTP implementation.

mod tasks;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CreateTaskArgs, Filter, Task, TaskId, UpdateTaskArgs};

pub use tasks::HttpTaskApi;

/// Transport failures and server rejections.
///
/// Both look the same to the user; the detail only goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote task store.
///
/// Browser futures aren't `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch tasks scoped by filter, in server order
    async fn list_tasks(&self, filter: Filter) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<()>;

    /// Update only the fields present in `args`
    async fn update_task(&self, id: TaskId, args: &UpdateTaskArgs<'_>) -> ApiResult<()>;

    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;
}
