//! HTTP Task API
//!
//! `reqwest` client for the `/api/tasks` endpoints. On wasm32 this goes
//! through the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use super::{ApiError, ApiResult, TaskApi};
use crate::models::{CreateTaskArgs, Filter, Task, TaskId, UpdateTaskArgs};

pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    /// `base_url` is the origin hosting `/api/tasks`, without trailing slash
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/api/tasks/{}", self.base_url, id)
    }

    // ========================
    // Request Builders
    // ========================

    pub fn list_request(&self, filter: Filter) -> RequestBuilder {
        self.client
            .get(self.tasks_url())
            .query(&[("filter", filter.as_str())])
    }

    pub fn create_request(&self, args: &CreateTaskArgs<'_>) -> RequestBuilder {
        self.client.post(self.tasks_url()).json(args)
    }

    pub fn update_request(&self, id: TaskId, args: &UpdateTaskArgs<'_>) -> RequestBuilder {
        self.client.put(self.task_url(id)).json(args)
    }

    pub fn delete_request(&self, id: TaskId) -> RequestBuilder {
        self.client.delete(self.task_url(id))
    }
}

/// Send and classify: anything outside 2xx is a failure
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response)
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self, filter: Filter) -> ApiResult<Vec<Task>> {
        let response = send(self.list_request(filter)).await?;
        Ok(response.json::<Vec<Task>>().await?)
    }

    async fn create_task(&self, args: &CreateTaskArgs<'_>) -> ApiResult<()> {
        send(self.create_request(args)).await?;
        Ok(())
    }

    async fn update_task(&self, id: TaskId, args: &UpdateTaskArgs<'_>) -> ApiResult<()> {
        send(self.update_request(id, args)).await?;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        send(self.delete_request(id)).await?;
        Ok(())
    }
}
