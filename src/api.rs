//! Task API Client
//!
//! REST bindings for the task service (`/api/v1/tasks`).

use async_trait::async_trait;
use board_sync::{SyncError, SyncResult, Task, TaskApi, TaskId, TaskPatch};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

/// Key under which the login flow stores the bearer token
const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Base URL from `TASKBOARD_API_URL` at build time
    pub fn from_env() -> Self {
        let base_url = option_env!("TASKBOARD_API_URL").unwrap_or("http://localhost:8080");
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/v1/tasks", self.base_url)
    }

    fn task_url(&self, id: &TaskId) -> String {
        format!("{}/{}", self.tasks_url(), id)
    }
}

/// Error body the API sends on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

pub struct RestTaskApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl RestTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match auth_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> SyncResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from(response).await)
        }
    }
}

fn auth_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

async fn error_from(response: Response) -> SyncError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    http_error(status, &body)
}

/// Map a failed response to `SyncError::Http`, preferring the server's text
fn http_error(status: u16, body: &str) -> SyncError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    SyncError::http(status, message)
}

#[async_trait(?Send)]
impl TaskApi for RestTaskApi {
    async fn list_tasks(&self) -> SyncResult<Vec<Task>> {
        let url = self.config.tasks_url();
        let response = self.send(self.request(Method::GET, &url)).await?;
        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| SyncError::Decode(e.to_string()))
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> SyncResult<Option<Task>> {
        let url = self.config.task_url(id);
        log::debug!("[API] PUT {} {:?}", url, patch);
        let response = self.send(self.request(Method::PUT, &url).json(patch)).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Task>(&body)
            .map(Some)
            .map_err(|e| SyncError::Decode(e.to_string()))
    }
}
