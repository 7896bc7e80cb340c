//! Scripted backend used by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::error::ApiError;
use super::http::{ApiRequest, ApiResponse, HttpClient, Method};

/// Replies with queued responses in order and records every request.
#[derive(Debug, Default)]
pub struct ScriptedHttp {
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn reply_json(self, status: u16, body: serde_json::Value) -> Self {
        self.reply(status, &body.to_string())
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl HttpClient for ScriptedHttp {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            panic!(
                "unexpected request: {} {}",
                request.method, request.path
            )
        })
    }
}
