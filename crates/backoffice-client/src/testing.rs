//! Scripted backend double shared by the test suites of the workspace.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use backoffice_core::{AppError, AppResult};

use crate::http::{ApiRequest, ApiResponse, HttpTransport};

#[derive(Debug)]
struct Scripted {
    delay: Option<Duration>,
    outcome: AppResult<ApiResponse>,
}

/// Replays queued answers in order and records every request.
///
/// A request arriving with nothing queued fails as a transport error.
#[derive(Debug, Default)]
pub struct FakeBackend {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue an answer.
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.push(None, Ok(ApiResponse::new(status, body)))
    }

    /// Queue an answer delivered after `delay`.
    pub fn reply_after(&self, delay: Duration, status: u16, body: &str) -> &Self {
        self.push(Some(delay), Ok(ApiResponse::new(status, body)))
    }

    /// Queue a network failure.
    pub fn fail(&self) -> &Self {
        self.push(None, Err(AppError::transport("connection refused")))
    }

    fn push(&self, delay: Option<Duration>, outcome: AppResult<ApiResponse>) -> &Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted { delay, outcome });
        self
    }

    /// Every request sent so far.
    pub fn sent(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted { delay, outcome }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                outcome
            }
            None => Err(AppError::transport("no scripted response")),
        }
    }
}
