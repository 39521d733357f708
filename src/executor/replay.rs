use super::{Request, RequestExecutor};
use crate::{types::Envelope, Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

enum Reply {
    Envelope(Envelope),
    Failure(String),
}

/// In-memory executor that answers requests from a scripted queue and records
/// every request it sees (for testing or offline use; never touches the network).
pub struct ReplayExecutor {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<Request>>,
}

impl ReplayExecutor {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Executor that answers with `responses` in order.
    pub fn from_responses(responses: impl IntoIterator<Item = Envelope>) -> Self {
        Self {
            replies: Mutex::new(responses.into_iter().map(Reply::Envelope).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response.
    pub async fn push(&self, envelope: Envelope) {
        self.replies.lock().await.push_back(Reply::Envelope(envelope));
    }

    /// Queue a transport failure.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .await
            .push_back(Reply::Failure(message.into()));
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Scripted replies not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

impl Default for ReplayExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestExecutor for ReplayExecutor {
    async fn send_request(&self, request: Request) -> Result<Envelope> {
        let described = format!("{} {}", request.method, request.url);
        self.requests.lock().await.push(request);
        match self.replies.lock().await.pop_front() {
            Some(Reply::Envelope(envelope)) => Ok(envelope),
            Some(Reply::Failure(message)) => Err(Error::Transport(message)),
            None => Err(Error::Transport(format!(
                "no scripted response left for {described}"
            ))),
        }
    }
}
