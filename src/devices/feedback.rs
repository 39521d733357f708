use crate::executor::Request;
use crate::types::Envelope;
use crate::{Client, Result};

/// Identifiers marked inactive since a given time. One request, no paging.
#[derive(Clone)]
pub struct Feedback {
    client: Client,
}

impl Feedback {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Device tokens deactivated since `since` (ISO-8601, passed through as-is).
    pub async fn device_token(&self, since: &str) -> Result<Envelope> {
        let url = format!(
            "{}?since={}",
            self.client.endpoints().device_token_feedback(),
            since
        );
        let envelope = self.client.send_request(Request::get(url)).await?;
        tracing::info!(since = %since, "requested device token feedback");
        Ok(envelope)
    }

    /// APIDs deactivated since `since` (ISO-8601, passed through as-is).
    pub async fn apid(&self, since: &str) -> Result<Envelope> {
        let url = format!(
            "{}?since={}",
            self.client.endpoints().apid_feedback(),
            since
        );
        let envelope = self.client.send_request(Request::get(url)).await?;
        tracing::info!(since = %since, "requested apid feedback");
        Ok(envelope)
    }
}
