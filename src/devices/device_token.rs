use super::{validate, Pages};
use crate::executor::Request;
use crate::types::Envelope;
use crate::{Client, Result};

/// iOS device token lookup.
#[derive(Clone)]
pub struct DeviceToken {
    client: Client,
}

impl DeviceToken {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn lookup(&self, token: &str) -> Result<Envelope> {
        validate::require_present("device token", token)?;
        let url = format!("{}{}", self.client.endpoints().device_tokens(), token);
        let envelope = self.client.send_request(Request::get(url)).await?;
        tracing::info!(token = %token, "retrieved device token information");
        Ok(envelope)
    }
}

/// All device tokens, page by page, plus the count endpoint.
#[derive(Clone)]
pub struct DeviceTokenList {
    client: Client,
}

impl DeviceTokenList {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// A fresh cursor starting at the first page.
    pub fn iter(&self) -> Pages {
        Pages::new(
            self.client.clone(),
            self.client.endpoints().device_tokens(),
            "device_tokens",
        )
    }

    /// Total and active token counters, as the raw envelope.
    pub async fn count(&self) -> Result<Envelope> {
        let url = self.client.endpoints().device_token_count();
        let envelope = self.client.send_request(Request::get(url)).await?;
        tracing::info!("retrieved device token count");
        Ok(envelope)
    }
}
