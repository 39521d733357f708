use super::{validate, Pages};
use crate::executor::Request;
use crate::types::Envelope;
use crate::{Client, Result};
use serde::Serialize;

/// Optional registration payload for [DevicePin::register_with].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterPinOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl RegisterPinOptions {
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    fn is_empty(&self) -> bool {
        self.alias.is_none() && self.tags.is_none()
    }
}

/// BlackBerry device pin lookup, registration and deactivation.
///
/// Every call checks the pin is 8 hex digits before anything is sent.
#[derive(Clone)]
pub struct DevicePin {
    client: Client,
}

impl DevicePin {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn url(&self, pin: &str) -> String {
        format!("{}{}", self.client.endpoints().device_pins(), pin)
    }

    pub async fn lookup(&self, pin: &str) -> Result<Envelope> {
        validate::device_pin(pin)?;
        let envelope = self.client.send_request(Request::get(self.url(pin))).await?;
        tracing::info!(pin = %pin, "retrieved device pin information");
        Ok(envelope)
    }

    /// Register (or re-activate) a pin with no payload.
    pub async fn register(&self, pin: &str) -> Result<Envelope> {
        self.register_with(pin, &RegisterPinOptions::default()).await
    }

    /// Register a pin, attaching an alias and/or tags when given.
    pub async fn register_with(
        &self,
        pin: &str,
        options: &RegisterPinOptions,
    ) -> Result<Envelope> {
        validate::device_pin(pin)?;
        let body = if options.is_empty() {
            None
        } else {
            Some(serde_json::to_value(options)?)
        };
        let envelope = self
            .client
            .send_request(Request::put(self.url(pin), body))
            .await?;
        tracing::info!(pin = %pin, "registered device pin");
        Ok(envelope)
    }

    pub async fn deactivate(&self, pin: &str) -> Result<Envelope> {
        validate::device_pin(pin)?;
        let envelope = self
            .client
            .send_request(Request::delete(self.url(pin)))
            .await?;
        tracing::info!(pin = %pin, "deactivated device pin");
        Ok(envelope)
    }
}

#[derive(Clone)]
pub struct DevicePinList {
    client: Client,
}

impl DevicePinList {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// A fresh cursor starting at the first page.
    pub fn iter(&self) -> Pages {
        Pages::new(
            self.client.clone(),
            self.client.endpoints().device_pins(),
            "device_pins",
        )
    }
}
