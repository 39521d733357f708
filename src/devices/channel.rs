use super::{validate, Pages};
use crate::executor::Request;
use crate::types::{Envelope, Record};
use crate::{Client, Error, Result};
use serde_json::Value;

/// Channel lookup.
#[derive(Clone)]
pub struct ChannelInfo {
    client: Client,
}

impl ChannelInfo {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch one channel. Unlike the other lookups this returns the inner
    /// `channel` object rather than the whole envelope.
    pub async fn lookup(&self, uuid: &str) -> Result<Record> {
        validate::require_present("channel id", uuid)?;
        let url = format!("{}{}", self.client.endpoints().channels(), uuid);
        let envelope = self.client.send_request(Request::get(url)).await?;
        tracing::info!(channel = %uuid, "retrieved channel information");
        take_channel(envelope)
    }
}

fn take_channel(envelope: Envelope) -> Result<Record> {
    match envelope.body {
        Value::Object(mut body) => match body.remove("channel") {
            Some(Value::Object(channel)) => Ok(channel),
            _ => Err(Error::MissingField("channel")),
        },
        _ => Err(Error::MissingField("channel")),
    }
}

/// Every channel registered to the app, page by page.
#[derive(Clone)]
pub struct ChannelList {
    client: Client,
}

impl ChannelList {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// A fresh cursor starting at the first page.
    pub fn iter(&self) -> Pages {
        Pages::new(
            self.client.clone(),
            self.client.endpoints().channels(),
            "channels",
        )
    }
}
