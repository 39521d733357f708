use super::{validate, Pages};
use crate::executor::Request;
use crate::types::Envelope;
use crate::{Client, Result};

/// Amazon/Android APID lookup.
#[derive(Clone)]
pub struct Apid {
    client: Client,
}

impl Apid {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn lookup(&self, apid: &str) -> Result<Envelope> {
        validate::require_present("apid", apid)?;
        let url = format!("{}{}", self.client.endpoints().apids(), apid);
        let envelope = self.client.send_request(Request::get(url)).await?;
        tracing::info!(apid = %apid, "retrieved apid information");
        Ok(envelope)
    }
}

#[derive(Clone)]
pub struct ApidList {
    client: Client,
}

impl ApidList {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// A fresh cursor starting at the first page.
    pub fn iter(&self) -> Pages {
        Pages::new(self.client.clone(), self.client.endpoints().apids(), "apids")
    }
}
