//! Main client.

mod endpoints;

use crate::devices::{
    Apid, ApidList, ChannelInfo, ChannelList, DevicePin, DevicePinList, DeviceToken,
    DeviceTokenList, Feedback,
};
use crate::executor::{Executor, Request};
use crate::types::Envelope;
use std::sync::Arc;

pub use endpoints::{Endpoints, DEFAULT_BASE_URL};

/// Client for the device information endpoints.
///
/// Cheap to clone; every resource accessor holds its own clone.
#[derive(Clone)]
pub struct Client {
    executor: Executor,
    endpoints: Arc<Endpoints>,
}

impl Client {
    /// Create a client against [DEFAULT_BASE_URL].
    pub fn new(executor: Executor) -> Self {
        Self::with_endpoints(executor, Endpoints::default())
    }

    /// Create a client against another API root (staging, a local mock).
    pub fn with_base_url(executor: Executor, base: impl Into<String>) -> Self {
        Self::with_endpoints(executor, Endpoints::new(base))
    }

    pub fn with_endpoints(executor: Executor, endpoints: Endpoints) -> Self {
        Self {
            executor,
            endpoints: Arc::new(endpoints),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Hand one request to the executor. Errors come back unchanged.
    pub async fn send_request(&self, request: Request) -> crate::Result<Envelope> {
        tracing::trace!(method = %request.method, url = %request.url, "sending request");
        self.executor.send_request(request).await
    }

    pub fn channel_info(&self) -> ChannelInfo {
        ChannelInfo::new(self.clone())
    }

    pub fn channel_list(&self) -> ChannelList {
        ChannelList::new(self.clone())
    }

    pub fn device_token(&self) -> DeviceToken {
        DeviceToken::new(self.clone())
    }

    pub fn device_token_list(&self) -> DeviceTokenList {
        DeviceTokenList::new(self.clone())
    }

    pub fn apid(&self) -> Apid {
        Apid::new(self.clone())
    }

    pub fn apid_list(&self) -> ApidList {
        ApidList::new(self.clone())
    }

    pub fn device_pin(&self) -> DevicePin {
        DevicePin::new(self.clone())
    }

    pub fn device_pin_list(&self) -> DevicePinList {
        DevicePinList::new(self.clone())
    }

    pub fn feedback(&self) -> Feedback {
        Feedback::new(self.clone())
    }
}
