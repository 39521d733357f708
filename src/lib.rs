//! # airship-devices
//!
//! Rust client for the device information endpoints of the Airship push API.
//!
//! ## Features
//!
//! - Channel, device token, APID and device pin lookups
//! - Device pin registration and deactivation
//! - Lazy iteration over the paginated channel, device token, APID and device pin lists
//! - Device token count and feedback (deactivated tokens/APIDs) queries
//!
//! The crate does not speak HTTP itself: plug in the host's client by
//! implementing [RequestExecutor]. It handles authentication, transport and
//! retries; this crate builds URLs, validates identifiers and follows
//! `next_page` links.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use airship_devices::Client;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::new(Arc::new(MyHttpExecutor::new("key", "secret")));
//!
//!     let pin = client.device_pin().lookup("12345678").await?;
//!     println!("{} {}", pin.code, pin.body);
//!
//!     let mut channels = client.channel_list().iter();
//!     while let Some(channel) = channels.next_record().await? {
//!         println!("{}", channel["channel_id"]);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod devices;
pub mod error;
pub mod executor;
pub mod types;

pub use client::{Client, Endpoints, DEFAULT_BASE_URL};
pub use devices::{
    Apid, ApidList, ChannelInfo, ChannelList, DevicePin, DevicePinList, DeviceToken,
    DeviceTokenList, Feedback, Pages, RegisterPinOptions,
};
pub use error::{ArgumentError, Error, Result};
pub use executor::{Executor, Method, ReplayExecutor, Request, RequestExecutor};
pub use types::{Envelope, Record};
