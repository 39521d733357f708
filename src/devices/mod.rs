//! Device information resources: channels, device tokens, APIDs, device pins
//! and the feedback service.

mod apid;
mod channel;
mod device_pin;
mod device_token;
mod feedback;
mod pages;
pub mod validate;

pub use apid::{Apid, ApidList};
pub use channel::{ChannelInfo, ChannelList};
pub use device_pin::{DevicePin, DevicePinList, RegisterPinOptions};
pub use device_token::{DeviceToken, DeviceTokenList};
pub use feedback::Feedback;
pub use pages::Pages;
