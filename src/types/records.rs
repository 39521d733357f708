//! Typed views over the records returned by the device endpoints.
//!
//! The API hands back plain JSON objects; these structs are an opt-in way to
//! read them. Unknown keys are ignored and absent optional keys become `None`.

use super::Record;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decode a raw [Record] into a typed view.
pub fn decode_record<T: DeserializeOwned>(record: &Record) -> crate::Result<T> {
    Ok(serde_json::from_value(serde_json::Value::Object(
        record.clone(),
    ))?)
}

/// Quiet-time window; either bound may be null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuietTime {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// iOS-specific channel settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IosSettings {
    pub badge: Option<i64>,
    pub quiettime: Option<QuietTime>,
    pub tz: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: String,
    pub device_type: String,
    pub installed: Option<bool>,
    pub opt_in: Option<bool>,
    pub push_address: Option<String>,
    pub created: Option<String>,
    pub last_registration: Option<String>,
    pub alias: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tag_groups: BTreeMap<String, Vec<String>>,
    pub ios: Option<IosSettings>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceTokenInfo {
    pub device_token: String,
    pub active: Option<bool>,
    pub alias: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created: Option<String>,
    pub last_registration: Option<String>,
    pub badge: Option<i64>,
    pub quiettime: Option<QuietTime>,
    pub tz: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApidInfo {
    pub apid: String,
    pub active: Option<bool>,
    pub alias: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created: Option<String>,
    pub last_registration: Option<String>,
    pub gcm_registration_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DevicePinInfo {
    pub device_pin: String,
    pub active: Option<bool>,
    pub alias: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created: Option<String>,
    pub last_registration: Option<String>,
}

/// Body of the device token count endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTokenCount {
    pub device_tokens_count: u64,
    pub active_device_tokens_count: u64,
}

/// One entry of the device token feedback list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenFeedback {
    pub device_token: String,
    pub marked_inactive_on: String,
    pub alias: Option<String>,
}

/// One entry of the APID feedback list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApidFeedback {
    pub apid: String,
    pub gcm_registration_id: Option<String>,
    pub marked_inactive_on: String,
    pub alias: Option<String>,
}
