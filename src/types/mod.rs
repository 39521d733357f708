mod envelope;
mod records;

pub use envelope::Envelope;
pub use records::{
    decode_record, ApidFeedback, ApidInfo, Channel, DevicePinInfo, DeviceTokenCount,
    DeviceTokenInfo, IosSettings, QuietTime, TokenFeedback,
};

/// One resource record as returned by the API (string keys, JSON values).
pub type Record = serde_json::Map<String, serde_json::Value>;
