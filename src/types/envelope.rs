use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response wrapper returned by every request: HTTP status plus decoded JSON body.
///
/// Executors may hand back the status as a number or as a numeric string;
/// both deserialize to the integer form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(deserialize_with = "status_code")]
    pub code: u16,
    #[serde(default)]
    pub body: Value,
}

impl Envelope {
    pub fn new(code: u16, body: Value) -> Self {
        Self { code, body }
    }

    /// True for 2xx codes. The library itself never acts on this.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Decode the body into one of the typed records (or any serde type).
    pub fn body_as<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(T::deserialize(&self.body)?)
    }
}

fn status_code<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u16),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(code) => Ok(code),
        Raw::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid status code {s:?}"))),
    }
}
