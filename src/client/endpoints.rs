/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://go.urbanairship.com/api";

/// Resource URLs derived from one API root.
///
/// Collection URLs end with `/` so identifiers can be appended directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Build endpoints under `base`. Trailing slashes are ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn channels(&self) -> String {
        format!("{}/channels/", self.base)
    }

    pub fn device_tokens(&self) -> String {
        format!("{}/device_tokens/", self.base)
    }

    pub fn device_token_count(&self) -> String {
        format!("{}count", self.device_tokens())
    }

    pub fn device_token_feedback(&self) -> String {
        format!("{}feedback/", self.device_tokens())
    }

    pub fn apids(&self) -> String {
        format!("{}/apids/", self.base)
    }

    pub fn apid_feedback(&self) -> String {
        format!("{}feedback/", self.apids())
    }

    pub fn device_pins(&self) -> String {
        format!("{}/device_pins/", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        let e = Endpoints::default();
        assert_eq!(e.channels(), "https://go.urbanairship.com/api/channels/");
        assert_eq!(
            e.device_token_count(),
            "https://go.urbanairship.com/api/device_tokens/count"
        );
        assert_eq!(
            e.apid_feedback(),
            "https://go.urbanairship.com/api/apids/feedback/"
        );
        assert_eq!(e.device_pins(), "https://go.urbanairship.com/api/device_pins/");
    }

    #[test]
    fn trailing_slash_trimmed() {
        let e = Endpoints::new("http://localhost:8080/api//");
        assert_eq!(e.base(), "http://localhost:8080/api");
        assert_eq!(
            e.device_token_feedback(),
            "http://localhost:8080/api/device_tokens/feedback/"
        );
    }
}
