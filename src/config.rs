use std::env;

pub const DEFAULT_MODEL_ID: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub api_key: Option<String>,
    pub model_id: String,
    pub base_url: String,
    /// `None` lets the service keep the photo's own framing.
    pub aspect_ratio: Option<String>,
    pub timeout_secs: Option<u64>,
    pub salon_name: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            api_key: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            aspect_ratio: Some(DEFAULT_ASPECT_RATIO.to_string()),
            timeout_secs: None,
            salon_name: None,
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("GEMINI_API_KEY").ok();
        let model_id = non_empty_var("STUDIO_MODEL_ID").unwrap_or(defaults.model_id);
        let base_url = non_empty_var("STUDIO_BASE_URL").unwrap_or(defaults.base_url);
        let aspect_ratio = match env::var("STUDIO_ASPECT_RATIO") {
            Ok(val) => parse_aspect_ratio(&val),
            Err(_) => defaults.aspect_ratio,
        };
        let timeout_secs = env::var("STUDIO_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok());
        let salon_name = non_empty_var("STUDIO_SALON_NAME");

        StudioConfig {
            api_key,
            model_id,
            base_url,
            aspect_ratio,
            timeout_secs,
            salon_name,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: Option<&str>) -> Self {
        self.aspect_ratio = aspect_ratio.and_then(parse_aspect_ratio);
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_salon_name(mut self, salon_name: impl Into<String>) -> Self {
        self.salon_name = Some(salon_name.into());
        self
    }

    /// The credential, if one is set and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_aspect_ratio(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::new();
        assert_eq!(config.model_id, "gemini-3-pro-image-preview");
        assert_eq!(config.aspect_ratio.as_deref(), Some("1:1"));
        assert!(config.credential().is_none());
    }

    #[test]
    fn test_blank_credential_is_absent() {
        assert!(StudioConfig::new().with_api_key("").credential().is_none());
        assert!(StudioConfig::new().with_api_key("  \n").credential().is_none());
        assert_eq!(
            StudioConfig::new().with_api_key(" key-1 ").credential(),
            Some("key-1")
        );
    }

    #[test]
    fn test_aspect_ratio_builder() {
        let config = StudioConfig::new().with_aspect_ratio(Some("none"));
        assert!(config.aspect_ratio.is_none());

        let config = StudioConfig::new().with_aspect_ratio(Some("3:4"));
        assert_eq!(config.aspect_ratio.as_deref(), Some("3:4"));

        let config = StudioConfig::new().with_aspect_ratio(None);
        assert!(config.aspect_ratio.is_none());
    }
}
