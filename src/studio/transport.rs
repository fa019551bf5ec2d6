use crate::{
    config::StudioConfig,
    error::{Result, StudioError},
    models::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse},
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// The boundary to the external image-generation service.
#[async_trait]
pub trait ImageTransport: Send + Sync {
    async fn generate_content(
        &self,
        credential: &str,
        model_id: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

#[derive(Clone)]
pub struct GeminiTransport {
    client: Client,
    base_url: String,
}

impl GeminiTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &StudioConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            StudioError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn generate_url(&self, model_id: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let model = model_id.trim();
        if model.starts_with("models/") {
            format!("{}/{}:generateContent", base, model)
        } else {
            format!("{}/models/{}:generateContent", base, model)
        }
    }
}

#[async_trait]
impl ImageTransport for GeminiTransport {
    async fn generate_content(
        &self,
        credential: &str,
        model_id: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let body = serde_json::to_vec(request)?;

        let response = self
            .client
            .post(self.generate_url(model_id))
            .header("x-goog-api-key", credential)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Image service request failed: {:?}", e);
                StudioError::transport(None, Some(format!("Image service request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let service_message = serde_json::from_str::<ApiErrorEnvelope>(&error_text)
                .ok()
                .and_then(|envelope| {
                    log::error!(
                        "Service error code: {:?}, status: {:?}",
                        envelope.error.code,
                        envelope.error.status
                    );
                    envelope.error.message
                });
            log::error!("Image service returned {}", status);
            return Err(StudioError::transport(Some(status.as_u16()), service_message));
        }

        response.json::<GenerateContentResponse>().await.map_err(|e| {
            StudioError::transport(
                Some(status.as_u16()),
                Some(format!("Malformed image service response: {}", e)),
            )
        })
    }
}
