pub mod edit_client;
pub mod prompt;
pub mod transport;

use crate::{
    config::StudioConfig,
    error::Result,
    models::{EditRequest, EditResult},
};
use std::sync::Arc;

pub use edit_client::EditClient;
pub use transport::{GeminiTransport, ImageTransport};

#[derive(Clone)]
pub struct StudioClient {
    config: StudioConfig,
    edit_client: EditClient,
}

impl StudioClient {
    /// Client talking to the configured Gemini endpoint over HTTP.
    pub fn new(config: StudioConfig) -> Result<Self> {
        let transport = GeminiTransport::from_config(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: StudioConfig, transport: Arc<dyn ImageTransport>) -> Self {
        let edit_client = EditClient::new(transport, &config);
        Self {
            config,
            edit_client,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn edit(&self) -> &EditClient {
        &self.edit_client
    }

    /// Generate an edit using the credential from configuration.
    pub async fn generate_edit(&self, request: &EditRequest) -> Result<EditResult> {
        self.edit_client
            .generate(request, self.config.credential())
            .await
    }

    pub async fn generate_edit_with_credential(
        &self,
        request: &EditRequest,
        credential: Option<&str>,
    ) -> Result<EditResult> {
        self.edit_client.generate(request, credential).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudioError;
    use crate::models::{
        Candidate, Content, EditCategory, EditOptions, GenerateContentRequest,
        GenerateContentResponse,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct EchoTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageTransport for EchoTransport {
        async fn generate_content(
            &self,
            _credential: &str,
            _model_id: &str,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let photo = request.contents[0].parts[0].clone();
            Ok(GenerateContentResponse {
                candidates: vec![Candidate {
                    content: Some(Content {
                        role: Some("model".into()),
                        parts: vec![photo],
                    }),
                    finish_reason: None,
                }],
            })
        }
    }

    #[tokio::test]
    async fn test_uses_configured_credential() {
        let transport = Arc::new(EchoTransport::default());
        let config = StudioConfig::new()
            .with_api_key("key")
            .with_salon_name("Haneen");
        let client = StudioClient::with_transport(config, transport.clone());
        let request = EditRequest::new(
            "data:image/png;base64,QUJD",
            Some(EditCategory::Bridal),
            EditOptions::new(),
        );

        let result = client.generate_edit(&request).await.unwrap();
        assert_eq!(result.image, "QUJD");
        assert_eq!(result.data_url(), "data:image/jpeg;base64,QUJD");
        assert!(result.note.unwrap().ends_with("\"Full Bridal Package\" with Haneen."));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_configured_credential() {
        let transport = Arc::new(EchoTransport::default());
        let client = StudioClient::with_transport(StudioConfig::new(), transport.clone());
        let request = EditRequest::new("QUJD", Some(EditCategory::Hair), EditOptions::new());

        let err = client.generate_edit(&request).await.unwrap_err();
        assert!(matches!(err, StudioError::Configuration(_)));

        let result = client
            .generate_edit_with_credential(&request, Some("explicit"))
            .await
            .unwrap();
        assert_eq!(result.image, "QUJD");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_http_client_construction() {
        let client = StudioClient::new(StudioConfig::new().with_timeout(30)).unwrap();
        assert_eq!(client.edit().model_id(), "gemini-3-pro-image-preview");
        assert_eq!(client.config().timeout_secs, Some(30));
    }
}
