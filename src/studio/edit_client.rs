use crate::{
    config::StudioConfig,
    error::{Result, StudioError},
    logger::Timer,
    models::{
        Content, EditCategory, EditRequest, EditResult, GenerateContentRequest,
        GenerateContentResponse, GenerationConfig, ImageConfig, Part,
    },
    studio::{
        prompt::{build_instruction, strip_data_uri},
        transport::ImageTransport,
    },
};
use std::sync::Arc;

const UPLOAD_MIME_TYPE: &str = "image/jpeg";

#[derive(Clone)]
pub struct EditClient {
    transport: Arc<dyn ImageTransport>,
    model_id: String,
    aspect_ratio: Option<String>,
    salon_name: Option<String>,
}

impl EditClient {
    pub fn new(transport: Arc<dyn ImageTransport>, config: &StudioConfig) -> Self {
        Self {
            transport,
            model_id: config.model_id.clone(),
            aspect_ratio: config.aspect_ratio.clone(),
            salon_name: config.salon_name.clone(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Assembles the service payload: the photo first, then the instruction.
    pub fn build_payload(&self, request: &EditRequest) -> GenerateContentRequest {
        let instruction = build_instruction(request.category(), request.options());
        self.payload_with(request, instruction)
    }

    fn payload_with(&self, request: &EditRequest, instruction: String) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::inline(UPLOAD_MIME_TYPE, strip_data_uri(request.photo())),
                    Part::text(instruction),
                ],
            }],
            generation_config: self.aspect_ratio.as_ref().map(|ratio| GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: ratio.clone(),
                }),
            }),
        }
    }

    /// Runs one edit. A missing credential fails before any network I/O.
    pub async fn generate(
        &self,
        request: &EditRequest,
        credential: Option<&str>,
    ) -> Result<EditResult> {
        let credential = match credential.map(str::trim).filter(|c| !c.is_empty()) {
            Some(credential) => credential,
            None => {
                log::error!(
                    "[req:{}] No credential configured for the image service",
                    request.request_id()
                );
                return Err(StudioError::missing_credential());
            }
        };

        let instruction = build_instruction(request.category(), request.options());

        log::info!(
            "[req:{}] Generating {} edit with model: {}",
            request.request_id(),
            request.module_id(),
            self.model_id
        );
        log::debug!("[req:{}] Edit instruction: {}", request.request_id(), instruction);

        let payload = self.payload_with(request, instruction);

        let response = {
            let _timer = Timer::new(&format!("image service call {}", request.request_id()));
            self.transport
                .generate_content(credential, &self.model_id, &payload)
                .await
        }
        .map_err(|e| {
            log::error!("[req:{}] Image service error: {}", request.request_id(), e);
            e
        })?;

        let image = extract_image(&response).ok_or_else(|| {
            log::warn!(
                "[req:{}] Service answered without an image ({} candidates)",
                request.request_id(),
                response.candidates.len()
            );
            StudioError::EmptyResult
        })?;

        log::info!(
            "[req:{}] Received edited image ({} base64 chars)",
            request.request_id(),
            image.len()
        );

        Ok(EditResult::new(
            image,
            Some(recommendation(
                request.module_id(),
                request.category(),
                self.salon_name.as_deref(),
            )),
        ))
    }
}

/// First part of the first candidate that carries inline image bytes.
pub fn extract_image(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| part.image_data())
}

pub fn recommendation(
    module_id: &str,
    category: Option<EditCategory>,
    salon_name: Option<&str>,
) -> String {
    let package = match category {
        Some(EditCategory::Bridal) => "Full Bridal Package",
        _ => "Premium Service",
    };
    match salon_name {
        Some(salon) => format!(
            "Based on this {} look, we recommend booking our \"{}\" with {}.",
            module_id, package, salon
        ),
        None => format!(
            "Based on this {} look, we recommend booking our \"{}\".",
            module_id, package
        ),
    }
}
