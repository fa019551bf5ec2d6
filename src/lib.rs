//! Glamgen turns a selfie plus a salon module choice into an edited image
//! via a Gemini-style `generateContent` endpoint.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod studio;

pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use models::{EditCategory, EditOptions, EditRequest, EditResult};
pub use studio::{EditClient, GeminiTransport, ImageTransport, StudioClient};
