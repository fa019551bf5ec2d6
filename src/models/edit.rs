use crate::error::{Result, StudioError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_STYLE: &str = "natural";
pub const DEFAULT_INTENSITY: &str = "medium";
pub const DEFAULT_COLOR: &str = "matching";

pub const RESULT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditCategory {
    Makeup,
    Hair,
    HairColor,
    Nails,
    Bridal,
    Skin,
    Lashes,
}

impl EditCategory {
    pub const ALL: [EditCategory; 7] = [
        EditCategory::Makeup,
        EditCategory::Hair,
        EditCategory::HairColor,
        EditCategory::Nails,
        EditCategory::Bridal,
        EditCategory::Skin,
        EditCategory::Lashes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EditCategory::Makeup => "makeup",
            EditCategory::Hair => "hair",
            EditCategory::HairColor => "hair_color",
            EditCategory::Nails => "nails",
            EditCategory::Bridal => "bridal",
            EditCategory::Skin => "skin",
            EditCategory::Lashes => "lashes",
        }
    }

    /// Parse a module id, returning `None` for anything unrecognized.
    pub fn from_module_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }
}

impl fmt::Display for EditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditCategory {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        EditCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| StudioError::Configuration(format!("Unknown edit category: {}", s)))
    }
}

/// Free-form option values chosen in the studio controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOptions(BTreeMap<String, String>);

impl EditOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// A value counts as set only when it is non-empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn style(&self) -> &str {
        self.get("style").unwrap_or(DEFAULT_STYLE)
    }

    pub fn intensity(&self) -> &str {
        self.get("intensity").unwrap_or(DEFAULT_INTENSITY)
    }

    pub fn color(&self) -> &str {
        self.get("color").unwrap_or(DEFAULT_COLOR)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EditOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        EditOptions(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct EditRequest {
    request_id: String,
    photo: String,
    category: Option<EditCategory>,
    options: EditOptions,
}

impl EditRequest {
    /// `photo` is base64, optionally prefixed with a `data:image/...;base64,` marker.
    pub fn new(photo: impl Into<String>, category: Option<EditCategory>, options: EditOptions) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            photo: photo.into(),
            category,
            options,
        }
    }

    /// Builds a request from a raw module id; unknown ids fall back to the generic edit.
    pub fn from_module_id(photo: impl Into<String>, module_id: &str, options: EditOptions) -> Self {
        let category = EditCategory::from_module_id(module_id);
        if category.is_none() {
            log::warn!("Unrecognized studio module '{}', using generic enhancement", module_id);
        }
        Self::new(photo, category, options)
    }

    pub fn from_bytes(bytes: &[u8], category: Option<EditCategory>, options: EditOptions) -> Self {
        Self::new(STANDARD.encode(bytes), category, options)
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn category(&self) -> Option<EditCategory> {
        self.category
    }

    pub fn options(&self) -> &EditOptions {
        &self.options
    }

    /// Module id used in user-facing text; unrecognized requests read as "custom".
    pub fn module_id(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("custom")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditResult {
    /// Base64 image payload without a data URI prefix.
    pub image: String,
    pub mime_type: String,
    pub note: Option<String>,
}

impl EditResult {
    pub fn new(image: impl Into<String>, note: Option<String>) -> Self {
        Self {
            image: image.into(),
            mime_type: RESULT_MIME_TYPE.to_string(),
            note,
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.image)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.image.as_bytes())
            .map_err(|e| StudioError::Decode(e.to_string()))
    }
}
