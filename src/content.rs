use crate::error::Result;
use base64::Engine;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Content role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Role {
    #[default]
    User,
    Model,
}

/// An ordered collection of [`Part`]s attributed to a single [`Role`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One element of a content sequence. Carries either text or inline binary
/// media; anything else the endpoint may return is preserved as [`Unknown`](Part::Unknown).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    Unknown(serde_json::Value),
}

/// Binary payload embedded directly in a [`Part`], encoded in base64
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

impl Content {
    #[inline]
    pub fn new<I: IntoIterator<Item = Part>>(role: Role, parts: I) -> Self {
        return Self {
            role: Some(role),
            parts: parts.into_iter().collect(),
        };
    }

    /// Creates a new content with a role of [`User`](Role::User)
    #[inline]
    pub fn user<I: IntoIterator<Item = Part>>(parts: I) -> Self {
        return Self::new(Role::User, parts);
    }
}

impl Part {
    /// Creates a new text part
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        return Self::Text { text: text.into() };
    }

    /// Creates a new inline-data part
    #[inline]
    pub fn inline_data(inline_data: Blob) -> Self {
        return Self::InlineData { inline_data };
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_inline_data(&self) -> Option<&Blob> {
        match self {
            Part::InlineData { inline_data } => Some(inline_data),
            _ => None,
        }
    }
}

impl Blob {
    #[inline]
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        return Self {
            mime_type: mime_type.into(),
            data: data.into(),
        };
    }

    /// Creates a new blob by base64-encoding the provided raw bytes
    #[inline]
    pub fn from_bytes(mime_type: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        return Self::new(
            mime_type,
            base64::engine::general_purpose::STANDARD.encode(bytes),
        );
    }

    /// Decodes the blob's payload into raw bytes
    #[inline]
    pub fn decode(&self) -> Result<Vec<u8>> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(&self.data)?;
        return Ok(bytes);
    }

    /// Decodes the blob's payload into an image
    #[inline]
    pub fn to_image(&self) -> Result<DynamicImage> {
        return Ok(image::load_from_memory(&self.decode()?)?);
    }

    /// Decodes the blob into an image and writes it at `path`, overwriting any
    /// previous file. The output format is derived from the path's extension.
    ///
    /// Note that this is a **blocking** method, and should not be used in async contexts
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_image()?.save(path)?;
        return Ok(());
    }
}
