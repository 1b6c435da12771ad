//! Core domain types for Miniturbo.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod modality;
mod options;

pub use modality::{Modality, ModalityParseError};
pub use options::{
    DEFAULT_IMAGE_RESOLUTION, DEFAULT_VIDEO_FPS, GenerationDefaults, ImageOptions, VideoOptions,
};

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Prompt
// ============================================================================

/// Free-form text describing what to generate.
///
/// Unlike most string wrappers in this workspace a prompt may be empty:
/// generation reports the missing capability for every input, so there is
/// nothing to validate against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Prompt {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Prompt {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for Prompt {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Generation Outputs
// ============================================================================

/// Raw audio bytes produced by 1D generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioClip(Vec<u8>);

impl AudioClip {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Opaque result of image, volume, or video generation.
///
/// No payload schema exists yet, so the value is type-erased. Callers that
/// know the concrete type can recover it with [`Artifact::downcast_ref`].
pub struct Artifact(Box<dyn Any + Send + Sync>);

impl Artifact {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Box::new(value))
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Artifact(..)")
    }
}

/// A single generation call, independent of which modality it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Audio { prompt: Prompt },
    Image { prompt: Prompt, options: ImageOptions },
    Volume { prompt: Prompt },
    Video { prompt: Prompt, options: VideoOptions },
}

impl GenerationRequest {
    #[must_use]
    pub const fn modality(&self) -> Modality {
        match self {
            GenerationRequest::Audio { .. } => Modality::Audio,
            GenerationRequest::Image { .. } => Modality::Image,
            GenerationRequest::Volume { .. } => Modality::Volume,
            GenerationRequest::Video { .. } => Modality::Video,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        match self {
            GenerationRequest::Audio { prompt }
            | GenerationRequest::Image { prompt, .. }
            | GenerationRequest::Volume { prompt }
            | GenerationRequest::Video { prompt, .. } => prompt,
        }
    }
}

#[derive(Debug)]
pub enum GenerationOutput {
    Audio(AudioClip),
    Artifact(Artifact),
}

/// Whether a modality can currently produce output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityStatus {
    pub modality: Modality,
    pub implemented: bool,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The modality has no generation backend.
    #[error("{} not implemented", .modality.display_name())]
    UnimplementedCapability { modality: Modality },
}

impl GenerationError {
    #[must_use]
    pub const fn unimplemented(modality: Modality) -> Self {
        GenerationError::UnimplementedCapability { modality }
    }

    #[must_use]
    pub const fn modality(&self) -> Modality {
        match self {
            GenerationError::UnimplementedCapability { modality } => *modality,
        }
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;
