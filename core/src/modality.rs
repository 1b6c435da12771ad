//! Per-modality generation modules.
//!
//! None of the modalities has a generation backend yet. Each module accepts
//! the full parameter set it will eventually need and reports
//! [`GenerationError::UnimplementedCapability`] without inspecting it.

use miniturbo_types::{
    Artifact, AudioClip, GenerationError, GenerationResult, ImageOptions, Modality, Prompt,
    VideoOptions,
};

fn report_unimplemented<T>(modality: Modality, prompt: &Prompt) -> GenerationResult<T> {
    tracing::debug!(
        modality = modality.as_str(),
        prompt_len = prompt.len(),
        "Generation requested for unimplemented capability"
    );
    Err(GenerationError::unimplemented(modality))
}

/// 1D audio generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Audio1DModule;

impl Audio1DModule {
    #[must_use]
    pub const fn modality(&self) -> Modality {
        Modality::Audio
    }

    pub fn generate(&self, prompt: &Prompt) -> GenerationResult<AudioClip> {
        report_unimplemented(self.modality(), prompt)
    }
}

/// 2D image generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Image2DModule;

impl Image2DModule {
    #[must_use]
    pub const fn modality(&self) -> Modality {
        Modality::Image
    }

    pub fn generate(&self, prompt: &Prompt, _options: ImageOptions) -> GenerationResult<Artifact> {
        report_unimplemented(self.modality(), prompt)
    }
}

/// 3D volumetric scene generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Volume3DModule;

impl Volume3DModule {
    #[must_use]
    pub const fn modality(&self) -> Modality {
        Modality::Volume
    }

    pub fn generate(&self, prompt: &Prompt) -> GenerationResult<Artifact> {
        report_unimplemented(self.modality(), prompt)
    }
}

/// 4D (space + time) video generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Video4DModule;

impl Video4DModule {
    #[must_use]
    pub const fn modality(&self) -> Modality {
        Modality::Video
    }

    pub fn generate(&self, prompt: &Prompt, _options: VideoOptions) -> GenerationResult<Artifact> {
        report_unimplemented(self.modality(), prompt)
    }
}
