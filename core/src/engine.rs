//! The omni-modal engine facade.
//!
//! [`OmniModalMiniturbo`] owns one module per modality plus the meta-logic
//! layer and forwards each call to the matching module. It adds no
//! validation and no recovery: whatever a module returns is what the caller
//! sees.

use miniturbo_types::{
    Artifact, AudioClip, CapabilityStatus, GenerationDefaults, GenerationOutput,
    GenerationRequest, GenerationResult, ImageOptions, Modality, Prompt, VideoOptions,
};

use crate::meta_logic::MetaLogic;
use crate::modality::{Audio1DModule, Image2DModule, Video4DModule, Volume3DModule};

/// Single entry point for every generation modality.
///
/// Sub-components are created eagerly in [`OmniModalMiniturbo::new`] and live
/// exactly as long as the facade. The facade is immutable after construction
/// and is `Send + Sync`, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct OmniModalMiniturbo {
    meta_logic: MetaLogic,
    audio: Audio1DModule,
    image: Image2DModule,
    volume: Volume3DModule,
    video: Video4DModule,
    defaults: GenerationDefaults,
}

impl OmniModalMiniturbo {
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(GenerationDefaults::default())
    }

    /// Build an engine whose [`generate`](Self::generate) fallbacks come from `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: GenerationDefaults) -> Self {
        tracing::debug!(
            image_resolution = defaults.image.resolution,
            video_fps = defaults.video.fps,
            "Constructing omni-modal engine"
        );
        Self {
            meta_logic: MetaLogic::new(),
            audio: Audio1DModule,
            image: Image2DModule,
            volume: Volume3DModule,
            video: Video4DModule,
            defaults,
        }
    }

    #[must_use]
    pub fn meta_logic(&self) -> &MetaLogic {
        &self.meta_logic
    }

    #[must_use]
    pub fn audio(&self) -> &Audio1DModule {
        &self.audio
    }

    #[must_use]
    pub fn image(&self) -> &Image2DModule {
        &self.image
    }

    #[must_use]
    pub fn volume(&self) -> &Volume3DModule {
        &self.volume
    }

    #[must_use]
    pub fn video(&self) -> &Video4DModule {
        &self.video
    }

    #[must_use]
    pub fn defaults(&self) -> GenerationDefaults {
        self.defaults
    }

    #[must_use]
    pub fn default_image_options(&self) -> ImageOptions {
        self.defaults.image
    }

    #[must_use]
    pub fn default_video_options(&self) -> VideoOptions {
        self.defaults.video
    }

    pub fn generate_audio(&self, prompt: impl Into<Prompt>) -> GenerationResult<AudioClip> {
        self.audio.generate(&prompt.into())
    }

    pub fn generate_image(
        &self,
        prompt: impl Into<Prompt>,
        options: ImageOptions,
    ) -> GenerationResult<Artifact> {
        self.image.generate(&prompt.into(), options)
    }

    pub fn generate_volume(&self, prompt: impl Into<Prompt>) -> GenerationResult<Artifact> {
        self.volume.generate(&prompt.into())
    }

    pub fn generate_video(
        &self,
        prompt: impl Into<Prompt>,
        options: VideoOptions,
    ) -> GenerationResult<Artifact> {
        self.video.generate(&prompt.into(), options)
    }

    /// Dispatch a request to the module for its modality.
    pub fn generate(&self, request: GenerationRequest) -> GenerationResult<GenerationOutput> {
        tracing::debug!(modality = %request.modality(), "Dispatching generation request");
        match request {
            GenerationRequest::Audio { prompt } => {
                self.generate_audio(prompt).map(GenerationOutput::Audio)
            }
            GenerationRequest::Image { prompt, options } => self
                .generate_image(prompt, options)
                .map(GenerationOutput::Artifact),
            GenerationRequest::Volume { prompt } => {
                self.generate_volume(prompt).map(GenerationOutput::Artifact)
            }
            GenerationRequest::Video { prompt, options } => self
                .generate_video(prompt, options)
                .map(GenerationOutput::Artifact),
        }
    }

    /// Build a request for `modality`, filling options from this engine's defaults.
    #[must_use]
    pub fn request(&self, modality: Modality, prompt: impl Into<Prompt>) -> GenerationRequest {
        let prompt = prompt.into();
        match modality {
            Modality::Audio => GenerationRequest::Audio { prompt },
            Modality::Image => GenerationRequest::Image {
                prompt,
                options: self.defaults.image,
            },
            Modality::Volume => GenerationRequest::Volume { prompt },
            Modality::Video => GenerationRequest::Video {
                prompt,
                options: self.defaults.video,
            },
        }
    }

    /// Status of every modality, in [`Modality::ALL`] order.
    #[must_use]
    pub fn capabilities(&self) -> Vec<CapabilityStatus> {
        Modality::ALL
            .into_iter()
            .map(|modality| CapabilityStatus {
                modality,
                implemented: false,
            })
            .collect()
    }
}

impl Default for OmniModalMiniturbo {
    fn default() -> Self {
        Self::new()
    }
}
