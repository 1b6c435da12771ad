//! Core engine for Miniturbo.
//!
//! This crate holds the omni-modal facade, the four modality modules
//! (1D audio, 2D image, 3D volume, 4D video) and the meta-logic layer.
//! Generation is not available for any modality yet; every `generate` call
//! reports which capability is missing.

mod engine;
mod meta_logic;
mod modality;

pub use engine::OmniModalMiniturbo;
pub use meta_logic::MetaLogic;
pub use modality::{Audio1DModule, Image2DModule, Video4DModule, Volume3DModule};

pub use miniturbo_types::{
    Artifact, AudioClip, CapabilityStatus, DEFAULT_IMAGE_RESOLUTION, DEFAULT_VIDEO_FPS,
    GenerationDefaults, GenerationError, GenerationOutput, GenerationRequest, GenerationResult,
    ImageOptions, Modality, ModalityParseError, Prompt, VideoOptions,
};
