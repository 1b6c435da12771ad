//! Per-modality generation parameters.
//!
//! Values are carried through to the modality modules untouched. Nothing
//! range-checks them: a resolution of 0 or a negative frame rate is a valid
//! `ImageOptions`/`VideoOptions`.

use serde::{Deserialize, Serialize};

/// Image edge length used when the caller does not pick one.
pub const DEFAULT_IMAGE_RESOLUTION: i64 = 512;

/// Video frame rate used when the caller does not pick one.
pub const DEFAULT_VIDEO_FPS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageOptions {
    pub resolution: i64,
}

impl ImageOptions {
    #[must_use]
    pub const fn new(resolution: i64) -> Self {
        Self { resolution }
    }
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_RESOLUTION)
    }
}

impl From<i64> for ImageOptions {
    fn from(resolution: i64) -> Self {
        Self::new(resolution)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoOptions {
    pub fps: i64,
}

impl VideoOptions {
    #[must_use]
    pub const fn new(fps: i64) -> Self {
        Self { fps }
    }
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_FPS)
    }
}

impl From<i64> for VideoOptions {
    fn from(fps: i64) -> Self {
        Self::new(fps)
    }
}

/// Defaults a facade falls back to when a call does not carry explicit options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationDefaults {
    pub image: ImageOptions,
    pub video: VideoOptions,
}
