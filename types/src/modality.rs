//! Generation modalities and their stable identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One category of generated content.
///
/// The variants are ordered by the number of dimensions they span, from a 1D
/// waveform up to a 4D (space + time) video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Audio,
    Image,
    Volume,
    Video,
}

const MODALITY_PARSE_VALUES: &[&str] = &[
    "audio", "sound", "1d", "image", "picture", "2d", "volume", "voxel", "3d", "video", "movie",
    "4d",
];

impl Modality {
    /// Every modality, in ascending dimension order.
    pub const ALL: [Modality; 4] = [
        Modality::Audio,
        Modality::Image,
        Modality::Volume,
        Modality::Video,
    ];

    /// Stable lowercase id used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Modality::Audio => "audio",
            Modality::Image => "image",
            Modality::Volume => "volume",
            Modality::Video => "video",
        }
    }

    /// Human-readable capability name, used in error messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Modality::Audio => "Audio synthesis",
            Modality::Image => "Image synthesis",
            Modality::Volume => "Volume synthesis",
            Modality::Video => "Video synthesis",
        }
    }

    #[must_use]
    pub const fn dimensions(self) -> u8 {
        match self {
            Modality::Audio => 1,
            Modality::Image => 2,
            Modality::Volume => 3,
            Modality::Video => 4,
        }
    }

    /// Parse a modality from its id or a common alias.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "audio" | "sound" | "1d" => Some(Modality::Audio),
            "image" | "picture" | "2d" => Some(Modality::Image),
            "volume" | "voxel" | "3d" => Some(Modality::Volume),
            "video" | "movie" | "4d" => Some(Modality::Video),
            _ => None,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid modality '{raw}'; expected one of: {expected:?}")]
pub struct ModalityParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl ModalityParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Modality {
    type Err = ModalityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modality::parse(s).ok_or_else(|| ModalityParseError {
            raw: s.to_string(),
            expected: MODALITY_PARSE_VALUES,
        })
    }
}
