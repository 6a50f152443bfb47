//! Media descriptors supplied by the caller.

use alloc::string::String;

use crate::geometry::{AspectRatio, Size};
use crate::orientation::Orientation;

/// One image in a collage.
///
/// `width`/`height` are the natural pixel dimensions when the source knows
/// them. A missing or zero value means the orientation is unknown; the
/// engine then treats the image as landscape and uses fallback ratios.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    /// Unique within one list.
    pub id: String,
    /// Image locator, opaque to the engine.
    pub src: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt: Option<String>,
}

impl MediaItem {
    /// An item with no dimension metadata.
    pub fn new(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            width: None,
            height: None,
            alt: None,
        }
    }

    /// Set natural dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set alt text.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Natural size, when both sides are known and non-zero.
    pub fn dimensions(&self) -> Option<Size> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(Size::new(w, h)),
            _ => None,
        }
    }

    /// The item's own reduced `width:height`.
    pub fn intrinsic_ratio(&self) -> Option<AspectRatio> {
        self.dimensions().and_then(|s| s.aspect_ratio())
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::classify(self.width, self.height)
    }
}
