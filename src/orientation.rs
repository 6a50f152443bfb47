//! Hero orientation and the locked-ratio tables keyed on it.

use crate::geometry::AspectRatio;

/// Orientation of a media item, as far as the collage is concerned.
///
/// Square and unknown images count as landscape: only an image that is
/// strictly taller than wide is portrait.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Height strictly greater than width.
    Portrait,
    /// Everything else, including missing dimensions.
    #[default]
    Landscape,
}

impl Orientation {
    /// Classify from optional natural dimensions.
    ///
    /// Portrait iff both are present, non-zero, and `height > width`.
    pub fn classify(width: Option<u32>, height: Option<u32>) -> Self {
        match (width, height) {
            (Some(w), Some(h)) if w > 0 && h > w => Self::Portrait,
            _ => Self::Landscape,
        }
    }

    /// Whether this is [`Portrait`](Self::Portrait).
    pub fn is_portrait(self) -> bool {
        self == Self::Portrait
    }

    /// Locked ratio for a lone tile or a hero: 4:5 portrait, 3:2 landscape.
    pub fn hero_ratio(self) -> AspectRatio {
        match self {
            Self::Portrait => AspectRatio::PORTRAIT_4_5,
            Self::Landscape => AspectRatio::LANDSCAPE_3_2,
        }
    }

    /// Locked ratio for both tiles of a pair: 4:5 portrait, 1:1 landscape.
    pub fn pair_ratio(self) -> AspectRatio {
        match self {
            Self::Portrait => AspectRatio::PORTRAIT_4_5,
            Self::Landscape => AspectRatio::SQUARE,
        }
    }

    /// Fallback for intrinsic-ratio tiles without metadata in a pair or a
    /// portrait stack: 3:4 portrait, 4:3 landscape.
    pub fn intrinsic_fallback(self) -> AspectRatio {
        match self {
            Self::Portrait => AspectRatio::PORTRAIT_3_4,
            Self::Landscape => AspectRatio::LANDSCAPE_4_3,
        }
    }
}
