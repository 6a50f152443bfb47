//! Collage options.
//!
//! Out-of-range values are coerced, never rejected: a collage always renders.

/// Most tiles a collage ever shows: one hero plus three secondaries.
pub const MAX_TILES: usize = 4;

/// Whether tiles use the locked ratio tables or their own natural ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RatioMode {
    /// Every tile is cropped to the ratio its slot dictates.
    #[default]
    Locked,
    /// Tiles keep their natural ratio when width/height are known and fall
    /// back to the slot's ratio otherwise.
    Intrinsic,
}

/// Layout options for one collage.
///
/// # Example
///
/// ```
/// use zencollage::{CollageOptions, RatioMode};
///
/// let options = CollageOptions::new()
///     .max_visible(3)
///     .gap(6)
///     .ratio_mode(RatioMode::Intrinsic);
/// assert_eq!(options.effective_max_visible(), 3);
/// assert_eq!(options.hero_width_percent, 66);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollageOptions {
    /// Visibility limit; items past it are counted in the "+N more" label.
    pub max_visible: usize,
    /// Space between tiles, in pixels.
    pub gap: u32,
    /// Tile corner radius, in pixels.
    pub corner_radius: u32,
    /// Width of the hero column in portrait-hero layouts, in percent (1–99).
    pub hero_width_percent: u8,
    pub ratio_mode: RatioMode,
}

impl Default for CollageOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CollageOptions {
    /// Default gap between tiles.
    pub const DEFAULT_GAP: u32 = 4;
    /// Default corner radius.
    pub const DEFAULT_CORNER_RADIUS: u32 = 12;
    /// Default hero column width.
    pub const DEFAULT_HERO_WIDTH_PERCENT: u8 = 66;

    /// Options with the defaults: 4 visible, 4px gap, 12px radius, 66% hero,
    /// locked ratios.
    pub fn new() -> Self {
        Self {
            max_visible: MAX_TILES,
            gap: Self::DEFAULT_GAP,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            hero_width_percent: Self::DEFAULT_HERO_WIDTH_PERCENT,
            ratio_mode: RatioMode::Locked,
        }
    }

    /// Set the visibility limit. Zero is coerced to one.
    pub fn max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(1);
        self
    }

    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the hero column width, clamped to 1–99 percent.
    pub fn hero_width_percent(mut self, percent: u8) -> Self {
        self.hero_width_percent = percent.clamp(1, 99);
        self
    }

    pub fn ratio_mode(mut self, mode: RatioMode) -> Self {
        self.ratio_mode = mode;
        self
    }

    /// Shorthand for `ratio_mode(RatioMode::Intrinsic)`.
    pub fn intrinsic_ratios(self) -> Self {
        self.ratio_mode(RatioMode::Intrinsic)
    }

    /// The limit the engine actually applies: at least one, at most
    /// [`MAX_TILES`]. Fields may have been set directly, so this re-coerces.
    pub fn effective_max_visible(&self) -> usize {
        self.max_visible.clamp(1, MAX_TILES)
    }

    /// Hero width percent as the engine applies it.
    pub fn effective_hero_width_percent(&self) -> u32 {
        self.hero_width_percent.clamp(1, 99) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = CollageOptions::default();
        assert_eq!(o.max_visible, 4);
        assert_eq!(o.gap, 4);
        assert_eq!(o.corner_radius, 12);
        assert_eq!(o.hero_width_percent, 66);
        assert_eq!(o.ratio_mode, RatioMode::Locked);
    }

    #[test]
    fn coerces_out_of_range() {
        let o = CollageOptions::new().max_visible(0).hero_width_percent(0);
        assert_eq!(o.max_visible, 1);
        assert_eq!(o.hero_width_percent, 1);
        assert_eq!(CollageOptions::new().hero_width_percent(250).hero_width_percent, 99);
    }

    #[test]
    fn effective_limit_caps_at_four() {
        let mut o = CollageOptions::new().max_visible(9);
        assert_eq!(o.max_visible, 9);
        assert_eq!(o.effective_max_visible(), 4);
        o.max_visible = 0;
        assert_eq!(o.effective_max_visible(), 1);
    }
}
