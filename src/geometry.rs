//! Pixel geometry for collage tiles.
//!
//! Sizes, rects, exact aspect ratios, and the crop/fit math the tile renderer
//! and the preview controller use. Pure integer geometry — no pixel
//! operations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zencollage::{AspectRatio, Gravity, Rect, Size, crop_to_aspect};
//!
//! // A 2:1 landscape photo center-cropped into a square tile.
//! let crop = crop_to_aspect(Size::new(1000, 500), AspectRatio::SQUARE, &Gravity::Center);
//! assert_eq!(crop, Rect::new(250, 0, 500, 500));
//! ```

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use num_rational::Ratio;
#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::CollageError;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The exact aspect ratio of this size. `None` when either side is zero.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        AspectRatio::new(self.width, self.height).ok()
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Dimensions of this rect.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge, saturating at `u32::MAX`.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `u32::MAX`.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the point lies inside the rect (right/bottom edges excluded).
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether this rect covers the full source (no actual crop).
    pub fn is_full(&self, source: Size) -> bool {
        self.x == 0 && self.y == 0 && self.width == source.width && self.height == source.height
    }
}

/// Where to anchor the visible region when cropping or placing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Gravity {
    /// Center on both axes.
    #[default]
    Center,
    /// Position by percentage. `(0.0, 0.0)` = top-left, `(1.0, 1.0)` = bottom-right.
    Percentage(f32, f32),
}

/// An exact, reduced `width:height` ratio. Neither side is ever zero.
///
/// Backed by [`num_rational::Ratio`], so `8:10` and `4:5` compare and hash
/// equal.
///
/// Serializes as a `[width, height]` pair; deserializing goes through
/// [`AspectRatio::new`], so zero sides are rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u32, u32)", into = "(u32, u32)"))]
pub struct AspectRatio(Ratio<u32>);

impl AspectRatio {
    /// 1:1.
    pub const SQUARE: Self = Self(Ratio::new_raw(1, 1));
    /// 4:5, the locked portrait ratio.
    pub const PORTRAIT_4_5: Self = Self(Ratio::new_raw(4, 5));
    /// 3:4, the intrinsic-mode portrait fallback.
    pub const PORTRAIT_3_4: Self = Self(Ratio::new_raw(3, 4));
    /// 3:2, the locked landscape ratio.
    pub const LANDSCAPE_3_2: Self = Self(Ratio::new_raw(3, 2));
    /// 4:3, the locked secondary-tile ratio.
    pub const LANDSCAPE_4_3: Self = Self(Ratio::new_raw(4, 3));

    /// Create a ratio, reducing it to lowest terms.
    pub fn new(width: u32, height: u32) -> Result<Self, CollageError> {
        if width == 0 || height == 0 {
            return Err(CollageError::ZeroRatio { width, height });
        }
        Ok(Self(Ratio::new(width, height)))
    }

    /// Width term of the reduced ratio.
    pub fn width(&self) -> u32 {
        *self.0.numer()
    }

    /// Height term of the reduced ratio.
    pub fn height(&self) -> u32 {
        *self.0.denom()
    }

    /// Whether this ratio is taller than wide.
    pub fn is_portrait(&self) -> bool {
        self.height() > self.width()
    }

    /// The underlying rational `width / height`.
    pub fn as_ratio(&self) -> Ratio<u32> {
        self.0
    }

    /// `width / height` as a float, for hosts that take CSS-style ratios.
    pub fn as_f64(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }

    /// Height of a box of the given width at this ratio, rounded to nearest.
    pub fn height_for_width(&self, width: u32) -> u32 {
        div_round(width as u64 * self.height() as u64, self.width() as u64)
    }

    /// Width of a box of the given height at this ratio, rounded to nearest.
    pub fn width_for_height(&self, height: u32) -> u32 {
        div_round(height as u64 * self.width() as u64, self.height() as u64)
    }

    /// Whether `size` has exactly this ratio. Uses cross-multiplication.
    pub fn matches(&self, size: Size) -> bool {
        size.width as u64 * self.height() as u64 == size.height as u64 * self.width() as u64
    }
}

impl TryFrom<(u32, u32)> for AspectRatio {
    type Error = CollageError;

    fn try_from((width, height): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl From<AspectRatio> for (u32, u32) {
    fn from(r: AspectRatio) -> Self {
        (r.width(), r.height())
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width(), self.height())
    }
}

impl FromStr for AspectRatio {
    type Err = CollageError;

    /// Parse `w:h` or `w/h`, e.g. `"4:5"`, `"16/9"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CollageError::InvalidRatio(String::from(s));
        let (w, h) = s
            .trim()
            .split_once(':')
            .or_else(|| s.trim().split_once('/'))
            .ok_or_else(invalid)?;
        let w: u32 = w.trim().parse().map_err(|_| invalid())?;
        let h: u32 = h.trim().parse().map_err(|_| invalid())?;
        Self::new(w, h)
    }
}

/// Crop `source` to `ratio`, keeping as much of the image as possible.
///
/// This is the "cover" crop: the returned rect, scaled to any box of the
/// target ratio, fills it completely with no letterboxing. Returns the full
/// source rect when the ratios already match.
pub fn crop_to_aspect(source: Size, ratio: AspectRatio, gravity: &Gravity) -> Rect {
    let (sw, sh) = (source.width, source.height);
    let full = Rect::new(0, 0, sw, sh);
    if source.is_empty() {
        return full;
    }

    // Cross-multiplication keeps exact matches out of floating point.
    let cross_s = sw as u64 * ratio.height() as u64;
    let cross_t = sh as u64 * ratio.width() as u64;
    if cross_s == cross_t {
        return full;
    }

    if cross_s > cross_t {
        // Source is wider — crop width, keep full height.
        let new_w = ratio.width_for_height(sh).max(1);
        if new_w >= sw {
            return full;
        }
        let x = gravity_offset_1d(sw - new_w, gravity, true);
        Rect::new(x, 0, new_w, sh)
    } else {
        // Source is taller — crop height, keep full width.
        let new_h = ratio.height_for_width(sw).max(1);
        if new_h >= sh {
            return full;
        }
        let y = gravity_offset_1d(sh - new_h, gravity, false);
        Rect::new(0, y, sw, new_h)
    }
}

/// Scale `source` to fit inside `bounds`, preserving aspect ratio.
///
/// One side matches `bounds`; the other is ≤ bounds. Upscales when the source
/// is smaller. Returns an empty size when either input is empty.
pub fn fit_inside(source: Size, bounds: Size) -> Size {
    if source.is_empty() || bounds.is_empty() {
        return Size::default();
    }
    let (sw, sh) = (source.width as u64, source.height as u64);
    let (bw, bh) = (bounds.width as u64, bounds.height as u64);
    if sw * bh >= sh * bw {
        // Width constrains.
        let h = div_round(bw * sh, sw).clamp(1, bounds.height);
        Size::new(bounds.width, h)
    } else {
        // Height constrains.
        let w = div_round(bh * sw, sh).clamp(1, bounds.width);
        Size::new(w, bounds.height)
    }
}

/// Offset that places `inner` within `outer` according to `gravity`.
pub fn gravity_offset(outer: Size, inner: Size, gravity: &Gravity) -> (u32, u32) {
    let x = gravity_offset_1d(outer.width.saturating_sub(inner.width), gravity, true);
    let y = gravity_offset_1d(outer.height.saturating_sub(inner.height), gravity, false);
    (x, y)
}

fn gravity_offset_1d(space: u32, gravity: &Gravity, horizontal: bool) -> u32 {
    if space == 0 {
        return 0;
    }
    match gravity {
        Gravity::Center => space / 2,
        Gravity::Percentage(x, y) => {
            let pct = if horizontal { *x } else { *y };
            (space as f64 * pct.clamp(0.0, 1.0) as f64).round() as u32
        }
    }
}

/// `num / den` rounded half-up, saturating at `u32::MAX`.
pub(crate) fn div_round(num: u64, den: u64) -> u32 {
    if den == 0 {
        return 0;
    }
    let q = num.saturating_add(den / 2) / den;
    u32::try_from(q).unwrap_or(u32::MAX)
}
