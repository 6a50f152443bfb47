//! The collage layout engine.
//!
//! [`plan()`] turns an ordered media list into a [`LayoutPlan`]: which
//! template to use, which items are visible, the aspect ratio each tile is
//! cropped to, and the "+N more" label. Selection is a tagged dispatch:
//! [`Template::select`] classifies once, then one builder per template
//! assigns the tile ratios.
//!
//! ```text
//!   Single        Pair          PortraitHeroStack   LandscapeHeroRow
//!   ┌───────┐     ┌───┐┌───┐    ┌──────┐┌──┐        ┌────────────┐
//!   │       │     │   ││   │    │      │├──┤        │    hero    │
//!   │       │     │   ││   │    │ hero │├──┤        ├───┐┌──┐┌───┤
//!   └───────┘     └───┘└───┘    └──────┘└──┘        └───┘└──┘└───┘
//! ```
//!
//! The plan borrows the items and is meant to be recomputed on every render.

#[cfg(not(feature = "std"))]
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::geometry::AspectRatio;
use crate::media::MediaItem;
use crate::options::{CollageOptions, RatioMode};
use crate::orientation::Orientation;

/// Most secondary tiles any template renders.
pub const MAX_SECONDARY: usize = 3;

/// Grid template, chosen from the visible count and the hero's orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Template {
    /// One tile.
    Single,
    /// Two tiles side by side.
    Pair,
    /// Portrait hero in a left column, secondaries stacked on the right.
    PortraitHeroStack,
    /// Full-width landscape hero on top, secondaries in a row below.
    LandscapeHeroRow,
}

impl Template {
    /// Pick the template for `visible` tiles. `None` when nothing is visible.
    pub fn select(visible: usize, hero: Orientation) -> Option<Self> {
        match visible {
            0 => None,
            1 => Some(Self::Single),
            2 => Some(Self::Pair),
            _ if hero.is_portrait() => Some(Self::PortraitHeroStack),
            _ => Some(Self::LandscapeHeroRow),
        }
    }

    /// Stable kebab-case tag, e.g. `"portrait-hero-stack"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Pair => "pair",
            Self::PortraitHeroStack => "portrait-hero-stack",
            Self::LandscapeHeroRow => "landscape-hero-row",
        }
    }
}

/// How a tile's box is sized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TileAspect {
    /// A fixed ratio from the slot's table, enforced by center-cropping.
    Locked(AspectRatio),
    /// The item's own natural ratio.
    Intrinsic(AspectRatio),
    /// No ratio of its own: the height is derived from the hero's rendered
    /// height (the two secondaries of a three-tile portrait stack).
    Coupled,
}

impl TileAspect {
    /// The ratio the box is drawn at, if it has one.
    pub fn ratio(&self) -> Option<AspectRatio> {
        match *self {
            Self::Locked(r) | Self::Intrinsic(r) => Some(r),
            Self::Coupled => None,
        }
    }

    pub fn is_coupled(&self) -> bool {
        matches!(self, Self::Coupled)
    }
}

/// Position of a tile within its template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Slot {
    /// The first visible item.
    Hero,
    /// Zero-based index among the secondaries.
    Secondary(usize),
}

/// One visible tile of a plan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileSpec<'a> {
    pub item: &'a MediaItem,
    pub aspect: TileAspect,
    pub slot: Slot,
    /// `"+N more"`, only ever on the last visible tile.
    pub overlay_label: Option<String>,
}

/// Result of planning one collage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutPlan<'a> {
    pub template: Template,
    pub hero_orientation: Orientation,
    /// Visible tiles in input order, hero first.
    pub tiles: Vec<TileSpec<'a>>,
    /// Items past the visibility limit.
    pub overflow: usize,
    /// Length of the input list.
    pub total: usize,
    /// Space between tiles, in pixels.
    pub gap: u32,
    /// Tile corner radius, in pixels.
    pub corner_radius: u32,
    /// Hero column width for [`Template::PortraitHeroStack`], in percent.
    pub hero_width_percent: u32,
}

impl<'a> LayoutPlan<'a> {
    pub fn visible_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn overflow_count(&self) -> usize {
        self.overflow
    }

    /// The hero tile. Every plan has one.
    pub fn hero(&self) -> &TileSpec<'a> {
        &self.tiles[0]
    }

    /// Tiles after the hero.
    pub fn secondaries(&self) -> &[TileSpec<'a>] {
        &self.tiles[1..]
    }

    /// The overflow label, if any item is hidden.
    pub fn overlay_label(&self) -> Option<&str> {
        self.tiles.last().and_then(|t| t.overlay_label.as_deref())
    }

    /// Whether secondaries take their height from the hero.
    pub fn is_height_coupled(&self) -> bool {
        self.tiles.iter().any(|t| t.aspect.is_coupled())
    }
}

/// The overlay text for `hidden` items past the limit.
pub fn overflow_label(hidden: usize) -> String {
    format!("+{hidden} more")
}

/// Plan a collage.
///
/// Returns `None` for an empty list: render nothing. Never fails; items
/// without dimensions are treated as landscape and get fallback ratios.
///
/// # Example
///
/// ```
/// use zencollage::{CollageOptions, MediaItem, Template, plan};
///
/// let items: Vec<MediaItem> = (0..7)
///     .map(|i| MediaItem::new(format!("p{i}"), format!("https://img.example/p{i}.jpg")))
///     .collect();
///
/// let plan = plan(&items, &CollageOptions::default()).unwrap();
/// assert_eq!(plan.template, Template::LandscapeHeroRow);
/// assert_eq!(plan.visible_count(), 4);
/// assert_eq!(plan.tiles[3].overlay_label.as_deref(), Some("+3 more"));
/// ```
pub fn plan<'a>(items: &'a [MediaItem], options: &CollageOptions) -> Option<LayoutPlan<'a>> {
    let limit = options.effective_max_visible();
    let visible = &items[..items.len().min(limit)];
    let hero = visible.first()?;
    let overflow = items.len() - visible.len();
    let hero_orientation = hero.orientation();
    let template = Template::select(visible.len(), hero_orientation)?;

    let mode = options.ratio_mode;
    let mut tiles = match template {
        Template::Single => single(hero, hero_orientation, mode),
        Template::Pair => pair(visible, hero_orientation, mode),
        Template::PortraitHeroStack => portrait_hero_stack(visible, mode),
        Template::LandscapeHeroRow => landscape_hero_row(visible, mode),
    };

    if overflow > 0
        && let Some(last) = tiles.last_mut()
    {
        last.overlay_label = Some(overflow_label(overflow));
    }

    log::debug!(
        "collage plan: template={} hero={:?} visible={} overflow={}",
        template.name(),
        hero_orientation,
        tiles.len(),
        overflow
    );

    Some(LayoutPlan {
        template,
        hero_orientation,
        tiles,
        overflow,
        total: items.len(),
        gap: options.gap,
        corner_radius: options.corner_radius,
        hero_width_percent: options.effective_hero_width_percent(),
    })
}

// ============================================================================
// Template builders
// ============================================================================

fn single(hero: &MediaItem, orientation: Orientation, mode: RatioMode) -> Vec<TileSpec<'_>> {
    let locked = orientation.hero_ratio();
    let mut tiles = Vec::with_capacity(1);
    tiles.push(tile(hero, Slot::Hero, resolve(hero, mode, locked, locked)));
    tiles
}

fn pair(visible: &[MediaItem], hero: Orientation, mode: RatioMode) -> Vec<TileSpec<'_>> {
    let locked = hero.pair_ratio();
    let fallback = hero.intrinsic_fallback();
    visible
        .iter()
        .enumerate()
        .map(|(i, item)| tile(item, slot_at(i), resolve(item, mode, locked, fallback)))
        .collect()
}

fn portrait_hero_stack(visible: &[MediaItem], mode: RatioMode) -> Vec<TileSpec<'_>> {
    let Some((hero, rest)) = visible.split_first() else {
        return Vec::new();
    };
    let secondaries = &rest[..rest.len().min(MAX_SECONDARY)];
    // Hero + two: the pair splits the hero height instead of leaving a gap
    // under two fixed-ratio tiles.
    let coupled = secondaries.len() == 2;

    let mut tiles = Vec::with_capacity(1 + secondaries.len());
    let hero_ratio = AspectRatio::PORTRAIT_4_5;
    tiles.push(tile(hero, Slot::Hero, resolve(hero, mode, hero_ratio, hero_ratio)));
    for (i, item) in secondaries.iter().enumerate() {
        let aspect = if coupled {
            TileAspect::Coupled
        } else {
            resolve(
                item,
                mode,
                AspectRatio::LANDSCAPE_4_3,
                Orientation::Portrait.intrinsic_fallback(),
            )
        };
        tiles.push(tile(item, Slot::Secondary(i), aspect));
    }
    tiles
}

fn landscape_hero_row(visible: &[MediaItem], mode: RatioMode) -> Vec<TileSpec<'_>> {
    let Some((hero, rest)) = visible.split_first() else {
        return Vec::new();
    };
    let secondaries = &rest[..rest.len().min(MAX_SECONDARY)];

    let mut tiles = Vec::with_capacity(1 + secondaries.len());
    let hero_ratio = Orientation::Landscape.hero_ratio();
    tiles.push(tile(hero, Slot::Hero, resolve(hero, mode, hero_ratio, hero_ratio)));
    for (i, item) in secondaries.iter().enumerate() {
        let ratio = AspectRatio::LANDSCAPE_4_3;
        tiles.push(tile(item, Slot::Secondary(i), resolve(item, mode, ratio, ratio)));
    }
    tiles
}

/// Locked mode always uses `locked`; intrinsic mode uses the item's own ratio
/// and drops to `fallback` when it has no dimensions.
fn resolve(
    item: &MediaItem,
    mode: RatioMode,
    locked: AspectRatio,
    fallback: AspectRatio,
) -> TileAspect {
    match mode {
        RatioMode::Locked => TileAspect::Locked(locked),
        RatioMode::Intrinsic => match item.intrinsic_ratio() {
            Some(r) => TileAspect::Intrinsic(r),
            None => TileAspect::Locked(fallback),
        },
    }
}

fn slot_at(index: usize) -> Slot {
    match index {
        0 => Slot::Hero,
        i => Slot::Secondary(i - 1),
    }
}

fn tile(item: &MediaItem, slot: Slot, aspect: TileAspect) -> TileSpec<'_> {
    TileSpec {
        item,
        aspect,
        slot,
        overlay_label: None,
    }
}
