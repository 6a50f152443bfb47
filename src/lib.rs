//! Photo collage layout: template selection, locked aspect ratios, and the
//! "+N more" overflow label.
//!
//! Pure geometry — no pixel operations, no I/O, `no_std` compatible.
//!
//! # Modules
//!
//! - [`plan`] — Layout engine: picks a template and each tile's aspect ratio
//! - [`arrange`] — Pixel frames for a plan at a container width
//! - [`tile`] — Tile renderer: center-crop regions and overflow overlays
//! - [`preview`] — Click-to-preview state machine
//! - [`geometry`] — Sizes, rects, exact aspect ratios, crop and fit math
//! - [`orientation`] — Portrait/landscape classification and ratio tables
//! - `query` — Query-string options and remote crop URLs (feature `query`)
//! - `svg` — SVG rendering of a laid-out collage (feature `svg`)
//! - `catalog` — Lenient JSON catalog ingestion (feature `serde`)
//!
//! # Example
//!
//! ```
//! use zencollage::{CollageOptions, MediaItem, Template, render, render_tiles};
//!
//! let items = vec![
//!     MediaItem::new("a", "a.jpg").with_dimensions(1080, 1350),
//!     MediaItem::new("b", "b.jpg").with_dimensions(1600, 900),
//!     MediaItem::new("c", "c.jpg").with_dimensions(1600, 900),
//!     MediaItem::new("d", "d.jpg"),
//!     MediaItem::new("e", "e.jpg"),
//! ];
//!
//! let plan = render(&items, &CollageOptions::default()).unwrap();
//! assert_eq!(plan.template, Template::PortraitHeroStack);
//! assert_eq!(plan.overlay_label(), Some("+1 more"));
//!
//! let arrangement = plan.arrange(600);
//! let tiles = render_tiles(&plan, &arrangement);
//! assert_eq!(tiles.len(), 4);
//! assert!(tiles[3].has_overlay());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod arrange;
pub mod error;
pub mod geometry;
pub mod media;
pub mod options;
pub mod orientation;
pub mod plan;
pub mod preview;
pub mod tile;

#[cfg(feature = "serde")]
pub mod catalog;
#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

pub use arrange::Arrangement;
pub use error::CollageError;
pub use geometry::{AspectRatio, Gravity, Rect, Size, crop_to_aspect, fit_inside, gravity_offset};
pub use media::MediaItem;
pub use options::{CollageOptions, MAX_TILES, RatioMode};
pub use orientation::Orientation;
pub use plan::{
    LayoutPlan, MAX_SECONDARY, Slot, Template, TileAspect, TileSpec, overflow_label, plan,
};
pub use preview::{CloseTrigger, PreviewController, PreviewEvent, PreviewState};
pub use tile::{RenderedTile, render_tile, render_tiles};

/// Plan a collage. Same as [`plan()`]; `None` means render nothing.
pub fn render<'a>(items: &'a [MediaItem], options: &CollageOptions) -> Option<LayoutPlan<'a>> {
    plan::plan(items, options)
}
