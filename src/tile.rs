//! Tile rendering: a plan entry plus its frame becomes a center-cropped box.
//!
//! The renderer makes no layout decisions. It records which part of the
//! natural image fills the frame (a cover crop with [`Gravity::Center`]),
//! carries the overflow label through, and forwards activations to the
//! caller's click handler. Selection state lives in
//! [`PreviewController`](crate::preview::PreviewController), not here.

use alloc::string::String;
use alloc::vec::Vec;

use crate::arrange::Arrangement;
use crate::geometry::{Gravity, Rect, crop_to_aspect};
use crate::media::MediaItem;
use crate::plan::{LayoutPlan, Slot, TileSpec};

/// A tile ready for the host surface to paint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderedTile<'a> {
    pub item: &'a MediaItem,
    pub slot: Slot,
    /// Where the tile sits in the collage.
    pub frame: Rect,
    pub corner_radius: u32,
    /// Region of the natural image that fills `frame`, in natural pixels.
    ///
    /// `None` when the image already has the frame's ratio or its natural
    /// size is unknown; the host then cover-scales the whole image itself.
    pub source_crop: Option<Rect>,
    /// Full-tile label overlay, e.g. `"+3 more"`.
    pub overlay_label: Option<String>,
}

impl<'a> RenderedTile<'a> {
    /// Whether this tile carries the overflow overlay.
    pub fn has_overlay(&self) -> bool {
        self.overlay_label.is_some()
    }

    /// Factor by which the cropped region is scaled to fill the frame.
    ///
    /// `None` when the natural size is unknown.
    pub fn scale(&self) -> Option<f64> {
        let natural = self.item.dimensions()?;
        let visible = self.source_crop.map_or(natural, |r| r.size());
        if visible.is_empty() {
            return None;
        }
        let sx = self.frame.width as f64 / visible.width as f64;
        let sy = self.frame.height as f64 / visible.height as f64;
        Some(sx.max(sy))
    }

    /// Forward a user activation to `handler`. Returns whether a handler ran.
    pub fn activate<F>(&self, handler: Option<F>) -> bool
    where
        F: FnOnce(&'a MediaItem),
    {
        match handler {
            Some(f) => {
                log::trace!("tile {:?} activated", self.item.id);
                f(self.item);
                true
            }
            None => false,
        }
    }
}

/// Render one tile into `frame`.
pub fn render_tile<'a>(spec: &TileSpec<'a>, frame: Rect, corner_radius: u32) -> RenderedTile<'a> {
    RenderedTile {
        item: spec.item,
        slot: spec.slot,
        frame,
        corner_radius,
        source_crop: cover_crop(spec.item, frame),
        overlay_label: spec.overlay_label.clone(),
    }
}

/// Render every tile of `plan` into the frames of `arrangement`.
pub fn render_tiles<'a>(plan: &LayoutPlan<'a>, arrangement: &Arrangement) -> Vec<RenderedTile<'a>> {
    plan.tiles
        .iter()
        .zip(&arrangement.frames)
        .map(|(spec, &frame)| render_tile(spec, frame, plan.corner_radius))
        .collect()
}

/// The centered region of the natural image with the frame's ratio.
fn cover_crop(item: &MediaItem, frame: Rect) -> Option<Rect> {
    let natural = item.dimensions()?;
    let ratio = frame.size().aspect_ratio()?;
    let crop = crop_to_aspect(natural, ratio, &Gravity::Center);
    (!crop.is_full(natural)).then_some(crop)
}
