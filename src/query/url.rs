//! Sized crop URLs for remote image services.
//!
//! Services in the Unsplash/imgix family accept the output size and crop
//! behavior as query parameters:
//!
//! ```text
//! {base}/{photo_id}?w={w}&h={h}&fit=crop&crop=center
//! ```
//!
//! Requesting exactly the tile's pixel size keeps the service's crop and the
//! tile's own center-crop in agreement.

#[cfg(not(feature = "std"))]
use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use super::parse::{pairs, percent_encode};
use crate::error::CollageError;
use crate::geometry::Size;
use crate::media::MediaItem;
use crate::tile::RenderedTile;

/// An image service that crops to `w`×`h` on request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoteSource {
    base: String,
}

impl RemoteSource {
    /// `base` is the URL prefix photo ids are appended to, e.g.
    /// `https://images.unsplash.com`. Trailing slashes are dropped.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of `photo_id` center-cropped to `size`.
    pub fn url(&self, photo_id: &str, size: Size) -> Result<String, CollageError> {
        if size.is_empty() {
            return Err(CollageError::ZeroDimension);
        }
        Ok(format!(
            "{}/{}?w={}&h={}&fit=crop&crop=center",
            self.base,
            percent_encode(photo_id),
            size.width,
            size.height
        ))
    }

    /// A media item for `photo_id` served at `size`, with matching dimensions.
    pub fn media_item(&self, photo_id: &str, size: Size) -> Result<MediaItem, CollageError> {
        let src = self.url(photo_id, size)?;
        Ok(MediaItem::new(photo_id, src).with_dimensions(size.width, size.height))
    }

    /// URL sized for `tile`'s frame at device pixel ratio `dpr`.
    ///
    /// Non-finite or non-positive ratios are treated as 1.
    pub fn tile_url(&self, tile: &RenderedTile<'_>, dpr: f32) -> Result<String, CollageError> {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let scale = |px: u32| (px as f64 * dpr as f64).round() as u32;
        let size = Size::new(scale(tile.frame.width), scale(tile.frame.height));
        self.url(&tile.item.id, size)
    }
}

/// The `w`/`h` crop size requested by a service URL, if both are present.
pub fn crop_params(url: &str) -> Option<Size> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    let (mut w, mut h) = (None, None);
    for (key, value) in pairs(query) {
        match key.as_str() {
            "w" => w = value.parse::<u32>().ok(),
            "h" => h = value.parse::<u32>().ok(),
            _ => {}
        }
    }
    Some(Size::new(w?, h?))
}
