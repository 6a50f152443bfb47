//! SVG rendering of a laid-out collage.
//!
//! Produces a standalone document: one rounded clip path per tile, the
//! image center-cropped into it, and the "+N more" overlay on the last
//! tile. Useful for previews, snapshots, and debugging arrangements.
//!
//! # Example
//!
//! ```
//! use zencollage::{CollageOptions, MediaItem, plan, render_tiles, svg::render_collage_svg};
//!
//! let items = vec![
//!     MediaItem::new("a", "a.jpg").with_dimensions(1080, 1350),
//!     MediaItem::new("b", "b.jpg").with_dimensions(1600, 900),
//!     MediaItem::new("c", "c.jpg"),
//! ];
//! let plan = plan(&items, &CollageOptions::default()).unwrap();
//! let arrangement = plan.arrange(600);
//! let tiles = render_tiles(&plan, &arrangement);
//!
//! let svg = render_collage_svg(&tiles, arrangement.size);
//! assert!(svg.starts_with("<svg"));
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::geometry::Size;
use crate::tile::RenderedTile;

/// Font size of the overflow label, as a fraction of the tile's short side.
const LABEL_SCALE: f64 = 0.18;
/// Smallest overflow label font size, in pixels.
const MIN_LABEL_PX: f64 = 12.0;

/// Render `tiles` into an SVG document of `size`.
///
/// Tiles with a known natural size are drawn through a nested viewport whose
/// `viewBox` is the tile's source crop, so the visible region is exactly the
/// one the renderer computed. Others fall back to `xMidYMid slice`, which is
/// the same center crop done by the SVG viewer.
pub fn render_collage_svg(tiles: &[RenderedTile<'_>], size: Size) -> String {
    if tiles.is_empty() || size.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let mut svg = String::with_capacity(1024 + tiles.len() * 512);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height
    ));
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
  .tile-bg { fill: #e8e8e8; }
  .overlay { fill: rgba(0, 0, 0, 0.5); }
  .overlay-label { fill: #fff; font-weight: 600; }
  @media (prefers-color-scheme: dark) {
    .tile-bg { fill: #2d2d2d; }
    .overlay { fill: rgba(0, 0, 0, 0.6); }
  }
</style>
"##,
    );

    svg.push_str("<defs>\n");
    for (i, tile) in tiles.iter().enumerate() {
        let f = tile.frame;
        svg.push_str(&format!(
            r#"  <clipPath id="tile-{i}"><rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}"/></clipPath>"#,
            f.x,
            f.y,
            f.width,
            f.height,
            r = tile.corner_radius
        ));
        svg.push('\n');
    }
    svg.push_str("</defs>\n");

    for (i, tile) in tiles.iter().enumerate() {
        render_tile(&mut svg, i, tile);
    }

    svg.push_str("</svg>\n");
    svg
}

fn render_tile(svg: &mut String, index: usize, tile: &RenderedTile<'_>) {
    let f = tile.frame;
    let href = escape_xml(&tile.item.src);

    svg.push_str(&format!(
        r#"<g clip-path="url(#tile-{index})" data-id="{}">"#,
        escape_xml(&tile.item.id)
    ));
    svg.push('\n');
    if let Some(alt) = &tile.item.alt {
        svg.push_str(&format!("  <title>{}</title>\n", escape_xml(alt)));
    }
    svg.push_str(&format!(
        r#"  <rect x="{}" y="{}" width="{}" height="{}" class="tile-bg"/>"#,
        f.x, f.y, f.width, f.height
    ));
    svg.push('\n');

    match (tile.item.dimensions(), tile.source_crop) {
        (Some(natural), Some(crop)) => {
            svg.push_str(&format!(
                r#"  <svg x="{}" y="{}" width="{}" height="{}" viewBox="{} {} {} {}" preserveAspectRatio="none">"#,
                f.x, f.y, f.width, f.height, crop.x, crop.y, crop.width, crop.height
            ));
            svg.push_str(&format!(
                r#"<image width="{}" height="{}" href="{href}"/></svg>"#,
                natural.width, natural.height
            ));
        }
        _ => {
            svg.push_str(&format!(
                r#"  <image x="{}" y="{}" width="{}" height="{}" href="{href}" preserveAspectRatio="xMidYMid slice"/>"#,
                f.x, f.y, f.width, f.height
            ));
        }
    }
    svg.push('\n');

    if let Some(label) = &tile.overlay_label {
        let font_px = (f.width.min(f.height) as f64 * LABEL_SCALE).max(MIN_LABEL_PX);
        svg.push_str(&format!(
            r#"  <rect x="{}" y="{}" width="{}" height="{}" class="overlay"/>"#,
            f.x, f.y, f.width, f.height
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{:.1}" y="{:.1}" class="overlay-label" font-size="{:.1}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            f.x as f64 + f.width as f64 / 2.0,
            f.y as f64 + f.height as f64 / 2.0,
            font_px,
            escape_xml(label)
        ));
        svg.push('\n');
    }

    svg.push_str("</g>\n");
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
