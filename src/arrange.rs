//! Pixel frames for a plan at a given container width.
//!
//! The plan says which ratio each tile has; the arrangement says where each
//! tile sits. Heights always follow from the container width, so a card
//! grows vertically to fit its collage.

use alloc::vec::Vec;

use crate::geometry::{Rect, Size, div_round};
use crate::options::MAX_TILES;
use crate::plan::{LayoutPlan, Template, TileSpec};

/// Concrete placement of every tile in a plan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arrangement {
    /// Bounding size of the whole collage.
    pub size: Size,
    /// One frame per plan tile, same order.
    pub frames: Vec<Rect>,
}

impl LayoutPlan<'_> {
    /// Place every tile in a container `width` pixels wide.
    pub fn arrange(&self, width: u32) -> Arrangement {
        arrange(self, width)
    }
}

/// Place every tile of `plan` in a container `width` pixels wide.
///
/// - `Single`: one full-width box.
/// - `Pair`: two equal columns separated by the gap.
/// - `PortraitHeroStack`: hero column `hero_width_percent` of the width left
///   after the gap; coupled secondaries split the hero height exactly, fixed
///   ratio secondaries are spread top-to-bottom with equal spacing.
/// - `LandscapeHeroRow`: full-width hero, then a row of equal-width tiles.
pub fn arrange(plan: &LayoutPlan<'_>, width: u32) -> Arrangement {
    // Gaps never take more than a quarter of the container.
    let gap = plan.gap.min(width / MAX_TILES as u32);
    let frames = match plan.template {
        Template::Single => {
            let mut frames = Vec::with_capacity(1);
            frames.push(Rect::new(0, 0, width, box_height(plan.hero(), width)));
            frames
        }
        Template::Pair => pair(&plan.tiles, width, gap),
        Template::PortraitHeroStack => hero_stack(plan, width, gap),
        Template::LandscapeHeroRow => hero_row(&plan.tiles, width, gap),
    };

    let height = frames.iter().map(Rect::bottom).max().unwrap_or(0);
    for (i, f) in frames.iter().enumerate() {
        log::trace!(
            "tile {i}: {}x{} at ({}, {})",
            f.width,
            f.height,
            f.x,
            f.y
        );
    }

    Arrangement {
        size: Size::new(width, height),
        frames,
    }
}

/// Height of a tile's box at `width`. Coupled tiles have no ratio of their
/// own; outside a stack they fall back to square.
fn box_height(tile: &TileSpec<'_>, width: u32) -> u32 {
    tile.aspect
        .ratio()
        .map_or(width, |r| r.height_for_width(width))
}

fn pair(tiles: &[TileSpec<'_>], width: u32, gap: u32) -> Vec<Rect> {
    let avail = width.saturating_sub(gap);
    let left = avail / 2;
    let right = avail - left;
    let mut frames = Vec::with_capacity(tiles.len());
    let mut x = 0;
    for (tile, w) in tiles.iter().zip([left, right]) {
        frames.push(Rect::new(x, 0, w, box_height(tile, w)));
        x = x.saturating_add(w).saturating_add(gap);
    }
    frames
}

fn hero_stack(plan: &LayoutPlan<'_>, width: u32, gap: u32) -> Vec<Rect> {
    let avail = width.saturating_sub(gap);
    let hero_w = div_round(avail as u64 * plan.hero_width_percent as u64, 100).min(avail);
    let column_w = avail - hero_w;
    let column_x = hero_w.saturating_add(gap);
    let hero_h = box_height(plan.hero(), hero_w);

    let secondaries = plan.secondaries();
    let mut frames = Vec::with_capacity(plan.tiles.len());
    frames.push(Rect::new(0, 0, hero_w, hero_h));
    if secondaries.is_empty() {
        return frames;
    }

    let n = secondaries.len() as u32;
    let gaps = gap.saturating_mul(n - 1);
    if plan.is_height_coupled() {
        // Split the hero height; earlier tiles absorb the odd pixel.
        let total = hero_h.saturating_sub(gaps);
        let (base, extra) = (total / n, total % n);
        let mut y = 0;
        for i in 0..n {
            let h = base + u32::from(i < extra);
            frames.push(Rect::new(column_x, y, column_w, h));
            y = y.saturating_add(h).saturating_add(gap);
        }
    } else {
        let heights: Vec<u32> = secondaries
            .iter()
            .map(|t| box_height(t, column_w))
            .collect();
        let stacked = heights.iter().fold(0u32, |acc, &h| acc.saturating_add(h));
        let column_h = hero_h.max(stacked.saturating_add(gaps));
        let free = column_h - stacked;
        let mut above: u32 = 0;
        for (i, &h) in heights.iter().enumerate() {
            // Space-between: first tile flush top, last flush bottom.
            let spacing = if n > 1 {
                div_floor(free as u64 * i as u64, (n - 1) as u64)
            } else {
                0
            };
            frames.push(Rect::new(column_x, above.saturating_add(spacing), column_w, h));
            above = above.saturating_add(h);
        }
    }
    frames
}

fn hero_row(tiles: &[TileSpec<'_>], width: u32, gap: u32) -> Vec<Rect> {
    let Some((hero, secondaries)) = tiles.split_first() else {
        return Vec::new();
    };
    let hero_h = box_height(hero, width);
    let mut frames = Vec::with_capacity(tiles.len());
    frames.push(Rect::new(0, 0, width, hero_h));
    if secondaries.is_empty() {
        return frames;
    }

    let n = secondaries.len() as u32;
    let avail = width.saturating_sub(gap.saturating_mul(n - 1));
    let (base, extra) = (avail / n, avail % n);
    let y = hero_h.saturating_add(gap);
    let mut x = 0;
    for (i, tile) in secondaries.iter().enumerate() {
        let w = base + u32::from((i as u32) < extra);
        frames.push(Rect::new(x, y, w, box_height(tile, w)));
        x = x.saturating_add(w).saturating_add(gap);
    }
    frames
}

fn div_floor(num: u64, den: u64) -> u32 {
    u32::try_from(num / den).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaItem;
    use crate::options::CollageOptions;
    use crate::plan::plan;

    fn portrait(id: &str) -> MediaItem {
        MediaItem::new(id, format!("{id}.jpg")).with_dimensions(800, 1000)
    }

    fn landscape(id: &str) -> MediaItem {
        MediaItem::new(id, format!("{id}.jpg")).with_dimensions(1200, 800)
    }

    #[test]
    fn single_full_width() {
        let items = [landscape("a")];
        let a = plan(&items, &CollageOptions::new()).unwrap().arrange(600);
        assert_eq!(a.frames, [Rect::new(0, 0, 600, 400)]);
        assert_eq!(a.size, Size::new(600, 400));
    }

    #[test]
    fn pair_splits_width_around_gap() {
        let items = [portrait("a"), portrait("b")];
        let a = plan(&items, &CollageOptions::new().gap(4))
            .unwrap()
            .arrange(404);
        assert_eq!(a.frames[0], Rect::new(0, 0, 200, 250));
        assert_eq!(a.frames[1], Rect::new(204, 0, 200, 250));
        assert_eq!(a.size, Size::new(404, 250));
    }

    #[test]
    fn coupled_pair_halves_hero_exactly() {
        let items = [portrait("a"), landscape("b"), landscape("c")];
        let options = CollageOptions::new().gap(0).hero_width_percent(64);
        let a = plan(&items, &options).unwrap().arrange(500);
        let hero = a.frames[0];
        assert_eq!(hero, Rect::new(0, 0, 320, 400));
        assert_eq!(a.frames[1], Rect::new(320, 0, 180, 200));
        assert_eq!(a.frames[2], Rect::new(320, 200, 180, 200));
    }

    #[test]
    fn coupled_pair_with_gap_fills_hero_height() {
        let items = [portrait("a"), landscape("b"), landscape("c")];
        let a = plan(&items, &CollageOptions::new().gap(4))
            .unwrap()
            .arrange(600);
        let (hero, top, bottom) = (a.frames[0], a.frames[1], a.frames[2]);
        assert_eq!(top.height + 4 + bottom.height, hero.height);
        assert!(top.height.abs_diff(bottom.height) <= 1);
        assert_eq!(top.y, 0);
        assert_eq!(bottom.bottom(), hero.bottom());
        assert_eq!(bottom.right(), 600);
        assert_eq!(a.size.height, hero.height);
    }

    #[test]
    fn locked_stack_spreads_top_to_bottom() {
        let items = [portrait("a"), landscape("b"), landscape("c"), landscape("d")];
        let a = plan(&items, &CollageOptions::new().gap(4))
            .unwrap()
            .arrange(604);
        // avail 600, hero 396 wide → 495 tall; column 204 wide → 153 tall each
        assert_eq!(a.frames[0], Rect::new(0, 0, 396, 495));
        let column: Vec<Rect> = a.frames[1..].to_vec();
        assert!(column.iter().all(|r| r.x == 400 && r.width == 204 && r.height == 153));
        assert_eq!(column[0].y, 0);
        assert_eq!(column[2].bottom(), 495);
        let gap_a = column[1].y - column[0].bottom();
        let gap_b = column[2].y - column[1].bottom();
        assert!(gap_a.abs_diff(gap_b) <= 1);
        assert_eq!(a.size, Size::new(604, 495));
    }

    #[test]
    fn locked_stack_taller_than_hero_keeps_gap() {
        // A narrow hero leaves the column taller than the hero.
        let items = [portrait("a"), portrait("b"), portrait("c"), portrait("d")];
        let options = CollageOptions::new().gap(10).hero_width_percent(20);
        let a = plan(&items, &options).unwrap().arrange(510);
        let column = &a.frames[1..];
        assert_eq!(column[1].y - column[0].bottom(), 10);
        assert_eq!(column[2].y - column[1].bottom(), 10);
        assert_eq!(a.size.height, column[2].bottom());
    }

    #[test]
    fn landscape_row_covers_width() {
        let items = [landscape("a"), landscape("b"), landscape("c"), landscape("d")];
        let a = plan(&items, &CollageOptions::new().gap(4))
            .unwrap()
            .arrange(601);
        assert_eq!(a.frames[0], Rect::new(0, 0, 601, 401));
        let row = &a.frames[1..];
        assert!(row.iter().all(|r| r.y == 405));
        assert_eq!(row[2].right(), 601);
        let widths: Vec<u32> = row.iter().map(|r| r.width).collect();
        assert_eq!(widths, [198, 198, 197]);
        assert_eq!(a.size.height, 405 + row[0].height);
    }

    #[test]
    fn landscape_row_of_two_secondaries() {
        let items = [landscape("a"), landscape("b"), landscape("c")];
        let a = plan(&items, &CollageOptions::new().gap(0))
            .unwrap()
            .arrange(400);
        assert_eq!(a.frames[1], Rect::new(0, 267, 200, 150));
        assert_eq!(a.frames[2], Rect::new(200, 267, 200, 150));
    }

    #[test]
    fn narrow_container_shrinks_gap() {
        let items = [portrait("a"), portrait("b")];
        let a = plan(&items, &CollageOptions::new().gap(40))
            .unwrap()
            .arrange(100);
        // 100 / 4 = 25px gap at most.
        assert_eq!(a.frames[1].x - a.frames[0].right(), 25);
        assert_eq!(a.frames[1].right(), 100);
    }

    #[test]
    fn extreme_intrinsic_row_saturates() {
        let items = [
            MediaItem::new("a", "a.jpg").with_dimensions(1600, 900),
            MediaItem::new("b", "b.jpg").with_dimensions(1, 30_000_000),
            MediaItem::new("c", "c.jpg"),
        ];
        let p = plan(&items, &CollageOptions::new().intrinsic_ratios()).unwrap();
        assert_eq!(p.template, Template::LandscapeHeroRow);
        let a = p.arrange(600);
        // 298 wide at 1:30_000_000 is far past u32::MAX tall.
        assert_eq!(a.frames[1].height, u32::MAX);
        assert_eq!(a.frames[1].bottom(), u32::MAX);
        assert_eq!(a.size.height, u32::MAX);
        assert_eq!(a.frames[2].right(), 600);
    }

    #[test]
    fn extreme_intrinsic_stack_saturates() {
        let mut items = vec![portrait("hero")];
        items.extend(
            (0..3).map(|i| MediaItem::new(format!("s{i}"), "s.jpg").with_dimensions(1, 10_000_000)),
        );
        let p = plan(&items, &CollageOptions::new().intrinsic_ratios()).unwrap();
        assert_eq!(p.template, Template::PortraitHeroStack);
        let a = p.arrange(600);
        let column = &a.frames[1..];
        assert_eq!(column[0].y, 0);
        assert!(column.windows(2).all(|w| w[0].y <= w[1].y));
        assert_eq!(a.size.height, u32::MAX);
    }

    #[test]
    fn zero_width_does_not_panic() {
        let items = [portrait("a"), portrait("b"), portrait("c"), portrait("d")];
        let a = plan(&items, &CollageOptions::new()).unwrap().arrange(0);
        assert_eq!(a.frames.len(), 4);
        assert_eq!(a.size.width, 0);
    }
}
