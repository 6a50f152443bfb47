//! Click-to-preview state machine.
//!
//! ```text
//!            TileClicked(item)              TileClicked(other)
//!   Closed ────────────────────▶ Open(item) ──────────────────▶ Open(other)
//!     ▲                            │
//!     └──── CloseRequested ────────┘
//! ```
//!
//! Every transition is synchronous and idempotent; there are no timers.

use crate::geometry::{Gravity, Rect, Size, fit_inside, gravity_offset};
use crate::media::MediaItem;
use crate::orientation::Orientation;

/// What asked the preview to close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CloseTrigger {
    /// The explicit close control.
    CloseControl,
    /// A press on the backdrop outside the displayed image.
    Backdrop,
}

/// Input to the preview state machine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PreviewEvent {
    TileClicked(MediaItem),
    CloseRequested(CloseTrigger),
}

/// Preview state. The previewed item is owned, so the state outlives the
/// render pass that produced the click.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PreviewState {
    #[default]
    Closed,
    Open(MediaItem),
}

impl PreviewState {
    /// The transition function.
    pub fn apply(self, event: PreviewEvent) -> Self {
        match event {
            PreviewEvent::TileClicked(item) => Self::Open(item),
            PreviewEvent::CloseRequested(_) => Self::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The previewed item, if open.
    pub fn item(&self) -> Option<&MediaItem> {
        match self {
            Self::Open(item) => Some(item),
            Self::Closed => None,
        }
    }
}

/// Owns the preview state for one collage.
#[derive(Clone, Debug, Default)]
pub struct PreviewController {
    state: PreviewState,
}

impl PreviewController {
    /// A controller with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The previewed item, if open.
    pub fn current(&self) -> Option<&MediaItem> {
        self.state.item()
    }

    /// Apply an event. Returns whether the state changed.
    pub fn handle(&mut self, event: PreviewEvent) -> bool {
        let changed = match (&self.state, &event) {
            (PreviewState::Open(current), PreviewEvent::TileClicked(item)) => current != item,
            (PreviewState::Closed, PreviewEvent::CloseRequested(_)) => false,
            _ => true,
        };
        if changed {
            log::debug!("preview: {:?}", event);
        }
        self.state = core::mem::take(&mut self.state).apply(event);
        changed
    }

    /// Open (or switch) the preview to `item`.
    pub fn tile_clicked(&mut self, item: &MediaItem) -> bool {
        self.handle(PreviewEvent::TileClicked(item.clone()))
    }

    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        self.handle(PreviewEvent::CloseRequested(trigger))
    }

    /// Where the previewed image is displayed inside `viewport`.
    ///
    /// The natural size is fitted inside the viewport less `margin` on every
    /// side and centered. Items without dimensions display at 3:2. `None`
    /// when closed or when the viewport leaves no room.
    pub fn image_frame(&self, viewport: Size, margin: u32) -> Option<Rect> {
        let item = self.current()?;
        let natural = item.dimensions().unwrap_or_else(|| {
            let r = Orientation::Landscape.hero_ratio();
            Size::new(r.width(), r.height())
        });
        let bounds = Size::new(
            viewport.width.saturating_sub(margin.saturating_mul(2)),
            viewport.height.saturating_sub(margin.saturating_mul(2)),
        );
        let fitted = fit_inside(natural, bounds);
        if fitted.is_empty() {
            return None;
        }
        let (x, y) = gravity_offset(viewport, fitted, &Gravity::Center);
        Some(Rect::new(x, y, fitted.width, fitted.height))
    }

    /// A pointer press at `(x, y)` while the overlay is shown.
    ///
    /// Presses outside the displayed image hit the backdrop and close the
    /// preview. Returns whether it closed.
    pub fn pointer_pressed(&mut self, x: u32, y: u32, viewport: Size, margin: u32) -> bool {
        if !self.is_open() {
            return false;
        }
        if self
            .image_frame(viewport, margin)
            .is_some_and(|frame| frame.contains(x, y))
        {
            return false;
        }
        self.close(CloseTrigger::Backdrop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MediaItem {
        MediaItem::new(id, format!("{id}.jpg")).with_dimensions(1600, 900)
    }

    #[test]
    fn starts_closed() {
        let c = PreviewController::new();
        assert!(!c.is_open());
        assert_eq!(c.current(), None);
        assert_eq!(c.state(), &PreviewState::Closed);
    }

    #[test]
    fn click_opens_and_close_control_closes() {
        let mut c = PreviewController::new();
        assert!(c.tile_clicked(&item("a")));
        assert_eq!(c.current().map(|i| i.id.as_str()), Some("a"));
        assert!(c.close(CloseTrigger::CloseControl));
        assert!(!c.is_open());
    }

    #[test]
    fn clicking_another_tile_switches() {
        let mut c = PreviewController::new();
        c.tile_clicked(&item("a"));
        assert!(c.tile_clicked(&item("b")));
        assert_eq!(c.current().map(|i| i.id.as_str()), Some("b"));
        // Same tile again is a no-op.
        assert!(!c.tile_clicked(&item("b")));
    }

    #[test]
    fn closing_when_closed_is_idempotent() {
        let mut c = PreviewController::new();
        assert!(!c.close(CloseTrigger::Backdrop));
        assert!(!c.is_open());
    }

    #[test]
    fn every_open_state_reaches_closed() {
        for trigger in [CloseTrigger::CloseControl, CloseTrigger::Backdrop] {
            let open = PreviewState::Open(item("x"));
            assert_eq!(
                open.apply(PreviewEvent::CloseRequested(trigger)),
                PreviewState::Closed
            );
        }
    }

    #[test]
    fn image_frame_fits_and_centers() {
        let mut c = PreviewController::new();
        assert_eq!(c.image_frame(Size::new(1000, 800), 20), None);
        c.tile_clicked(&item("a"));
        // 1600×900 into 960×760 → width constrains → 960×540, centered.
        let frame = c.image_frame(Size::new(1000, 800), 20).unwrap();
        assert_eq!(frame, Rect::new(20, 130, 960, 540));
    }

    #[test]
    fn image_frame_without_dimensions_uses_landscape_ratio() {
        let mut c = PreviewController::new();
        c.tile_clicked(&MediaItem::new("bare", "bare.jpg"));
        let frame = c.image_frame(Size::new(600, 600), 0).unwrap();
        assert_eq!(frame, Rect::new(0, 100, 600, 400));
    }

    #[test]
    fn huge_margin_leaves_no_room() {
        let viewport = Size::new(1000, 800);
        let mut c = PreviewController::new();
        c.tile_clicked(&item("a"));
        assert_eq!(c.image_frame(viewport, u32::MAX / 2 + 1), None);
        assert_eq!(c.image_frame(viewport, u32::MAX), None);
        // No image on screen, so any press is on the backdrop.
        assert!(c.pointer_pressed(500, 400, viewport, u32::MAX));
        assert!(!c.is_open());
    }

    #[test]
    fn backdrop_press_closes_but_image_press_does_not() {
        let viewport = Size::new(1000, 800);
        let mut c = PreviewController::new();
        c.tile_clicked(&item("a"));

        assert!(!c.pointer_pressed(500, 400, viewport, 20));
        assert!(c.is_open());

        assert!(c.pointer_pressed(500, 50, viewport, 20));
        assert!(!c.is_open());

        // Nothing to close any more.
        assert!(!c.pointer_pressed(500, 50, viewport, 20));
    }
}
