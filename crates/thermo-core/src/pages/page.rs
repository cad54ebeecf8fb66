//! Core page abstraction

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::state::DashboardAction;
use crate::ui::core::TouchEvent;

/// Trait that every screen implements.
///
/// The host loop calls these methods each frame:
///
/// 1. **`handle_touch`** for every touch event; a returned action is passed
///    through [`DashboardState::update`](crate::state::DashboardState::update).
/// 2. The page is synchronised with the new state.
/// 3. **`draw_page`** when `is_dirty()` is true, followed by `mark_clean`.
pub trait Page {
    /// Human-readable title (may appear in headers or debug logs).
    fn title(&self) -> &str;

    /// Process a touch event and optionally return an action for the reducer.
    fn handle_touch(&mut self, event: TouchEvent) -> Option<DashboardAction>;

    /// Render the entire page to the given display target.
    fn draw_page<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D)
    -> Result<(), D::Error>;

    /// Bounding rectangle of this page (typically the full screen).
    fn bounds(&self) -> Rectangle;

    /// Whether the page needs redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the page to be redrawn on the next frame.
    fn mark_dirty(&mut self);
}
