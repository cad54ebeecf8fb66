//! Button component bound to a dashboard action

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, iso_8859_1::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};

use crate::state::DashboardAction;
use crate::ui::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{ButtonVariant, ColorPalette, Style};

/// Maximum button label length (bytes)
pub const MAX_BUTTON_LABEL_LENGTH: usize = 32;

const DEFAULT_CORNER_RADIUS_PX: u32 = 6;

/// Rounded button with a centered label
///
/// Pressing the button returns its [`DashboardAction`]; the caller feeds the
/// action to the reducer.
///
/// ```ignore
/// let button = Button::new(bounds, "Refresh Data", DashboardAction::RefreshSeries)
///     .with_variant(ButtonVariant::Outline)
///     .with_palette(theme.palette);
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    bounds: Rectangle,
    label: heapless::String<MAX_BUTTON_LABEL_LENGTH>,
    action: DashboardAction,
    variant: ButtonVariant,
    palette: ColorPalette,
    border_radius: u32,
    dirty: bool,
}

impl Button {
    /// Create a button; labels longer than 32 bytes are truncated
    pub fn new(bounds: Rectangle, label: &str, action: DashboardAction) -> Self {
        Self {
            bounds,
            label: truncated_label(label),
            action,
            variant: ButtonVariant::Primary,
            palette: ColorPalette::light(),
            border_radius: DEFAULT_CORNER_RADIUS_PX,
            dirty: true,
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self.dirty = true;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    /// Switch palettes after a theme change
    pub fn set_palette(&mut self, palette: ColorPalette) {
        if self.palette != palette {
            self.palette = palette;
            self.dirty = true;
        }
    }

    /// Replace the label text
    pub fn set_label(&mut self, label: &str) {
        if self.label.as_str() != label {
            self.label = truncated_label(label);
            self.dirty = true;
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Get the action that will be triggered when the button is pressed
    pub fn action(&self) -> DashboardAction {
        self.action
    }

    fn style(&self) -> Style {
        self.variant.to_style(&self.palette)
    }
}

fn truncated_label(label: &str) -> heapless::String<MAX_BUTTON_LABEL_LENGTH> {
    let mut out = heapless::String::new();
    for c in label.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let style = self.style();

        let corner_radius = Size::new(self.border_radius, self.border_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner_radius)
            .into_styled(style.to_primitive_style())
            .draw(display)?;

        let text_color = style.foreground_color.unwrap_or(self.palette.text_primary);
        let character_style = MonoTextStyle::new(&FONT_6X10, text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(TextAlignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.label, self.bounds.center(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                TouchResult::Action(self.action)
            }
            _ => TouchResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Canvas;

    fn refresh_button() -> Button {
        Button::new(
            Rectangle::new(Point::new(10, 10), Size::new(100, 24)),
            "Refresh Data",
            DashboardAction::RefreshSeries,
        )
    }

    #[test]
    fn test_press_inside_triggers_action() {
        let mut button = refresh_button();
        assert_eq!(
            button.handle_touch(TouchEvent::Press(TouchPoint::new(50, 20))),
            TouchResult::Action(DashboardAction::RefreshSeries)
        );
        assert_eq!(
            button.handle_touch(TouchEvent::Press(TouchPoint::new(200, 20))),
            TouchResult::NotHandled
        );
        assert_eq!(
            button.handle_touch(TouchEvent::Drag(TouchPoint::new(50, 20))),
            TouchResult::NotHandled
        );
    }

    #[test]
    fn test_long_label_is_truncated() {
        let button = Button::new(
            Rectangle::zero(),
            "A label that is far too long to fit in a button",
            DashboardAction::CalculateAmbient,
        );
        assert_eq!(button.label().len(), MAX_BUTTON_LABEL_LENGTH);
    }

    #[test]
    fn test_draws_primary_background() {
        let palette = ColorPalette::light();
        let button = refresh_button().with_palette(palette);
        let mut canvas = Canvas::new(Size::new(120, 40), Rgb565::RED);
        button.draw(&mut canvas).unwrap();

        assert_eq!(canvas.pixel(Point::new(50, 31)), Some(palette.primary));
        assert!(canvas.count(palette.on_primary) > 0);
    }
}
