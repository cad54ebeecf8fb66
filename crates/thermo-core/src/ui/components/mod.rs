//! Reusable UI components

pub mod button;
pub mod graph;
pub mod slider;

pub use button::Button;
pub use slider::HourSlider;
