//! Temperature analysis dashboard page
//!
//! Layout (480x320):
//! - Header: title, theme toggle and settings button
//! - Legend: one swatch per series, plus the estimate when present
//! - Chart: local and battery temperature by hour, with the ambient
//!   estimate as a dashed reference line; touching it shows an hour readout
//! - Controls: hour slider, calculate/refresh buttons and the estimate panel
//! - Settings overlay on the right while open

mod constants;
mod page;
mod settings_panel;

pub use page::DashboardPage;
pub use settings_panel::SettingsPanel;
