//! Layout constants for the dashboard page (480x320 display)

// ============================================================================
// Header
// ============================================================================

/// Height of the header bar in pixels
pub(super) const HEADER_HEIGHT_PX: u32 = 36;

/// Left padding for the header title in pixels
pub(super) const HEADER_TITLE_PADDING_LEFT_PX: i32 = 8;

pub(super) const HEADER_BUTTON_TOP_PX: i32 = 6;
pub(super) const HEADER_BUTTON_HEIGHT_PX: u32 = 24;

pub(super) const THEME_BUTTON_LEFT_PX: i32 = 330;
pub(super) const THEME_BUTTON_WIDTH_PX: u32 = 64;

pub(super) const SETTINGS_BUTTON_LEFT_PX: i32 = 400;
pub(super) const SETTINGS_BUTTON_WIDTH_PX: u32 = 72;

// ============================================================================
// Legend
// ============================================================================

pub(super) const LEGEND_HEIGHT_PX: u32 = 16;

/// Side length of the colored legend swatch in pixels
pub(super) const LEGEND_SWATCH_PX: u32 = 8;

/// Gap between a swatch and its text in pixels
pub(super) const LEGEND_TEXT_GAP_PX: i32 = 4;

/// Horizontal start of each legend entry (local, battery, ambient)
pub(super) const LEGEND_ENTRY_LEFT_PX: [i32; 3] = [48, 180, 324];

// ============================================================================
// Chart
// ============================================================================

pub(super) const GRAPH_HEIGHT_PX: u32 = 168;

/// Plot padding inside the graph: top, right, bottom, left
pub(super) const GRAPH_PADDING_PX: (u32, u32, u32, u32) = (16, 12, 30, 44);

/// Capacity of each chart series (one point per hour)
pub(super) const MAX_CHART_POINTS: usize = 24;

/// Local and battery series
pub(super) const MAX_CHART_SERIES: usize = 2;

/// Y tick spacing in °C; every multiple of 5 °C is also a whole °F value
pub(super) const Y_TICK_STEP_CELSIUS: f32 = 5.0;

// Hour readout shown while the chart is touched
pub(super) const READOUT_TOP_OFFSET_PX: i32 = 2;
pub(super) const READOUT_HEIGHT_PX: u32 = 14;
pub(super) const READOUT_PADDING_PX: i32 = 4;
pub(super) const READOUT_CURSOR_GAP_PX: i32 = 6;
pub(super) const READOUT_CORNER_RADIUS_PX: u32 = 3;
pub(super) const MAX_READOUT_LENGTH: usize = 64;

// ============================================================================
// Controls
// ============================================================================

pub(super) const CONTROLS_PADDING_PX: i32 = 8;

/// Offset of the hour selector row from the top of the controls area
pub(super) const HOUR_ROW_OFFSET_PX: i32 = 2;

pub(super) const SLIDER_LEFT_PX: i32 = 128;
pub(super) const SLIDER_WIDTH_PX: u32 = 344;
pub(super) const SLIDER_HEIGHT_PX: u32 = 20;

pub(super) const ACTION_ROW_OFFSET_PX: i32 = 28;
pub(super) const ACTION_BUTTON_HEIGHT_PX: u32 = 26;
pub(super) const CALCULATE_BUTTON_WIDTH_PX: u32 = 196;
pub(super) const REFRESH_BUTTON_WIDTH_PX: u32 = 110;
pub(super) const ACTION_BUTTON_GAP_PX: i32 = 8;

pub(super) const ESTIMATE_PANEL_OFFSET_PX: i32 = 60;
pub(super) const ESTIMATE_PANEL_HEIGHT_PX: u32 = 34;
pub(super) const PANEL_CORNER_RADIUS_PX: u32 = 6;

// ============================================================================
// Settings panel
// ============================================================================

pub(super) const SETTINGS_PANEL_LEFT_PX: i32 = 212;
pub(super) const SETTINGS_PANEL_TOP_PX: i32 = 40;
pub(super) const SETTINGS_PANEL_WIDTH_PX: u32 = 264;
pub(super) const SETTINGS_PANEL_HEIGHT_PX: u32 = 144;
pub(super) const SETTINGS_PANEL_PADDING_PX: i32 = 10;

/// Offset of the first setting row from the panel top
pub(super) const SETTINGS_FIRST_ROW_OFFSET_PX: i32 = 48;
pub(super) const SETTINGS_ROW_HEIGHT_PX: u32 = 30;
pub(super) const SETTINGS_VALUE_WIDTH_PX: u32 = 96;
pub(super) const SETTINGS_VALUE_HEIGHT_PX: u32 = 22;
