//! Desktop simulator for the thermo-rs temperature analysis dashboard.
//!
//! Renders the thermo-core dashboard page in an SDL2 window via
//! `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key         | Action                         |
//! |-------------|--------------------------------|
//! | Left/Right  | Previous/next hour             |
//! | A / Enter   | Calculate ambient temperature  |
//! | R           | Refresh data                   |
//! | U           | Toggle °C/°F                   |
//! | G           | Toggle gridlines               |
//! | S           | Cycle chart style              |
//! | D           | Toggle dark mode               |
//! | O           | Open/close the settings panel  |
//! | Q / Esc     | Quit                           |
//!
//! Mouse clicks and drags are forwarded as touch events.
//!
//! # Environment
//!
//! - `THERMO_CONFIG`: path to a JSON [`DashboardConfig`](thermo_core::config::DashboardConfig)
//! - `THERMO_SEED`: RNG seed for a reproducible session
//! - `RUST_LOG`: log level (e.g. `debug`)

mod config;

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::info;

use thermo_core::pages::{DashboardPage, Page};
use thermo_core::state::{DashboardAction, DashboardState};
use thermo_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, TouchEvent, TouchPoint};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Full-screen bounding rectangle.
fn screen_bounds() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
    )
}

/// Map an SDL keycode to a dashboard action.
fn keycode_to_action(keycode: Keycode) -> Option<DashboardAction> {
    match keycode {
        Keycode::Left => Some(DashboardAction::PreviousHour),
        Keycode::Right => Some(DashboardAction::NextHour),
        Keycode::A | Keycode::Return => Some(DashboardAction::CalculateAmbient),
        Keycode::R => Some(DashboardAction::RefreshSeries),
        Keycode::U => Some(DashboardAction::ToggleUnit),
        Keycode::G => Some(DashboardAction::ToggleGridlines),
        Keycode::S => Some(DashboardAction::CycleChartStyle),
        Keycode::D => Some(DashboardAction::ToggleTheme),
        Keycode::O => Some(DashboardAction::ToggleSettingsPanel),
        _ => None,
    }
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting thermo-rs simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: ←/→=Hour  A=Calculate  R=Refresh  U=Unit  G=Grid  S=Style  D=Theme  O=Settings  Q=Quit");

    let config = config::load();
    let mut rng = config::rng(&config);

    // config::load has already replaced an invalid hour with the default
    let mut state = match config.initial_state(&mut rng) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid configuration ({}), using defaults", e);
            DashboardState::new(Default::default(), Default::default(), config.selected_hour)
                .update(DashboardAction::RefreshSeries, &mut rng)
        }
    };

    // SDL2 display and window
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        DISPLAY_WIDTH_PX as u32,
        DISPLAY_HEIGHT_PX as u32,
    ));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Thermo Simulator", &output_settings);

    let mut page = DashboardPage::new(screen_bounds(), &state);
    info!("Showing {}", page.title());

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    if let Err(e) = page.draw_page(&mut display) {
        log::error!("Draw error: {:?}", e);
    }
    page.mark_clean();
    window.update(&display);

    let mut mouse_down = false;

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        let mut actions = Vec::new();
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if let Some(action) = keycode_to_action(keycode) {
                        info!("Key → action {:?}", action);
                        actions.push(action);
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    if let Some(action) = page.handle_touch(TouchEvent::Press(touch_point(point)))
                    {
                        info!("Touch → action {:?}", action);
                        actions.push(action);
                    }
                }

                SimulatorEvent::MouseMove { point } if mouse_down => {
                    if let Some(action) = page.handle_touch(TouchEvent::Drag(touch_point(point))) {
                        actions.push(action);
                    }
                }

                SimulatorEvent::MouseButtonUp { .. } => mouse_down = false,

                _ => {}
            }
        }

        // --- Reducer ------------------------------------------------------
        for action in actions {
            state = state.update(action, &mut rng);
        }
        page.sync(&state);

        // --- Render -------------------------------------------------------
        if page.is_dirty() {
            let _ = display.clear(Rgb565::BLACK);
            if let Err(e) = page.draw_page(&mut display) {
                log::error!("Draw error: {:?}", e);
            }
            page.mark_clean();
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
