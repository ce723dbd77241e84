//! RUI demo application
//!
//! Drives the UI headless for a fixed number of frames with scripted input:
//! an info panel, a scrolling list of buttons and a settings panel with a
//! slider, toggle, text field and a fade button.
//!
//! Usage: `rui_demo [theme.ron|theme.toml]`

use rui::prelude::*;
use thiserror::Error;

const SCREEN_WIDTH: f32 = 800.0;
const SCREEN_HEIGHT: f32 = 600.0;
const FRAMES: u32 = 48;

const LIST_BOUNDS: Rect = Rect::new(50.0, 50.0, 200.0, 300.0);
const INFO_BOUNDS: Rect = Rect::new(400.0, 50.0, 200.0, 100.0);
const SETTINGS_BOUNDS: Rect = Rect::new(400.0, 200.0, 220.0, 240.0);

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to load theme from {path}: {source}")]
    Theme {
        path: String,
        #[source]
        source: ConfigError,
    },
}

/// Scripted input for one frame
#[derive(Debug, Clone, Copy)]
enum Step {
    Idle,
    Press(f32, f32),
    Drag(f32, f32),
    Wheel(f32, f32, f32),
    Type(&'static str),
    Key(Key),
}

fn script(frame: u32) -> Step {
    match frame {
        2 => Step::Press(140.0, 125.0),
        4..=6 => Step::Wheel(150.0, 200.0, 3.0),
        8 => Step::Press(510.0, 234.0),
        9 => Step::Drag(560.0, 234.0),
        12 => Step::Press(418.0, 260.0),
        14 => Step::Press(500.0, 290.0),
        15 => Step::Type("Ada"),
        16 => Step::Key(Key::Backspace),
        17 => Step::Key(Key::Enter),
        19 => Step::Press(500.0, 325.0),
        _ => Step::Idle,
    }
}

fn apply(step: Step, backend: &mut HeadlessBackend) {
    backend.next_frame();
    if !matches!(step, Step::Drag(..)) {
        backend.set_mouse_down(false);
    }

    match step {
        Step::Idle => {}
        Step::Press(x, y) => backend.press_at(x, y),
        Step::Drag(x, y) => backend.set_mouse_position(x, y),
        Step::Wheel(x, y, delta) => {
            backend.set_mouse_position(x, y);
            backend.set_wheel(delta);
        }
        Step::Type(text) => backend.type_text(text),
        Step::Key(key) => backend.push_key(key),
    }
}

struct DemoState {
    volume: f32,
    fullscreen: bool,
    name: TextInput,
    settings_open: bool,
    fading: bool,
}

impl DemoState {
    fn new() -> Self {
        Self {
            volume: 0.5,
            fullscreen: false,
            name: TextInput::new("player_name", 16),
            settings_open: true,
            fading: false,
        }
    }
}

fn info_style() -> PanelStyle {
    PanelStyle {
        body_color: rgba(30, 60, 120, 230),
        title_color: rgba(20, 40, 90, 255),
        border_color: rgba(255, 200, 30, 255),
        title_text_color: rgba(255, 255, 255, 255),
        label_color: rgba(255, 255, 255, 255),
        ..PanelStyle::default()
    }
}

fn list_style() -> PanelStyle {
    PanelStyle {
        body_color: rgba(235, 235, 235, 220),
        title_color: rgba(190, 190, 190, 200),
        border_color: rgba(80, 80, 80, 255),
        title_text_color: rgba(40, 40, 40, 255),
        label_color: rgba(30, 30, 30, 255),
        ..PanelStyle::default()
    }
}

/// Build one frame of UI; returns whether a fade was requested
fn draw_ui(frame: &mut Frame<'_, HeadlessBackend>, state: &mut DemoState) -> bool {
    frame.panel_styled(INFO_BOUNDS, None, info_style());
    frame.label_colored(
        "Hello there",
        Vec2::new(INFO_BOUNDS.x + 12.0, INFO_BOUNDS.y + 36.0),
        rgba(255, 255, 255, 255),
    );

    frame.panel_begin(
        &Panel::new("many_buttons", LIST_BOUNDS)
            .title("Many Buttons")
            .scrollable(true)
            .style(list_style()),
    );
    for i in 1..=20 {
        frame.panel_button_with(&format!("Item {i}"), 30.0, || log::info!("Clicked {}", i));
    }
    frame.panel_end();

    let mut fade_requested = false;
    if state.settings_open {
        let closed = frame.panel_begin(
            &Panel::new("settings", SETTINGS_BOUNDS)
                .title("Settings")
                .closable(true),
        );

        state.volume = frame.panel_slider_with("volume", state.volume, 0.0, 1.0, 20.0, |v| {
            log::debug!("Volume {:.2}", v);
        });
        state.fullscreen = frame.panel_toggle_with("Fullscreen", state.fullscreen, 20.0, |on| {
            log::info!("Fullscreen {}", if on { "on" } else { "off" });
        });
        if frame.panel_text_input(&mut state.name, 28.0) {
            log::debug!("Name is now {:?}", state.name.text());
        }
        fade_requested = frame.panel_button("Fade out", 30.0);
        frame.panel_end();

        if closed {
            log::info!("Settings closed");
            state.settings_open = false;
        }
    }

    frame.draw_fade();
    fade_requested
}

fn load_theme(ui: &mut UiContext) -> Result<(), DemoError> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(());
    };

    let theme = Theme::load_from_file(&path).map_err(|source| DemoError::Theme {
        path: path.clone(),
        source,
    })?;
    log::info!("Loaded theme from {}", path);
    ui.set_theme(theme);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting RUI demo ({} frames)", FRAMES);

    let mut ui = UiContext::new();
    load_theme(&mut ui)?;

    let mut backend = HeadlessBackend::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut state = DemoState::new();

    for index in 0..FRAMES {
        apply(script(index), &mut backend);

        let mut frame = ui.begin_frame(&mut backend);
        let fade_requested = draw_ui(&mut frame, &mut state);
        frame.end();

        if fade_requested && !state.fading {
            log::info!("Fading out");
            ui.fade_out(0.25);
            state.fading = true;
        } else if state.fading && !ui.is_fading() && ui.fade_alpha() > 0.0 {
            log::info!("Fading back in");
            ui.fade_in(0.25);
        }

        log::debug!(
            "Frame {}: {} draw commands, list offset {:.1}",
            index,
            backend.commands().len(),
            ui.scroll_offset("many_buttons")
        );
    }

    log::info!(
        "Done: volume {:.2}, fullscreen {}, name {:?}",
        state.volume,
        state.fullscreen,
        state.name.text()
    );
    Ok(())
}
