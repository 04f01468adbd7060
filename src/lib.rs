//! Small WebGL2 demos: rotating cubes, a spinning globe, a ring of shapes and
//! a glowing "save point" with particles and an orbiting camera.
//!
//! Animation state (`scene`, `frame`, `geometry`, `config`) is plain Rust and
//! builds on any target; the browser glue lives in `wasm` and only compiles
//! for wasm32.

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod scene;

pub use config::{DemoConfig, DemoKind};
pub use error::{ConfigError, DemoError};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use crate::config::DemoConfig;
    use crate::error::{DemoError, Result};

    mod mesh;
    mod program;
    mod render;
    mod shaders;
    mod stages;
    mod texture;

    #[wasm_bindgen(start)]
    pub fn main() -> std::result::Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if let Err(e) = run() {
            log::error!("{e}");
            if let Some(window) = web_sys::window() {
                window.alert_with_message(&e.to_string()).ok();
            }
            return Err(JsValue::from_str(&e.to_string()));
        }
        Ok(())
    }

    fn run() -> Result<()> {
        let window = web_sys::window().ok_or(DemoError::MissingDom("window"))?;
        let search = window.location().search()?;
        let config = DemoConfig::from_query(&search);

        let level = config
            .as_ref()
            .map(|c| c.log_level)
            .unwrap_or(log::LevelFilter::Info);
        if let Some(level) = level.to_level() {
            console_log::init_with_level(level).ok();
        }
        let config = config?;
        log::debug!("{config:?}");

        let document = window.document().ok_or(DemoError::MissingDom("document"))?;
        let canvas = find_canvas(&document, &config.canvas_id)?;
        canvas.style().set_property("display", "block")?;

        render::start(canvas, &config)
    }

    /// Looks up the demo's canvas by DOM id.
    pub fn find_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| DemoError::CanvasNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DemoError::CanvasNotFound(id.to_string()))
    }
}
