use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL};

use super::stages;
use crate::config::DemoConfig;
use crate::error::{DemoError, Result};

/// Sets up the context and the demo's stage, then starts the render loop.
pub fn start(canvas: HtmlCanvasElement, config: &DemoConfig) -> Result<()> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or(DemoError::NoContext)?
        .dyn_into()
        .map_err(|_| DemoError::NoContext)?;

    match config.demo.fixed_size() {
        Some((w, h)) => {
            canvas.set_width(w);
            canvas.set_height(h);
        }
        None => fit_to_window(&canvas)?,
    }

    let mut stage = stages::build(&gl, config)?;

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        stage.frame(&gl, now_ms, w, h);

        // schedule next
        if let Err(e) = request_frame(f.borrow().as_ref()) {
            log::error!("render loop stopped: {e}");
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(g.borrow().as_ref())
}

fn request_frame(callback: Option<&Closure<dyn FnMut(f64)>>) -> Result<()> {
    let window = window().ok_or(DemoError::MissingDom("window"))?;
    let callback = callback.ok_or(DemoError::Js("frame callback dropped".into()))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

fn window_size() -> Option<(u32, u32)> {
    let window = window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w as u32, h as u32))
}

/// Resize canvas to fit window, now and on every `resize` event.
fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<()> {
    let resize = {
        let canvas = canvas.clone();
        move || {
            let ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
            if let Some((w, h)) = window_size() {
                canvas.set_width((w as f64 * ratio) as u32);
                canvas.set_height((h as f64 * ratio) as u32);
                let style = canvas.style();
                let sized = style
                    .set_property("width", &format!("{w}px"))
                    .and_then(|_| style.set_property("height", &format!("{h}px")));
                if sized.is_err() {
                    log::warn!("could not set canvas css size");
                }
            }
        }
    };
    resize();

    let resize_closure = Closure::wrap(Box::new(resize) as Box<dyn FnMut()>);
    window()
        .ok_or(DemoError::MissingDom("window"))?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();
    Ok(())
}
