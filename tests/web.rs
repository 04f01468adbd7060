#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use webgl_demos::wasm::find_canvas;
use webgl_demos::{DemoConfig, DemoError, DemoKind};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn finds_the_demo_canvas() {
    let document = document();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id("glCanvas");
    document.body().unwrap().append_child(&canvas).unwrap();

    let config = DemoConfig::from_query("?demo=cube").unwrap();
    let found = find_canvas(&document, &config.canvas_id).expect("canvas element not found");
    assert_eq!(found.id(), "glCanvas");

    canvas.remove();
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    let config = DemoConfig::from_query("?demo=save-point&canvas=nowhere").unwrap();
    assert_eq!(config.demo, DemoKind::SavePoint);
    let err = find_canvas(&document(), &config.canvas_id).unwrap_err();
    assert!(matches!(err, DemoError::CanvasNotFound(id) if id == "nowhere"));
}
