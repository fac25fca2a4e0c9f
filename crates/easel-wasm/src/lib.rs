//! Browser bridge for Easel — runs a game on an HTML `<canvas>`.
//!
//! Build the game crate with `wasm-pack build --target web` and call
//! [`start`] from its `#[wasm_bindgen(start)]` function.

mod canvas;
mod dom;

pub use canvas::{WebCanvas, WebImage};
pub use dom::{key_event, mouse_event};

use easel_runtime::{Drawable, GameConfig, Runtime};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// Set up the canvas with id `canvas_id` and run `game` on it.
///
/// Sizes the canvas from `config`, applies image smoothing and the one-shot
/// scale, then starts the frame loop and wires keyboard (window) and mouse
/// (canvas) input. Returns once everything is registered; the game keeps
/// running from browser callbacks.
pub fn start<D>(canvas_id: &str, config: GameConfig, game: D) -> Result<(), JsValue>
where
    D: Drawable<WebCanvas> + 'static,
{
    console_error_panic_hook_setup();
    config.validate().map_err(|e| JsValue::from_str(&e))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{canvas_id}`")))?
        .dyn_into()?;

    canvas.set_width(config.width);
    canvas.set_height(config.height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into()?;
    ctx.set_image_smoothing_enabled(config.interpolation);

    let runtime = Runtime::new(WebCanvas::new(ctx), game, config, js_sys::Date::now())
        .map_err(|e| JsValue::from_str(&e))?;
    let runtime = Rc::new(RefCell::new(runtime));

    dom::run_animation_loop(window.clone(), Rc::clone(&runtime))?;
    dom::listen_keys(&window, &runtime)?;
    dom::listen_mouse(&canvas, &runtime)?;

    log::info!("easel started on #{canvas_id}");
    Ok(())
}

/// Start loading the image at `src`.
///
/// Returns immediately; the image has zero size and draws nothing until the
/// browser finishes loading it. Cross-origin sources need CORS headers.
pub fn load_image(src: &str) -> Result<WebImage, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    Ok(WebImage::new(image))
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Easel WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// Validate a JSON game config. Returns JSON: `{"ok":true}` or
/// `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_config(json: &str) -> String {
    let result = match GameConfig::from_json(json) {
        Ok(_) => serde_json::json!({ "ok": true }),
        Err(e) => serde_json::json!({ "ok": false, "error": e }),
    };
    result.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validate_config_accepts_partial() {
        assert_eq!(validate_config(r#"{"fps": 60}"#), r#"{"ok":true}"#);
    }

    #[test]
    fn validate_config_reports_error() {
        let out: serde_json::Value =
            serde_json::from_str(&validate_config(r#"{"fps": -1}"#)).unwrap();
        assert_eq!(out["ok"], serde_json::Value::Bool(false));
        assert!(out["error"].as_str().unwrap().contains("fps"));
    }

    #[test]
    fn validate_config_escapes_parse_errors() {
        let out: serde_json::Value =
            serde_json::from_str(&validate_config("{\"background\": ")).unwrap();
        assert_eq!(out["ok"], serde_json::Value::Bool(false));
    }
}
