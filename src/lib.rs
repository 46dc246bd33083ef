#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// The engine core is target-independent so host-side `cargo test` can drive
// it deterministically; everything that touches the DOM lives in `wasm` and
// only compiles for wasm32.

pub mod engine;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let base = document
            .get_element_by_id("bg-canvas")
            .ok_or("base canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let overlay = document
            .get_element_by_id("overlay-canvas")
            .ok_or("overlay canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        render::start(base, overlay)?;
        Ok(())
    }
}
