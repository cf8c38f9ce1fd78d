#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod core;
mod frame;
mod handle;
mod input;

pub use handle::{SelectResult, WoodSphere};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wood-sphere starting");
    Ok(())
}
