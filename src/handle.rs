use crate::core::{
    wood_catalog, Catalog, CatalogItem, Configurator, LoopSwitch, PointerRelease, SceneConfig,
    SelectOutcome,
};
use crate::frame::{self, FrameContext};
use crate::input;
use anyhow::Context;
use instant::Instant;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Options accepted by the `WoodSphere` constructor; both keys are optional.
#[derive(Default, Deserialize)]
#[serde(default)]
struct Options {
    config: SceneConfig,
    catalog: Option<Vec<CatalogItem>>,
}

/// What an input event did, as seen from JavaScript.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectResult {
    Started,
    Busy,
    Missed,
    Orbited,
    Ignored,
}

impl From<SelectOutcome> for SelectResult {
    fn from(outcome: SelectOutcome) -> Self {
        match outcome {
            SelectOutcome::Started => SelectResult::Started,
            SelectOutcome::Busy { .. } => SelectResult::Busy,
        }
    }
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&format!("{e:#}"))
}

fn build(options: JsValue) -> anyhow::Result<Configurator> {
    let options: Options = if options.is_undefined() || options.is_null() {
        Options::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("decoding options")?
    };
    let catalog = match options.catalog {
        Some(items) => Catalog::new(items).context("building catalog")?,
        None => wood_catalog(),
    };
    Configurator::new(catalog, options.config, 0.0).context("starting configurator")
}

/// Browser handle over the configurator core. The host renders the packed
/// transforms handed to its frame callback.
#[wasm_bindgen]
pub struct WoodSphere {
    app: Rc<RefCell<Configurator>>,
    epoch: Instant,
    frame_loop: RefCell<LoopSwitch>,
}

impl WoodSphere {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn sync_viewport(&self, el: &web::Element) {
        let size = input::element_size(el);
        self.app.borrow_mut().resize(size.x, size.y);
    }
}

impl Drop for WoodSphere {
    fn drop(&mut self) {
        self.frame_loop.get_mut().stop();
    }
}

#[wasm_bindgen]
impl WoodSphere {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WoodSphere, JsError> {
        // The configurator's clock starts at zero on this epoch.
        let epoch = Instant::now();
        let app = build(options).map_err(js_err)?;
        Ok(WoodSphere {
            app: Rc::new(RefCell::new(app)),
            epoch,
            frame_loop: RefCell::new(LoopSwitch::default()),
        })
    }

    /// Start the `requestAnimationFrame` loop, calling
    /// `on_frame(transforms, events, animating)` after every step.
    pub fn start(&self, on_frame: js_sys::Function) {
        let Some(token) = self.frame_loop.borrow_mut().start() else {
            log::warn!("[frame] loop already running");
            return;
        };
        let ctx = Rc::new(RefCell::new(FrameContext {
            app: self.app.clone(),
            epoch: self.epoch,
            on_frame,
            token,
        }));
        frame::start_loop(ctx);
    }

    pub fn stop(&self) {
        self.frame_loop.borrow_mut().stop();
    }

    /// Eight floats per item: position xyz, rotation xyz, scale, visible.
    pub fn transforms(&self) -> js_sys::Float32Array {
        let raw = self.app.borrow().raw_transforms();
        js_sys::Float32Array::from(bytemuck::cast_slice::<_, f32>(&raw[..]))
    }

    #[wasm_bindgen(getter)]
    pub fn item_count(&self) -> u32 {
        self.app.borrow().catalog().len() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool {
        self.app.borrow().is_animating()
    }

    #[wasm_bindgen(getter)]
    pub fn front_item(&self) -> Option<u32> {
        self.app.borrow().front_item().map(|i| i as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn hovered(&self) -> Option<u32> {
        self.app.borrow().hovered().map(|i| i as u32)
    }

    pub fn catalog(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.app.borrow().catalog().items()).map_err(js_err)
    }

    pub fn selection(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.app.borrow().selection()).map_err(js_err)
    }

    pub fn select(&self, index: u32) -> Result<SelectResult, JsError> {
        let now = self.now();
        let outcome = self
            .app
            .borrow_mut()
            .select(index as usize, now)
            .map_err(js_err)?;
        Ok(outcome.into())
    }

    pub fn select_id(&self, id: &str) -> Result<SelectResult, JsError> {
        let now = self.now();
        let outcome = self.app.borrow_mut().select_id(id, now).map_err(js_err)?;
        Ok(outcome.into())
    }

    /// Close the detail view; returns the item sent back, if any.
    pub fn dismiss(&self) -> Option<u32> {
        let now = self.now();
        self.app.borrow_mut().dismiss(now).map(|i| i as u32)
    }

    pub fn confirm(&self, id: &str) -> Result<Option<u32>, JsError> {
        let now = self.now();
        let reversed = self.app.borrow_mut().confirm(id, now).map_err(js_err)?;
        Ok(reversed.map(|i| i as u32))
    }

    pub fn reset(&self) {
        let now = self.now();
        self.app.borrow_mut().reset(now);
    }

    pub fn next_image(&self) {
        self.app.borrow_mut().next_image();
    }

    pub fn prev_image(&self) {
        self.app.borrow_mut().prev_image();
    }

    pub fn show_image(&self, index: u32) {
        self.app.borrow_mut().show_image(index as usize);
    }

    pub fn current_image(&self) -> Option<String> {
        self.app.borrow().current_image().map(str::to_string)
    }

    /// Match the picking viewport to `el`'s CSS size.
    pub fn resize(&self, el: web::Element) {
        self.sync_viewport(&el);
    }

    pub fn pointer_down(&self, ev: web::PointerEvent, el: web::Element) {
        self.sync_viewport(&el);
        self.app
            .borrow_mut()
            .pointer_down(input::pointer_local_px(&ev, &el));
    }

    /// Hover picking uses `el`'s current size, so `resize` is optional.
    pub fn pointer_move(&self, ev: web::PointerEvent, el: web::Element) {
        self.sync_viewport(&el);
        self.app
            .borrow_mut()
            .pointer_move(input::pointer_local_px(&ev, &el));
    }

    pub fn pointer_up(&self, ev: web::PointerEvent, el: web::Element) -> Result<SelectResult, JsError> {
        let now = self.now();
        let px = input::pointer_local_px(&ev, &el);
        let release = self.app.borrow_mut().pointer_up(px, now).map_err(js_err)?;
        Ok(match release {
            PointerRelease::Ignored => SelectResult::Ignored,
            PointerRelease::Orbited => SelectResult::Orbited,
            PointerRelease::Missed => SelectResult::Missed,
            PointerRelease::Selected { item, outcome } => {
                log::info!("[click] item {} -> {:?}", item, outcome);
                outcome.into()
            }
        })
    }

    pub fn pointer_cancel(&self) {
        self.app.borrow_mut().pointer_cancel();
    }

    pub fn wheel(&self, ev: web::WheelEvent) {
        self.app.borrow_mut().wheel(input::wheel_delta_px(&ev));
        ev.prevent_default();
    }
}
