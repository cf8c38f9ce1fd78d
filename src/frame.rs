use crate::core::{AnimatorEvent, Configurator, LoopToken, TransformRaw, TransitionKind};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<RefCell<Configurator>>,
    pub epoch: Instant,
    /// Called as `on_frame(transforms: Float32Array, events: string[], animating: bool)`.
    pub on_frame: js_sys::Function,
    pub token: LoopToken,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.epoch.elapsed().as_secs_f64();
        let (raw, events, animating) = {
            let mut app = self.app.borrow_mut();
            let events = app.advance(now);
            (app.raw_transforms(), events, app.is_animating())
        };

        let floats: &[f32] = bytemuck::cast_slice(&raw[..]);
        let transforms = js_sys::Float32Array::from(floats);
        let names = js_sys::Array::new();
        for ev in &events {
            names.push(&JsValue::from_str(&event_name(ev)));
        }
        if let Err(e) = self.on_frame.call3(
            &JsValue::NULL,
            &transforms,
            &names,
            &JsValue::from_bool(animating),
        ) {
            log::error!("[frame] on_frame callback failed: {:?}", e);
        }
    }
}

fn event_name(ev: &AnimatorEvent) -> String {
    fn kind(k: TransitionKind) -> &'static str {
        match k {
            TransitionKind::Assemble => "assemble",
            TransitionKind::ToFront => "to-front",
            TransitionKind::FromFront => "from-front",
        }
    }
    match ev {
        AnimatorEvent::Assembled => "assembled".to_string(),
        AnimatorEvent::Finished { item, kind: k } => format!("finished:{}:{}", kind(*k), item),
        AnimatorEvent::Superseded { item, kind: k } => format!("superseded:{}:{}", kind(*k), item),
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until its token dies.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().token.is_live() {
            // Break the closure's self-reference so it and the context are freed
            // once this call returns.
            drop(tick_clone.borrow_mut().take());
            log::debug!("[frame] loop stopped");
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
