use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS pixels relative to `el`'s top-left corner.
#[inline]
pub fn pointer_local_px(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// CSS size of `el`, never zero.
#[inline]
pub fn element_size(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new((rect.width() as f32).max(1.0), (rect.height() as f32).max(1.0))
}

/// Wheel delta normalized to pixels (line and page modes scaled).
#[inline]
pub fn wheel_delta_px(ev: &web::WheelEvent) -> f32 {
    let scale = match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => 16.0,
        web::WheelEvent::DOM_DELTA_PAGE => 800.0,
        _ => 1.0,
    };
    (ev.delta_y() * scale) as f32
}
