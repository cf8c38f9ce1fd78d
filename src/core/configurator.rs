use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

use super::animator::{Animator, AnimatorEvent, ItemState};
use super::camera::OrbitCamera;
use super::catalog::{Catalog, CatalogItem};
use super::config::SceneConfig;
use super::error::{ConfiguratorError, Result};
use super::gesture::{Gesture, PointerTracker};
use super::layout::{checked_sphere_layout, SpherePoint};
use super::picking::pick_nearest;
use super::selection::SelectionState;
use super::transform::TransformRaw;

/// Result of asking for an item to come to the front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Started,
    /// Another item holds the front slot; nothing changed.
    Busy { active: usize },
}

/// Outcome of releasing the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRelease {
    /// No press was in progress.
    Ignored,
    /// The press orbited the camera.
    Orbited,
    /// A click that hit no card.
    Missed,
    Selected { item: usize, outcome: SelectOutcome },
}

/// Everything the UI shell needs: catalog, sphere layout, animator, camera
/// and selection, driven by discrete input events and a per-frame `advance`.
pub struct Configurator {
    config: SceneConfig,
    catalog: Catalog,
    layout: Vec<SpherePoint>,
    animator: Animator,
    camera: OrbitCamera,
    selection: SelectionState,
    pointer: PointerTracker,
    hovered: Option<usize>,
    viewport: Vec2,
    rng: StdRng,
}

impl Configurator {
    /// Lay out `catalog`, scatter it and start assembling the sphere at `now`.
    pub fn new(catalog: Catalog, config: SceneConfig, now: f64) -> Result<Self> {
        config.validate()?;
        let layout = match checked_sphere_layout(catalog.len(), config.radius) {
            Ok(points) => points,
            Err(e) => {
                log::warn!("[configurator] {}; showing an empty scene", e);
                Vec::new()
            }
        };
        let targets = layout.iter().map(SpherePoint::transform).collect();
        let animator = Animator::new(targets, config.timings());
        let rng = match config.scatter_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut configurator = Self {
            camera: OrbitCamera::new(config.camera),
            pointer: PointerTracker::new(config.drag_threshold_px),
            catalog,
            layout,
            animator,
            selection: SelectionState::default(),
            hovered: None,
            viewport: Vec2::new(1.0, 1.0),
            rng,
            config,
        };
        configurator.scatter_and_assemble(now);
        log::info!(
            "[configurator] {} items on a sphere of radius {}",
            configurator.catalog.len(),
            configurator.config.radius
        );
        Ok(configurator)
    }

    /// Throw the catalog back out and reassemble it. Closes any detail view.
    pub fn reset(&mut self, now: f64) {
        self.selection.close_inspection();
        self.scatter_and_assemble(now);
    }

    fn scatter_and_assemble(&mut self, now: f64) {
        self.animator.scatter(&mut self.rng, self.config.scatter_extent);
        self.animator.begin_assembly(now);
    }

    // ---------------- Read side ----------------

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn layout(&self) -> &[SpherePoint] {
        &self.layout
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn items(&self) -> &[ItemState] {
        self.animator.items()
    }

    pub fn raw_transforms(&self) -> Vec<TransformRaw> {
        self.animator.raw_transforms()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn front_item(&self) -> Option<usize> {
        self.animator.front_item()
    }

    /// Image currently shown for the inspected item.
    pub fn current_image(&self) -> Option<&str> {
        let item = self.inspected_item()?;
        Some(item.gallery_image(self.selection.gallery_index))
    }

    fn inspected_item(&self) -> Option<&CatalogItem> {
        let id = self.selection.inspected.as_deref()?;
        self.catalog.by_id(id).ok()
    }

    // ---------------- Requests ----------------

    /// Bring item `index` to the camera-front pose for inspection.
    pub fn select(&mut self, index: usize, now: f64) -> Result<SelectOutcome> {
        let id = self
            .catalog
            .get(index)
            .map(|item| item.id.clone())
            .ok_or(ConfiguratorError::UnknownItemIndex {
                index,
                count: self.catalog.len(),
            })?;
        let pose = self
            .camera
            .front_pose(self.config.front_distance, self.config.front_scale);
        match self.animator.begin_front(index, pose, now) {
            Ok(()) => {
                self.selection.inspect(&id);
                log::debug!("[configurator] inspecting '{}'", id);
                Ok(SelectOutcome::Started)
            }
            Err(ConfiguratorError::TransitionBusy { active, .. }) => {
                Ok(SelectOutcome::Busy { active })
            }
            Err(e) => Err(e),
        }
    }

    pub fn select_id(&mut self, id: &str, now: f64) -> Result<SelectOutcome> {
        let index = self.catalog.index_of(id)?;
        self.select(index, now)
    }

    /// Close the detail view, sending the front item home.
    pub fn dismiss(&mut self, now: f64) -> Option<usize> {
        self.request_reverse(now)
    }

    /// Record `id` as the final choice and close the detail view.
    pub fn confirm(&mut self, id: &str, now: f64) -> Result<Option<usize>> {
        let item = self.catalog.by_id(id)?;
        log::info!("[configurator] confirmed '{}' ({})", item.id, item.name);
        self.selection.confirm(id);
        Ok(self.request_reverse(now))
    }

    /// Single exit from the detail view shared by dismiss and confirm.
    fn request_reverse(&mut self, now: f64) -> Option<usize> {
        self.selection.close_inspection();
        self.animator.begin_reverse(now)
    }

    pub fn next_image(&mut self) {
        self.step_gallery(1);
    }

    pub fn prev_image(&mut self) {
        self.step_gallery(-1);
    }

    pub fn show_image(&mut self, index: usize) {
        if let Some(len) = self.inspected_item().map(CatalogItem::gallery_len) {
            if index < len {
                self.selection.gallery_index = index;
            }
        }
    }

    fn step_gallery(&mut self, step: isize) {
        if let Some(len) = self.inspected_item().map(CatalogItem::gallery_len) {
            self.selection.step_gallery(step, len);
        }
    }

    // ---------------- Pointer & viewport ----------------

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Visible card under viewport pixel `px` (origin top-left).
    pub fn pick(&self, px: Vec2) -> Option<usize> {
        let ndc = Vec2::new(
            2.0 * px.x / self.viewport.x - 1.0,
            1.0 - 2.0 * px.y / self.viewport.y,
        );
        let aspect = self.viewport.x / self.viewport.y;
        let ray = self.camera.ray_from_ndc(ndc, aspect);
        let half = Vec2::new(self.config.card_width, self.config.card_height) * 0.5;
        let candidates = self
            .animator
            .items()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.visible)
            .map(|(i, s)| (i, &s.transform));
        pick_nearest(&ray, candidates, half)
    }

    pub fn pointer_down(&mut self, px: Vec2) {
        self.pointer.press(px);
    }

    pub fn pointer_move(&mut self, px: Vec2) {
        match self.pointer.move_to(px) {
            Some(delta) => self.camera.rotate_by_pixels(delta, self.viewport.y),
            None if !self.pointer.is_down() => self.hovered = self.pick(px),
            None => {}
        }
    }

    pub fn pointer_up(&mut self, px: Vec2, now: f64) -> Result<PointerRelease> {
        match self.pointer.release(px) {
            None => Ok(PointerRelease::Ignored),
            Some(Gesture::DragEnd) => Ok(PointerRelease::Orbited),
            Some(Gesture::Click(at)) => match self.pick(at) {
                None => Ok(PointerRelease::Missed),
                Some(item) => {
                    let outcome = self.select(item, now)?;
                    Ok(PointerRelease::Selected { item, outcome })
                }
            },
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer.cancel();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.camera.zoom_by_wheel(delta_y);
    }

    // ---------------- Frame ----------------

    /// Step camera damping and every transition to `now`.
    pub fn advance(&mut self, now: f64) -> SmallVec<[AnimatorEvent; 4]> {
        self.camera.update();
        let mut events: SmallVec<[AnimatorEvent; 4]> = SmallVec::new();
        self.animator.advance(now, &mut events);
        events
    }
}
