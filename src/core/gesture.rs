use glam::Vec2;

/// What a completed press turned out to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Released without travelling past the drag threshold.
    Click(Vec2),
    /// Released after orbit-dragging.
    DragEnd,
}

/// Tells card clicks apart from click-drag orbiting.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    pub position: Vec2,
    pressed_at: Option<Vec2>,
    dragging: bool,
    threshold_px: f32,
}

impl PointerTracker {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px: threshold_px.max(0.0),
            ..Default::default()
        }
    }

    pub fn is_down(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, pos: Vec2) {
        self.position = pos;
        self.pressed_at = Some(pos);
        self.dragging = false;
    }

    /// Track a move. While pressed and past the threshold, returns the drag
    /// delta since the previous move.
    pub fn move_to(&mut self, pos: Vec2) -> Option<Vec2> {
        let delta = pos - self.position;
        self.position = pos;
        let origin = self.pressed_at?;
        if !self.dragging && origin.distance(pos) > self.threshold_px {
            self.dragging = true;
            // The first drag step covers the whole travel since the press.
            return Some(pos - origin);
        }
        self.dragging.then_some(delta)
    }

    /// Finish the press. `None` when there was no press to finish.
    pub fn release(&mut self, pos: Vec2) -> Option<Gesture> {
        self.position = pos;
        let origin = self.pressed_at.take()?;
        let dragged = std::mem::take(&mut self.dragging);
        let gesture = if dragged || origin.distance(pos) > self.threshold_px {
            Gesture::DragEnd
        } else {
            Gesture::Click(pos)
        };
        Some(gesture)
    }

    /// Forget any press in progress (e.g. pointer cancel).
    pub fn cancel(&mut self) {
        self.pressed_at = None;
        self.dragging = false;
    }
}
