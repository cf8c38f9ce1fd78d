use serde::Serialize;

/// Which items the shell is highlighting, inspecting and has confirmed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Highlighted card (the confirmed one once a choice is made).
    pub selected: Option<String>,
    /// Item open in the detail view.
    pub inspected: Option<String>,
    pub confirmed: Option<String>,
    /// Image shown in the detail gallery.
    pub gallery_index: usize,
}

impl SelectionState {
    pub fn inspect(&mut self, id: &str) {
        self.inspected = Some(id.to_string());
        self.gallery_index = 0;
    }

    pub fn close_inspection(&mut self) -> Option<String> {
        self.gallery_index = 0;
        self.inspected.take()
    }

    pub fn confirm(&mut self, id: &str) {
        self.confirmed = Some(id.to_string());
        self.selected = Some(id.to_string());
    }

    pub fn is_confirmed(&self, id: &str) -> bool {
        self.confirmed.as_deref() == Some(id)
    }

    /// Step the gallery by `step` images, wrapping within `len`.
    pub fn step_gallery(&mut self, step: isize, len: usize) {
        if len == 0 {
            self.gallery_index = 0;
            return;
        }
        let len = len as isize;
        self.gallery_index = (self.gallery_index as isize + step).rem_euclid(len) as usize;
    }
}
