//! Saved viewpoint list operations.

use super::ViewpointController;
use crate::collaborators::{
    CameraCarrier, PlaybackTimer, SceneSelector, StatusSink,
};
use crate::viewpoint::{ViewpointList, ViewpointStore};

impl<C, S, T, K> ViewpointController<C, S, T, K>
where
    C: CameraCarrier,
    S: SceneSelector,
    T: PlaybackTimer,
    K: StatusSink,
{
    /// Capture the current camera pose as `name` and insert it at `index`
    /// (clamped to the list length). A fly-through planned from the list
    /// is dropped.
    pub fn add_viewpoint(&mut self, index: usize, name: &str) {
        let viewpoint = self.carrier.capture_viewpoint(name);
        self.viewpoints.insert(index, viewpoint);
        self.invalidate_viewpoint_plan();
    }

    /// Remove the first viewpoint equal to `viewpoint`. A fly-through
    /// planned from the list is dropped when something was removed.
    pub fn remove_viewpoint(
        &mut self,
        viewpoint: &ViewpointStore,
    ) -> Option<ViewpointStore> {
        let removed = self.viewpoints.remove(viewpoint)?;
        self.invalidate_viewpoint_plan();
        Some(removed)
    }

    /// Step back through the list and move the camera there. Returns
    /// whether the camera moved.
    pub fn previous_viewpoint(&mut self) -> bool {
        match self.viewpoints.select_previous() {
            Some(viewpoint) => {
                self.carrier.apply_viewpoint(viewpoint, true, true);
                true
            }
            None => false,
        }
    }

    /// Step forward through the list and move the camera there. Returns
    /// whether the camera moved.
    pub fn next_viewpoint(&mut self) -> bool {
        match self.viewpoints.select_next() {
            Some(viewpoint) => {
                self.carrier.apply_viewpoint(viewpoint, true, true);
                true
            }
            None => false,
        }
    }

    /// Move the camera to the first saved viewpoint equal to `viewpoint`.
    /// Returns whether one was found.
    pub fn goto_viewpoint(&mut self, viewpoint: &ViewpointStore) -> bool {
        match self.viewpoints.select(viewpoint) {
            Some(found) => {
                self.carrier.apply_viewpoint(found, true, true);
                true
            }
            None => false,
        }
    }

    /// Move the camera to the saved viewpoint at `index`. Returns whether
    /// the index was in range.
    pub fn goto_index(&mut self, index: usize) -> bool {
        match self.viewpoints.select_index(index) {
            Some(found) => {
                self.carrier.apply_viewpoint(found, true, true);
                true
            }
            None => false,
        }
    }

    /// The saved viewpoints.
    #[must_use]
    pub fn viewpoints(&self) -> &ViewpointList {
        &self.viewpoints
    }

    /// Replace the saved viewpoints. A fly-through planned from the old
    /// list is dropped.
    pub fn set_viewpoints(&mut self, viewpoints: ViewpointList) {
        log::debug!("viewpoint list replaced ({} entries)", viewpoints.len());
        self.viewpoints = viewpoints;
        self.invalidate_viewpoint_plan();
    }

    /// Number of saved viewpoints.
    #[must_use]
    pub fn viewpoint_count(&self) -> usize {
        self.viewpoints.len()
    }

    /// Index of the selected viewpoint.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.viewpoints.current_index()
    }
}
