//! Ordered viewpoint list with a wraparound cursor.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::store::ViewpointStore;
use crate::error::VantageError;

/// Saved viewpoints in navigation order.
///
/// Insertion order defines both previous/next navigation and the default
/// fly-through sequence. The cursor is `None` (nothing selected) or a valid
/// index; every operation that shrinks the list re-resolves it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewpointList {
    viewpoints: Vec<ViewpointStore>,
    #[serde(skip)]
    current: Option<usize>,
}

impl ViewpointList {
    /// Empty list with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// List over existing viewpoints with no selection.
    #[must_use]
    pub fn from_viewpoints(viewpoints: Vec<ViewpointStore>) -> Self {
        Self {
            viewpoints,
            current: None,
        }
    }

    /// Number of viewpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.viewpoints.len()
    }

    /// Whether the list holds no viewpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewpoints.is_empty()
    }

    /// Viewpoints in navigation order.
    #[must_use]
    pub fn as_slice(&self) -> &[ViewpointStore] {
        &self.viewpoints
    }

    /// Iterate viewpoints in navigation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ViewpointStore> {
        self.viewpoints.iter()
    }

    /// Viewpoint at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ViewpointStore> {
        self.viewpoints.get(index)
    }

    /// Index of the selected viewpoint.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The selected viewpoint.
    #[must_use]
    pub fn current(&self) -> Option<&ViewpointStore> {
        self.current.and_then(|i| self.viewpoints.get(i))
    }

    /// Index of the first viewpoint equal to `viewpoint`.
    ///
    /// Matching is by value: two entries with the same name and pose are
    /// indistinguishable here. Use an index to address a specific one.
    #[must_use]
    pub fn position(&self, viewpoint: &ViewpointStore) -> Option<usize> {
        self.viewpoints.iter().position(|v| v == viewpoint)
    }

    /// Insert at `index`, clamped to the end of the list. The cursor keeps
    /// pointing at the viewpoint it selected.
    pub fn insert(&mut self, index: usize, viewpoint: ViewpointStore) {
        let index = index.min(self.viewpoints.len());
        log::debug!("viewpoint '{}' added at {index}", viewpoint.name());
        self.viewpoints.insert(index, viewpoint);
        if let Some(current) = self.current {
            if index <= current {
                self.current = Some(current + 1);
            }
        }
    }

    /// Remove the first viewpoint equal to `viewpoint`.
    ///
    /// The cursor moves to the entry before the removed one, wrapping to the
    /// last entry, or clears when the list empties. Removing a viewpoint that
    /// is not in the list changes nothing.
    pub fn remove(
        &mut self,
        viewpoint: &ViewpointStore,
    ) -> Option<ViewpointStore> {
        let index = self.position(viewpoint)?;
        let removed = self.viewpoints.remove(index);
        self.current = if self.viewpoints.is_empty() {
            None
        } else {
            Some(index.checked_sub(1).unwrap_or(self.viewpoints.len() - 1))
        };
        log::debug!(
            "viewpoint '{}' removed, cursor now {:?}",
            removed.name(),
            self.current
        );
        Some(removed)
    }

    /// Step the cursor back, wrapping from the first entry (or from no
    /// selection) to the last.
    pub fn select_previous(&mut self) -> Option<&ViewpointStore> {
        if self.viewpoints.is_empty() {
            return None;
        }
        let index = match self.current {
            Some(i) if i > 0 => i - 1,
            _ => self.viewpoints.len() - 1,
        };
        self.current = Some(index);
        self.viewpoints.get(index)
    }

    /// Step the cursor forward, wrapping from the last entry to the first.
    pub fn select_next(&mut self) -> Option<&ViewpointStore> {
        if self.viewpoints.is_empty() {
            return None;
        }
        let index = match self.current {
            Some(i) if i + 1 < self.viewpoints.len() => i + 1,
            _ => 0,
        };
        self.current = Some(index);
        self.viewpoints.get(index)
    }

    /// Move the cursor to the first entry equal to `viewpoint`. See
    /// [`position`](Self::position) for how entries are matched.
    pub fn select(
        &mut self,
        viewpoint: &ViewpointStore,
    ) -> Option<&ViewpointStore> {
        let index = self.position(viewpoint)?;
        self.select_index(index)
    }

    /// Move the cursor to `index`. Out of range changes nothing.
    pub fn select_index(&mut self, index: usize) -> Option<&ViewpointStore> {
        if index >= self.viewpoints.len() {
            return None;
        }
        self.current = Some(index);
        self.viewpoints.get(index)
    }

    /// Load a list from a TOML file. Every viewpoint is validated.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Io`] or [`VantageError::OptionsParse`] when
    /// the file cannot be read or parsed, and
    /// [`VantageError::InvalidViewpoint`] for an out-of-range entry.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        let list: Self = toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        for viewpoint in &list.viewpoints {
            viewpoint.validate()?;
        }
        Ok(list)
    }

    /// Save the list to a TOML file (pretty-printed). The cursor is not
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }
}

impl<'a> IntoIterator for &'a ViewpointList {
    type Item = &'a ViewpointStore;
    type IntoIter = std::slice::Iter<'a, ViewpointStore>;

    fn into_iter(self) -> Self::IntoIter {
        self.viewpoints.iter()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    fn viewpoint(name: &str, x: f64) -> ViewpointStore {
        ViewpointStore::new(
            name,
            DVec3::new(x, 0.0, 100.0),
            DVec3::NEG_Z,
            100.0,
            1.0,
        )
        .unwrap()
    }

    fn three() -> ViewpointList {
        ViewpointList::from_viewpoints(vec![
            viewpoint("v0", 0.0),
            viewpoint("v1", 1.0),
            viewpoint("v2", 2.0),
        ])
    }

    #[test]
    fn previous_from_no_selection_wraps_to_last() {
        let mut list = three();
        assert_eq!(list.current_index(), None);
        let selected = list.select_previous().unwrap();
        assert_eq!(selected.name(), "v2");
        assert_eq!(list.current_index(), Some(2));
    }

    #[test]
    fn next_wraps_to_first() {
        let mut list = three();
        assert_eq!(list.select_next().unwrap().name(), "v0");
        assert_eq!(list.select_next().unwrap().name(), "v1");
        assert_eq!(list.select_next().unwrap().name(), "v2");
        assert_eq!(list.select_next().unwrap().name(), "v0");
    }

    #[test]
    fn previous_wraps_from_first() {
        let mut list = three();
        let _ = list.select_next();
        assert_eq!(list.current_index(), Some(0));
        assert_eq!(list.select_previous().unwrap().name(), "v2");
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut list = ViewpointList::new();
        assert!(list.select_next().is_none());
        assert!(list.select_previous().is_none());
        assert_eq!(list.current_index(), None);
    }

    #[test]
    fn removing_last_remaining_clears_cursor() {
        let only = viewpoint("only", 0.0);
        let mut list = ViewpointList::from_viewpoints(vec![only.clone()]);
        let _ = list.select_next();
        assert!(list.remove(&only).is_some());
        assert!(list.is_empty());
        assert_eq!(list.current_index(), None);
    }

    #[test]
    fn removing_first_wraps_cursor_to_last() {
        let mut list = three();
        let first = list.select_next().unwrap().clone();
        let _ = list.remove(&first);
        assert_eq!(list.len(), 2);
        assert_eq!(list.current_index(), Some(1));
    }

    #[test]
    fn removing_middle_moves_cursor_back() {
        let mut list = three();
        let middle = list.get(1).unwrap().clone();
        let _ = list.remove(&middle);
        assert_eq!(list.current_index(), Some(0));
    }

    #[test]
    fn removing_absent_viewpoint_changes_nothing() {
        let mut list = three();
        let _ = list.select_next();
        assert!(list.remove(&viewpoint("stranger", 9.0)).is_none());
        assert_eq!(list.len(), 3);
        assert_eq!(list.current_index(), Some(0));
    }

    #[test]
    fn insert_clamps_past_end() {
        let mut list = three();
        list.insert(99, viewpoint("tail", 3.0));
        assert_eq!(list.get(3).unwrap().name(), "tail");
        list.insert(0, viewpoint("head", -1.0));
        assert_eq!(list.get(0).unwrap().name(), "head");
    }

    #[test]
    fn insert_before_cursor_keeps_selection() {
        let mut list = three();
        assert_eq!(list.select_index(1).unwrap().name(), "v1");
        list.insert(0, viewpoint("head", -1.0));
        assert_eq!(list.current_index(), Some(2));
        assert_eq!(list.current().unwrap().name(), "v1");

        list.insert(2, viewpoint("before", 0.5));
        assert_eq!(list.current().unwrap().name(), "v1");
        list.insert(99, viewpoint("tail", 3.0));
        assert_eq!(list.current().unwrap().name(), "v1");
    }

    #[test]
    fn select_index_tells_equal_entries_apart() {
        let twin = viewpoint("twin", 4.0);
        let mut list =
            ViewpointList::from_viewpoints(vec![twin.clone(), twin.clone()]);
        assert_eq!(list.select(&twin), Some(&twin));
        assert_eq!(list.current_index(), Some(0));
        assert_eq!(list.select_index(1), Some(&twin));
        assert_eq!(list.current_index(), Some(1));
        assert!(list.select_index(2).is_none());
        assert_eq!(list.current_index(), Some(1));
    }

    #[test]
    fn select_finds_by_value() {
        let mut list = three();
        let target = viewpoint("v1", 1.0);
        assert_eq!(list.select(&target).unwrap().name(), "v1");
        assert_eq!(list.current_index(), Some(1));
        assert!(list.select(&viewpoint("nope", 5.0)).is_none());
        assert_eq!(list.current_index(), Some(1));
    }

    #[test]
    fn toml_round_trip_drops_cursor() {
        let mut list = three();
        let _ = list.select_next();
        let toml_str = toml::to_string_pretty(&list).unwrap();
        let parsed: ViewpointList = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.as_slice(), list.as_slice());
        assert_eq!(parsed.current_index(), None);
    }

    #[test]
    fn save_and_load_file() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-list-{}", std::process::id()));
        let path = dir.join("viewpoints.toml");
        let list = three();
        list.save(&path).unwrap();
        let loaded = ViewpointList::load(&path).unwrap();
        assert_eq!(loaded.as_slice(), list.as_slice());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_invalid_viewpoint() {
        let toml_str = r#"
[[viewpoints]]
name = "bad"
location = [0.0, 0.0, 10.0]
direction = [0.0, 0.0, -1.0]
distance = -4.0
magnification = 1.0
"#;
        let dir = std::env::temp_dir()
            .join(format!("vantage-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, toml_str).unwrap();
        assert!(matches!(
            ViewpointList::load(&path),
            Err(VantageError::InvalidViewpoint(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
