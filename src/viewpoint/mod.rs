//! Saved camera viewpoints.
//!
//! A [`ViewpointStore`] is one camera pose; a [`ViewpointList`] is the
//! ordered, navigable collection the user builds up while exploring.

/// Ordered viewpoint list with wraparound navigation and TOML persistence.
pub mod list;
/// Camera pose snapshot and its interpolation.
pub mod store;

pub use list::ViewpointList;
pub use store::ViewpointStore;
