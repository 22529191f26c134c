//! Headless camera collaborators.
//!
//! Provides a camera snapshot type with pick rays, an orbit camera carrier
//! with pan, rotate, dolly and magnify, and a ground-plane scene selector.

/// Orbit camera carrier over a Z-up terrain.
pub mod controller;
/// Camera snapshot and ray types.
pub mod core;
/// Flat ground-plane scene selector.
pub mod ground;

pub use controller::OrbitCarrier;
pub use ground::GroundPlane;
