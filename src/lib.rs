// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive camera and viewpoint control for 3D terrain viewers.
//!
//! Vantage turns raw pointer, wheel and keyboard input into camera motion
//! (pan with kinetic momentum, screen-plane translate, rotate, dolly,
//! magnify, look-at re-resolution), keeps an ordered list of saved
//! viewpoints, and plans and plays back fly-through animations between
//! them.
//!
//! # Key entry points
//!
//! - [`controller::ViewpointController`] - input state machine, viewpoint
//!   list navigation and fly-through playback
//! - [`viewpoint::ViewpointStore`] - a saved camera pose and its
//!   interpolation
//! - [`kinetic::KineticScroller`] - drag momentum with exponential decay
//! - [`fly`] - inbetween planning for fly-through sequences
//! - [`options::Options`] - runtime configuration (controller, kinetic,
//!   fly-through, key bindings)
//!
//! # Architecture
//!
//! The controller never talks to a rendering engine directly. Everything
//! it mutates or queries sits behind the traits in [`collaborators`]: the
//! camera carrier, the scene selector used for center picks, waypoint
//! paths, the playback timer and the status sink. The host drives the
//! controller from its event thread by forwarding input events and calling
//! [`ViewpointController::update`](controller::ViewpointController::update)
//! once per frame.
//!
//! [`camera`] and [`util`] provide headless reference collaborators (an
//! orbit camera, a ground-plane picker, an interval timer and a logging
//! status sink) so the controller can run without a renderer.

pub mod camera;
pub mod collaborators;
pub mod controller;
pub mod error;
pub mod fly;
pub mod input;
pub mod kinetic;
pub mod options;
pub mod util;
pub mod viewpoint;

pub use controller::ViewpointController;
pub use error::VantageError;
pub use viewpoint::{ViewpointList, ViewpointStore};
