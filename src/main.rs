//! Headless fly-through demo.
//!
//! Usage: `vantage [OPTIONS.toml] [VIEWPOINTS.toml]`
//!
//! Drives an orbit camera over a flat ground plane, saves a few viewpoints,
//! then plays a fly-through between them and logs its progress. Set
//! `RUST_LOG=debug` to see every frame.

use std::path::Path;

use glam::{DVec2, DVec3};
use vantage::camera::{GroundPlane, OrbitCarrier};
use vantage::collaborators::SceneBounds;
use vantage::input::{DragButton, StepDirection};
use vantage::options::Options;
use vantage::util::{IntervalTimer, LogStatusSink};
use vantage::{VantageError, ViewpointController};
use web_time::{Duration, Instant};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 800;

type Demo =
    ViewpointController<OrbitCarrier, GroundPlane, IntervalTimer, LogStatusSink>;

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(options, std::env::args().nth(2)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(options: Options, save_to: Option<String>) -> Result<(), VantageError> {
    let bounds = SceneBounds {
        min: DVec3::new(-500.0, -500.0, 0.0),
        max: DVec3::new(500.0, 500.0, 120.0),
    };
    let mut controller = ViewpointController::new(
        OrbitCarrier::new(bounds, WIDTH, HEIGHT),
        GroundPlane::new(0.0),
        IntervalTimer::new(),
        LogStatusSink::new(),
        options,
    );

    capture_tour(&mut controller);
    if let Some(path) = save_to {
        controller.viewpoints().save(Path::new(&path))?;
    }

    let params = controller.fly_parameters().clone();
    controller.fly_viewpoints(params)?;
    let frames = controller.fly_sequence().map_or(0, <[_]>::len);
    log::info!("flying {frames} frames");
    controller.start_fly_through()?;

    while controller.is_flying() {
        std::thread::sleep(Duration::from_millis(2));
        controller.update(Instant::now());
        let lapped = controller
            .status()
            .last_status()
            .is_some_and(|s| s.frame + 1 == frames);
        if controller.fly_parameters().looping && lapped {
            controller.stop_fly_through();
        }
    }

    if let Some(status) = controller.status().last_status() {
        log::info!("done at {status}");
    }
    Ok(())
}

/// Move the camera around and save a viewpoint at each stop.
fn capture_tour(controller: &mut Demo) {
    let center = DVec2::new(f64::from(WIDTH / 2), f64::from(HEIGHT / 2));
    let now = Instant::now();

    controller.add_viewpoint(0, "overview");

    controller.pointer_pressed(center, now);
    for step in 1..=6 {
        let position = center + DVec2::new(f64::from(step) * 10.0, 0.0);
        controller.pointer_moved(position, Some(DragButton::Rotate), false, now);
    }
    controller.pointer_released(center + DVec2::new(60.0, 0.0), now);
    controller.add_viewpoint(1, "turned east");

    for _ in 0..15 {
        controller.step(StepDirection::Down);
    }
    controller.scroll(-4.0, false);
    controller.add_viewpoint(2, "close in");

    log::info!("saved {} viewpoints", controller.viewpoint_count());
}
