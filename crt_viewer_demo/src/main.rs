//! Headless demo: a small room with a CRT television
//!
//! Runs the viewer against the headless device with a scripted walk, so
//! the full tick pipeline (navigation, shake, recursion chain, delay
//! compositor) can be observed from the log output without a GPU.

use std::sync::{Arc, Mutex};

use crt_viewer::crt::render::{HeadlessDevice, Texture};
use crt_viewer::crt::scene::{RenderDestination, Scene, ScreenBinding};
use crt_viewer::crt::{CrtViewer, ViewerConfig};
use crt_viewer::glam::Vec3;
use crt_viewer::input::ControlState;
use crt_viewer::navigate::{Aabb, Collider, Quad};
use crt_viewer::viewer_info;

/// A rectangular room with a TV cabinet against the north wall
///
/// Rendering is a no-op under the headless device; the scene still tracks
/// the installed screen texture and exposes the room's collision geometry.
struct DemoRoomScene {
    colliders: Vec<Collider>,
    // holds the installed frame so it stays alive between ticks
    #[allow(dead_code)]
    screen_texture: Option<Arc<dyn Texture>>,
    renders: u64,
}

impl DemoRoomScene {
    fn new() -> Self {
        // 12 x 12 room centered on the origin, TV cabinet at z = -5
        let wall_thickness = 0.2;
        let half = 6.0;
        let height = 3.0;
        let colliders = vec![
            // north / south walls
            Collider::Box(Aabb::new(
                Vec3::new(-half, 0.0, -half - wall_thickness),
                Vec3::new(half, height, -half),
            )),
            Collider::Box(Aabb::new(
                Vec3::new(-half, 0.0, half),
                Vec3::new(half, height, half + wall_thickness),
            )),
            // east / west walls
            Collider::Box(Aabb::new(
                Vec3::new(half, 0.0, -half),
                Vec3::new(half + wall_thickness, height, half),
            )),
            Collider::Box(Aabb::new(
                Vec3::new(-half - wall_thickness, 0.0, -half),
                Vec3::new(-half, height, half),
            )),
            // TV cabinet
            Collider::Box(Aabb::new(
                Vec3::new(-1.0, 0.0, -5.8),
                Vec3::new(1.0, 1.2, -4.8),
            )),
            // the screen glass itself
            Collider::Quad(Quad::new(
                Vec3::new(0.0, 1.7, -4.8),
                Vec3::X * 0.8,
                Vec3::Y * 0.6,
            )),
        ];
        Self {
            colliders,
            screen_texture: None,
            renders: 0,
        }
    }
}

impl Scene for DemoRoomScene {
    fn render(
        &mut self,
        _camera: &crt_viewer::crt::camera::Camera,
        _screen: ScreenBinding<'_>,
        _destination: RenderDestination<'_>,
    ) -> crt_viewer::crt::Result<()> {
        self.renders += 1;
        Ok(())
    }

    fn set_screen_texture(&mut self, texture: Arc<dyn Texture>) {
        self.screen_texture = Some(texture);
    }

    fn colliders(&self) -> &[Collider] {
        &self.colliders
    }
}

/// Scripted input: look around, walk toward the TV, zoom in on the screen
fn scripted_control(tick: u64) -> ControlState {
    match tick {
        0..=59 => ControlState {
            look_delta_x: 4.0,
            ..ControlState::default()
        },
        60..=179 => ControlState {
            look_delta_x: -2.0,
            move_forward: 100.0,
            ..ControlState::default()
        },
        180..=239 => ControlState {
            zoom_delta: -1.0,
            ..ControlState::default()
        },
        _ => ControlState::idle(),
    }
}

fn main() {
    let device = Arc::new(Mutex::new(HeadlessDevice::new()));
    let scene = Box::new(DemoRoomScene::new());

    let mut viewer = match CrtViewer::new(device, scene, ViewerConfig::default()) {
        Ok(viewer) => viewer,
        Err(err) => {
            eprintln!("failed to start viewer: {}", err);
            std::process::exit(1);
        }
    };
    viewer.resize(1280, 960);

    let dt = 1.0 / 60.0;
    let total_ticks = 300;
    for tick in 0..total_ticks {
        if !viewer.tick_guarded(&scripted_control(tick), dt) {
            break;
        }
        if (tick + 1) % 60 == 0 {
            let stats = viewer.stats();
            let pose = viewer.pose();
            viewer_info!(
                "demo",
                "tick {}: pos ({:.2}, {:.2}, {:.2}) yaw {:.3} fov {:.1} | {} captures, {} queued, warmed up: {}",
                tick + 1,
                pose.position.x,
                pose.position.y,
                pose.position.z,
                pose.yaw,
                pose.fov,
                stats.captures,
                stats.queued_frames,
                stats.warmed_up
            );
        }
    }

    let stats = viewer.stats();
    viewer_info!(
        "demo",
        "done: {} ticks, {} captures, {} evictions, {} targets allocated",
        stats.ticks,
        stats.captures,
        stats.evictions,
        stats.targets_allocated
    );
    viewer.shutdown();
}
