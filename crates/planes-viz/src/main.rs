use log::{error, info};
use macroquad::prelude::*;
use planes_viz::{draw_axes, draw_scene, to_vec3, OrbitCamera, PlaneControls, Scene, SceneConfig};

/// Loads the scene named on the command line, or the reference scene.
fn load_config() -> SceneConfig {
    let Some(path) = std::env::args().nth(1) else {
        info!("no scene file given, showing the reference scene");
        return SceneConfig::default();
    };

    match SceneConfig::load(&path) {
        Ok(config) => {
            info!("loaded scene {}", path);
            config
        }
        Err(err) => {
            error!("{err:#}; falling back to the reference scene");
            SceneConfig::default()
        }
    }
}

#[macroquad::main("Intersecting Planes")]
async fn main() {
    env_logger::init();

    let config = load_config();
    let mut scene = match Scene::from_config(&config) {
        Ok(scene) => scene,
        Err(err) => {
            error!("{err:#}");
            return;
        }
    };

    let mut camera = OrbitCamera::new(config.camera, to_vec3(&scene.focus()));
    let mut controls = PlaneControls::new();
    let mut intersection = scene.intersect();

    loop {
        camera.update();
        if controls.update(&mut scene) {
            intersection = scene.intersect();
        }

        clear_background(Color::from_rgba(15, 15, 25, 255));
        set_camera(&camera.to_camera3d());

        draw_axes(0.1);
        draw_scene(&scene, &intersection);

        set_default_camera();

        draw_text("Intersecting Planes", 10.0, 25.0, 20.0, WHITE);
        draw_text(
            &format!("Line anchor: {:?}", scene.anchor()),
            10.0,
            45.0,
            18.0,
            GRAY,
        );

        controls.draw_ui(&scene, &intersection, 70.0);

        draw_text("Drag mouse to orbit, scroll to zoom, [C] recenter", 10.0, 155.0, 16.0, DARKGRAY);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 175.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
