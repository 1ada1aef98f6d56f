use bodymark_base::{Vec2, init_file_logger, init_stdout_logger, log};
use bodymark_infer::{ModelSource, PoseExtractor, YoloPoseModel};
use bodymark_overlay::{Canvas, OverlayRenderer};
use bodymark_pipeline::Pipeline;
use bodymark_video::{CaptureSource, DeviceOrientation, SharedOrientation, V4l2Device};
use camera_markers::Settings;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

// simulated device posture, since a desktop webcam has no motion sensor
const ORIENTATION_KEYS: [(Key, DeviceOrientation); 4] = [
    (Key::Key1, DeviceOrientation::Portrait),
    (Key::Key2, DeviceOrientation::PortraitUpsideDown),
    (Key::Key3, DeviceOrientation::LandscapeLeft),
    (Key::Key4, DeviceOrientation::LandscapeRight),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env();
    match settings.log_dir() {
        Some(dir) => init_file_logger(dir)?,
        None => init_stdout_logger(),
    }

    log::info!("Camera Markers");
    log::info!("Model: {}", settings.model_path().display());
    log::info!("Controls: 1-4 to change orientation, ESC to exit");

    let sensor = SharedOrientation::new(settings.orientation());
    let capture = match CaptureSource::open(
        V4l2Device::new(),
        sensor.clone(),
        settings.capture_config(),
    )
    .await
    {
        Ok(capture) => capture,
        Err(e) => {
            log::error!("Cannot set up the camera: {}", e);
            return Err(e.into());
        }
    };

    log::info!("Loading pose model...");
    let model = YoloPoseModel::new(
        ModelSource::File(settings.model_path().clone()),
        settings.infer_device(),
    )?;
    let (pipeline, mut feed) = Pipeline::start(capture, PoseExtractor::new(model))?;

    // the overlay turns the frame a quarter, so start with a portrait window
    let frame_size = pipeline.frame_size();
    let (mut width, mut height) = (frame_size.y, frame_size.x);
    let mut window = Window::new(
        "Camera Markers - ESC to exit",
        width,
        height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(30);

    let mut renderer = OverlayRenderer::new(frame_size, Vec2::new(width, height));
    let mut canvas = Canvas::new(width, height);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (w, h) = window.get_size();
        // minimized windows report zero; keep the last real size
        if (w, h) != (width, height) && w > 0 && h > 0 {
            width = w;
            height = h;
            canvas.resize(width, height);
            renderer.resize(Vec2::new(width, height));
        }

        for (key, orientation) in ORIENTATION_KEYS {
            if window.is_key_pressed(key, KeyRepeat::No) {
                log::info!("Orientation: {:?}", orientation);
                sensor.set(orientation);
            }
        }

        feed.apply(&mut renderer);

        canvas.fill(0);
        if let Some(frame) = feed.latest_frame() {
            renderer.draw_frame(&frame, &mut canvas);
        }
        renderer.draw(&mut canvas);
        window.update_with_buffer(canvas.pixels(), canvas.width(), canvas.height())?;
    }

    let stopped = pipeline.stop().await?;
    log::info!(
        "Exiting: {} frames delivered, {} processed, {} dropped, {} inference failures",
        stopped.stats.delivered,
        stopped.stats.processed,
        stopped.stats.dropped,
        stopped.extractor.failures()
    );
    Ok(())
}
