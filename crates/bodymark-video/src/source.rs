use bodymark_base::{Sequence, Vec2};
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};
use std::time::{Duration, Instant};
use tokio::task::{JoinHandle, spawn_blocking};

use crate::{CaptureConfig, CaptureDevice, CaptureError, Frame, Orientation, OrientationSensor};

// delay before reopening the device after a capture failure
const WAIT_BEFORE_RECONNECT_MS: u64 = 100;

/// Consumer of captured frames.
///
/// `on_frame` is called from the capture worker, one frame at a time, never
/// concurrently. A slow sink stalls capture, so sinks should hand the frame
/// off quickly.
pub trait FrameSink: Send + 'static {
    fn on_frame(&mut self, frame: Frame, orientation: Orientation);
}

impl<F> FrameSink for F
where
    F: FnMut(Frame, Orientation) + Send + 'static,
{
    fn on_frame(&mut self, frame: Frame, orientation: Orientation) {
        self(frame, orientation)
    }
}

/// Owns a camera and streams its frames to a [`FrameSink`].
pub struct CaptureSource {
    config: CaptureConfig,
    device: Option<Box<dyn CaptureDevice>>,
    device_open: bool,
    sensor: Arc<dyn OrientationSensor>,
    native_size: Vec2<usize>,
    sequence: Sequence,
    cancel: Arc<AtomicBool>,
    delivered: Arc<AtomicU64>,
    join_handle: Option<JoinHandle<Box<dyn CaptureDevice>>>,
}

impl std::fmt::Debug for CaptureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSource")
            .field("config", &self.config)
            .field("native_size", &self.native_size)
            .field("running", &self.is_running())
            .field("delivered", &self.frames_delivered())
            .finish()
    }
}

impl CaptureSource {
    /// Open and configure `device`.
    ///
    /// The device is opened on a blocking worker. Setup failures are returned
    /// as they are; nothing is retried.
    pub async fn open(
        device: impl CaptureDevice,
        sensor: impl OrientationSensor,
        config: CaptureConfig,
    ) -> Result<Self, CaptureError> {
        let mut device: Box<dyn CaptureDevice> = Box::new(device);
        let worker_config = config.clone();
        let (device, opened) = spawn_blocking(move || {
            let opened = device.open(&worker_config);
            (device, opened)
        })
        .await?;
        let native_size = opened?;

        if native_size.is_degenerate() {
            return Err(CaptureError::Configuration(format!(
                "device reported an empty frame size {}x{}",
                native_size.x, native_size.y
            )));
        }

        log::info!(
            "capture: opened {} at {}x{}",
            config.device(),
            native_size.x,
            native_size.y
        );

        Ok(Self {
            config,
            device: Some(device),
            device_open: true,
            sensor: Arc::new(sensor),
            native_size,
            sequence: Sequence::new(),
            cancel: Arc::new(AtomicBool::new(false)),
            delivered: Arc::new(AtomicU64::new(0)),
            join_handle: None,
        })
    }

    /// Native (width, height) of the frames this source delivers.
    pub fn native_size(&self) -> Vec2<usize> {
        self.native_size
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.join_handle.is_some()
    }

    /// Number of frames handed to a sink so far.
    pub fn frames_delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// The counter frames are numbered from.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Start streaming into `sink`.
    pub fn start(&mut self, sink: impl FrameSink) -> Result<(), CaptureError> {
        if self.is_running() {
            return Err(CaptureError::Stream("capture already running".to_string()));
        }
        let device = self
            .device
            .take()
            .ok_or_else(|| CaptureError::Stream("device lost by a previous run".to_string()))?;

        self.cancel.store(false, Ordering::Relaxed);
        let worker = CaptureWorker {
            device,
            reopen: !self.device_open,
            config: self.config.clone(),
            sensor: Arc::clone(&self.sensor),
            sequence: self.sequence.clone(),
            cancel: Arc::clone(&self.cancel),
            delivered: Arc::clone(&self.delivered),
        };
        self.device_open = false;
        self.join_handle = Some(spawn_blocking(move || worker.run(sink)));
        Ok(())
    }

    /// Stop streaming and wait for the worker to finish its current frame.
    ///
    /// The device is closed; a later `start` reopens it.
    pub async fn stop(&mut self) -> Result<(), CaptureError> {
        let Some(handle) = self.join_handle.take() else {
            return Ok(());
        };
        self.cancel.store(true, Ordering::Relaxed);
        let device = handle.await?;
        self.device = Some(device);
        log::info!("capture: stopped after {} frames", self.frames_delivered());
        Ok(())
    }
}

impl Drop for CaptureSource {
    fn drop(&mut self) {
        // the worker notices on its next frame and closes the device
        self.cancel.store(true, Ordering::Relaxed);
    }
}

struct CaptureWorker {
    device: Box<dyn CaptureDevice>,
    reopen: bool,
    config: CaptureConfig,
    sensor: Arc<dyn OrientationSensor>,
    sequence: Sequence,
    cancel: Arc<AtomicBool>,
    delivered: Arc<AtomicU64>,
}

impl CaptureWorker {
    fn run(mut self, mut sink: impl FrameSink) -> Box<dyn CaptureDevice> {
        if self.reopen && !self.reconnect() {
            self.device.close();
            return self.device;
        }

        log::info!("capture worker: starting capture loop");
        while !self.cancel.load(Ordering::Relaxed) {
            match self.device.blocking_capture() {
                Ok(pixels) => {
                    // orientation is sampled per frame, at capture time
                    let orientation = Orientation::from_device(self.sensor.device_orientation());
                    match Frame::new(pixels, self.sequence.next(), Instant::now()) {
                        Ok(frame) => {
                            sink.on_frame(frame, orientation);
                            self.delivered.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(e) => log::warn!("capture worker: discarding frame: {}", e),
                    }
                }
                Err(e) => {
                    log::error!("capture worker: capture failed: {}", e);
                    if !self.reconnect() {
                        break;
                    }
                }
            }
        }

        self.device.close();
        self.device
    }

    /// Close, wait and reopen until it works. Returns false if cancelled first.
    fn reconnect(&mut self) -> bool {
        while !self.cancel.load(Ordering::Relaxed) {
            log::info!("capture worker: reconnecting...");
            self.device.close();
            std::thread::sleep(Duration::from_millis(WAIT_BEFORE_RECONNECT_MS));
            match self.device.open(&self.config) {
                Ok(_) => return true,
                Err(e) => log::warn!("capture worker: reopen failed: {}", e),
            }
        }
        false
    }
}
