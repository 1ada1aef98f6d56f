pub mod settings;

pub use settings::{Settings, parse_device_orientation};
