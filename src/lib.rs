pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod fdtcam;
pub mod platform;
pub mod protocol;
pub mod validation;

pub use commands::*;
pub use config::{CameraConfig, Config};
pub use error::{FdtError, Result};
pub use fdtcam::FdtCam;
pub use platform::{
    Camera, EntitySelector, FdtCamera, FdtPlatform, Pan, PtzEntity, ServiceCall, ServiceName,
    Tilt, pt_direction,
};
