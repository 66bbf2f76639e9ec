use crate::constants::DEFAULT_CONTENT_TYPE;
use crate::error::Result;
use async_trait::async_trait;

/// Camera entity surface seen by the host.
#[async_trait]
pub trait Camera: Send + Sync {
    /// Display name
    fn name(&self) -> &str;

    /// Unique id within the platform, `camera.<slug>`
    fn entity_id(&self) -> &str;

    /// MIME type of [`Camera::camera_image`]
    fn content_type(&self) -> &str {
        DEFAULT_CONTENT_TYPE
    }

    /// Fetch the latest still image
    async fn camera_image(&self) -> Result<Vec<u8>>;

    /// Enable motion detection
    async fn enable_motion_detection(&mut self) -> Result<()>;

    /// Disable motion detection
    async fn disable_motion_detection(&mut self) -> Result<()>;

    /// Current motion detection status, queried live
    async fn motion_detection_enabled(&self) -> Result<bool>;
}

/// Targets of the `fdt_ptz_preset` and `fdt_ptz` services.
#[async_trait]
pub trait PtzEntity: Camera {
    /// Recall the preset whose number is given as text
    async fn goto_ptz_preset(&mut self, preset: &str) -> Result<()>;

    /// Move towards the combined pan/tilt direction
    async fn perform_ptz(&mut self, pan: Option<&str>, tilt: Option<&str>) -> Result<()>;
}
