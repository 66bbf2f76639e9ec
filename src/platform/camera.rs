use crate::commands::FdtClient;
use crate::config::CameraConfig;
use crate::constants::{DOMAIN, PTZ_SPEED};
use crate::error::Result;
use crate::fdtcam::FdtCam;
use crate::platform::direction::{Pan, Tilt, pt_direction};
use crate::platform::entity::{Camera, PtzEntity};
use crate::validation::slugify;
use async_trait::async_trait;
use log::debug;

/// Camera entity backed by one exclusively owned client.
pub struct FdtCamera<C: FdtClient> {
    name: String,
    entity_id: String,
    cam: C,
}

impl FdtCamera<FdtCam> {
    /// Builds the HTTP client from `config`. Only client construction can fail.
    pub fn new(config: &CameraConfig) -> Result<Self> {
        let cam = FdtCam::new(
            config.host.clone(),
            &config.port,
            config.username.clone(),
            config.password.clone(),
        )?;
        Ok(Self::with_client(config.name.clone(), cam))
    }
}

impl<C: FdtClient> FdtCamera<C> {
    pub fn with_client(name: impl Into<String>, cam: C) -> Self {
        let name = name.into();
        let entity_id = format!("{}.{}", DOMAIN, slugify(&name));
        Self {
            name,
            entity_id,
            cam,
        }
    }

    pub fn client(&self) -> &C {
        &self.cam
    }

    pub(crate) fn set_entity_id(&mut self, entity_id: String) {
        self.entity_id = entity_id;
    }
}

#[async_trait]
impl<C: FdtClient> Camera for FdtCamera<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn entity_id(&self) -> &str {
        &self.entity_id
    }

    async fn camera_image(&self) -> Result<Vec<u8>> {
        self.cam.snapshot().await
    }

    async fn enable_motion_detection(&mut self) -> Result<()> {
        self.cam.motion_on().await
    }

    async fn disable_motion_detection(&mut self) -> Result<()> {
        self.cam.motion_off().await
    }

    async fn motion_detection_enabled(&self) -> Result<bool> {
        self.cam.motion_detect_status().await
    }
}

#[async_trait]
impl<C: FdtClient> PtzEntity for FdtCamera<C> {
    async fn goto_ptz_preset(&mut self, preset: &str) -> Result<()> {
        let preset: i64 = preset.trim().parse()?;
        debug!("{}: recalling preset {}", self.entity_id, preset);
        self.cam.ptz_preset(preset).await
    }

    async fn perform_ptz(&mut self, pan: Option<&str>, tilt: Option<&str>) -> Result<()> {
        let direction = pt_direction(Pan::from_token(pan), Tilt::from_token(tilt));
        debug!("{}: moving '{}'", self.entity_id, direction);
        self.cam.ptz_control(&direction, PTZ_SPEED).await
    }
}
