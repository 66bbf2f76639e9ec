pub mod camera;
pub mod direction;
pub mod entity;
pub mod services;

pub use camera::FdtCamera;
pub use direction::{Pan, Tilt, pt_direction};
pub use entity::{Camera, PtzEntity};
pub use services::{EntitySelector, ServiceCall, ServiceName};

use crate::commands::FdtClient;
use crate::config::CameraConfig;
use crate::constants::{DOMAIN, PLATFORM};
use crate::error::{FdtError, Result};
use crate::fdtcam::FdtCam;
use log::{error, info, warn};
use serde_json::Value;

/// All camera entities created by the `fdtcam` platform, plus routing of
/// the platform's entity services.
pub struct FdtPlatform<C: FdtClient> {
    entities: Vec<FdtCamera<C>>,
}

impl<C: FdtClient> Default for FdtPlatform<C> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

impl FdtPlatform<FdtCam> {
    /// Creates one entity per entry. A client that fails to build fails
    /// only its own camera; those failures are returned with the camera name.
    /// Entries are expected to come from [`crate::Config::cameras`], which
    /// already filters on platform and validates them.
    pub fn setup(configs: &[CameraConfig]) -> (Self, Vec<(String, FdtError)>) {
        let mut platform = Self::default();
        let mut failures = Vec::new();

        for config in configs {
            info!(
                "Setting up {} at {}:{}",
                config.name, config.host, config.port
            );
            match FdtCamera::new(config) {
                Ok(camera) => {
                    platform.add_entity(camera);
                }
                Err(e) => {
                    error!("Failed to set up {}: {}", config.name, e);
                    failures.push((config.name.clone(), e));
                }
            }
        }

        (platform, failures)
    }
}

impl<C: FdtClient> FdtPlatform<C> {
    /// Services registered under the camera domain.
    pub fn services() -> [(&'static str, ServiceName); 2] {
        ServiceName::ALL.map(|name| (DOMAIN, name))
    }

    /// Adds an entity, suffixing its id with `_2`, `_3`, ... on collision.
    /// Returns the final entity id.
    pub fn add_entity(&mut self, mut camera: FdtCamera<C>) -> String {
        let base = camera.entity_id().to_string();
        let mut entity_id = base.clone();
        let mut suffix = 2;
        while self.entity(&entity_id).is_some() {
            entity_id = format!("{}_{}", base, suffix);
            suffix += 1;
        }

        camera.set_entity_id(entity_id.clone());
        self.entities.push(camera);
        entity_id
    }

    pub fn entities(&self) -> &[FdtCamera<C>] {
        &self.entities
    }

    pub fn entity(&self, entity_id: &str) -> Option<&FdtCamera<C>> {
        self.entities.iter().find(|e| e.entity_id() == entity_id)
    }

    pub fn entity_mut(&mut self, entity_id: &str) -> Option<&mut FdtCamera<C>> {
        self.entities.iter_mut().find(|e| e.entity_id() == entity_id)
    }

    /// Validates `data` for `service` and dispatches it.
    pub async fn call_service(&mut self, service: &str, data: &Value) -> Result<bool> {
        let call = ServiceCall::parse(service, data)?;
        self.dispatch(&call).await
    }

    /// Runs `call` on every targeted entity in order. The first failure
    /// stops the fan-out.
    pub async fn dispatch(&mut self, call: &ServiceCall) -> Result<bool> {
        if let EntitySelector::Ids(ids) = call.target() {
            for id in ids {
                if self.entity(id).is_none() {
                    warn!("{}: no entity {} on platform {}", call.service(), id, PLATFORM);
                }
            }
        }

        for entity in self
            .entities
            .iter_mut()
            .filter(|e| call.target().matches(e.entity_id()))
        {
            handle_call(entity, call).await?;
        }

        Ok(true)
    }
}

/// Routes one service call to one entity.
pub async fn handle_call<E: PtzEntity + ?Sized>(entity: &mut E, call: &ServiceCall) -> Result<()> {
    match call {
        ServiceCall::PtzPreset { preset, .. } => entity.goto_ptz_preset(preset).await,
        ServiceCall::Ptz { pan, tilt, .. } => {
            entity
                .perform_ptz(pan.as_deref(), tilt.as_deref())
                .await
        }
    }
}
