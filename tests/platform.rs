use async_trait::async_trait;
use fdtcam::{
    Camera, CameraConfig, FdtCamera, FdtError, FdtPlatform, Motion, PTZ, PtzEntity, Result,
    ServiceCall, ServiceName, Snapshot,
};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    MotionOn,
    MotionOff,
    Ptz(String, u8),
    Preset(i64),
}

#[derive(Default)]
struct MockCam {
    calls: Vec<Call>,
    motion: bool,
    frame: Vec<u8>,
    offline: bool,
}

impl MockCam {
    fn with_frame(frame: &[u8]) -> Self {
        Self {
            frame: frame.to_vec(),
            ..Default::default()
        }
    }

    fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.offline {
            return Err(FdtError::ConnectionError("camera offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Snapshot for MockCam {
    async fn snapshot(&self) -> Result<Vec<u8>> {
        self.check()?;
        Ok(self.frame.clone())
    }
}

#[async_trait]
impl Motion for MockCam {
    async fn motion_on(&mut self) -> Result<()> {
        self.check()?;
        self.calls.push(Call::MotionOn);
        self.motion = true;
        Ok(())
    }

    async fn motion_off(&mut self) -> Result<()> {
        self.check()?;
        self.calls.push(Call::MotionOff);
        self.motion = false;
        Ok(())
    }

    async fn motion_detect_status(&self) -> Result<bool> {
        self.check()?;
        Ok(self.motion)
    }
}

#[async_trait]
impl PTZ for MockCam {
    async fn ptz_control(&mut self, direction: &str, speed: u8) -> Result<()> {
        self.check()?;
        self.calls.push(Call::Ptz(direction.to_string(), speed));
        Ok(())
    }

    async fn ptz_preset(&mut self, preset: i64) -> Result<()> {
        self.check()?;
        self.calls.push(Call::Preset(preset));
        Ok(())
    }
}

fn camera(name: &str) -> FdtCamera<MockCam> {
    FdtCamera::with_client(name, MockCam::default())
}

fn calls<'a>(platform: &'a FdtPlatform<MockCam>, entity_id: &str) -> &'a [Call] {
    &platform
        .entity(entity_id)
        .expect("entity exists")
        .client()
        .calls
}

#[tokio::test]
async fn preset_is_parsed_and_forwarded() {
    let mut cam = camera("Porch");
    cam.goto_ptz_preset("7").await.unwrap();
    cam.goto_ptz_preset(" -1 ").await.unwrap();
    assert_eq!(cam.client().calls, vec![Call::Preset(7), Call::Preset(-1)]);
}

#[tokio::test]
async fn preset_has_no_range_limit() {
    let mut cam = camera("Porch");
    cam.goto_ptz_preset("3000000000").await.unwrap();
    assert_eq!(cam.client().calls, vec![Call::Preset(3_000_000_000)]);
}

#[tokio::test]
async fn non_numeric_preset_fails_without_client_call() {
    let mut cam = camera("Porch");
    let err = cam.goto_ptz_preset("abc").await.unwrap_err();
    assert!(matches!(err, FdtError::InvalidPreset(_)));
    assert!(cam.client().calls.is_empty());
}

#[tokio::test]
async fn move_sends_combined_direction_at_fixed_speed() {
    let mut cam = camera("Porch");
    cam.perform_ptz(Some("LEFT"), Some("UP")).await.unwrap();
    cam.perform_ptz(Some("RIGHT"), Some("DOWN")).await.unwrap();
    cam.perform_ptz(Some("RIGHT"), None).await.unwrap();
    cam.perform_ptz(None, None).await.unwrap();
    cam.perform_ptz(Some("diagonal"), Some("UP")).await.unwrap();

    assert_eq!(
        cam.client().calls,
        vec![
            Call::Ptz("upleft".to_string(), 31),
            Call::Ptz("downright".to_string(), 31),
            Call::Ptz("right".to_string(), 31),
            Call::Ptz(String::new(), 31),
            Call::Ptz("up".to_string(), 31),
        ]
    );
}

#[tokio::test]
async fn motion_toggle_is_visible_through_status() {
    let mut cam = camera("Porch");
    assert!(!cam.motion_detection_enabled().await.unwrap());

    cam.enable_motion_detection().await.unwrap();
    assert!(cam.motion_detection_enabled().await.unwrap());

    cam.disable_motion_detection().await.unwrap();
    assert!(!cam.motion_detection_enabled().await.unwrap());
    assert_eq!(cam.client().calls, vec![Call::MotionOn, Call::MotionOff]);
}

#[tokio::test]
async fn image_comes_straight_from_client() {
    let cam = FdtCamera::with_client("Porch", MockCam::with_frame(&[0xFF, 0xD8, 0xFF]));
    assert_eq!(cam.camera_image().await.unwrap(), vec![0xFF, 0xD8, 0xFF]);
    assert_eq!(cam.content_type(), "image/jpeg");
}

#[tokio::test]
async fn client_failures_propagate() {
    let mut cam = FdtCamera::with_client("Porch", MockCam::offline());
    assert!(matches!(
        cam.camera_image().await,
        Err(FdtError::ConnectionError(_))
    ));
    assert!(matches!(
        cam.enable_motion_detection().await,
        Err(FdtError::ConnectionError(_))
    ));
    assert!(matches!(
        cam.perform_ptz(Some("LEFT"), None).await,
        Err(FdtError::ConnectionError(_))
    ));
}

#[test]
fn entity_ids_come_from_names_and_stay_unique() {
    let mut platform = FdtPlatform::default();
    assert_eq!(platform.add_entity(camera("FDT Camera")), "camera.fdt_camera");
    assert_eq!(platform.add_entity(camera("FDT Camera")), "camera.fdt_camera_2");
    assert_eq!(platform.add_entity(camera("Front Door")), "camera.front_door");

    let names: Vec<&str> = platform.entities().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["FDT Camera", "FDT Camera", "Front Door"]);
}

#[test]
fn registers_both_services() {
    let services = FdtPlatform::<MockCam>::services();
    assert_eq!(
        services,
        [
            ("camera", ServiceName::PtzPreset),
            ("camera", ServiceName::Ptz)
        ]
    );
}

#[tokio::test]
async fn service_without_target_reaches_every_entity() {
    let mut platform = FdtPlatform::default();
    platform.add_entity(camera("Porch"));
    platform.add_entity(camera("Yard"));

    let handled = platform
        .call_service("fdt_ptz_preset", &json!({"preset": "2"}))
        .await
        .unwrap();

    assert!(handled);
    assert_eq!(calls(&platform, "camera.porch"), &[Call::Preset(2)]);
    assert_eq!(calls(&platform, "camera.yard"), &[Call::Preset(2)]);
}

#[tokio::test]
async fn service_with_target_reaches_only_selected_entities() {
    let mut platform = FdtPlatform::default();
    platform.add_entity(camera("Porch"));
    platform.add_entity(camera("Yard"));

    platform
        .call_service(
            "fdt_ptz",
            &json!({"entity_id": "camera.yard", "pan": "RIGHT", "tilt": "UP"}),
        )
        .await
        .unwrap();

    assert!(calls(&platform, "camera.porch").is_empty());
    assert_eq!(
        calls(&platform, "camera.yard"),
        &[Call::Ptz("upright".to_string(), 31)]
    );
}

#[tokio::test]
async fn unknown_target_is_skipped() {
    let mut platform = FdtPlatform::default();
    platform.add_entity(camera("Porch"));

    let handled = platform
        .call_service("fdt_ptz", &json!({"entity_id": ["camera.garage"], "pan": "LEFT"}))
        .await
        .unwrap();

    assert!(handled);
    assert!(calls(&platform, "camera.porch").is_empty());
}

#[tokio::test]
async fn invalid_call_touches_no_entity() {
    let mut platform = FdtPlatform::default();
    platform.add_entity(camera("Porch"));

    let err = platform
        .call_service("fdt_ptz_preset", &json!({"entity_id": "camera.porch"}))
        .await
        .unwrap_err();
    assert!(matches!(err, FdtError::InvalidServiceCall(_)));

    let err = platform
        .call_service("fdt_ptz_preset", &json!({"preset": "home"}))
        .await
        .unwrap_err();
    assert!(matches!(err, FdtError::InvalidPreset(_)));

    assert!(calls(&platform, "camera.porch").is_empty());
}

#[tokio::test]
async fn first_failure_stops_fan_out() {
    let mut platform = FdtPlatform::default();
    platform.add_entity(FdtCamera::with_client("Broken", MockCam::offline()));
    platform.add_entity(camera("Yard"));

    let call = ServiceCall::parse("fdt_ptz", &json!({"tilt": "DOWN"})).unwrap();
    assert!(platform.dispatch(&call).await.is_err());
    assert!(calls(&platform, "camera.yard").is_empty());
}

#[test]
fn setup_without_credentials_passes_none_through() {
    let (platform, failures) = FdtPlatform::setup(&[CameraConfig::new("10.0.0.9")]);
    assert!(failures.is_empty());

    let entity = platform.entity("camera.fdt_camera").expect("entity exists");
    assert_eq!(entity.name(), "FDT Camera");
    assert_eq!(entity.client().host(), "10.0.0.9");
    assert_eq!(entity.client().port(), 80);
    assert_eq!(entity.client().username(), None);
    assert_eq!(entity.client().password(), None);
}

#[test]
fn setup_passes_credentials_and_port() {
    let config = CameraConfig::new("cam.local")
        .with_name("Garage")
        .with_port("8080")
        .with_credentials(Some("admin".to_string()), Some("secret".to_string()));
    let (platform, failures) = FdtPlatform::setup(&[config]);
    assert!(failures.is_empty());

    let client = platform.entity("camera.garage").expect("entity exists").client();
    assert_eq!(client.port(), 8080);
    assert_eq!(client.username(), Some("admin"));
    assert_eq!(client.password(), Some("secret"));
}

#[test]
fn bad_camera_does_not_stop_the_others() {
    let good = CameraConfig::new("10.0.0.9").with_name("Porch");
    let bad_port = CameraConfig::new("cam.local")
        .with_name("Garage")
        .with_port("http");
    let yard = CameraConfig::new("10.0.0.10").with_name("Yard");

    let (platform, failures) = FdtPlatform::setup(&[good, bad_port, yard]);

    let ids: Vec<&str> = platform.entities().iter().map(|e| e.entity_id()).collect();
    assert_eq!(ids, vec!["camera.porch", "camera.yard"]);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "Garage");
    assert!(matches!(failures[0].1, FdtError::ConfigError(_)));
}
