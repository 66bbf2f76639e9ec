use fdtcam::{CameraConfig, FdtPlatform, PtzEntity};
use serde_json::json;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <IP> [Username] [Password]", args[0]);
        return Ok(());
    }

    let config = CameraConfig::new(&args[1])
        .with_credentials(args.get(2).cloned(), args.get(3).cloned());
    let (mut platform, failures) = FdtPlatform::setup(&[config]);
    if let Some((name, e)) = failures.into_iter().next() {
        return Err(format!("{}: {}", name, e).into());
    }

    println!("Performing PTZ operations...");

    // 1. Direct entity calls
    if let Some(cam) = platform.entity_mut("camera.fdt_camera") {
        println!("Moving left...");
        cam.perform_ptz(Some("LEFT"), None).await?;
        tokio::time::sleep(Duration::from_millis(500)).await;

        println!("Moving up and right...");
        cam.perform_ptz(Some("RIGHT"), Some("UP")).await?;
        tokio::time::sleep(Duration::from_millis(500)).await;

        println!("Stopping...");
        cam.perform_ptz(None, None).await?;
    }

    // 2. Through the platform services
    println!("Moving to preset 1...");
    platform
        .call_service("fdt_ptz_preset", &json!({"entity_id": "all", "preset": "1"}))
        .await?;

    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("Tilting down...");
    platform
        .call_service("fdt_ptz", &json!({"tilt": "DOWN"}))
        .await?;
    tokio::time::sleep(Duration::from_millis(500)).await;
    platform.call_service("fdt_ptz", &json!({})).await?;

    println!("Done.");
    Ok(())
}
