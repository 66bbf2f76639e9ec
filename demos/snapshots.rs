use fdtcam::{Camera, Config, FdtPlatform};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <config.toml> [--enable-motion]", args[0]);
        return Ok(());
    }

    let config = Config::from_file(&args[1])?;
    let (cameras, errors) = config.cameras();
    for e in &errors {
        eprintln!("Skipping camera entry: {}", e);
    }
    let (mut platform, failures) = FdtPlatform::setup(&cameras);
    for (name, e) in &failures {
        eprintln!("Skipping {}: {}", name, e);
    }
    let enable_motion = args.iter().any(|a| a == "--enable-motion");

    for id in platform
        .entities()
        .iter()
        .map(|e| e.entity_id().to_string())
        .collect::<Vec<_>>()
    {
        let Some(cam) = platform.entity_mut(&id) else {
            continue;
        };

        if enable_motion {
            cam.enable_motion_detection().await?;
        }
        let motion = cam.motion_detection_enabled().await?;
        println!("{} ({}): motion detection {}", cam.name(), id, if motion { "on" } else { "off" });

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_{}.jpg", id.replace('.', "_"), timestamp);

        match cam.camera_image().await {
            Ok(image_bytes) => {
                let mut file = File::create(&filename).await?;
                file.write_all(&image_bytes).await?;
                println!(
                    "  Saved {} ({} bytes, {})",
                    filename,
                    image_bytes.len(),
                    cam.content_type()
                );
            }
            Err(e) => eprintln!("  Failed to take snapshot: {}", e),
        }
    }

    Ok(())
}
