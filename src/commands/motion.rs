use crate::constants::MOTION_AREA;
use crate::error::Result;
use crate::fdtcam::FdtCam;
use crate::protocol::parse_flag;
use async_trait::async_trait;

#[async_trait]
pub trait Motion: Send + Sync {
    /// Enable motion detection
    async fn motion_on(&mut self) -> Result<()>;

    /// Disable motion detection
    async fn motion_off(&mut self) -> Result<()>;

    /// Query whether motion detection is enabled
    async fn motion_detect_status(&self) -> Result<bool>;
}

#[async_trait]
impl Motion for FdtCam {
    async fn motion_on(&mut self) -> Result<()> {
        self.set_motion(true).await
    }

    async fn motion_off(&mut self) -> Result<()> {
        self.set_motion(false).await
    }

    async fn motion_detect_status(&self) -> Result<bool> {
        let vars = self.get_command("getmdattr").await?;
        parse_flag(&vars, &format!("m{}_enable", MOTION_AREA))
    }
}

impl FdtCam {
    async fn set_motion(&self, enable: bool) -> Result<()> {
        let params = [
            ("-name", MOTION_AREA.to_string()),
            ("-enable", if enable { "1" } else { "0" }.to_string()),
        ];
        self.set_command("setmdattr", &params).await
    }
}
