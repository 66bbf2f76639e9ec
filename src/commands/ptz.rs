use crate::constants::{PRESET_CGI, PTZ_ACTIONS, PTZ_CGI};
use crate::error::{FdtError, Result};
use crate::fdtcam::FdtCam;
use async_trait::async_trait;

#[async_trait]
pub trait PTZ: Send + Sync {
    /// Move in a combined direction (`"up"`, `"downleft"`, ...), empty stops
    async fn ptz_control(&mut self, direction: &str, speed: u8) -> Result<()>;

    /// Recall a stored preset
    async fn ptz_preset(&mut self, preset: i64) -> Result<()>;
}

#[async_trait]
impl PTZ for FdtCam {
    async fn ptz_control(&mut self, direction: &str, speed: u8) -> Result<()> {
        let act = PTZ_ACTIONS.get(direction).ok_or_else(|| {
            FdtError::ProtocolError(format!("Unsupported PTZ direction: {}", direction))
        })?;

        let params = [
            ("-step", "0".to_string()),
            ("-act", act.to_string()),
            ("-speed", speed.to_string()),
        ];
        self.run_cgi(PTZ_CGI, &params).await
    }

    async fn ptz_preset(&mut self, preset: i64) -> Result<()> {
        let params = [
            ("-act", "goto".to_string()),
            ("-status", "1".to_string()),
            ("-number", preset.to_string()),
        ];
        self.run_cgi(PRESET_CGI, &params).await
    }
}
