use crate::constants::SNAPSHOT_PATH;
use crate::error::Result;
use crate::fdtcam::FdtCam;
use async_trait::async_trait;

#[async_trait]
pub trait Snapshot: Send + Sync {
    /// Fetch the current still frame as JPEG bytes
    async fn snapshot(&self) -> Result<Vec<u8>>;
}

#[async_trait]
impl Snapshot for FdtCam {
    async fn snapshot(&self) -> Result<Vec<u8>> {
        self.get_raw(SNAPSHOT_PATH).await
    }
}
