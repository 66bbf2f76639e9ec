pub mod motion;
pub mod ptz;
pub mod snapshot;

pub use motion::Motion;
pub use ptz::PTZ;
pub use snapshot::Snapshot;

/// Everything the platform adapter needs from a camera client.
pub trait FdtClient: Snapshot + Motion + PTZ {}

impl<T: Snapshot + Motion + PTZ> FdtClient for T {}
