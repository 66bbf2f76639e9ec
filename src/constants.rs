use phf::phf_map;

pub const DEFAULT_NAME: &str = "FDT Camera";
pub const DEFAULT_PORT: &str = "80";
pub const PLATFORM: &str = "fdtcam";
pub const DOMAIN: &str = "camera";

pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Fixed speed sent with every directional move.
pub const PTZ_SPEED: u8 = 31;

pub const SERVICE_PTZ_PRESET: &str = "fdt_ptz_preset";
pub const SERVICE_PTZ: &str = "fdt_ptz";

pub const ATTR_ENTITY_ID: &str = "entity_id";
pub const ATTR_PTZ_PRESET: &str = "preset";
pub const ATTR_PAN: &str = "pan";
pub const ATTR_TILT: &str = "tilt";

pub const ENTITY_MATCH_ALL: &str = "all";

pub const SNAPSHOT_PATH: &str = "/tmpfs/auto.jpg";
pub const PARAM_CGI: &str = "/cgi-bin/hi3510/param.cgi";
pub const PTZ_CGI: &str = "/cgi-bin/hi3510/ptzctrl.cgi";
pub const PRESET_CGI: &str = "/cgi-bin/hi3510/preset.cgi";

/// Motion detection area toggled and reported by the motion commands.
pub const MOTION_AREA: u8 = 1;

pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Combined direction token -> `ptzctrl.cgi` action.
pub static PTZ_ACTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "stop",
    "up" => "up",
    "down" => "down",
    "left" => "left",
    "right" => "right",
    "upleft" => "upleft",
    "upright" => "upright",
    "downleft" => "downleft",
    "downright" => "downright",
};

pub const REPLY_OK: &str = "[Succeed]";
pub const REPLY_ERROR: &str = "[Error]";
