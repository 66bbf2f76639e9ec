use strum_macros::{AsRefStr, EnumString};

/// Horizontal component of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
pub enum Pan {
    #[strum(serialize = "LEFT")]
    Left,
    #[strum(serialize = "RIGHT")]
    Right,
    #[default]
    #[strum(serialize = "NONE")]
    Idle,
}

/// Vertical component of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
pub enum Tilt {
    #[strum(serialize = "UP")]
    Up,
    #[strum(serialize = "DOWN")]
    Down,
    #[default]
    #[strum(serialize = "NONE")]
    Idle,
}

impl Pan {
    /// Unknown or missing tokens mean no horizontal movement.
    pub fn from_token(token: Option<&str>) -> Self {
        token.and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    fn component(self) -> &'static str {
        match self {
            Pan::Right => "right",
            Pan::Left => "left",
            Pan::Idle => "",
        }
    }
}

impl Tilt {
    /// Unknown or missing tokens mean no vertical movement.
    pub fn from_token(token: Option<&str>) -> Self {
        token.and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    fn component(self) -> &'static str {
        match self {
            Tilt::Up => "up",
            Tilt::Down => "down",
            Tilt::Idle => "",
        }
    }
}

/// Combines both axes into the camera's direction token, vertical first:
/// `(Right, Up)` gives `"upright"`, `(Idle, Idle)` gives `""`.
pub fn pt_direction(pan: Pan, tilt: Tilt) -> String {
    format!("{}{}", tilt.component(), pan.component())
}
