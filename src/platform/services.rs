use crate::constants::ENTITY_MATCH_ALL;
use crate::error::{FdtError, Result};
use crate::validation::{self, valid_entity_id};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
pub enum ServiceName {
    #[strum(serialize = "fdt_ptz_preset")]
    PtzPreset,
    #[strum(serialize = "fdt_ptz")]
    Ptz,
}

impl ServiceName {
    pub const ALL: [ServiceName; 2] = [ServiceName::PtzPreset, ServiceName::Ptz];
}

/// Which entities a service call targets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntitySelector {
    #[default]
    All,
    Ids(Vec<String>),
}

impl EntitySelector {
    pub fn matches(&self, entity_id: &str) -> bool {
        match self {
            EntitySelector::All => true,
            EntitySelector::Ids(ids) => ids.iter().any(|id| id == entity_id),
        }
    }
}

impl<'de> Deserialize<'de> for EntitySelector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        let ids: Vec<String> = match Raw::deserialize(deserializer)
            .map_err(|_| D::Error::custom("entity_id must be a string or a list of strings"))?
        {
            Raw::One(s) if s.trim().eq_ignore_ascii_case(ENTITY_MATCH_ALL) => {
                return Ok(EntitySelector::All);
            }
            Raw::One(s) => s.split(',').map(str::to_string).collect(),
            Raw::Many(list) => list,
        };

        let ids = ids
            .into_iter()
            .map(|id| id.trim().to_lowercase())
            .collect::<Vec<_>>();
        if let Some(bad) = ids.iter().find(|id| !valid_entity_id(id)) {
            return Err(D::Error::custom(format!(
                "Entity ID {} is an invalid entity id",
                bad
            )));
        }

        Ok(EntitySelector::Ids(ids))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PtzPresetData {
    #[serde(default)]
    entity_id: EntitySelector,
    #[serde(deserialize_with = "validation::string")]
    preset: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PtzData {
    #[serde(default)]
    entity_id: EntitySelector,
    #[serde(default, deserialize_with = "validation::optional_string")]
    pan: Option<String>,
    #[serde(default, deserialize_with = "validation::optional_string")]
    tilt: Option<String>,
}

/// A validated service call, ready to be routed to entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    PtzPreset {
        target: EntitySelector,
        preset: String,
    },
    Ptz {
        target: EntitySelector,
        pan: Option<String>,
        tilt: Option<String>,
    },
}

impl ServiceCall {
    /// Validates raw call data against the schema of `service`.
    /// `null` data is treated as an empty object.
    pub fn parse(service: &str, data: &Value) -> Result<Self> {
        let name: ServiceName = service
            .parse()
            .map_err(|_| FdtError::InvalidServiceCall(format!("Unknown service: {}", service)))?;

        let empty = Value::Object(Default::default());
        let data = if data.is_null() { &empty } else { data };
        let invalid = |e: serde_json::Error| FdtError::InvalidServiceCall(format!("{}: {}", name, e));

        Ok(match name {
            ServiceName::PtzPreset => {
                let data = PtzPresetData::deserialize(data).map_err(invalid)?;
                ServiceCall::PtzPreset {
                    target: data.entity_id,
                    preset: data.preset,
                }
            }
            ServiceName::Ptz => {
                let data = PtzData::deserialize(data).map_err(invalid)?;
                ServiceCall::Ptz {
                    target: data.entity_id,
                    pan: data.pan,
                    tilt: data.tilt,
                }
            }
        })
    }

    pub fn service(&self) -> ServiceName {
        match self {
            ServiceCall::PtzPreset { .. } => ServiceName::PtzPreset,
            ServiceCall::Ptz { .. } => ServiceName::Ptz,
        }
    }

    pub fn target(&self) -> &EntitySelector {
        match self {
            ServiceCall::PtzPreset { target, .. } | ServiceCall::Ptz { target, .. } => target,
        }
    }
}
