use anyhow::Context;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::armor_keeper::PERMISSION_KEEP;

#[derive(Resource, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArmorKeeperConfig {
    /// When disabled, deaths are left untouched. Gear kept before the switch
    /// is still returned on respawn.
    pub enabled: bool,
    pub permission: String,
    pub restore_delay_ticks: u64,
}

impl Default for ArmorKeeperConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            permission: String::from(PERMISSION_KEEP),
            restore_delay_ticks: 1,
        }
    }
}

impl ArmorKeeperConfig {
    pub fn try_load(path: &Path) -> Result<Self, anyhow::Error> {
        let str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.to_string_lossy()))?;
        let config: ArmorKeeperConfig = serde_json::from_str(&str).with_context(|| {
            format!(
                "Failed to deserialise ArmorKeeperConfig from file {}",
                path.to_string_lossy()
            )
        })?;
        Ok(config)
    }

    /// Ticks to wait after a respawn before handing gear back, at least one
    /// so the host's own respawn loadout has been applied.
    pub fn restore_delay(&self) -> u64 {
        self.restore_delay_ticks.max(1)
    }
}
