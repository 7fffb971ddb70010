use anyhow::Context;
use armor_keeper_data::ItemStack;
use bevy::prelude::Entity;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    path::Path,
};
use thiserror::Error;

use crate::game::{
    components::{
        CharacterInfo, CharacterUniqueId, Equipment, Inventory, Permissions, RespawnLoadout,
    },
    CharacterBundle, GameWorld, GearRetention,
};

const DEFAULT_MAX_HP: i32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("player {0} is defined more than once")]
    DuplicatePlayer(String),
    #[error("unique id {0} is shared by more than one player")]
    DuplicateUniqueId(CharacterUniqueId),
    #[error("unknown player {0}")]
    UnknownPlayer(String),
}

fn default_max_hp() -> i32 {
    DEFAULT_MAX_HP
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScenarioPlayer {
    pub name: String,
    pub unique_id: CharacterUniqueId,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default = "default_max_hp")]
    pub max_hp: i32,
    #[serde(default)]
    pub equipment: Vec<ItemStack>,
    #[serde(default)]
    pub inventory: Vec<ItemStack>,
    #[serde(default)]
    pub loadout: Vec<ItemStack>,
}

/// `Kill` and `Revive` take effect on the next tick.
#[derive(Clone, Debug, Deserialize)]
pub enum ScenarioStep {
    Kill(String),
    Revive(String),
    Tick(u32),
    Shutdown,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub players: Vec<ScenarioPlayer>,
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Serialize)]
pub struct PlayerReport {
    pub name: String,
    pub dead: bool,
    pub equipment: Equipment,
    pub inventory: Vec<ItemStack>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub players: Vec<PlayerReport>,
    pub ground_items: Vec<ItemStack>,
    pub unclaimed_snapshots: usize,
}

impl ScenarioPlayer {
    fn create_character(&self) -> CharacterBundle {
        let mut character = CharacterBundle::new(
            CharacterInfo::new(self.name.clone(), self.unique_id),
            self.max_hp,
        );
        character.permissions = Permissions::new(self.permissions.iter().cloned());
        for item in self.equipment.iter().cloned() {
            character
                .equipment
                .equip_item_or_stow(item, &mut character.inventory);
        }
        character.inventory.add_items(self.inventory.iter().cloned());
        character.respawn_loadout = RespawnLoadout::new(self.loadout.clone());
        character
    }
}

impl Scenario {
    pub fn try_load(path: &Path) -> Result<Self, anyhow::Error> {
        let str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.to_string_lossy()))?;
        let scenario: Scenario = serde_json::from_str(&str).with_context(|| {
            format!(
                "Failed to deserialise Scenario from file {}",
                path.to_string_lossy()
            )
        })?;
        Ok(scenario)
    }

    /// Checks every player name and unique id is unique and every step refers
    /// to a known player, so that a scenario either runs completely or not at all.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut names = HashSet::new();
        let mut unique_ids = HashSet::new();
        for player in &self.players {
            if !names.insert(player.name.as_str()) {
                return Err(ScenarioError::DuplicatePlayer(player.name.clone()));
            }
            if !unique_ids.insert(player.unique_id) {
                return Err(ScenarioError::DuplicateUniqueId(player.unique_id));
            }
        }

        for step in &self.steps {
            match step {
                ScenarioStep::Kill(name) | ScenarioStep::Revive(name) => {
                    if !names.contains(name.as_str()) {
                        return Err(ScenarioError::UnknownPlayer(name.clone()));
                    }
                }
                ScenarioStep::Tick(_) | ScenarioStep::Shutdown => {}
            }
        }

        Ok(())
    }

    pub fn run(&self, game_world: &mut GameWorld) -> Result<ScenarioReport, ScenarioError> {
        self.validate()?;

        let mut entities: HashMap<&str, Entity> = HashMap::new();
        for player in &self.players {
            let entity = game_world.spawn_character(player.create_character());
            entities.insert(player.name.as_str(), entity);
        }

        for step in &self.steps {
            match step {
                ScenarioStep::Kill(name) => game_world.kill(entities[name.as_str()]),
                ScenarioStep::Revive(name) => game_world.revive(entities[name.as_str()]),
                ScenarioStep::Tick(ticks) => game_world.run_ticks(*ticks),
                ScenarioStep::Shutdown => game_world.shutdown(),
            }
        }

        let players = self
            .players
            .iter()
            .map(|player| {
                let entity = entities[player.name.as_str()];
                let world = game_world.world();
                PlayerReport {
                    name: player.name.clone(),
                    dead: game_world.is_dead(entity),
                    equipment: world.get::<Equipment>(entity).cloned().unwrap_or_default(),
                    inventory: world
                        .get::<Inventory>(entity)
                        .map(|inventory| inventory.items.clone())
                        .unwrap_or_default(),
                }
            })
            .collect();

        Ok(ScenarioReport {
            players,
            ground_items: game_world.ground_items(),
            unclaimed_snapshots: game_world.world().resource::<GearRetention>().len(),
        })
    }
}
