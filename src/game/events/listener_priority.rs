use bevy::prelude::SystemSet;

/// Order in which listeners observe a notification. Tiers run from
/// `Lowest` to `Monitor`; the host finalises the notification only after
/// every tier has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventPriority {
    Lowest,
    Low,
    Normal,
    High,
    Highest,
    Monitor,
}

#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeathListeners(pub EventPriority);

#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RespawnListeners(pub EventPriority);
