use bevy::ecs::prelude::Component;

#[derive(Component, Default)]
pub struct Dead;
