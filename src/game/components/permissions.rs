use bevy::ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Permission nodes granted to a character by the host's permission system.
#[derive(Component, Clone, Debug, Default, Deserialize, Serialize)]
pub struct Permissions {
    nodes: HashSet<String>,
}

impl Permissions {
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn grant(&mut self, node: impl Into<String>) {
        self.nodes.insert(node.into());
    }

    pub fn revoke(&mut self, node: &str) {
        self.nodes.remove(node);
    }

    pub fn has_permission(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }
}
