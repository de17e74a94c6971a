use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThuxConfig {
    #[serde(default)]
    pub wiring: WiringConfig,
}

/// Settings for module aggregation and action binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringConfig {
    /// What to do when merged action maps define the same name.
    #[serde(default)]
    pub collisions: CollisionPolicy,
    /// Accept branches with no modules (composed to an empty namespace).
    #[serde(default = "default_allow_empty_branches")]
    pub allow_empty_branches: bool,
}

/// Policy for duplicate action names across merged maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Later maps overwrite earlier ones.
    #[default]
    LastWriteWins,
    /// Fail with `DuplicateAction`.
    Reject,
}

fn default_allow_empty_branches() -> bool {
    false
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            collisions: CollisionPolicy::default(),
            allow_empty_branches: default_allow_empty_branches(),
        }
    }
}
