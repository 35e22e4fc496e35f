use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Session context settings.
/// - enabled: if false, views get a DetachedSession that ignores writes.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct SessionConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
