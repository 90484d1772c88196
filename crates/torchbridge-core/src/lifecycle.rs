//! Plugin lifecycle state machine

use serde::{Deserialize, Serialize};

/// Load state of a plugin inside the host shell
///
/// State transitions:
/// ```text
/// Installed → Starting → Active → Stopping → Stopped
///                ↑                    │
///                └────────────────────┘ (reload)
///            Any live state → Failed (on error)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// Registered with the host, `on_start` not yet called
    #[default]
    Installed,
    /// `on_start` is running
    Starting,
    /// Accepting calls
    Active,
    /// `on_stop` is running
    Stopping,
    /// Unloaded; may be started again
    Stopped,
    /// Startup or shutdown failed
    Failed,
}

impl LifecycleState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, target),
            (Installed, Starting)
                | (Starting, Active)
                | (Active, Stopping)
                | (Stopping, Stopped)
                | (Stopped, Starting)
                | (Installed | Starting | Active | Stopping, Failed)
        )
    }

    /// Check if the plugin accepts method calls in this state
    pub fn accepts_calls(&self) -> bool {
        matches!(self, LifecycleState::Active)
    }

    /// Check if the plugin is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecycleState::Stopped | LifecycleState::Failed)
    }

    /// Compact encoding used by [`crate::PluginContext`]
    pub(crate) fn as_u8(self) -> u8 {
        match self {
            LifecycleState::Installed => 0,
            LifecycleState::Starting => 1,
            LifecycleState::Active => 2,
            LifecycleState::Stopping => 3,
            LifecycleState::Stopped => 4,
            LifecycleState::Failed => 5,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LifecycleState::Installed,
            1 => LifecycleState::Starting,
            2 => LifecycleState::Active,
            3 => LifecycleState::Stopping,
            4 => LifecycleState::Stopped,
            _ => LifecycleState::Failed,
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifecycleState::Installed => "Installed",
            LifecycleState::Starting => "Starting",
            LifecycleState::Active => "Active",
            LifecycleState::Stopping => "Stopping",
            LifecycleState::Stopped => "Stopped",
            LifecycleState::Failed => "Failed",
        };
        f.write_str(name)
    }
}
