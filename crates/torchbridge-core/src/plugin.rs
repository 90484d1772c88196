//! Plugin trait and context types

use crate::{LifecycleState, PluginCall, PluginConfig, PluginError, PluginResult};
use std::sync::atomic::{AtomicU8, Ordering};

/// Context provided to plugin operations
pub struct PluginContext {
    /// Plugin configuration
    pub config: PluginConfig,
    /// Current lifecycle state
    state: AtomicU8,
}

impl PluginContext {
    /// Create a new plugin context
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            state: AtomicU8::new(LifecycleState::Installed.as_u8()),
        }
    }

    /// Get current lifecycle state
    pub fn state(&self) -> LifecycleState {
        LifecycleState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Set lifecycle state directly (bypassing transition validation)
    ///
    /// Use this for error recovery scenarios where normal transitions don't apply.
    pub fn set_state(&self, state: LifecycleState) {
        self.state.store(state.as_u8(), Ordering::SeqCst);
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&self, target: LifecycleState) -> PluginResult<()> {
        let current = self.state();
        if current.can_transition_to(target) {
            self.set_state(target);
            Ok(())
        } else {
            Err(PluginError::InvalidState {
                expected: format!("state that can transition to {}", target),
                actual: current.to_string(),
            })
        }
    }
}

/// Main trait for implementing torchbridge plugins
///
/// Every method is synchronous: the host dispatches one call, the plugin
/// performs its hardware writes and returns. Nothing is spawned or awaited.
///
/// # Example
///
/// ```ignore
/// use torchbridge_core::prelude::*;
///
/// struct EchoPlugin;
///
/// impl Plugin for EchoPlugin {
///     fn on_start(&self, _ctx: &PluginContext) -> PluginResult<()> {
///         Ok(())
///     }
///
///     fn handle_call(
///         &self,
///         _ctx: &PluginContext,
///         call: &PluginCall,
///     ) -> PluginResult<serde_json::Value> {
///         match call.method() {
///             "echo" => Ok(call.options().clone()),
///             other => Err(PluginError::UnknownMethod(other.to_string())),
///         }
///     }
///
///     fn on_stop(&self, _ctx: &PluginContext) -> PluginResult<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync + 'static {
    /// Called once when the host loads the plugin
    ///
    /// The plugin transitions to Active state after this returns successfully.
    fn on_start(&self, ctx: &PluginContext) -> PluginResult<()>;

    /// Handle a method call from the host
    ///
    /// `Ok` resolves the call with the returned value; `Err` rejects it with
    /// the error's display message.
    fn handle_call(&self, ctx: &PluginContext, call: &PluginCall)
    -> PluginResult<serde_json::Value>;

    /// Called when the host unloads the plugin
    fn on_stop(&self, ctx: &PluginContext) -> PluginResult<()>;

    /// Get plugin metadata
    fn metadata(&self) -> Option<crate::PluginMetadata> {
        None
    }

    /// List the method names this plugin answers
    fn supported_methods(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

#[cfg(test)]
#[path = "plugin/plugin_tests.rs"]
mod plugin_tests;
