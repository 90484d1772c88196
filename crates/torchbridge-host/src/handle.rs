//! Plugin handle: one loaded plugin instance

use crate::panic_guard::catch_panic;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use torchbridge_core::{
    CallOutcome, LifecycleState, LogLevel, Plugin, PluginCall, PluginConfig, PluginContext,
    PluginError, PluginMetadata, PluginResult,
};
use torchbridge_logging::LogSinkManager;

/// Handle to a plugin instance owned by the host shell
pub struct PluginHandle {
    /// The plugin implementation
    plugin: Box<dyn Plugin>,
    /// Plugin context (state, config)
    context: PluginContext,
    /// Serializes lifecycle transitions; calls do not take it
    lifecycle: Mutex<()>,
    next_call_id: AtomicU64,
    log_level: LogLevel,
}

impl PluginHandle {
    /// Create a handle in the `Installed` state
    ///
    /// An unknown `log_level` name is a configuration error. The level itself
    /// takes effect in [`PluginHandle::start`].
    pub fn new(plugin: Box<dyn Plugin>, config: PluginConfig) -> PluginResult<Self> {
        let log_level = LogLevel::parse(&config.log_level).ok_or_else(|| {
            PluginError::ConfigError(format!("unknown log level '{}'", config.log_level))
        })?;

        Ok(Self {
            plugin,
            context: PluginContext::new(config),
            lifecycle: Mutex::new(()),
            next_call_id: AtomicU64::new(1),
            log_level,
        })
    }

    /// Get the current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.context.state()
    }

    pub fn metadata(&self) -> Option<PluginMetadata> {
        self.plugin.metadata()
    }

    pub fn supported_methods(&self) -> Vec<&'static str> {
        self.plugin.supported_methods()
    }

    /// Load the plugin: `Starting`, `on_start`, then `Active` or `Failed`
    ///
    /// Applies the configured log level first. The host log sink is process
    /// wide, so the most recently started handle sets the level for all.
    pub fn start(&self) -> PluginResult<()> {
        let _guard = self.lifecycle.lock();
        self.context.transition_to(LifecycleState::Starting)?;
        self.set_log_level(self.log_level);

        let result = catch_panic(|| self.plugin.on_start(&self.context))
            .and_then(|started| started);

        match result {
            Ok(()) => {
                self.context.transition_to(LifecycleState::Active)?;
                tracing::info!("Plugin started successfully");
                Ok(())
            }
            Err(e) => {
                self.context.set_state(LifecycleState::Failed);
                tracing::error!("Plugin failed to start: {}", e);
                Err(e)
            }
        }
    }

    /// Dispatch one method call with JSON options
    ///
    /// Never fails: every error, including malformed options and a panicking
    /// plugin, becomes a rejection.
    pub fn call(&self, method: &str, options: &[u8]) -> CallOutcome {
        let call_id = self.next_call_id.fetch_add(1, Ordering::SeqCst);
        CallOutcome::from_result(self.dispatch(call_id, method, options))
    }

    /// Dispatch one method call with options already parsed
    pub fn call_value(&self, method: &str, options: serde_json::Value) -> CallOutcome {
        let call_id = self.next_call_id.fetch_add(1, Ordering::SeqCst);
        let call = PluginCall::new(call_id, method, options);
        CallOutcome::from_result(self.invoke(&call))
    }

    fn dispatch(
        &self,
        call_id: u64,
        method: &str,
        options: &[u8],
    ) -> PluginResult<serde_json::Value> {
        let call = PluginCall::from_json(call_id, method, options)?;
        self.invoke(&call)
    }

    fn invoke(&self, call: &PluginCall) -> PluginResult<serde_json::Value> {
        let state = self.context.state();
        if !state.accepts_calls() {
            return Err(PluginError::InvalidState {
                expected: LifecycleState::Active.to_string(),
                actual: state.to_string(),
            });
        }

        let result = catch_panic(|| self.plugin.handle_call(&self.context, call));
        match result {
            Ok(handled) => handled,
            Err(e) => {
                self.mark_failed();
                Err(e)
            }
        }
    }

    /// Unload the plugin
    ///
    /// Shutting down a plugin that is already stopped or failed is a no-op.
    pub fn shutdown(&self) -> PluginResult<()> {
        let _guard = self.lifecycle.lock();
        let current_state = self.context.state();

        if current_state != LifecycleState::Active {
            if current_state.is_terminal() {
                return Ok(());
            }
            return Err(PluginError::InvalidState {
                expected: LifecycleState::Active.to_string(),
                actual: current_state.to_string(),
            });
        }

        self.context.transition_to(LifecycleState::Stopping)?;

        let result = catch_panic(|| self.plugin.on_stop(&self.context))
            .and_then(|stopped| stopped);

        match result {
            Ok(()) => {
                self.context.transition_to(LifecycleState::Stopped)?;
                tracing::info!("Plugin shutdown complete");
                Ok(())
            }
            Err(e) => {
                self.context.set_state(LifecycleState::Failed);
                tracing::error!("Plugin shutdown failed: {}", e);
                Err(PluginError::ShutdownFailed(e.to_string()))
            }
        }
    }

    /// Set the minimum level forwarded to the host log sink
    ///
    /// Takes effect for the next event, including callsites that were
    /// already hit below the old level. Process wide, like the sink.
    pub fn set_log_level(&self, level: LogLevel) {
        LogSinkManager::global().set_level(level);
    }

    /// Mark the plugin as failed
    ///
    /// Called after a panic inside the plugin. All further calls are rejected.
    pub fn mark_failed(&self) {
        tracing::error!("Marking plugin as failed after a panic");
        self.context.set_state(LifecycleState::Failed);
    }
}
