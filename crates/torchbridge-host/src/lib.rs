//! torchbridge-host - Host-side plugin handle
//!
//! The host shell owns one [`PluginHandle`] per loaded plugin. The handle
//! drives the plugin lifecycle and turns each method call into a
//! [`CallOutcome`] the shell can resolve or reject.

mod handle;
mod panic_guard;

pub use handle::PluginHandle;
pub use torchbridge_core::{CallOutcome, LifecycleState, LogLevel, PluginConfig};
pub use torchbridge_logging::LogSink;

use torchbridge_logging::{LogSinkManager, init_logging};

/// Forward plugin log events to the host shell's log function
///
/// Installs the host logging layer as the global subscriber on first use.
/// Events below the level configured through [`PluginConfig::log_level`] are
/// dropped before they reach the sink.
pub fn install_log_sink(sink: LogSink) {
    LogSinkManager::global().set_sink(Some(sink));
    init_logging();
}
