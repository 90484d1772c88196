//! torchbridge-core - Plugin trait, host call object, and lifecycle management
//!
//! This crate provides the types shared between a hybrid application shell and
//! the native plugins it loads:
//! - [`Plugin`] trait for implementing plugin methods
//! - [`PluginCall`] and [`CallOutcome`] for the resolve/reject call surface
//! - [`LifecycleState`] for tracking plugin load state
//! - [`PluginError`] for error handling
//! - [`PluginConfig`] for plugin configuration

mod call;
mod config;
mod error;
mod lifecycle;
mod plugin;

pub use call::{CallOutcome, PluginCall};
pub use config::{PluginConfig, PluginMetadata};
pub use error::{PluginError, PluginResult};
pub use lifecycle::LifecycleState;
pub use plugin::{Plugin, PluginContext};

/// Log levels shared with the host log sink
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Parse a level name as written in [`PluginConfig::log_level`]
    ///
    /// Matching is case-insensitive; `"warning"` is accepted as an alias for
    /// `"warn"`. Unknown names return `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CallOutcome, LifecycleState, LogLevel, Plugin, PluginCall, PluginConfig, PluginContext,
        PluginError, PluginMetadata, PluginResult,
    };
}
