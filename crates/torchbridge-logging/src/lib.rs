//! torchbridge-logging - Tracing to host log sink bridge
//!
//! This crate provides:
//! - [`HostLoggingLayer`] tracing layer that forwards events to the host shell
//! - [`LogSink`] type for the host-registered log function
//! - Level gating through the global [`LogSinkManager`]

mod layer;
mod sink;

pub use layer::{HostLoggingLayer, init_logging};
pub use sink::{LogSink, LogSinkManager};
pub use torchbridge_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{HostLoggingLayer, LogLevel, LogSink, LogSinkManager, init_logging};
}
