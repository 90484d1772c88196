//! Panic containment around plugin code
//!
//! A panic inside a plugin must not unwind into the host shell. The handle
//! runs every plugin entry point through [`catch_panic`] and marks the plugin
//! failed when one panics.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use torchbridge_core::PluginError;

/// Run `f`, converting a panic into [`PluginError::Internal`]
pub(crate) fn catch_panic<F, R>(f: F) -> Result<R, PluginError>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let panic_msg = panic_to_string(payload.as_ref());
        tracing::error!("Plugin panic caught: {}", panic_msg);
        PluginError::Internal(panic_msg)
    })
}

/// Convert a panic payload to a human-readable string
fn panic_to_string(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("Plugin panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("Plugin panicked: {}", s)
    } else {
        "Plugin panicked with unknown payload".to_string()
    }
}
