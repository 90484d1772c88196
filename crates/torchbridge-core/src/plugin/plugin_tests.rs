#![allow(non_snake_case)]

use super::*;
use serde_json::json;

// Test helper plugin
struct EchoPlugin;

impl Plugin for EchoPlugin {
    fn on_start(&self, _ctx: &PluginContext) -> PluginResult<()> {
        Ok(())
    }

    fn handle_call(
        &self,
        _ctx: &PluginContext,
        call: &PluginCall,
    ) -> PluginResult<serde_json::Value> {
        match call.method() {
            "echo" => Ok(call.options().clone()),
            other => Err(PluginError::UnknownMethod(other.to_string())),
        }
    }

    fn on_stop(&self, _ctx: &PluginContext) -> PluginResult<()> {
        Ok(())
    }
}

// PluginContext tests

#[test]
fn PluginContext___new___starts_in_installed_state() {
    let ctx = PluginContext::new(PluginConfig::default());

    assert_eq!(ctx.state(), LifecycleState::Installed);
}

#[test]
fn PluginContext___transition_to___chain_through_lifecycle() {
    let ctx = PluginContext::new(PluginConfig::default());

    ctx.transition_to(LifecycleState::Starting).unwrap();
    ctx.transition_to(LifecycleState::Active).unwrap();

    assert_eq!(ctx.state(), LifecycleState::Active);
}

#[test]
fn PluginContext___transition_to___invalid_transition_fails() {
    let ctx = PluginContext::new(PluginConfig::default());

    let result = ctx.transition_to(LifecycleState::Active);

    assert!(matches!(result, Err(PluginError::InvalidState { .. })));
    assert_eq!(ctx.state(), LifecycleState::Installed);
}

#[test]
fn PluginContext___set_state___bypasses_validation() {
    let ctx = PluginContext::new(PluginConfig::default());

    ctx.set_state(LifecycleState::Failed);

    assert_eq!(ctx.state(), LifecycleState::Failed);
}

// Plugin trait tests

#[test]
fn Plugin___handle_call___echo_returns_options() {
    let plugin = EchoPlugin;
    let ctx = PluginContext::new(PluginConfig::default());
    let call = PluginCall::new(1, "echo", json!({"state": true}));

    let response = plugin.handle_call(&ctx, &call).unwrap();

    assert_eq!(response, json!({"state": true}));
}

#[test]
fn Plugin___handle_call___unknown_method_returns_error() {
    let plugin = EchoPlugin;
    let ctx = PluginContext::new(PluginConfig::default());
    let call = PluginCall::new(1, "strobe", json!({}));

    let result = plugin.handle_call(&ctx, &call);

    assert!(matches!(result, Err(PluginError::UnknownMethod(_))));
}

#[test]
fn Plugin___defaults___no_metadata_and_no_methods() {
    let plugin = EchoPlugin;

    assert!(plugin.metadata().is_none());
    assert!(plugin.supported_methods().is_empty());
}
