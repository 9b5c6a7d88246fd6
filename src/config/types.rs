// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::notification::DEFAULT_DURATION_MS;

/// Toast configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Time to live for toasts that do not specify one
    pub default_duration_ms: u64,
    /// How long a leaving toast stays on screen before it is removed
    pub exit_hold_ms: u64,
    /// Toast width in columns, clamped to the frame
    pub width: u16,
}

impl ToastConfig {
    pub fn exit_hold(&self) -> Duration {
        Duration::from_millis(self.exit_hold_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            default_duration_ms: DEFAULT_DURATION_MS,
            exit_hold_ms: 300,
            width: 48,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastConfig,
}
