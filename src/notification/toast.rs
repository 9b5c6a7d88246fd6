use std::fmt;
use std::time::Duration;

use ratatui::style::Color;

/// Time to live applied when a request does not specify one
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Identifier of a toast, unique among the toasts of one store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Toast severity. Only affects how the toast is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Severity::Success => '✓',
            Severity::Error => '✗',
            Severity::Warning => '!',
            Severity::Info => 'i',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Cyan,
        }
    }
}

/// An active toast. Never mutated after the store creates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub severity: Severity,
    pub title: Option<String>,
    pub message: String,
    /// Time to live in milliseconds; 0 disables auto-removal
    pub duration_ms: u64,
    /// Disables auto-removal regardless of `duration_ms`
    pub persistent: bool,
}

impl Toast {
    /// Delay after which the toast removes itself, `None` if it never does
    pub fn effective_duration(&self) -> Option<Duration> {
        if self.persistent || self.duration_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.duration_ms))
        }
    }
}

/// A toast as requested by a caller, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub severity: Severity,
    pub message: String,
    pub title: Option<String>,
    pub duration_ms: Option<u64>,
    pub persistent: Option<bool>,
}

impl ToastRequest {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            title: None,
            duration_ms: None,
            persistent: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = Some(persistent);
        self
    }

    pub(crate) fn into_toast(self, id: ToastId, default_duration_ms: u64) -> Toast {
        Toast {
            id,
            severity: self.severity,
            title: self.title,
            message: self.message,
            duration_ms: self.duration_ms.unwrap_or(default_duration_ms),
            persistent: self.persistent.unwrap_or(false),
        }
    }
}

#[cfg(test)]
#[path = "toast_tests.rs"]
mod toast_tests;
