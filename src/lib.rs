//! Toast notifications for ratatui applications
//!
//! Mount a [`ToastProvider`], hand [`ToastHandle`]s to the code that raises
//! toasts, call [`ToastProvider::tick`] from the event loop and
//! [`ToastProvider::render`] after drawing the rest of the UI.

pub mod config;
pub mod error;
pub mod notification;
mod widgets;

#[cfg(test)]
mod test_utils;

pub use config::{Config, ToastConfig};
pub use error::{ConfigError, ToastError};
pub use notification::{
    Phase, Severity, Toast, ToastHandle, ToastHit, ToastId, ToastProvider, ToastRequest,
};
