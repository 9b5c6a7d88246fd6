//! Notification module for toaster
//!
//! Provides a reusable toast system that displays transient messages.
//! Any component in the application can reach it through a [`ToastHandle`]
//! obtained from a mounted [`ToastProvider`].

mod entry;
mod legacy;
mod provider;
mod render;
mod stack;
mod store;
mod timer;
mod toast;

pub use entry::{DEFAULT_EXIT_HOLD, Phase, ToastEntry};
#[allow(deprecated)]
pub use legacy::show_toast;
pub use provider::{ToastHandle, ToastProvider};
pub use render::{layout_toasts, render_toasts, wrap_message};
pub use stack::{ToastHit, ToastRegion, ToastStack};
pub use store::ToastStore;
pub use timer::OneShot;
pub use toast::{DEFAULT_DURATION_MS, Severity, Toast, ToastId, ToastRequest};
