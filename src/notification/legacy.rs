use super::toast::Severity;

/// Old free-function entry point, kept so existing callers still link
///
/// It does nothing except log a warning: toasts now need a mounted
/// [`ToastProvider`](super::ToastProvider).
#[deprecated(note = "use a ToastHandle from a mounted ToastProvider")]
pub fn show_toast(message: &str, severity: Severity) {
    log::warn!(
        "show_toast is deprecated and does nothing; dropped {} toast {:?}",
        severity.label(),
        message
    );
}
