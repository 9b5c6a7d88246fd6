use super::toast::{DEFAULT_DURATION_MS, Severity, Toast, ToastId, ToastRequest};

/// Authoritative list of active toasts, newest first
#[derive(Debug)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration_ms: u64,
    /// Bumped on every mutation so the stack can skip redundant syncs
    revision: u64,
}

impl ToastStore {
    pub fn new(default_duration_ms: u64) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            default_duration_ms,
            revision: 0,
        }
    }

    /// Assign a fresh id, merge defaults and prepend the toast
    pub fn add(&mut self, request: ToastRequest) -> ToastId {
        self.next_id += 1;
        let id = ToastId::new(self.next_id);
        let toast = request.into_toast(id, self.default_duration_ms);

        log::debug!(
            "Added {} ({}, {}ms{})",
            id,
            toast.severity.label(),
            toast.duration_ms,
            if toast.persistent { ", persistent" } else { "" }
        );

        self.toasts.insert(0, toast);
        self.bump();
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.toasts.iter().position(|t| t.id == id) else {
            log::debug!("Ignoring removal of unknown {}", id);
            return false;
        };

        self.toasts.remove(pos);
        self.bump();
        log::debug!("Removed {}", id);
        true
    }

    pub fn success(&mut self, message: &str, title: Option<&str>) -> ToastId {
        self.add(shorthand(Severity::Success, message, title))
    }

    pub fn error(&mut self, message: &str, title: Option<&str>) -> ToastId {
        self.add(shorthand(Severity::Error, message, title))
    }

    pub fn warning(&mut self, message: &str, title: Option<&str>) -> ToastId {
        self.add(shorthand(Severity::Warning, message, title))
    }

    pub fn info(&mut self, message: &str, title: Option<&str>) -> ToastId {
        self.add(shorthand(Severity::Info, message, title))
    }

    pub fn clear(&mut self) {
        if !self.toasts.is_empty() {
            self.toasts.clear();
            self.bump();
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn default_duration_ms(&self) -> u64 {
        self.default_duration_ms
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS)
    }
}

fn shorthand(severity: Severity, message: &str, title: Option<&str>) -> ToastRequest {
    let request = ToastRequest::new(severity, message);
    match title {
        Some(title) => request.title(title),
        None => request,
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
