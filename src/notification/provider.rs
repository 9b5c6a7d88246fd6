//! Scoped access to the toast system
//!
//! A [`ToastProvider`] owns the store and the stack for as long as it is
//! mounted. Code that wants to raise toasts gets a [`ToastHandle`] from it;
//! once the provider is unmounted every handle is detached and using one is a
//! contract violation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use ratatui::Frame;

use super::render::render_toasts;
use super::stack::{ToastHit, ToastStack};
use super::store::ToastStore;
use super::toast::{Toast, ToastId, ToastRequest};
use crate::config::ToastConfig;
use crate::error::ToastError;

#[derive(Debug)]
pub struct ToastProvider {
    store: Rc<RefCell<ToastStore>>,
    stack: ToastStack,
}

impl ToastProvider {
    pub fn mount(config: &ToastConfig) -> Self {
        log::debug!("Mounting toast provider");
        Self {
            store: Rc::new(RefCell::new(ToastStore::new(config.default_duration_ms))),
            stack: ToastStack::new(config),
        }
    }

    pub fn handle(&self) -> ToastHandle {
        ToastHandle {
            store: Rc::downgrade(&self.store),
        }
    }

    /// Bring the stack up to date with the store
    pub fn sync(&mut self, now: Instant) {
        let store = self.store.borrow();
        self.stack.sync(&store, now);
    }

    /// Advance timers and apply the removals they request
    ///
    /// Returns how many toasts were removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.sync(now);

        let requests = self.stack.tick(now);
        let removed = {
            let mut store = self.store.borrow_mut();
            requests.into_iter().filter(|id| store.remove(*id)).count()
        };

        self.sync(now);
        removed
    }

    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        self.sync(now);
        self.stack.dismiss(id, now)
    }

    pub fn dismiss_newest(&mut self, now: Instant) -> Option<ToastId> {
        self.sync(now);
        self.stack.dismiss_newest(now)
    }

    /// Route a click; activating a close control dismisses that toast
    pub fn click(&mut self, column: u16, row: u16, now: Instant) -> Option<ToastHit> {
        let hit = self.stack.hit_test(column, row);
        if let Some(ToastHit::Close(id)) = hit {
            self.stack.dismiss(id, now);
        }
        hit
    }

    pub fn render(&mut self, frame: &mut Frame) {
        render_toasts(frame, &mut self.stack);
    }

    /// Snapshot of the active toasts, newest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.store.borrow().toasts().to_vec()
    }

    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    pub fn stack(&self) -> &ToastStack {
        &self.stack
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.stack.next_deadline()
    }

    /// Tear down: cancel every timer and drop every toast
    pub fn unmount(self) {
        drop(self);
    }

    fn teardown(&mut self) {
        self.stack.unmount_all();
        self.store.borrow_mut().clear();
        log::debug!("Toast provider unmounted");
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Application-facing toast API
///
/// The plain methods panic when the provider is gone; the `try_` variants
/// return [`ToastError::ProviderUnmounted`] instead.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    store: Weak<RefCell<ToastStore>>,
}

impl ToastHandle {
    pub fn is_mounted(&self) -> bool {
        self.store.strong_count() > 0
    }

    pub fn try_add(&self, request: ToastRequest) -> Result<ToastId, ToastError> {
        self.with_store(|store| store.add(request))
    }

    pub fn try_remove(&self, id: ToastId) -> Result<bool, ToastError> {
        self.with_store(|store| store.remove(id))
    }

    pub fn try_success(&self, message: &str, title: Option<&str>) -> Result<ToastId, ToastError> {
        self.with_store(|store| store.success(message, title))
    }

    pub fn try_error(&self, message: &str, title: Option<&str>) -> Result<ToastId, ToastError> {
        self.with_store(|store| store.error(message, title))
    }

    pub fn try_warning(&self, message: &str, title: Option<&str>) -> Result<ToastId, ToastError> {
        self.with_store(|store| store.warning(message, title))
    }

    pub fn try_info(&self, message: &str, title: Option<&str>) -> Result<ToastId, ToastError> {
        self.with_store(|store| store.info(message, title))
    }

    /// # Panics
    ///
    /// Panics if the provider has been unmounted.
    pub fn add(&self, request: ToastRequest) -> ToastId {
        self.try_add(request).unwrap_or_else(|e| contract_violation(e))
    }

    /// Remove a toast by id. Unknown ids are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the provider has been unmounted.
    pub fn remove(&self, id: ToastId) -> bool {
        self.try_remove(id).unwrap_or_else(|e| contract_violation(e))
    }

    pub fn success(&self, message: &str, title: Option<&str>) -> ToastId {
        self.try_success(message, title)
            .unwrap_or_else(|e| contract_violation(e))
    }

    pub fn error(&self, message: &str, title: Option<&str>) -> ToastId {
        self.try_error(message, title)
            .unwrap_or_else(|e| contract_violation(e))
    }

    pub fn warning(&self, message: &str, title: Option<&str>) -> ToastId {
        self.try_warning(message, title)
            .unwrap_or_else(|e| contract_violation(e))
    }

    pub fn info(&self, message: &str, title: Option<&str>) -> ToastId {
        self.try_info(message, title)
            .unwrap_or_else(|e| contract_violation(e))
    }

    fn with_store<R>(&self, f: impl FnOnce(&mut ToastStore) -> R) -> Result<R, ToastError> {
        let Some(shared) = self.store.upgrade() else {
            log::error!("Toast handle used after its provider was unmounted");
            return Err(ToastError::ProviderUnmounted);
        };
        let mut store = shared.borrow_mut();
        Ok(f(&mut store))
    }
}

fn contract_violation(err: ToastError) -> ! {
    panic!("{}", err)
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
