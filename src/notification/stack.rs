//! Presentation-side mirror of the store
//!
//! The stack mounts an entry for every toast in the store, unmounts entries
//! whose toast is gone, and collects the removal requests entries raise.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use super::entry::{Phase, ToastEntry};
use super::store::ToastStore;
use super::toast::ToastId;
use crate::config::ToastConfig;

/// Where a pointer event landed, in terms of the toast stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastHit {
    /// Over a toast's close control
    Close(ToastId),
    /// Anywhere else on a toast
    Body(ToastId),
}

/// Screen area of a drawn toast, recorded during render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastRegion {
    pub id: ToastId,
    pub area: Rect,
    pub close: Rect,
}

#[derive(Debug)]
pub struct ToastStack {
    entries: Vec<ToastEntry>,
    exit_hold: Duration,
    width: u16,
    synced_revision: Option<u64>,
    regions: Vec<ToastRegion>,
}

impl ToastStack {
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            entries: Vec::new(),
            exit_hold: config.exit_hold(),
            width: config.width,
            synced_revision: None,
            regions: Vec::new(),
        }
    }

    /// Reconcile mounted entries with the store's toasts
    pub fn sync(&mut self, store: &ToastStore, now: Instant) {
        if self.synced_revision == Some(store.revision()) {
            return;
        }

        let mut previous = std::mem::take(&mut self.entries);
        let mut next = Vec::with_capacity(store.len());

        for toast in store.toasts() {
            match previous.iter().position(|e| e.id() == toast.id) {
                Some(pos) => next.push(previous.swap_remove(pos)),
                None => next.push(ToastEntry::mount(toast.clone(), now, self.exit_hold)),
            }
        }

        // Whatever is left was removed from the store; dropping unmounts it
        for entry in previous {
            log::debug!("Unmounting {}", entry.id());
        }

        self.regions
            .retain(|region| next.iter().any(|e| e.id() == region.id));
        self.entries = next;
        self.synced_revision = Some(store.revision());
    }

    /// Advance every entry's timers, returning the ids that request removal
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        self.entries
            .iter_mut()
            .filter_map(|entry| entry.poll(now).then(|| entry.id()))
            .collect()
    }

    /// Dismiss a toast as if its close control was activated
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => entry.dismiss(now),
            None => false,
        }
    }

    /// Dismiss the newest toast that is not already leaving
    pub fn dismiss_newest(&mut self, now: Instant) -> Option<ToastId> {
        let entry = self.entries.iter_mut().find(|e| !e.is_leaving())?;
        entry.dismiss(now);
        Some(entry.id())
    }

    /// Map a screen cell to the toast drawn there, if any
    ///
    /// Cells outside every toast return `None` so the host UI keeps handling
    /// the event.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ToastHit> {
        let position = Position::new(column, row);
        let region = self
            .regions
            .iter()
            .find(|region| region.area.contains(position))?;

        if region.close.contains(position) {
            Some(ToastHit::Close(region.id))
        } else {
            Some(ToastHit::Body(region.id))
        }
    }

    /// Unmount everything, cancelling all pending timers
    pub fn unmount_all(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Unmounting {} toast(s)", self.entries.len());
        }
        self.entries.clear();
        self.regions.clear();
        self.synced_revision = None;
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn get(&self, id: ToastId) -> Option<&ToastEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when at least one entry is past its entrance tick
    pub fn has_visible(&self) -> bool {
        self.entries.iter().any(|e| e.phase() != Phase::Entering)
    }

    /// Earliest timer deadline across all entries
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().filter_map(ToastEntry::next_deadline).min()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn regions(&self) -> &[ToastRegion] {
        &self.regions
    }

    pub(crate) fn set_regions(&mut self, regions: Vec<ToastRegion>) {
        self.regions = regions;
    }
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod stack_tests;
