//! Fixed-capacity pool of reusable effect elements.
//!
//! Slots are created once and never added or removed. Acquisition scans in
//! slot order for the first inactive handle and falls back to slot 0 when
//! every handle is busy, interrupting whatever animation it was running.

use crate::core::schedule::{Scheduler, TimerId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("effect pool needs at least one element")]
    Empty,
}

/// A deferred callback a handle is waiting on, tagged with the lifecycle
/// step it will run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending<S> {
    pub timer: TimerId,
    pub step: S,
}

#[derive(Debug)]
pub struct Handle<E, S> {
    pub element: E,
    pub active: bool,
    pending: Option<Pending<S>>,
}

impl<E, S: Copy> Handle<E, S> {
    fn new(element: E) -> Self {
        Self {
            element,
            active: false,
            pending: None,
        }
    }

    /// The callback this handle currently waits on, if any.
    #[inline]
    pub fn pending(&self) -> Option<Pending<S>> {
        self.pending
    }

    /// Record a newly scheduled callback. Callers cancel the previous one
    /// first; arming over a live timer would leave it orphaned.
    #[inline]
    pub fn arm(&mut self, timer: TimerId, step: S) {
        debug_assert!(self.pending.is_none(), "handle armed twice");
        self.pending = Some(Pending { timer, step });
    }

    #[inline]
    pub fn disarm(&mut self) -> Option<Pending<S>> {
        self.pending.take()
    }

    /// Cancel whatever this handle is waiting on before it is reconfigured.
    pub fn cancel_pending(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(p) = self.disarm() {
            scheduler.cancel(p.timer);
        }
    }

    /// Consume the pending callback if `timer` is the one this handle waits
    /// on. Anything else is a stale wake from a previous acquisition.
    pub fn take_if_current(&mut self, timer: TimerId) -> Option<S> {
        match self.pending {
            Some(p) if p.timer == timer => {
                self.pending = None;
                Some(p.step)
            }
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Pool<E, S> {
    slots: Vec<Handle<E, S>>,
}

impl<E, S: Copy> Pool<E, S> {
    pub fn new(elements: impl IntoIterator<Item = E>) -> Result<Self, PoolError> {
        let slots: Vec<_> = elements.into_iter().map(Handle::new).collect();
        if slots.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { slots })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the first inactive slot, or 0 when all are active.
    pub fn acquire_index(&self) -> usize {
        match self.slots.iter().position(|h| !h.active) {
            Some(i) => i,
            None => {
                log::debug!("pool saturated ({} slots); reusing slot 0", self.slots.len());
                0
            }
        }
    }

    pub fn acquire(&mut self) -> (usize, &mut Handle<E, S>) {
        let i = self.acquire_index();
        (i, &mut self.slots[i])
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Handle<E, S>> {
        self.slots.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Handle<E, S>> {
        self.slots.get_mut(index)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|h| h.active).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Handle<E, S>> {
        self.slots.iter()
    }
}
