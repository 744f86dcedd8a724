//! Deferred-callback abstraction.
//!
//! Effects never block; every lifecycle step is posted to a [`Scheduler`] as
//! either a timeout or a next-frame callback. When it fires the host hands the
//! [`Wake`] and its [`TimerId`] back to `CursorEffects::fire`.

use crate::constants::FRAME_INTERVAL_MS;

/// Identifier of one scheduled callback, unique for the scheduler's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    Trail,
    Burst,
}

/// Which handle a fired callback belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wake {
    pub effect: Effect,
    pub slot: usize,
}

impl Wake {
    #[inline]
    pub fn trail(slot: usize) -> Self {
        Self {
            effect: Effect::Trail,
            slot,
        }
    }

    #[inline]
    pub fn burst(slot: usize) -> Self {
        Self {
            effect: Effect::Burst,
            slot,
        }
    }
}

pub trait Scheduler {
    fn set_timeout(&mut self, delay_ms: u32, wake: Wake) -> TimerId;
    fn request_frame(&mut self, wake: Wake) -> TimerId;
    /// Cancelling an unknown or already fired timer is a no-op.
    fn cancel(&mut self, timer: TimerId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Timeout,
    Frame,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    due_ms: f64,
    kind: TimerKind,
    timer: TimerId,
    wake: Wake,
}

/// Virtual-time scheduler for headless driving and tests.
///
/// Frame callbacks are due at the next multiple of the frame interval, which
/// mirrors a display refresh. Callbacks due at the same instant run in
/// registration order.
#[derive(Debug)]
pub struct ManualScheduler {
    now_ms: f64,
    frame_interval_ms: f64,
    next_id: u64,
    queue: Vec<Entry>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}

impl ManualScheduler {
    pub fn new(frame_interval_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            frame_interval_ms: frame_interval_ms.max(f64::EPSILON),
            next_id: 1,
            queue: Vec::new(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Number of callbacks still waiting to fire.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn pending_for(&self, wake: Wake) -> usize {
        self.queue.iter().filter(|e| e.wake == wake).count()
    }

    pub fn kind_of(&self, timer: TimerId) -> Option<TimerKind> {
        self.queue.iter().find(|e| e.timer == timer).map(|e| e.kind)
    }

    pub fn due_of(&self, timer: TimerId) -> Option<f64> {
        self.queue.iter().find(|e| e.timer == timer).map(|e| e.due_ms)
    }

    /// Pop the earliest callback due at or before `until_ms`, moving virtual
    /// time forward to its due time.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<(Wake, TimerId)> {
        let (idx, entry) = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then_with(|| a.timer.cmp(&b.timer))
            })
            .map(|(i, e)| (i, *e))?;
        self.queue.remove(idx);
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some((entry.wake, entry.timer))
    }

    /// Move virtual time to `ms` without running anything.
    pub fn set_now(&mut self, ms: f64) {
        self.now_ms = self.now_ms.max(ms);
    }

    fn push(&mut self, due_ms: f64, kind: TimerKind, wake: Wake) -> TimerId {
        let timer = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(Entry {
            due_ms,
            kind,
            timer,
            wake,
        });
        timer
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&mut self, delay_ms: u32, wake: Wake) -> TimerId {
        let due = self.now_ms + delay_ms as f64;
        self.push(due, TimerKind::Timeout, wake)
    }

    fn request_frame(&mut self, wake: Wake) -> TimerId {
        let step = self.frame_interval_ms;
        let due = ((self.now_ms / step).floor() + 1.0) * step;
        self.push(due, TimerKind::Frame, wake)
    }

    fn cancel(&mut self, timer: TimerId) {
        self.queue.retain(|e| e.timer != timer);
    }
}
