//! Pointer trail: one short-lived dot per accepted move.
//!
//! Per handle: idle -> visible -> shrinking -> idle. The dwell and fade are
//! timeouts, the shrink itself waits for the next frame so the transform and
//! opacity change land together and the stylesheet transition animates them.

use crate::constants::HUE_DEGREES;
use crate::core::config::TrailConfig;
use crate::core::pool::{Handle, Pool, PoolError};
use crate::core::schedule::{Scheduler, TimerId, Wake};
use crate::core::style::{EffectElement, TrailDot, SHRUNK};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailStep {
    /// Dwell elapsed; ask for a frame.
    Dwell,
    /// Frame arrived; start shrinking.
    Shrink,
    /// Fade finished; release.
    Hide,
}

pub struct TrailManager<E> {
    pool: Pool<E, TrailStep>,
    config: TrailConfig,
}

impl<E: EffectElement> TrailManager<E> {
    pub fn new(
        elements: impl IntoIterator<Item = E>,
        config: TrailConfig,
    ) -> Result<Self, PoolError> {
        Ok(Self {
            pool: Pool::new(elements)?,
            config,
        })
    }

    #[inline]
    pub fn pool(&self) -> &Pool<E, TrailStep> {
        &self.pool
    }

    pub fn handle(&self, slot: usize) -> Option<&Handle<E, TrailStep>> {
        self.pool.get(slot)
    }

    /// Show a dot at `position`. Returns the slot used.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        position: Vec2,
        now_ms: f64,
        rng: &mut R,
        scheduler: &mut impl Scheduler,
    ) -> usize {
        let dot = TrailDot {
            position,
            size: self.config.size.at(rng.gen::<f32>()),
            hue: now_ms.rem_euclid(HUE_DEGREES).floor() as f32,
        };
        let dwell_ms = self.config.dwell_ms;

        let (slot, handle) = self.pool.acquire();
        handle.cancel_pending(scheduler);
        handle.element.set_css_text(&dot.css());
        handle.active = true;
        let timer = scheduler.set_timeout(dwell_ms, Wake::trail(slot));
        handle.arm(timer, TrailStep::Dwell);
        slot
    }

    pub fn fire(&mut self, slot: usize, timer: TimerId, scheduler: &mut impl Scheduler) {
        let fade_ms = self.config.fade_ms;
        let Some(handle) = self.pool.get_mut(slot) else {
            return;
        };
        let Some(step) = handle.take_if_current(timer) else {
            log::trace!("trail slot {slot}: ignoring stale timer {timer:?}");
            return;
        };
        match step {
            TrailStep::Dwell => {
                let t = scheduler.request_frame(Wake::trail(slot));
                handle.arm(t, TrailStep::Shrink);
            }
            TrailStep::Shrink => {
                handle.element.set_property("transform", SHRUNK);
                handle.element.set_property("opacity", "0");
                let t = scheduler.set_timeout(fade_ms, Wake::trail(slot));
                handle.arm(t, TrailStep::Hide);
            }
            TrailStep::Hide => {
                handle.element.set_property("display", "none");
                handle.active = false;
            }
        }
    }
}
