//! Click bursts: a ring of particles that pop, fly out and fade.
//!
//! Per handle: idle -> bursting -> traveling -> fading -> idle.

use crate::constants::{BURST_POP_SCALE, HUE_DEGREES};
use crate::core::config::{BurstConfig, KindRanges};
use crate::core::pool::{Handle, Pool, PoolError};
use crate::core::schedule::{Scheduler, TimerId, Wake};
use crate::core::style::{pop_transform, EffectElement, ParticleKind, ParticleSpec};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

pub type BurstPlan = SmallVec<[ParticleSpec; 32]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BurstStep {
    /// Waiting for the frame that starts the pop.
    Pop(ParticleSpec),
    /// Pop delay elapsed; start the travel.
    Travel(ParticleSpec),
    Fade,
    Hide,
}

/// Lay out `config.count` particles evenly around `origin`.
///
/// All particles share one base hue so a burst reads as a single color
/// family.
pub fn plan_burst<R: Rng + ?Sized>(origin: Vec2, config: &BurstConfig, rng: &mut R) -> BurstPlan {
    let base_hue = rng.gen::<f32>() * HUE_DEGREES as f32;
    let count = config.count;
    (0..count)
        .map(|i| {
            let large = rng.gen_bool(config.large_probability.clamp(0.0, 1.0));
            let (kind, ranges): (_, &KindRanges) = if large {
                (ParticleKind::Large, &config.large)
            } else {
                (ParticleKind::Small, &config.small)
            };
            let angle = i as f32 / count as f32 * TAU;
            let distance = ranges.distance.at(rng.gen());
            let jitter = Vec2::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * config.position_jitter,
                (rng.gen::<f32>() * 2.0 - 1.0) * config.position_jitter,
            );
            ParticleSpec {
                kind,
                angle,
                start: origin + jitter,
                offset: Vec2::from_angle(angle) * distance,
                size: ranges.size.at(rng.gen()),
                hue: base_hue + (rng.gen::<f32>() * 2.0 - 1.0) * config.hue_jitter,
                lightness: ranges.lightness.at(rng.gen()),
                speed_factor: ranges.speed_factor,
                lifetime_ms: ranges.lifetime_ms.at(rng.gen()),
            }
        })
        .collect()
}

pub struct BurstManager<E> {
    pool: Pool<E, BurstStep>,
    config: BurstConfig,
}

impl<E: EffectElement> BurstManager<E> {
    pub fn new(
        elements: impl IntoIterator<Item = E>,
        config: BurstConfig,
    ) -> Result<Self, PoolError> {
        Ok(Self {
            pool: Pool::new(elements)?,
            config,
        })
    }

    #[inline]
    pub fn pool(&self) -> &Pool<E, BurstStep> {
        &self.pool
    }

    pub fn handle(&self, slot: usize) -> Option<&Handle<E, BurstStep>> {
        self.pool.get(slot)
    }

    /// Emit one burst at `origin`. Returns the slots used, in particle order.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        origin: Vec2,
        rng: &mut R,
        scheduler: &mut impl Scheduler,
    ) -> SmallVec<[usize; 32]> {
        let plan = plan_burst(origin, &self.config, rng);
        let mut slots = SmallVec::new();
        for spec in plan {
            slots.push(self.launch(spec, scheduler));
        }
        slots
    }

    fn launch(&mut self, spec: ParticleSpec, scheduler: &mut impl Scheduler) -> usize {
        let (slot, handle) = self.pool.acquire();
        handle.cancel_pending(scheduler);
        handle.element.set_css_text(&spec.initial_css());
        handle.active = true;
        let t = scheduler.request_frame(Wake::burst(slot));
        handle.arm(t, BurstStep::Pop(spec));
        slot
    }

    pub fn fire(&mut self, slot: usize, timer: TimerId, scheduler: &mut impl Scheduler) {
        let travel_delay_ms = self.config.travel_delay_ms;
        let fade_ms = self.config.fade_ms;
        let Some(handle) = self.pool.get_mut(slot) else {
            return;
        };
        let Some(step) = handle.take_if_current(timer) else {
            log::trace!("burst slot {slot}: ignoring stale timer {timer:?}");
            return;
        };
        let el = &handle.element;
        let (next, delay_ms) = match step {
            BurstStep::Pop(spec) => {
                el.reflow();
                el.set_property("transform", &pop_transform(BURST_POP_SCALE));
                el.set_property("opacity", "1");
                (BurstStep::Travel(spec), travel_delay_ms)
            }
            BurstStep::Travel(spec) => {
                el.set_property("transform", &spec.travel_transform());
                (BurstStep::Fade, spec.lifetime_ms.round() as u32)
            }
            BurstStep::Fade => {
                el.set_property("opacity", "0");
                (BurstStep::Hide, fade_ms)
            }
            BurstStep::Hide => {
                el.set_property("display", "none");
                handle.active = false;
                return;
            }
        };
        let t = scheduler.set_timeout(delay_ms, Wake::burst(slot));
        handle.arm(t, next);
    }
}
