use crate::core::burst::BurstManager;
use crate::core::config::EffectsConfig;
use crate::core::pool::PoolError;
use crate::core::schedule::{Effect, Scheduler, TimerId, Wake};
use crate::core::style::EffectElement;
use crate::core::throttle::MoveThrottle;
use crate::core::trail::TrailManager;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Trail and burst effects behind the two input events.
///
/// The host feeds pointer moves and clicks in, and hands every fired
/// scheduler callback back through [`fire`](Self::fire).
pub struct CursorEffects<E, R> {
    pub throttle: MoveThrottle,
    pub trail: TrailManager<E>,
    pub burst: BurstManager<E>,
    rng: R,
}

impl<E: EffectElement, R: Rng> CursorEffects<E, R> {
    pub fn new(
        trail_elements: impl IntoIterator<Item = E>,
        particle_elements: impl IntoIterator<Item = E>,
        config: EffectsConfig,
        rng: R,
    ) -> Result<Self, PoolError> {
        let EffectsConfig {
            throttle,
            trail,
            burst,
        } = config;
        Ok(Self {
            throttle: MoveThrottle::new(throttle),
            trail: TrailManager::new(trail_elements, trail)?,
            burst: BurstManager::new(particle_elements, burst)?,
            rng,
        })
    }

    /// Returns the trail slot used, or `None` if the throttle dropped the move.
    pub fn pointer_move(
        &mut self,
        x: f32,
        y: f32,
        now_ms: f64,
        scheduler: &mut impl Scheduler,
    ) -> Option<usize> {
        let point = Vec2::new(x, y);
        if !self.throttle.accept(point, now_ms) {
            return None;
        }
        Some(self.trail.spawn(point, now_ms, &mut self.rng, scheduler))
    }

    pub fn click(
        &mut self,
        x: f32,
        y: f32,
        scheduler: &mut impl Scheduler,
    ) -> SmallVec<[usize; 32]> {
        self.burst.spawn(Vec2::new(x, y), &mut self.rng, scheduler)
    }

    pub fn fire(&mut self, wake: Wake, timer: TimerId, scheduler: &mut impl Scheduler) {
        match wake.effect {
            Effect::Trail => self.trail.fire(wake.slot, timer, scheduler),
            Effect::Burst => self.burst.fire(wake.slot, timer, scheduler),
        }
    }
}
