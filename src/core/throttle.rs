use crate::core::config::ThrottleConfig;
use glam::Vec2;

/// Sampling filter in front of the trail: drops moves that arrive too soon
/// after the last one that passed the time gate, or that land too close to
/// the last accepted point. Nothing is queued.
#[derive(Clone, Debug)]
pub struct MoveThrottle {
    config: ThrottleConfig,
    last_time_ms: f64,
    last_point: Vec2,
}

impl MoveThrottle {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            last_time_ms: 0.0,
            last_point: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn last_point(&self) -> Vec2 {
        self.last_point
    }

    pub fn accept(&mut self, point: Vec2, now_ms: f64) -> bool {
        if now_ms - self.last_time_ms < self.config.min_interval_ms {
            return false;
        }
        // The time gate stamps even when the distance gate rejects below.
        self.last_time_ms = now_ms;

        if point.distance(self.last_point) < self.config.min_distance {
            return false;
        }
        self.last_point = point;
        true
    }
}

impl Default for MoveThrottle {
    fn default() -> Self {
        Self::new(ThrottleConfig::default())
    }
}
