use crate::constants::*;

/// Value range starting at `min`, `span` wide. Sampling with [`at`](Self::at)
/// maps [0, 1) onto it; [`contains`](Self::contains) accepts both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub span: f32,
}

impl Span {
    pub const fn new((min, span): (f32, f32)) -> Self {
        Self { min, span }
    }

    /// Map a unit sample in [0, 1) into the range.
    #[inline]
    pub fn at(&self, unit: f32) -> f32 {
        self.min + unit * self.span
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.min + self.span
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThrottleConfig {
    pub min_interval_ms: f64,
    pub min_distance: f32,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: MOVE_THROTTLE_MS,
            min_distance: MOVE_MIN_DISTANCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub pool_size: usize,
    pub dwell_ms: u32,
    pub fade_ms: u32,
    pub size: Span,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            pool_size: TRAIL_POOL_SIZE,
            dwell_ms: TRAIL_DWELL_MS,
            fade_ms: FADE_MS,
            size: Span::new((TRAIL_SIZE_MIN, TRAIL_SIZE_SPAN)),
        }
    }
}

/// Ranges for one particle kind.
#[derive(Clone, Debug, PartialEq)]
pub struct KindRanges {
    pub size: Span,
    pub lightness: Span,
    pub distance: Span,
    pub lifetime_ms: Span,
    pub speed_factor: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub pool_size: usize,
    pub count: usize,
    pub travel_delay_ms: u32,
    pub fade_ms: u32,
    pub large_probability: f64,
    pub hue_jitter: f32,
    pub position_jitter: f32,
    pub small: KindRanges,
    pub large: KindRanges,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            pool_size: PARTICLE_POOL_SIZE,
            count: BURST_PARTICLE_COUNT,
            travel_delay_ms: BURST_TRAVEL_DELAY_MS,
            fade_ms: FADE_MS,
            large_probability: BURST_LARGE_PROBABILITY,
            hue_jitter: BURST_HUE_JITTER,
            position_jitter: BURST_POSITION_JITTER,
            small: KindRanges {
                size: Span::new(SMALL_SIZE),
                lightness: Span::new(SMALL_LIGHTNESS),
                distance: Span::new(SMALL_DISTANCE),
                lifetime_ms: Span::new(SMALL_LIFETIME_MS),
                speed_factor: SMALL_SPEED_FACTOR,
            },
            large: KindRanges {
                size: Span::new(LARGE_SIZE),
                lightness: Span::new(LARGE_LIGHTNESS),
                distance: Span::new(LARGE_DISTANCE),
                lifetime_ms: Span::new(LARGE_LIFETIME_MS),
                speed_factor: LARGE_SPEED_FACTOR,
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectsConfig {
    pub throttle: ThrottleConfig,
    pub trail: TrailConfig,
    pub burst: BurstConfig,
}
