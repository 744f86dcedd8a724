/// Effect tuning constants.
///
/// Timings are in milliseconds, lengths in CSS pixels. The runtime configs in
/// `core::config` default to these values.

// Pool sizes
pub const TRAIL_POOL_SIZE: usize = 30;
pub const PARTICLE_POOL_SIZE: usize = 150;

// Trail lifecycle
pub const TRAIL_DWELL_MS: u32 = 500; // visible before shrinking
pub const TRAIL_SIZE_MIN: f32 = 4.0;
pub const TRAIL_SIZE_SPAN: f32 = 8.0; // size in [min, min + span)
pub const TRAIL_SATURATION: f32 = 90.0;
pub const TRAIL_LIGHTNESS: f32 = 60.0;
pub const TRAIL_ALPHA: f32 = 0.7;
pub const HUE_DEGREES: f64 = 360.0;

// Shared fade window, matches the stylesheet transition
pub const FADE_MS: u32 = 300;

// Pointer-move sampling
pub const MOVE_THROTTLE_MS: f64 = 30.0;
pub const MOVE_MIN_DISTANCE: f32 = 5.0;

// Click burst
pub const BURST_PARTICLE_COUNT: usize = 25;
pub const BURST_TRAVEL_DELAY_MS: u32 = 50; // pop before travel
pub const BURST_LARGE_PROBABILITY: f64 = 0.3;
pub const BURST_HUE_JITTER: f32 = 30.0; // +/- degrees around the burst hue
pub const BURST_POSITION_JITTER: f32 = 2.0; // +/- px around the click point
pub const BURST_POP_SCALE: f32 = 1.2;
pub const PARTICLE_SATURATION: f32 = 90.0;
pub const PARTICLE_ALPHA: f32 = 0.9;

// Per-kind ranges as (min, span)
pub const SMALL_SIZE: (f32, f32) = (1.0, 2.0);
pub const LARGE_SIZE: (f32, f32) = (4.0, 3.0);
pub const SMALL_LIGHTNESS: (f32, f32) = (70.0, 10.0);
pub const LARGE_LIGHTNESS: (f32, f32) = (60.0, 10.0);
pub const SMALL_DISTANCE: (f32, f32) = (30.0, 40.0);
pub const LARGE_DISTANCE: (f32, f32) = (50.0, 60.0);
pub const SMALL_LIFETIME_MS: (f32, f32) = (600.0, 200.0);
pub const LARGE_LIFETIME_MS: (f32, f32) = (900.0, 300.0);
pub const SMALL_SPEED_FACTOR: f32 = 0.7; // scales the travel transition
pub const LARGE_SPEED_FACTOR: f32 = 1.2;

// Travel easing overshoots slightly before settling
pub const TRAVEL_EASING: &str = "cubic-bezier(0.18, 0.89, 0.32, 1.28)";

// DOM
pub const TRAIL_CLASS: &str = "cursor-trail";
pub const PARTICLE_CLASS: &str = "particle";
pub const READY_STATE_LOADING: &str = "loading"; // `document.readyState` while parsing

/// True once `document.readyState` says the body exists.
#[inline]
pub fn document_parsed(ready_state: &str) -> bool {
    ready_state != READY_STATE_LOADING
}

// Virtual frame interval used by the manual scheduler
pub const FRAME_INTERVAL_MS: f64 = 16.0;
