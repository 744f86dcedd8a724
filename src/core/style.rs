//! Inline styles written onto pooled elements.
//!
//! Every CSS string the effects produce is built here so the managers only
//! deal in numbers.

use crate::constants::{
    PARTICLE_ALPHA, PARTICLE_SATURATION, TRAIL_ALPHA, TRAIL_LIGHTNESS, TRAIL_SATURATION,
    TRAVEL_EASING,
};
use glam::Vec2;

/// The minimal mutation surface an effect needs from a visual element.
pub trait EffectElement {
    /// Replace the whole inline style.
    fn set_css_text(&self, css: &str);
    fn set_property(&self, name: &str, value: &str);
    /// Flush pending style so the next change starts a transition.
    fn reflow(&self);
}

pub const HIDDEN: &str = "display: none;";
pub const CENTERED: &str = "translate(-50%, -50%) scale(1)";
pub const SHRUNK: &str = "translate(-50%, -50%) scale(0)";

/// One trail dot as placed on acquisition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailDot {
    pub position: Vec2,
    pub size: f32,
    pub hue: f32,
}

impl TrailDot {
    pub fn css(&self) -> String {
        format!(
            "display: block; left: {}px; top: {}px; width: {s}px; height: {s}px; \
             border-radius: 50%; background: hsla({}, {}%, {}%, {}); \
             transform: {CENTERED}; opacity: 1; will-change: transform, opacity;",
            self.position.x,
            self.position.y,
            self.hue,
            TRAIL_SATURATION,
            TRAIL_LIGHTNESS,
            TRAIL_ALPHA,
            s = self.size,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Small,
    Large,
}

/// Configuration of one particle in a burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub kind: ParticleKind,
    pub angle: f32,
    /// Start point, the click point plus a small jitter.
    pub start: Vec2,
    /// Travel offset from the start point along `angle`.
    pub offset: Vec2,
    pub size: f32,
    pub hue: f32,
    pub lightness: f32,
    pub speed_factor: f32,
    pub lifetime_ms: f32,
}

impl ParticleSpec {
    /// Duration of the transform transition.
    #[inline]
    pub fn travel_ms(&self) -> f32 {
        self.lifetime_ms * self.speed_factor
    }

    /// Style before the pop: collapsed and transparent with transitions set.
    pub fn initial_css(&self) -> String {
        format!(
            "display: block; left: {}px; top: {}px; width: {s}px; height: {s}px; \
             border-radius: 50%; background: hsla({}, {}%, {}%, {}); \
             transform: {SHRUNK}; opacity: 0; will-change: transform, opacity; \
             transition: transform {}ms {TRAVEL_EASING}, opacity {}ms ease-out;",
            self.start.x,
            self.start.y,
            self.hue,
            PARTICLE_SATURATION,
            self.lightness,
            PARTICLE_ALPHA,
            self.travel_ms(),
            self.lifetime_ms,
            s = self.size,
        )
    }

    pub fn travel_transform(&self) -> String {
        format!(
            "translate(calc(-50% + {}px), calc(-50% + {}px)) scale(1)",
            self.offset.x, self.offset.y
        )
    }
}

pub fn pop_transform(scale: f32) -> String {
    format!("translate(-50%, -50%) scale({scale})")
}
