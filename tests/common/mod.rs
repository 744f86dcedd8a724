// Shared host-side helpers: a recording element and a virtual-time driver.

#![allow(dead_code)]

use cursor_fx::core::{CursorEffects, EffectElement, EffectsConfig, ManualScheduler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct FakeElement {
    props: RefCell<BTreeMap<String, String>>,
    reflows: RefCell<usize>,
    writes: RefCell<usize>,
}

impl FakeElement {
    pub fn prop(&self, name: &str) -> Option<String> {
        self.props.borrow().get(name).cloned()
    }

    pub fn display(&self) -> String {
        self.prop("display").unwrap_or_default()
    }

    pub fn reflows(&self) -> usize {
        *self.reflows.borrow()
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl EffectElement for FakeElement {
    fn set_css_text(&self, css: &str) {
        let mut props = self.props.borrow_mut();
        props.clear();
        for decl in css.split(';') {
            if let Some((name, value)) = decl.split_once(':') {
                props.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
        *self.writes.borrow_mut() += 1;
    }

    fn set_property(&self, name: &str, value: &str) {
        self.props
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
    }

    fn reflow(&self) {
        *self.reflows.borrow_mut() += 1;
    }
}

pub type TestEffects = CursorEffects<FakeElement, StdRng>;

pub fn elements(n: usize) -> Vec<FakeElement> {
    (0..n).map(|_| FakeElement::default()).collect()
}

pub fn effects_with(config: EffectsConfig, seed: u64) -> TestEffects {
    let trail = elements(config.trail.pool_size);
    let particles = elements(config.burst.pool_size);
    CursorEffects::new(trail, particles, config, StdRng::seed_from_u64(seed))
        .expect("non-empty pools")
}

pub fn effects(seed: u64) -> TestEffects {
    effects_with(EffectsConfig::default(), seed)
}

/// Fire everything due up to `until_ms`, then park the clock there.
pub fn run_until(fx: &mut TestEffects, sched: &mut ManualScheduler, until_ms: f64) {
    while let Some((wake, timer)) = sched.pop_due(until_ms) {
        fx.fire(wake, timer, sched);
    }
    sched.set_now(until_ms);
}
