use crate::core::{CursorEffects, TimerId, Wake};
use crate::timers::{Dispatch, WebScheduler};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub type WebEffects = CursorEffects<web::HtmlElement, StdRng>;

/// Page-lifetime owner of the effects and the scheduler that drives them.
pub struct Runtime {
    effects: RefCell<WebEffects>,
    scheduler: RefCell<WebScheduler>,
}

impl Runtime {
    pub fn new(window: web::Window, effects: WebEffects) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<Runtime>| {
            let weak = weak.clone();
            let dispatch: Dispatch = Rc::new(move |wake, timer| {
                if let Some(rt) = weak.upgrade() {
                    rt.fire(wake, timer);
                }
            });
            Runtime {
                effects: RefCell::new(effects),
                scheduler: RefCell::new(WebScheduler::new(window, dispatch)),
            }
        })
    }

    pub fn pointer_move(&self, x: f32, y: f32, now_ms: f64) {
        let mut scheduler = self.scheduler.borrow_mut();
        _ = self
            .effects
            .borrow_mut()
            .pointer_move(x, y, now_ms, &mut *scheduler);
    }

    pub fn click(&self, x: f32, y: f32) {
        let mut scheduler = self.scheduler.borrow_mut();
        _ = self.effects.borrow_mut().click(x, y, &mut *scheduler);
    }

    fn fire(&self, wake: Wake, timer: TimerId) {
        let mut scheduler = self.scheduler.borrow_mut();
        self.effects
            .borrow_mut()
            .fire(wake, timer, &mut *scheduler);
    }
}
