//! Browser-backed [`Scheduler`]: `setTimeout` and `requestAnimationFrame`.

use crate::core::{Scheduler, TimerId, Wake};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Called with every fired callback.
pub type Dispatch = Rc<dyn Fn(Wake, TimerId)>;

#[derive(Clone, Copy, Debug)]
enum BrowserHandle {
    Timeout(i32),
    Frame(i32),
}

struct Entry {
    handle: BrowserHandle,
    // kept alive until fired or cancelled
    _closure: Closure<dyn FnMut()>,
}

type PendingMap = Rc<RefCell<FnvHashMap<TimerId, Entry>>>;

pub struct WebScheduler {
    window: web::Window,
    next_id: u64,
    pending: PendingMap,
    dispatch: Dispatch,
}

impl WebScheduler {
    pub fn new(window: web::Window, dispatch: Dispatch) -> Self {
        Self {
            window,
            next_id: 1,
            pending: Rc::new(RefCell::new(FnvHashMap::default())),
            dispatch,
        }
    }

    fn next_timer(&mut self) -> TimerId {
        let t = TimerId(self.next_id);
        self.next_id += 1;
        t
    }

    fn callback(&self, timer: TimerId, wake: Wake) -> Closure<dyn FnMut()> {
        let pending: Weak<RefCell<FnvHashMap<TimerId, Entry>>> = Rc::downgrade(&self.pending);
        let dispatch = self.dispatch.clone();
        Closure::wrap(Box::new(move || {
            // Take our own entry out first; dispatch may schedule more.
            let mut finished = None;
            if let Some(p) = pending.upgrade() {
                finished = p.borrow_mut().remove(&timer);
            }
            dispatch(wake, timer);
            drop(finished);
        }) as Box<dyn FnMut()>)
    }

    fn track(&mut self, timer: TimerId, handle: BrowserHandle, closure: Closure<dyn FnMut()>) {
        self.pending.borrow_mut().insert(
            timer,
            Entry {
                handle,
                _closure: closure,
            },
        );
    }
}

impl Scheduler for WebScheduler {
    fn set_timeout(&mut self, delay_ms: u32, wake: Wake) -> TimerId {
        let timer = self.next_timer();
        let closure = self.callback(timer, wake);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            ) {
            Ok(h) => self.track(timer, BrowserHandle::Timeout(h), closure),
            Err(e) => log::warn!("setTimeout failed for {:?}: {:?}", wake, e),
        }
        timer
    }

    fn request_frame(&mut self, wake: Wake) -> TimerId {
        let timer = self.next_timer();
        let closure = self.callback(timer, wake);
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(h) => self.track(timer, BrowserHandle::Frame(h), closure),
            Err(e) => log::warn!("requestAnimationFrame failed for {:?}: {:?}", wake, e),
        }
        timer
    }

    fn cancel(&mut self, timer: TimerId) {
        let Some(entry) = self.pending.borrow_mut().remove(&timer) else {
            return;
        };
        match entry.handle {
            BrowserHandle::Timeout(h) => self.window.clear_timeout_with_handle(h),
            BrowserHandle::Frame(h) => {
                _ = self.window.cancel_animation_frame(h);
            }
        }
    }
}
