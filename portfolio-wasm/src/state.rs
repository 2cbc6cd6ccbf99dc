use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use js_sys::Array;
use portfolio_core::SiteConfig;
use portfolio_core::cage::CageDrag;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, IntersectionObserver, Window};

pub type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Handles that keep the page's behaviour alive. Dropping them detaches the
/// listeners, clears the intervals and disconnects the observers.
#[derive(Default)]
pub struct Registry {
    listeners: Vec<EventListener>,
    intervals: Vec<Interval>,
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
}

impl Registry {
    pub fn listen(&mut self, l: EventListener) {
        self.listeners.push(l);
    }

    pub fn every(&mut self, i: Interval) {
        self.intervals.push(i);
    }

    pub fn observe(&mut self, o: IntersectionObserver, cb: ObserverCallback) {
        self.observers.push((o, cb));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
        self.intervals.clear();
        for (o, _) in self.observers.drain(..) {
            o.disconnect();
        }
    }
}

/// Shared runtime state handed to every controller during set-up.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<SiteConfig>,
    /// Drag state of the hero cage; the visibility handler reads it too.
    pub cage: Rc<RefCell<CageDrag>>,
    /// Bumped on shutdown so chained timeouts stop rescheduling.
    pub generation: Rc<RefCell<u32>>,
    pub registry: Rc<RefCell<Registry>>,
}

impl Page {
    pub fn new(window: Window, document: Document, config: SiteConfig) -> Self {
        Page {
            window,
            document,
            config: Rc::new(config),
            cage: Rc::new(RefCell::new(CageDrag::new())),
            generation: Rc::new(RefCell::new(0)),
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    pub fn listen(&self, l: EventListener) {
        self.registry.borrow_mut().listen(l);
    }

    pub fn every(&self, i: Interval) {
        self.registry.borrow_mut().every(i);
    }

    pub fn generation(&self) -> u32 {
        *self.generation.borrow()
    }

    /// Drop every registered handle and invalidate pending timeouts.
    pub fn stop(&self) {
        *self.generation.borrow_mut() += 1;
        self.registry.borrow_mut().clear();
    }

    /// Whether a timer scheduled during `generation` should still run.
    pub fn is_current(&self, generation: u32) -> bool {
        self.generation() == generation
    }
}

/// Thread local storage for the single page instance.
thread_local! {
    pub static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}
