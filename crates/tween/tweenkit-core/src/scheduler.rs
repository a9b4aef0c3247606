//! Tween scheduler: a registry of named, independently progressing
//! interpolations, each advanced exactly once per host frame tick.
//!
//! The host owns the frame hook and calls [`Scheduler::tick`] once per
//! rendered frame. Everything runs synchronously on the calling frame; the
//! only "concurrency" is many named tweens advancing within one tick.
//! `Scheduler` is a cheap clone handle over shared state so that callbacks
//! may capture one and call `start`/`cancel`/`set_on_complete` re-entrantly
//! mid-tick.

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;
use log::{debug, warn};

use crate::catalog::RepeatMode;
use crate::clock::{Clock, MonotonicClock};
use crate::config::Config;
use crate::ease::BlendFn;

/// Value sink invoked with each computed value.
type ApplyFn = Rc<RefCell<dyn FnMut(f32)>>;

/// Handler invoked once when a `Once` tween completes naturally.
type CompleteFn = Box<dyn FnMut(&str)>;

/// One scheduled interpolation. `duration_ms` is fixed for the lifetime of
/// the instance; only `started_ms` and `reversed` mutate after creation.
struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    blend: BlendFn,
    apply: ApplyFn,
    repeat: RepeatMode,
    started_ms: u64,
    reversed: bool,
    on_complete: Option<CompleteFn>,
}

struct Inner {
    cfg: Config,
    clock: Rc<dyn Clock>,
    tweens: HashMap<String, Tween>,
}

/// Handle to a tween registry. Clones share the same registry; independent
/// registries (e.g. for tests) come from separate `new`/`with_clock` calls.
#[derive(Clone)]
pub struct Scheduler {
    inner: Rc<RefCell<Inner>>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Scheduler {
    /// Create a scheduler driven by a monotonic wall clock.
    pub fn new(cfg: Config) -> Self {
        Self::with_clock(cfg, Rc::new(MonotonicClock::new()))
    }

    /// Create a scheduler with an injected clock (tests use `ManualClock`).
    pub fn with_clock(cfg: Config, clock: Rc<dyn Clock>) -> Self {
        let tweens = HashMap::with_capacity(cfg.registry_capacity);
        Self {
            inner: Rc::new(RefCell::new(Inner { cfg, clock, tweens })),
        }
    }

    /// Register a new tween under `name`. If the name is already occupied
    /// the request is a silent no-op and the existing instance wins; callers
    /// cannot distinguish "already running" from "request ignored".
    ///
    /// A zero duration is clamped up to `config.min_duration_ms` instead of
    /// producing undefined progress math.
    pub fn start(
        &self,
        name: &str,
        from: f32,
        to: f32,
        duration_ms: u32,
        blend: BlendFn,
        apply: impl FnMut(f32) + 'static,
        repeat: RepeatMode,
    ) {
        let mut inner = self.inner.borrow_mut();
        if inner.tweens.contains_key(name) {
            debug!("tween '{name}' already active; start ignored");
            return;
        }
        let duration_ms = if duration_ms == 0 {
            warn!(
                "tween '{name}' requested with zero duration; clamping to {}ms",
                inner.cfg.min_duration_ms
            );
            inner.cfg.min_duration_ms
        } else {
            duration_ms
        };
        let started_ms = inner.clock.now_ms();
        debug!("tween '{name}' started: {from} -> {to} over {duration_ms}ms");
        inner.tweens.insert(
            name.to_string(),
            Tween {
                from,
                to,
                duration_ms,
                blend,
                apply: Rc::new(RefCell::new(apply)),
                repeat,
                started_ms,
                reversed: false,
                on_complete: None,
            },
        );
    }

    /// Remove the named tween immediately, regardless of repeat mode or
    /// progress. No final value is delivered and no completion handler
    /// fires; cancellation is silent. No-op on unknown names.
    pub fn cancel(&self, name: &str) {
        if self.inner.borrow_mut().tweens.remove(name).is_some() {
            debug!("tween '{name}' cancelled");
        }
    }

    /// Pure lookup: is a tween currently registered under `name`?
    pub fn contains(&self, name: &str) -> bool {
        self.inner.borrow().tweens.contains_key(name)
    }

    /// Replace the completion handler of a live tween. No-op on unknown
    /// names. Only affects future completions: a tween that already
    /// completed this tick is gone and cannot be retrofitted.
    pub fn set_on_complete(&self, name: &str, on_complete: impl FnMut(&str) + 'static) {
        let mut inner = self.inner.borrow_mut();
        match inner.tweens.get_mut(name) {
            Some(tween) => tween.on_complete = Some(Box::new(on_complete)),
            None => debug!("tween '{name}' not active; completion handler ignored"),
        }
    }

    /// Number of registered tweens.
    pub fn len(&self) -> usize {
        self.inner.borrow().tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().tweens.is_empty()
    }

    /// Advance every live tween once. Called by the host's frame hook,
    /// exactly once per rendered frame.
    ///
    /// The name set is snapshotted up front: entries cancelled by an earlier
    /// callback in the same tick are skipped, and entries started mid-tick
    /// are deferred to the next tick. The registry borrow is released before
    /// each callback runs, so callbacks may re-enter the scheduler freely.
    pub fn tick(&self) {
        let (now, names) = {
            let inner = self.inner.borrow();
            let names: Vec<String> = inner.tweens.keys().cloned().collect();
            (inner.clock.now_ms(), names)
        };

        for name in names {
            let (value, apply, completion) = {
                let mut inner = self.inner.borrow_mut();
                let Some(mut tween) = inner.tweens.remove(&name) else {
                    continue;
                };

                let elapsed = now.saturating_sub(tween.started_ms);
                let done = elapsed >= u64::from(tween.duration_ms);
                // The completion tick always sees progress exactly 1.0, so
                // the end value is delivered at least once regardless of
                // frame-time drift.
                let mut t = if done {
                    1.0
                } else {
                    elapsed as f32 / tween.duration_ms as f32
                };
                if tween.reversed {
                    t = 1.0 - t;
                }
                let value = (tween.blend)(tween.from, tween.to, t);
                let apply = Rc::clone(&tween.apply);

                let mut completion: Option<CompleteFn> = None;
                if done {
                    match tween.repeat {
                        RepeatMode::Once => {
                            debug!("tween '{name}' completed");
                            completion = tween.on_complete.take();
                            // dropped: Once tweens leave the registry on the
                            // completion tick
                        }
                        RepeatMode::Reverse => {
                            tween.started_ms = now;
                            tween.reversed = !tween.reversed;
                            inner.tweens.insert(name.clone(), tween);
                        }
                        RepeatMode::Restart => {
                            tween.started_ms = now;
                            inner.tweens.insert(name.clone(), tween);
                        }
                    }
                } else {
                    inner.tweens.insert(name.clone(), tween);
                }
                (value, apply, completion)
            };

            (&mut *apply.borrow_mut())(value);
            if let Some(mut on_complete) = completion {
                on_complete(&name);
            }
        }
    }
}
