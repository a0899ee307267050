//! Debounced values backed by a cancellable browser timer.
//!
//! DESIGN
//! ======
//! `Debounced` is the pure model: every assignment bumps a generation and
//! returns it as a ticket, and only the ticket of the latest assignment may
//! settle the value. `DebounceTimer` owns at most one pending timer handle
//! from a `TimerScheduler` (a gloo `Timeout` in the browser). Arming it
//! drops, and so cancels, the previous handle before scheduling the next,
//! and dropping the timer cancels whatever is still pending.
//! `use_debounced` wires both to a signal and releases the timer when the
//! owning component unmounts.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use leptos::prelude::*;

/// Quiescence window for the registration email field.
pub const DEBOUNCE_WINDOW_MS: u32 = 300;

/// Ticket returned by [`Debounced::set`]; settles only if still current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTicket(u64);

/// Raw value plus the last value that stayed unchanged for a full window.
#[derive(Clone, Debug, Default)]
pub struct Debounced<T> {
    raw: T,
    settled: T,
    generation: u64,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(initial: T) -> Self {
        Self { raw: initial.clone(), settled: initial, generation: 0 }
    }

    pub fn raw(&self) -> &T {
        &self.raw
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// Record a new raw value, invalidating every earlier ticket.
    pub fn set(&mut self, value: T) -> SettleTicket {
        self.raw = value;
        self.generation += 1;
        SettleTicket(self.generation)
    }

    /// Promote `raw` to `settled` if `ticket` belongs to the latest `set`.
    /// Returns whether the settled value changed.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if ticket.0 != self.generation || self.settled == self.raw {
            return false;
        }
        self.settled = self.raw.clone();
        true
    }
}

/// Source of one-shot timers. Dropping a handle cancels its timer.
pub trait TimerScheduler {
    type Handle;

    fn schedule(&self, window_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `gloo-timers` in the browser; native builds never fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerScheduler for BrowserTimers {
    #[cfg(feature = "csr")]
    type Handle = gloo_timers::callback::Timeout;
    #[cfg(not(feature = "csr"))]
    type Handle = ();

    fn schedule(&self, window_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        #[cfg(feature = "csr")]
        {
            gloo_timers::callback::Timeout::new(window_ms, callback)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (window_ms, callback);
        }
    }
}

/// Single-slot owner of a pending timeout.
pub struct DebounceTimer<S: TimerScheduler = BrowserTimers> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(BrowserTimers)
    }
}

impl<S: TimerScheduler> DebounceTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: None }
    }

    /// Cancel any pending callback, then schedule `callback` after `window_ms`.
    pub fn arm<F>(&mut self, window_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(window_ms, Box::new(callback)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

/// Follow `source`, publishing its value once it has been stable for
/// `window_ms`. The returned signal starts at the source's current value.
pub fn use_debounced(source: Signal<String>, window_ms: u32) -> Signal<String> {
    use_debounced_with(source, window_ms, BrowserTimers)
}

/// [`use_debounced`] on an explicit timer source.
pub fn use_debounced_with<S>(source: Signal<String>, window_ms: u32, scheduler: S) -> Signal<String>
where
    S: TimerScheduler + 'static,
    S::Handle: 'static,
{
    let initial = source.get_untracked();
    let settled = RwSignal::new(initial.clone());
    let model = StoredValue::new(Debounced::new(initial));
    let timer = StoredValue::new_local(DebounceTimer::new(scheduler));

    Effect::new(move || {
        let value = source.get();
        let Some(ticket) = model.try_update_value(|d| d.set(value)) else {
            return;
        };
        timer.update_value(|t| {
            t.arm(window_ms, move || {
                let changed = model.try_update_value(|d| d.settle(ticket)).unwrap_or(false);
                if changed {
                    if let Some(value) = model.try_with_value(|d| d.settled().clone()) {
                        let _ = settled.try_set(value);
                    }
                }
            });
        });
    });

    on_cleanup(move || {
        let _ = timer.try_update_value(DebounceTimer::cancel);
    });

    settled.into()
}
