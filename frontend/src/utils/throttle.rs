use std::cell::Cell;
use std::rc::Rc;

use crate::config;

/// Source of "now" in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic page clock (`performance.now()`). Falls back to `Date.now()`
/// where the Performance API is missing.
#[derive(Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_else(web_sys::js_sys::Date::now)
    }
}

/// Leading-edge rate limiter.
///
/// The first call of a burst is let through; every call within `window_ms`
/// of the last accepted call is dropped. Dropped calls are not queued, so the
/// final event of a burst may never be observed.
pub struct RateLimiter<C: Clock = BrowserClock> {
    window_ms: f64,
    last_fired: Cell<Option<f64>>,
    clock: C,
}

impl RateLimiter<BrowserClock> {
    pub fn new(window_ms: f64) -> Self {
        Self::with_clock(window_ms, BrowserClock)
    }

    pub fn for_scroll() -> Self {
        Self::new(config::SCROLL_THROTTLE_MS)
    }

    pub fn for_resize() -> Self {
        Self::new(config::RESIZE_THROTTLE_MS)
    }
}

impl<C: Clock> RateLimiter<C> {
    pub fn with_clock(window_ms: f64, clock: C) -> Self {
        Self {
            window_ms,
            last_fired: Cell::new(None),
            clock,
        }
    }

    /// Returns `true` when the caller may run its handler now.
    ///
    /// A clock that reads earlier than the last accepted call opens a new
    /// window instead of suppressing calls until it catches up.
    pub fn try_acquire(&self) -> bool {
        let now = self.clock.now_ms();
        match self.last_fired.get() {
            Some(last) if (0.0..self.window_ms).contains(&(now - last)) => false,
            _ => {
                self.last_fired.set(Some(now));
                true
            }
        }
    }

    /// Wraps `f` so it only runs when the limiter lets the call through.
    pub fn wrap<F>(self, mut f: F) -> impl FnMut()
    where
        F: FnMut(),
    {
        move || {
            if self.try_acquire() {
                f();
            }
        }
    }
}

/// Double-activation guard for a single control.
///
/// Same timing rule as [`RateLimiter`], kept as a separate type so buttons can
/// hold one in an `Rc` and share it between their click and key handlers.
#[derive(Clone)]
pub struct ClickGuard<C: Clock + Clone = BrowserClock> {
    inner: Rc<RateLimiter<C>>,
}

impl ClickGuard<BrowserClock> {
    pub fn new() -> Self {
        Self::with_clock(BrowserClock)
    }
}

impl Default for ClickGuard<BrowserClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Clone> ClickGuard<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            inner: Rc::new(RateLimiter::with_clock(config::CLICK_GUARD_MS, clock)),
        }
    }

    pub fn accept(&self) -> bool {
        self.inner.try_acquire()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct ManualClock(Rc<Cell<f64>>);

    impl ManualClock {
        fn advance(&self, ms: f64) {
            self.0.set(self.0.get() + ms);
        }

        fn rewind(&self, ms: f64) {
            self.0.set(self.0.get() - ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    fn counting_handler(
        window_ms: f64,
        clock: &ManualClock,
    ) -> (Rc<Cell<u32>>, impl FnMut()) {
        let count = Rc::new(Cell::new(0));
        let limiter = RateLimiter::with_clock(window_ms, clock.clone());
        let counter = count.clone();
        let handler = limiter.wrap(move || counter.set(counter.get() + 1));
        (count, handler)
    }

    #[test]
    fn burst_within_window_fires_once() {
        let clock = ManualClock::default();
        let (count, mut handler) = counting_handler(config::SCROLL_THROTTLE_MS, &clock);

        for _ in 0..10 {
            handler();
            clock.advance(5.0);
        }

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn calls_separated_by_more_than_window_both_fire() {
        let clock = ManualClock::default();
        let (count, mut handler) = counting_handler(config::SCROLL_THROTTLE_MS, &clock);

        handler();
        clock.advance(150.0);
        handler();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let clock = ManualClock::default();
        let limiter = RateLimiter::with_clock(100.0, clock.clone());

        assert!(limiter.try_acquire());
        clock.advance(60.0);
        assert!(!limiter.try_acquire());
        clock.advance(40.0);
        assert!(limiter.try_acquire());
    }

    #[test]
    fn trailing_call_is_not_replayed() {
        let clock = ManualClock::default();
        let (count, mut handler) = counting_handler(config::RESIZE_THROTTLE_MS, &clock);

        handler();
        clock.advance(10.0);
        handler();
        clock.advance(1_000.0);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn clock_stepping_backwards_does_not_stall_the_limiter() {
        let clock = ManualClock::default();
        clock.advance(10_000.0);
        let limiter = RateLimiter::with_clock(config::SCROLL_THROTTLE_MS, clock.clone());

        assert!(limiter.try_acquire());
        clock.rewind(5_000.0);
        assert!(limiter.try_acquire());
        clock.advance(20.0);
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn click_guard_blocks_double_activation() {
        let clock = ManualClock::default();
        let guard = ClickGuard::with_clock(clock.clone());
        let shared = guard.clone();

        assert!(guard.accept());
        clock.advance(120.0);
        assert!(!shared.accept());
        clock.advance(config::CLICK_GUARD_MS);
        assert!(shared.accept());
    }
}
