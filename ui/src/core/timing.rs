//! Timers for the scroll-settle passes.
//!
//! Scroll events arrive in bursts. Each burst restarts a pair of timers (a
//! quick pass and a delayed pass that catches snap completion). Instead of
//! cancelling futures, every timer carries a ticket and checks on wake-up
//! whether a newer one was issued since; stale timers do nothing.

use std::cell::Cell;
use std::rc::Rc;

/// Sleep for `ms` milliseconds on the UI executor.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// One latest-wins timer lane. Clones share the same counter.
#[derive(Debug, Default, Clone)]
pub struct Debounce {
    generation: Rc<Cell<u64>>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, invalidating every earlier one.
    pub fn schedule(&self) -> Ticket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }
}

/// The cascading settle timers: one [`Debounce`] lane per configured delay.
#[derive(Debug, Clone)]
pub struct SettleTimers {
    lanes: Vec<(u32, Debounce)>,
}

impl SettleTimers {
    pub fn new(delays_ms: &[u32]) -> Self {
        Self {
            lanes: delays_ms.iter().map(|&ms| (ms, Debounce::new())).collect(),
        }
    }

    /// Restart every lane; returns `(delay, lane, ticket)` for each timer to spawn.
    pub fn restart(&self) -> Vec<(u32, Debounce, Ticket)> {
        self.lanes
            .iter()
            .map(|(ms, lane)| (*ms, lane.clone(), lane.schedule()))
            .collect()
    }
}
