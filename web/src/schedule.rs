use std::collections::HashMap;

use gloo::timers::callback::Timeout;
use splitflap_core::{Scheduler, Wake};
use yew::Callback;

/// Browser timers feeding cell wake-ups back into the component.
///
/// A cell never has more than one step in flight, so timers are keyed by cell.
/// Dropping a `Timeout` clears it, which is all `cancel_all` needs to do.
pub(crate) struct TimeoutScheduler {
    callback: Callback<Wake>,
    pending: HashMap<usize, (Wake, Timeout)>,
}

impl TimeoutScheduler {
    pub(crate) fn new(callback: Callback<Wake>) -> Self {
        Self {
            callback,
            pending: HashMap::new(),
        }
    }

    /// Forgets the timer that produced `wake`. A stale wake-up must not drop
    /// the timer of a newer grid that reuses the same cell index.
    pub(crate) fn fired(&mut self, wake: Wake) {
        if self
            .pending
            .get(&wake.cell)
            .is_some_and(|(pending, _)| *pending == wake)
        {
            self.pending.remove(&wake.cell);
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32, wake: Wake) {
        let callback = self.callback.clone();
        let timeout = Timeout::new(delay_ms, move || callback.emit(wake));
        self.pending.insert(wake.cell, (wake, timeout));
    }

    fn cancel_all(&mut self) {
        log::trace!("cancelling {} flap timers", self.pending.len());
        self.pending.clear();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn wake(cell: usize, generation: u32) -> Wake {
        Wake { cell, generation }
    }

    #[wasm_bindgen_test]
    fn stale_wake_keeps_newer_timer_for_same_cell() {
        let mut scheduler = TimeoutScheduler::new(Callback::from(|_: Wake| {}));
        scheduler.schedule(60_000, wake(0, 2));

        scheduler.fired(wake(0, 1));
        assert!(scheduler.pending.contains_key(&0));

        scheduler.fired(wake(0, 2));
        assert!(scheduler.pending.is_empty());
    }

    #[wasm_bindgen_test]
    fn cancel_all_drops_every_timer() {
        let mut scheduler = TimeoutScheduler::new(Callback::from(|_: Wake| {}));
        scheduler.schedule(60_000, wake(0, 1));
        scheduler.schedule(60_000, wake(3, 1));

        scheduler.cancel_all();

        assert!(scheduler.pending.is_empty());
    }
}
