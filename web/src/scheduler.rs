use gloo::timers::callback::{Interval, Timeout};
use memorama_core::{Scheduler, TimerTask};
use std::collections::HashMap;
use std::time::Duration;
use yew::Callback;

enum BrowserTimer {
    Once(Timeout),
    Repeating(Interval),
}

/// Browser timers backed by `setTimeout`/`setInterval`, fired tasks are posted to `callback`.
///
/// Dropping a gloo timer clears it, so cancelling is just forgetting the handle.
pub(crate) struct GlooScheduler {
    callback: Callback<TimerTask>,
    next_id: u32,
    timers: HashMap<u32, BrowserTimer>,
}

impl GlooScheduler {
    pub(crate) fn new(callback: Callback<TimerTask>) -> Self {
        Self {
            callback,
            next_id: 0,
            timers: HashMap::new(),
        }
    }

    pub(crate) fn active_timers(&self) -> usize {
        self.timers.len()
    }

    fn insert(&mut self, timer: BrowserTimer) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.timers.insert(id, timer);
        id
    }
}

fn to_millis(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}

impl Scheduler for GlooScheduler {
    type Handle = u32;

    fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> u32 {
        let callback = self.callback.clone();
        let timeout = Timeout::new(to_millis(delay), move || callback.emit(task));
        self.insert(BrowserTimer::Once(timeout))
    }

    fn schedule_repeating(&mut self, period: Duration, task: TimerTask) -> u32 {
        let callback = self.callback.clone();
        let interval = Interval::new(to_millis(period), move || callback.emit(task));
        self.insert(BrowserTimer::Repeating(interval))
    }

    fn cancel(&mut self, handle: u32) {
        match self.timers.remove(&handle) {
            Some(BrowserTimer::Once(timeout)) => drop(timeout),
            Some(BrowserTimer::Repeating(interval)) => drop(interval),
            None => log::trace!("timer {} already gone", handle),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use memorama_core::TimerKind;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn cancel_forgets_timers() {
        let mut scheduler = GlooScheduler::new(Callback::from(|_: TimerTask| ()));
        let tick = TimerTask::new(TimerKind::Tick, 0);

        let once = scheduler.schedule_once(Duration::from_millis(800), tick);
        let every = scheduler.schedule_repeating(Duration::from_secs(1), tick);
        assert_eq!(scheduler.active_timers(), 2);

        scheduler.cancel(once);
        scheduler.cancel(every);
        scheduler.cancel(every);
        assert_eq!(scheduler.active_timers(), 0);
    }
}
