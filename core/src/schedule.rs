use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Deferred work the engine asks its host to run later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Turn a mismatched pair back face down and release the turn lock.
    FlipBack,
    /// Emit the win notification after the grace delay.
    AnnounceWin,
    /// One elapsed second.
    Tick,
}

/// A scheduled task, tagged with the board generation that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerTask {
    pub kind: TimerKind,
    pub epoch: u32,
}

impl TimerTask {
    pub const fn new(kind: TimerKind, epoch: u32) -> Self {
        Self { kind, epoch }
    }
}

/// Timer facility of the host environment.
///
/// Fired tasks must be handed back to the engine that scheduled them. Cancelling a handle whose task already
/// fired, or was already cancelled, must be a no-op.
pub trait Scheduler {
    type Handle;

    fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> Self::Handle;

    fn schedule_repeating(&mut self, period: Duration, task: TimerTask) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry {
    id: TimerId,
    due: Duration,
    seq: u64,
    period: Option<Duration>,
    task: TimerTask,
}

/// Deterministic scheduler over a virtual clock that only moves when told to.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    entries: Vec<Entry>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers, repeating ones included.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.entries.iter().any(|entry| entry.task.kind == kind)
    }

    /// Removes and returns the earliest task due no later than `until`, moving the clock to its due time.
    ///
    /// Repeating tasks are re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerTask> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(position, _)| position)?;

        let seq = self.bump_seq();
        let entry = &mut self.entries[position];
        self.now = self.now.max(entry.due);
        let task = entry.task;

        if let Some(period) = entry.period {
            entry.due += period;
            entry.seq = seq;
        } else {
            self.entries.swap_remove(position);
        }

        log::trace!("timer fired at {:?}: {:?}", self.now, task);
        Some(task)
    }

    /// Moves the clock forward without firing anything, callers drain with [`Self::pop_due`] first.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.entries.push(Entry {
            id,
            due,
            seq,
            period,
            task,
        });
        id
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.insert(self.now + delay, None, task)
    }

    fn schedule_repeating(&mut self, period: Duration, task: TimerTask) -> TimerId {
        // a zero period would never let the clock advance
        let period = period.max(Duration::from_millis(1));
        self.insert(self.now + period, Some(period), task)
    }

    fn cancel(&mut self, handle: TimerId) {
        self.entries.retain(|entry| entry.id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: TimerTask = TimerTask::new(TimerKind::Tick, 0);
    const FLIP: TimerTask = TimerTask::new(TimerKind::FlipBack, 0);

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn once_fires_at_due_time_only() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_once(ms(800), FLIP);

        assert_eq!(scheduler.pop_due(ms(799)), None);
        assert_eq!(scheduler.pop_due(ms(800)), Some(FLIP));
        assert_eq!(scheduler.now(), ms(800));
        assert_eq!(scheduler.pop_due(ms(10_000)), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn repeating_rearms_each_period() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_repeating(ms(1000), TICK);

        let mut fired = 0;
        while scheduler.pop_due(ms(3500)).is_some() {
            fired += 1;
        }

        assert_eq!(fired, 3);
        assert_eq!(scheduler.now(), ms(3000));
        assert!(scheduler.is_armed(TimerKind::Tick));
    }

    #[test]
    fn tasks_fire_in_due_then_insertion_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_repeating(ms(1000), TICK);
        scheduler.schedule_once(ms(800), FLIP);
        let win = TimerTask::new(TimerKind::AnnounceWin, 0);
        scheduler.schedule_once(ms(1000), win);

        assert_eq!(scheduler.pop_due(ms(1000)), Some(FLIP));
        assert_eq!(scheduler.pop_due(ms(1000)), Some(TICK));
        assert_eq!(scheduler.pop_due(ms(1000)), Some(win));
        assert_eq!(scheduler.pop_due(ms(1000)), None);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut scheduler = ManualScheduler::new();
        let tick = scheduler.schedule_repeating(ms(1000), TICK);
        let flip = scheduler.schedule_once(ms(800), FLIP);

        scheduler.cancel(flip);
        scheduler.cancel(tick);
        scheduler.cancel(tick);

        assert_eq!(scheduler.pop_due(ms(5000)), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut scheduler = ManualScheduler::new();
        scheduler.set_now(ms(500));
        scheduler.set_now(ms(200));
        assert_eq!(scheduler.now(), ms(500));

        scheduler.schedule_once(ms(100), FLIP);
        assert_eq!(scheduler.pop_due(ms(600)), Some(FLIP));
        assert_eq!(scheduler.now(), ms(600));
    }
}
