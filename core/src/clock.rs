use alloc::collections::BinaryHeap;
use core::cmp::Reverse;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct PendingHide {
    due: Millis,
    seq: u64,
    index: CellIndex,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Task {
    Hide,
    Countdown,
    Spawn,
}

/// Drives a [`GameController`] on a virtual millisecond clock.
///
/// Two periodic processes run for the whole lifetime of the clock, whether or not a round is in progress: the
/// spawn cycle every [`SPAWN_PERIOD_MS`] and the countdown every [`TICK_PERIOD_MS`]. Each firing reads the state as
/// it is at that moment. Every spawned mole also queues a one-shot hide action, and those are never cancelled,
/// they fire even if the mole was whacked, re-shown or the round ended meanwhile.
///
/// Actions due at the same millisecond fire hides first, then the countdown, then the spawn.
#[derive(Clone, Debug)]
pub struct GameClock<R = SmallRng> {
    controller: GameController,
    rng: R,
    now: Millis,
    next_spawn: Millis,
    next_tick: Millis,
    pending_hides: BinaryHeap<Reverse<PendingHide>>,
    next_seq: u64,
}

impl GameClock<SmallRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameClock<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            controller: GameController::new(),
            rng,
            now: 0,
            next_spawn: SPAWN_PERIOD_MS,
            next_tick: TICK_PERIOD_MS,
            pending_hides: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut GameController {
        &mut self.controller
    }

    pub fn pending_hides(&self) -> usize {
        self.pending_hides.len()
    }

    pub fn advance_by(&mut self, delta: Millis) -> ClockOutcome {
        self.advance_to(self.now.saturating_add(delta))
    }

    /// Fires everything due up to and including `target`, in order. Going backwards does nothing.
    pub fn advance_to(&mut self, target: Millis) -> ClockOutcome {
        if target <= self.now {
            return ClockOutcome::NoChange;
        }

        let mut outcome = ClockOutcome::NoChange;
        loop {
            if self.is_idle() {
                self.skip_idle_periods(target);
            }
            let Some((due, task)) = self.next_due(target) else {
                break;
            };
            self.now = due;
            outcome = outcome | self.fire(task);
        }
        self.now = target;
        outcome
    }

    /// Between rounds with no hide queued, every periodic firing is a no-op.
    fn is_idle(&self) -> bool {
        !self.controller.is_active() && self.pending_hides.is_empty()
    }

    /// Moves both periodic schedules past `target` without firing them, keeping their phase.
    fn skip_idle_periods(&mut self, target: Millis) {
        self.next_tick = first_due_after(self.next_tick, TICK_PERIOD_MS, target);
        self.next_spawn = first_due_after(self.next_spawn, SPAWN_PERIOD_MS, target);
    }

    fn next_due(&self, target: Millis) -> Option<(Millis, Task)> {
        let hide = self
            .pending_hides
            .peek()
            .map(|Reverse(hide)| (hide.due, Task::Hide));

        [
            hide,
            Some((self.next_tick, Task::Countdown)),
            Some((self.next_spawn, Task::Spawn)),
        ]
        .into_iter()
        .flatten()
        // Millis::MAX is the end of time, nothing fires there
        .filter(|&(due, _)| due <= target && due < Millis::MAX)
        // min_by_key keeps the first of equal elements
        .min_by_key(|&(due, _)| due)
    }

    fn fire(&mut self, task: Task) -> ClockOutcome {
        match task {
            Task::Hide => {
                let Some(Reverse(hide)) = self.pending_hides.pop() else {
                    return ClockOutcome::NoChange;
                };
                log::trace!("{}ms: hide mole {}", self.now, hide.index);
                self.controller
                    .hide_mole(hide.index)
                    .map_or(ClockOutcome::NoChange, ClockOutcome::from)
            }
            Task::Countdown => {
                self.next_tick = self.next_tick.saturating_add(TICK_PERIOD_MS);
                self.controller.countdown_tick().into()
            }
            Task::Spawn => {
                self.next_spawn = self.next_spawn.saturating_add(SPAWN_PERIOD_MS);
                match self.controller.spawn_mole(&mut self.rng) {
                    Some(SpawnedMole { index, hide_after }) => {
                        self.schedule_hide(index, self.now.saturating_add(hide_after));
                        ClockOutcome::Changed
                    }
                    None => ClockOutcome::NoChange,
                }
            }
        }
    }

    fn schedule_hide(&mut self, index: CellIndex, due: Millis) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending_hides
            .push(Reverse(PendingHide { due, seq, index }));
    }
}

fn first_due_after(due: Millis, period: Millis, target: Millis) -> Millis {
    if due > target {
        return due;
    }
    let missed = (target - due) / period + 1;
    missed
        .checked_mul(period)
        .and_then(|skip| due.checked_add(skip))
        .unwrap_or(Millis::MAX)
}
