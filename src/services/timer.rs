// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rest countdown timer.
//!
//! One countdown per timer instance. A background task ticks once per
//! second. Starting, pausing or resetting aborts it and bumps a generation
//! counter so a tick that is already in flight is discarded.
//!
//! Lock order is ticker, then state. Tick tasks only take the state lock.

use crate::time_utils::format_clock;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Preset durations offered by the client, in seconds.
pub const QUICK_TIMES: [u32; 4] = [30, 60, 90, 120];

const DEFAULT_DURATION: u32 = 60;
const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    #[error("Ingresa un tiempo válido.")]
    InvalidDuration,
}

/// Point-in-time view of the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TimerSnapshot {
    pub remaining: u32,
    pub running: bool,
    /// Preset the countdown was started from, if any.
    pub selected: Option<u32>,
    /// `remaining` as "mm:ss".
    pub clock: String,
}

#[derive(Debug, Default)]
struct TimerState {
    remaining: u32,
    running: bool,
    selected: Option<u32>,
    generation: u64,
}

impl TimerState {
    fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining: self.remaining,
            running: self.running,
            selected: self.selected,
            clock: format_clock(self.remaining),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct CountdownTimer {
    state: Arc<Mutex<TimerState>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        lock(&self.state).snapshot()
    }

    /// Start a countdown, cancelling any previous one.
    ///
    /// With `None`, resumes from the remaining time and keeps the selected
    /// preset. With nothing to resume, starts the 60 second preset. Must be
    /// called inside a tokio runtime.
    pub fn start(&self, duration: Option<u32>) -> Result<TimerSnapshot, TimerError> {
        let mut ticker = lock(&self.ticker);
        let state = lock(&self.state);
        let (initial, selected) = match duration {
            Some(0) => return Err(TimerError::InvalidDuration),
            Some(seconds) => (seconds, Some(seconds)),
            None if state.remaining > 0 => (state.remaining, state.selected),
            None => (DEFAULT_DURATION, Some(DEFAULT_DURATION)),
        };
        Ok(self.begin(&mut ticker, state, initial, selected))
    }

    /// Start a countdown from free-form minutes and seconds.
    ///
    /// Custom countdowns do not select a preset.
    pub fn start_custom(&self, minutes: u32, seconds: u32) -> Result<TimerSnapshot, TimerError> {
        let total = minutes.saturating_mul(60).saturating_add(seconds);
        if total == 0 {
            return Err(TimerError::InvalidDuration);
        }
        let mut ticker = lock(&self.ticker);
        let state = lock(&self.state);
        Ok(self.begin(&mut ticker, state, total, None))
    }

    /// Stop ticking, keeping the remaining time.
    pub fn pause(&self) -> TimerSnapshot {
        let mut ticker = lock(&self.ticker);
        let mut state = lock(&self.state);
        state.generation += 1;
        state.running = false;
        cancel(&mut ticker);
        state.snapshot()
    }

    /// Stop ticking and clear everything.
    pub fn reset(&self) -> TimerSnapshot {
        let mut ticker = lock(&self.ticker);
        let mut state = lock(&self.state);
        let generation = state.generation + 1;
        *state = TimerState {
            generation,
            ..TimerState::default()
        };
        cancel(&mut ticker);
        state.snapshot()
    }

    /// Replace the ticker with a fresh countdown.
    ///
    /// Callers hold the ticker lock, then the state lock, for the whole
    /// swap so concurrent starts cannot leave a running state with no task.
    fn begin(
        &self,
        ticker: &mut Option<JoinHandle<()>>,
        mut state: MutexGuard<'_, TimerState>,
        initial: u32,
        selected: Option<u32>,
    ) -> TimerSnapshot {
        state.generation += 1;
        state.remaining = initial;
        state.running = true;
        state.selected = selected;
        let generation = state.generation;
        let snapshot = state.snapshot();
        drop(state);

        tracing::debug!(seconds = initial, "Countdown started");
        let first_tick = Instant::now() + TICK;
        let handle = tokio::spawn(run_ticks(Arc::clone(&self.state), generation, first_tick));
        if let Some(previous) = ticker.replace(handle) {
            previous.abort();
        }
        snapshot
    }
}

fn cancel(ticker: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = ticker.take() {
        handle.abort();
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        cancel(&mut lock(&self.ticker));
    }
}

async fn run_ticks(state: Arc<Mutex<TimerState>>, generation: u64, first_tick: Instant) {
    let mut interval = tokio::time::interval_at(first_tick, TICK);
    loop {
        interval.tick().await;
        let mut state = lock(&state);
        if state.generation != generation || !state.running {
            return;
        }
        if state.remaining <= 1 {
            state.remaining = 0;
            state.running = false;
            state.selected = None;
            tracing::debug!("Countdown finished");
            return;
        }
        state.remaining -= 1;
    }
}
