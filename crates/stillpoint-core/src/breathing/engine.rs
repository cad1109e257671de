//! Breathing timer state machine.
//!
//! A fixed four-phase countdown. Like the meditation countdown it owns no
//! thread or clock: whoever drives it calls `tick()` once per elapsed second
//! (see [`crate::driver::TickDriver`]).
//!
//! ## State Transitions
//!
//! ```text
//! stopped --toggle/start--> running (Inhale, 4)
//! running --toggle/stop---> stopped (phase and count frozen)
//! running --tick----------> running (count - 1, or successor phase at its full length)
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::phase::BreathPhase;
use crate::driver::Tickable;
use crate::events::Event;

pub const START_LABEL: &str = "Start Breathing Exercise";
pub const STOP_LABEL: &str = "Stop";

/// Phase, countdown and run flag, as read by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingState {
    pub phase: BreathPhase,
    pub seconds_remaining: u32,
    pub running: bool,
}

impl BreathingState {
    pub fn new(phase: BreathPhase, seconds_remaining: u32, running: bool) -> Self {
        Self {
            phase,
            seconds_remaining,
            running,
        }
    }
}

impl Default for BreathingState {
    fn default() -> Self {
        Self::new(BreathPhase::Inhale, BreathPhase::Inhale.duration_secs(), false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreathingTimer {
    state: BreathingState,
    /// Rest -> Inhale transitions since the last start.
    #[serde(default)]
    cycles_completed: u64,
}

impl BreathingTimer {
    /// Stopped at the top of Inhale.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> BreathingState {
        self.state
    }

    pub fn phase(&self) -> BreathPhase {
        self.state.phase
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.state.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    pub fn current_instruction(&self) -> &'static str {
        self.state.phase.instruction()
    }

    pub fn button_label(&self) -> &'static str {
        if self.state.running {
            STOP_LABEL
        } else {
            START_LABEL
        }
    }

    pub fn snapshot(&self) -> Event {
        Event::BreathingSnapshot {
            phase: self.state.phase,
            seconds_remaining: self.state.seconds_remaining,
            running: self.state.running,
            instruction: self.current_instruction().to_string(),
            button_label: self.button_label().to_string(),
            cycles_completed: self.cycles_completed,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh cycle. Restarts from Inhale even when already running.
    pub fn start(&mut self) -> Option<Event> {
        self.state = BreathingState::new(BreathPhase::Inhale, BreathPhase::Inhale.duration_secs(), true);
        self.cycles_completed = 0;
        Some(Event::BreathingStarted {
            phase: self.state.phase,
            seconds_remaining: self.state.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Freeze the countdown. Returns `None` when already stopped.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        self.state.running = false;
        Some(Event::BreathingStopped {
            phase: self.state.phase,
            seconds_remaining: self.state.seconds_remaining,
            at: Utc::now(),
        })
    }

    pub fn toggle(&mut self) -> Option<Event> {
        if self.state.running {
            self.stop()
        } else {
            self.start()
        }
    }

    /// Advance by one second. Returns `Some(Event::PhaseChanged)` when the
    /// countdown ran out and the next phase began; a no-op while stopped.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        if self.state.seconds_remaining > 1 {
            self.state.seconds_remaining -= 1;
            return None;
        }

        let from = self.state.phase;
        let to = from.successor();
        if to == BreathPhase::Inhale {
            self.cycles_completed += 1;
        }
        self.state.phase = to;
        self.state.seconds_remaining = to.duration_secs();
        tracing::debug!(%from, %to, cycles = self.cycles_completed, "breathing phase changed");
        Some(Event::PhaseChanged {
            from,
            to,
            seconds_remaining: self.state.seconds_remaining,
            cycles_completed: self.cycles_completed,
            at: Utc::now(),
        })
    }
}

impl Tickable for BreathingTimer {
    fn is_running(&self) -> bool {
        BreathingTimer::is_running(self)
    }

    fn tick(&mut self) -> Option<Event> {
        BreathingTimer::tick(self)
    }

    fn snapshot(&self) -> Event {
        BreathingTimer::snapshot(self)
    }
}
