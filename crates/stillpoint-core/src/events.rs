use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::breathing::BreathPhase;

/// Every state change in the system produces an Event.
/// Front ends render snapshots; commands hand back the event they caused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    BreathingStarted {
        phase: BreathPhase,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    BreathingStopped {
        phase: BreathPhase,
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    /// A phase ran out and the next one began.
    PhaseChanged {
        from: BreathPhase,
        to: BreathPhase,
        seconds_remaining: u32,
        cycles_completed: u64,
        at: DateTime<Utc>,
    },
    BreathingSnapshot {
        phase: BreathPhase,
        seconds_remaining: u32,
        running: bool,
        instruction: String,
        button_label: String,
        cycles_completed: u64,
        at: DateTime<Utc>,
    },
    MeditationStarted {
        title: String,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    MeditationPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reloaded to its full duration, either by reset or by
    /// choosing another guide or length.
    MeditationReset {
        title: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    MeditationCompleted {
        title: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    MeditationSnapshot {
        title: String,
        duration_secs: u32,
        remaining_secs: u32,
        running: bool,
        display: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Snake-case name of the variant, handy for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::BreathingStarted { .. } => "breathing_started",
            Event::BreathingStopped { .. } => "breathing_stopped",
            Event::PhaseChanged { .. } => "phase_changed",
            Event::BreathingSnapshot { .. } => "breathing_snapshot",
            Event::MeditationStarted { .. } => "meditation_started",
            Event::MeditationPaused { .. } => "meditation_paused",
            Event::MeditationReset { .. } => "meditation_reset",
            Event::MeditationCompleted { .. } => "meditation_completed",
            Event::MeditationSnapshot { .. } => "meditation_snapshot",
        }
    }
}
