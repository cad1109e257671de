//! Meditation session countdown.
//!
//! Counts a guided or custom session down one second per tick and stops
//! itself at zero. Play/pause keeps the remaining time; reset and choosing a
//! new guide or length reload the full duration and pause.

use chrono::Utc;

use super::guide::MeditationGuide;
use crate::driver::Tickable;
use crate::events::Event;

pub const MIN_CUSTOM_MINUTES: u32 = 1;
pub const MAX_CUSTOM_MINUTES: u32 = 60;

const CUSTOM_TITLE: &str = "Meditation Timer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Guide(&'static MeditationGuide),
    Custom { minutes: u32 },
}

impl SessionSource {
    pub fn title(&self) -> &'static str {
        match self {
            SessionSource::Guide(guide) => guide.title,
            SessionSource::Custom { .. } => CUSTOM_TITLE,
        }
    }

    pub fn duration_secs(&self) -> u32 {
        match self {
            SessionSource::Guide(guide) => guide.duration_secs(),
            SessionSource::Custom { minutes } => minutes.saturating_mul(60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MeditationTimer {
    source: SessionSource,
    remaining_secs: u32,
    running: bool,
}

impl MeditationTimer {
    /// Paused at the full length of `guide`.
    pub fn new(guide: &'static MeditationGuide) -> Self {
        Self::from_source(SessionSource::Guide(guide))
    }

    /// Paused custom session; `minutes` is clamped to 1..=60.
    pub fn custom(minutes: u32) -> Self {
        Self::from_source(SessionSource::Custom {
            minutes: clamp_minutes(minutes),
        })
    }

    fn from_source(source: SessionSource) -> Self {
        Self {
            source,
            remaining_secs: source.duration_secs(),
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn source(&self) -> SessionSource {
        self.source
    }

    pub fn title(&self) -> &'static str {
        self.source.title()
    }

    pub fn duration_secs(&self) -> u32 {
        self.source.duration_secs()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_time(self.remaining_secs)
    }

    pub fn snapshot(&self) -> Event {
        Event::MeditationSnapshot {
            title: self.title().to_string(),
            duration_secs: self.duration_secs(),
            remaining_secs: self.remaining_secs,
            running: self.running,
            display: self.display(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn select_guide(&mut self, guide: &'static MeditationGuide) -> Option<Event> {
        self.source = SessionSource::Guide(guide);
        self.reset()
    }

    /// Switch to a custom length. Leaves play/pause as it was.
    pub fn set_custom_minutes(&mut self, minutes: u32) -> Option<Event> {
        self.source = SessionSource::Custom {
            minutes: clamp_minutes(minutes),
        };
        self.remaining_secs = self.source.duration_secs();
        Some(self.reset_event())
    }

    /// Play or pause. Playing a finished session starts it over.
    pub fn toggle_play(&mut self) -> Option<Event> {
        if self.running {
            return self.pause();
        }
        if self.remaining_secs == 0 {
            self.remaining_secs = self.duration_secs();
        }
        self.running = true;
        Some(Event::MeditationStarted {
            title: self.title().to_string(),
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Pause a running session. Returns `None` when already paused or finished.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::MeditationPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.remaining_secs = self.duration_secs();
        Some(self.reset_event())
    }

    /// Count down one second. Returns `Some(Event::MeditationCompleted)` when
    /// the session reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return None;
        }
        self.running = false;
        tracing::debug!(title = self.title(), "meditation session completed");
        Some(Event::MeditationCompleted {
            title: self.title().to_string(),
            duration_secs: self.duration_secs(),
            at: Utc::now(),
        })
    }

    fn reset_event(&self) -> Event {
        Event::MeditationReset {
            title: self.title().to_string(),
            duration_secs: self.duration_secs(),
            at: Utc::now(),
        }
    }
}

impl Tickable for MeditationTimer {
    fn is_running(&self) -> bool {
        MeditationTimer::is_running(self)
    }

    fn tick(&mut self) -> Option<Event> {
        MeditationTimer::tick(self)
    }

    fn snapshot(&self) -> Event {
        MeditationTimer::snapshot(self)
    }
}

fn clamp_minutes(minutes: u32) -> u32 {
    minutes.clamp(MIN_CUSTOM_MINUTES, MAX_CUSTOM_MINUTES)
}

/// Format seconds as zero-padded `MM:SS`.
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
