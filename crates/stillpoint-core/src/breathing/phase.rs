use serde::{Deserialize, Serialize};

/// One of the four steps of a breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
    Rest,
}

impl BreathPhase {
    /// Phases in cycle order, starting from the phase a fresh cycle begins with.
    pub const ALL: [BreathPhase; 4] = [
        BreathPhase::Inhale,
        BreathPhase::Hold,
        BreathPhase::Exhale,
        BreathPhase::Rest,
    ];

    /// Fixed length of the phase in seconds.
    pub fn duration_secs(self) -> u32 {
        match self {
            BreathPhase::Inhale => 4,
            BreathPhase::Hold => 4,
            BreathPhase::Exhale => 6,
            BreathPhase::Rest => 2,
        }
    }

    /// The phase that follows this one.
    pub fn successor(self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Rest,
            BreathPhase::Rest => BreathPhase::Inhale,
        }
    }

    /// Text shown to the user while the phase is active.
    pub fn instruction(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale slowly...",
            BreathPhase::Hold => "Hold your breath...",
            BreathPhase::Exhale => "Exhale gently...",
            BreathPhase::Rest => "Rest...",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Exhale",
            BreathPhase::Rest => "Rest",
        }
    }
}

impl std::fmt::Display for BreathPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Length of one full Inhale -> Hold -> Exhale -> Rest cycle in seconds.
pub fn cycle_duration_secs() -> u32 {
    BreathPhase::ALL.iter().map(|p| p.duration_secs()).sum()
}
