mod engine;
mod phase;

pub use engine::{BreathingState, BreathingTimer, START_LABEL, STOP_LABEL};
pub use phase::{cycle_duration_secs, BreathPhase};
