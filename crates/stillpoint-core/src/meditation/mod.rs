mod countdown;
mod guide;

pub use countdown::{
    format_time, MeditationTimer, SessionSource, MAX_CUSTOM_MINUTES, MIN_CUSTOM_MINUTES,
};
pub use guide::{find_guide, guides, MeditationGuide};
