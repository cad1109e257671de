use serde::Serialize;

/// A guided meditation practice with its suggested length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeditationGuide {
    pub title: &'static str,
    pub description: &'static str,
    /// Duration in minutes.
    pub duration_min: u32,
}

impl MeditationGuide {
    pub fn duration_secs(&self) -> u32 {
        self.duration_min.saturating_mul(60)
    }
}

const GUIDES: [MeditationGuide; 6] = [
    MeditationGuide {
        title: "Breath Awareness",
        description: "Focus on the sensation of your breath entering and leaving your body. Notice the rise and fall of your chest and abdomen.",
        duration_min: 5,
    },
    MeditationGuide {
        title: "Body Scan",
        description: "Bring awareness to each part of your body, starting from your toes and moving up to the crown of your head.",
        duration_min: 10,
    },
    MeditationGuide {
        title: "Loving-Kindness",
        description: "Generate feelings of love and compassion for yourself, then extend those feelings to others.",
        duration_min: 15,
    },
    MeditationGuide {
        title: "Chakra Alignment",
        description: "Focus on each of your seven chakras, visualizing them as spinning wheels of energy in perfect balance.",
        duration_min: 20,
    },
    MeditationGuide {
        title: "Third Eye Activation",
        description: "Direct your attention to the space between your eyebrows, connecting with your intuition and inner wisdom.",
        duration_min: 10,
    },
    MeditationGuide {
        title: "Sound Meditation",
        description: "Focus on the ambient sounds around you without judging or analyzing them, simply being aware of their presence.",
        duration_min: 5,
    },
];

/// All built-in guides, in display order.
pub fn guides() -> &'static [MeditationGuide] {
    &GUIDES
}

/// Look a guide up by title, ignoring ASCII case and surrounding whitespace.
pub fn find_guide(title: &str) -> Option<&'static MeditationGuide> {
    let title = title.trim();
    GUIDES.iter().find(|g| g.title.eq_ignore_ascii_case(title))
}
