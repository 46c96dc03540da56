//! Feedback selection: colour, message and sound cue for a scored guess.

use super::types::{Direction, Proximity};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Proximity above which a miss plays the "close" cue.
pub const CLOSE_THRESHOLD: f64 = 70.0;

/// Number of equal-width colour segments across `[0, 100]`.
pub const HEAT_SEGMENTS: usize = 10;

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a colour.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Anchor colours from coldest (pure red) to hottest (pure green).
const HEAT_ANCHORS: [Rgb; HEAT_SEGMENTS] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 51, 0),
    Rgb::new(255, 102, 0),
    Rgb::new(255, 153, 0),
    Rgb::new(255, 204, 0),
    Rgb::new(230, 230, 0),
    Rgb::new(204, 255, 0),
    Rgb::new(153, 255, 0),
    Rgb::new(102, 255, 0),
    Rgb::new(0, 255, 0),
];

/// Colour shown for a correct guess, whatever its proximity.
pub const SUCCESS_COLOR: Rgb = Rgb::new(34, 197, 94);

/// Returns the colour segment (0..=9) for a proximity. 100 falls in segment 9.
pub fn heat_segment(proximity: Proximity) -> usize {
    // Proximity is clamped to [0, 100], so the cast never sees a negative.
    ((proximity.get() / 10.0).floor() as usize).min(HEAT_SEGMENTS - 1)
}

/// Returns the anchor colour for a proximity.
pub fn heat_color(proximity: Proximity) -> Rgb {
    HEAT_ANCHORS[heat_segment(proximity)]
}

/// Message headline for the feedback indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Message {
    /// The target was found.
    Correct,
    /// Last guess was above the target.
    TooHigh,
    /// Last guess was below the target.
    TooLow,
    /// No guess yet.
    Prompt,
}

impl Message {
    /// Returns the display text.
    pub fn text(self) -> &'static str {
        match self {
            Message::Correct => "Correct!",
            Message::TooHigh => "Too High",
            Message::TooLow => "Too Low",
            Message::Prompt => "Make a guess...",
        }
    }
}

impl From<Direction> for Message {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Correct => Message::Correct,
            Direction::TooHigh => Message::TooHigh,
            Direction::TooLow => Message::TooLow,
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Pre-defined sound played after a guess.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum SoundCue {
    /// The guess was correct.
    #[strum(serialize = "correct")]
    CorrectSound,
    /// A miss with proximity above [`CLOSE_THRESHOLD`].
    #[strum(serialize = "close")]
    CloseSound,
    /// Any other miss.
    #[strum(serialize = "far")]
    FarSound,
}

impl SoundCue {
    /// Stable identifier of the cue (`correct`, `close`, `far`).
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Default asset file name for the cue.
    pub fn file_name(self) -> String {
        format!("{}.mp3", self.id())
    }
}

/// Derived presentation of the latest guess. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDecision {
    /// Colour of the proximity indicator.
    pub color: Rgb,
    /// Headline text.
    pub message: Message,
    /// Sound to request from the audio collaborator.
    pub sound: SoundCue,
}

impl FeedbackDecision {
    /// Feedback shown before any guess: coldest colour, neutral prompt.
    ///
    /// The sound cue is never played for the prompt.
    pub fn prompt() -> Self {
        Self {
            color: HEAT_ANCHORS[0],
            message: Message::Prompt,
            sound: SoundCue::FarSound,
        }
    }
}

/// Selects colour, message and sound for a scored guess.
#[instrument(level = "trace")]
pub fn select(proximity: Proximity, direction: Direction) -> FeedbackDecision {
    let color = if direction.is_correct() {
        SUCCESS_COLOR
    } else {
        heat_color(proximity)
    };

    let sound = if direction.is_correct() {
        SoundCue::CorrectSound
    } else if proximity.get() > CLOSE_THRESHOLD {
        SoundCue::CloseSound
    } else {
        SoundCue::FarSound
    };

    FeedbackDecision {
        color,
        message: direction.into(),
        sound,
    }
}
