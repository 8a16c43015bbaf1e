//! Sound cue port.
//!
//! Asset loading and playback belong to the presentation layer. The engine
//! only names which cue should play and never waits on the result.

use serde::{Deserialize, Serialize};

use crate::core::RoundOutcome;
use crate::error::AudioError;

/// Named sound effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    MoveSubmitted,
    RoundWon,
    RoundLost,
}

impl SoundCue {
    /// Cue for a round outcome. Draws are silent.
    #[must_use]
    pub fn for_outcome(outcome: RoundOutcome) -> Option<Self> {
        match outcome {
            RoundOutcome::Win => Some(SoundCue::RoundWon),
            RoundOutcome::Lose => Some(SoundCue::RoundLost),
            RoundOutcome::Draw => None,
        }
    }

    /// Conventional asset name for this cue.
    #[must_use]
    pub const fn asset(self) -> &'static str {
        match self {
            SoundCue::MoveSubmitted => "click",
            SoundCue::RoundWon => "win",
            SoundCue::RoundLost => "lose",
        }
    }
}

/// Audio playback collaborator.
pub trait AudioPort {
    /// One-time asset loading, called before the first cue.
    fn init(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    /// Start playing a cue. Must not block on playback.
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;
}

/// Audio port that plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioPort for SilentAudio {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }
}
