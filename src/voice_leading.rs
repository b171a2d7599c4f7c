//! Voice leading analysis
//!
//! Approximates the note-by-note relationship between consecutive chords by
//! the pitch classes they hold in common. A transition that keeps at least
//! one common tone is smooth; one that keeps none is flagged as rough.

use crate::types::{Chord, PitchClass};
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;

/// Common tones between two adjacent chords
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct VoiceLeadingResult {
    pub shared_notes: Vec<PitchClass>,
    pub shared_note_count: usize,
    /// True if at least one note is held
    pub is_smooth: bool,
}

impl VoiceLeadingResult {
    fn shared_names(&self) -> Vec<String> {
        self.shared_notes.iter().map(|n| n.to_string()).collect()
    }
}

#[cfg(feature = "colored")]
impl fmt::Display for VoiceLeadingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_smooth {
            let common: Vec<String> = self
                .shared_names()
                .into_iter()
                .map(|n| n.green().bold().to_string())
                .collect();
            write!(f, "{} Common: [{}]", "→".green(), common.join(", "))
        } else {
            write!(f, "{} {}", "⚠".yellow().bold(), "no common tones".yellow())
        }
    }
}

#[cfg(not(feature = "colored"))]
impl fmt::Display for VoiceLeadingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_smooth {
            write!(f, "→ Common: [{}]", self.shared_names().join(", "))
        } else {
            write!(f, "⚠ no common tones")
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceLeadingAnalyzer;

impl VoiceLeadingAnalyzer {
    pub fn new() -> Self {
        VoiceLeadingAnalyzer
    }

    /// Common tones from one chord to the next, in the order of `from`
    pub fn analyze(&self, from: &Chord, to: &Chord) -> VoiceLeadingResult {
        let shared_notes = PitchClass::shared_notes(from.pitch_classes(), to.pitch_classes());
        let shared_note_count = shared_notes.len();

        VoiceLeadingResult {
            shared_notes,
            shared_note_count,
            is_smooth: shared_note_count > 0,
        }
    }

    /// Analyze every adjacent pair; fewer than two chords yields nothing
    pub fn analyze_progression(&self, chords: &[Chord]) -> Vec<VoiceLeadingResult> {
        chords
            .windows(2)
            .map(|pair| self.analyze(&pair[0], &pair[1]))
            .collect()
    }
}
