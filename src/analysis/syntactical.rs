//! Positional (syntactical) function analysis.
//!
//! A section is read as one T → S → D → T circuit: the first chord opens on
//! the tonic, the last closes on it, the one before the last is the dominant
//! and everything in between is subdominant departure. Pitch content is never
//! consulted.

use super::{FunctionAnalyzer, SyntacticalLabel, SyntacticalRole};
use crate::types::{Chord, Key, Mode};

#[derive(Debug, Clone, Copy, Default)]
pub struct SyntacticalFunctionAnalyzer;

impl SyntacticalFunctionAnalyzer {
    pub fn new() -> Self {
        SyntacticalFunctionAnalyzer
    }

    /// One label per chord. The key is accepted for interface parity and ignored.
    pub fn analyze_section(&self, chords: &[Chord], _key_root: i32, _mode: Mode) -> Vec<SyntacticalLabel> {
        Self::roles(chords.len())
            .into_iter()
            .map(SyntacticalLabel::from)
            .collect()
    }

    /// Roles for a section of `len` chords
    pub fn roles(len: usize) -> Vec<SyntacticalRole> {
        match len {
            0 => Vec::new(),
            1 => vec![SyntacticalRole::Opening],
            _ => (0..len)
                .map(|index| match index {
                    0 => SyntacticalRole::Opening,
                    i if i == len - 1 => SyntacticalRole::Closing,
                    i if i == len - 2 => SyntacticalRole::Penultimate,
                    _ => SyntacticalRole::Transitional,
                })
                .collect(),
        }
    }
}

impl FunctionAnalyzer for SyntacticalFunctionAnalyzer {
    type Label = SyntacticalLabel;

    fn analyze_section(&self, chords: &[Chord], key: Key) -> Vec<SyntacticalLabel> {
        SyntacticalFunctionAnalyzer::analyze_section(self, chords, key.root.value() as i32, key.mode)
    }
}
