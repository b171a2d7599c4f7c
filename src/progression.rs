//! Progressions: named sections of chords in a key, and their analysis

use crate::analysis::{
    ClassicalFunctionAnalyzer, FunctionLabel, SyntacticalFunctionAnalyzer, SyntacticalLabel,
};
use crate::types::{Chord, Key};
use crate::voice_leading::{VoiceLeadingAnalyzer, VoiceLeadingResult};
use anyhow::{Context, Result};
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;

/// Parse a chord list such as `"C Am F G7"` or `"Dm7, G7, Cmaj7"`
pub fn parse_chords(input: &str) -> Result<Vec<Chord>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<Chord>()
                .with_context(|| format!("chord {} ('{}')", i + 1, token))
        })
        .collect()
}

/// A labeled run of chords (verse, chorus, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub label: String,
    pub chords: Vec<Chord>,
}

impl Section {
    pub fn new(label: impl Into<String>, chords: Vec<Chord>) -> Self {
        Section {
            label: label.into(),
            chords,
        }
    }

    /// Build a section from a chord list string
    pub fn parse(label: impl Into<String>, input: &str) -> Result<Self> {
        let label = label.into();
        let chords = parse_chords(input).with_context(|| format!("section '{}'", label))?;
        Ok(Section { label, chords })
    }

    /// A copy of this section with `chord` appended
    pub fn with_chord(&self, chord: Chord) -> Self {
        let mut chords = self.chords.clone();
        chords.push(chord);
        Section::new(self.label.clone(), chords)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Transpose every chord, keeping each quality
    pub fn transpose(&self, semitones: i32) -> Self {
        Section::new(
            self.label.clone(),
            self.chords.iter().map(|c| c.transpose(semitones)).collect(),
        )
    }

    /// Classical and syntactical labels per chord plus voice leading per pair
    pub fn analyze(&self, key: Key) -> SectionAnalysis {
        log::debug!(
            "Analyzing section '{}' ({} chords) in {}",
            self.label,
            self.chords.len(),
            key
        );

        let classical_analyzer = ClassicalFunctionAnalyzer;
        let key_root = key.root.value() as i32;

        SectionAnalysis {
            label: self.label.clone(),
            key,
            chords: self.chords.clone(),
            classical: self
                .chords
                .iter()
                .map(|chord| classical_analyzer.analyze(chord, key_root, key.mode))
                .collect(),
            syntactical: SyntacticalFunctionAnalyzer.analyze_section(&self.chords, key_root, key.mode),
            voice_leading: VoiceLeadingAnalyzer.analyze_progression(&self.chords),
        }
    }
}

/// A whole piece: a name, a key, and its sections in order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub name: String,
    pub key: Key,
    pub sections: Vec<Section>,
}

impl Progression {
    pub fn new(name: impl Into<String>, key: Key) -> Self {
        Progression {
            name: name.into(),
            key,
            sections: Vec::new(),
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Progression {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_key(&self, key: Key) -> Self {
        Progression { key, ..self.clone() }
    }

    pub fn with_section(&self, section: Section) -> Self {
        let mut sections = self.sections.clone();
        sections.push(section);
        Progression {
            sections,
            ..self.clone()
        }
    }

    /// Get all chords across sections, in order
    pub fn chords(&self) -> impl Iterator<Item = &Chord> {
        self.sections.iter().flat_map(|s| s.chords.iter())
    }

    /// Analysis of each non-empty section in the progression's key
    pub fn analyze(&self) -> Vec<SectionAnalysis> {
        self.sections
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.analyze(self.key))
            .collect()
    }

    /// Move the key and every chord root by `semitones`
    pub fn transpose(&self, semitones: i32) -> Self {
        Progression {
            name: self.name.clone(),
            key: self.key.transpose(semitones),
            sections: self.sections.iter().map(|s| s.transpose(semitones)).collect(),
        }
    }
}

/// Everything the analyzers say about one section
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SectionAnalysis {
    pub label: String,
    pub key: Key,
    pub chords: Vec<Chord>,
    /// One per chord
    pub classical: Vec<FunctionLabel>,
    /// One per chord
    pub syntactical: Vec<SyntacticalLabel>,
    /// One per adjacent pair
    pub voice_leading: Vec<VoiceLeadingResult>,
}

impl SectionAnalysis {
    /// Transitions with no common tones, as (from index, to index)
    pub fn rough_transitions(&self) -> Vec<(usize, usize)> {
        self.voice_leading
            .iter()
            .enumerate()
            .filter(|(_, vl)| !vl.is_smooth)
            .map(|(i, _)| (i, i + 1))
            .collect()
    }
}

impl fmt::Display for SectionAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefer_flats = self.key.prefer_flats();

        #[cfg(feature = "colored")]
        writeln!(f, "{} ({})", self.label.bold(), self.key.to_string().cyan())?;
        #[cfg(not(feature = "colored"))]
        writeln!(f, "{} ({})", self.label, self.key)?;

        for (i, chord) in self.chords.iter().enumerate() {
            write!(f, "  {:<8}", chord.symbol(prefer_flats))?;
            if let Some(label) = self.classical.get(i) {
                write!(f, "{}", label)?;
            }
            if let Some(label) = self.syntactical.get(i) {
                write!(f, "  {}", label.role)?;
            }
            writeln!(f)?;

            if let Some(vl) = self.voice_leading.get(i) {
                writeln!(f, "    {}", vl)?;
            }
        }
        Ok(())
    }
}
