//! Proximity ranking
//!
//! Grades candidate chords by how many pitch classes they share with a
//! tonic chord, and groups them into the palette buckets the UI shows.

use crate::config::ExplorerConfig;
use crate::factory::ChordFactory;
use crate::types::{Chord, Key, PitchClass};
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;

/// How close a chord sits to the tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Proximity {
    /// The tonic chord itself
    Tonic,
    /// Two or more shared notes
    Close,
    /// Exactly one shared note
    Medium,
    /// No shared notes
    Far,
}

impl Proximity {
    /// Palette display order
    pub const ALL: [Proximity; 4] = [
        Proximity::Tonic,
        Proximity::Close,
        Proximity::Medium,
        Proximity::Far,
    ];

    fn from_shared_count(count: usize) -> Self {
        match count {
            0 => Proximity::Far,
            1 => Proximity::Medium,
            _ => Proximity::Close,
        }
    }

    /// Human-readable bucket heading
    pub fn label(&self) -> &'static str {
        match self {
            Proximity::Tonic => "Tonic",
            Proximity::Close => "Close (2 shared)",
            Proximity::Medium => "Medium (1 shared)",
            Proximity::Far => "Far (0 shared)",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Proximity::Tonic => "tonic",
            Proximity::Close => "close",
            Proximity::Medium => "medium",
            Proximity::Far => "far",
        }
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A candidate chord annotated with its relation to the tonic
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RankedChord {
    pub chord: Chord,
    pub shared_notes: Vec<PitchClass>,
    pub shared_note_count: usize,
    pub proximity: Proximity,
}

#[cfg(feature = "colored")]
impl fmt::Display for RankedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.chord.symbol(false);
        let symbol = match self.proximity {
            Proximity::Tonic => symbol.bright_white().bold(),
            Proximity::Close => symbol.green().bold(),
            Proximity::Medium => symbol.yellow(),
            Proximity::Far => symbol.bright_black(),
        };
        let shared: Vec<String> = self.shared_notes.iter().map(|n| n.to_string()).collect();
        write!(
            f,
            "{} ({}, shared: [{}])",
            symbol,
            self.proximity,
            shared.join(", ").cyan()
        )
    }
}

// Plain Display impl for non-colored builds (WASM)
#[cfg(not(feature = "colored"))]
impl fmt::Display for RankedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared: Vec<String> = self.shared_notes.iter().map(|n| n.to_string()).collect();
        write!(
            f,
            "{} ({}, shared: [{}])",
            self.chord.symbol(false),
            self.proximity,
            shared.join(", ")
        )
    }
}

/// Ranked chords partitioned by proximity, each bucket in ranked order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ProximityGroups {
    pub tonic: Vec<RankedChord>,
    pub close: Vec<RankedChord>,
    pub medium: Vec<RankedChord>,
    pub far: Vec<RankedChord>,
}

impl ProximityGroups {
    pub fn get(&self, level: Proximity) -> &[RankedChord] {
        match level {
            Proximity::Tonic => &self.tonic,
            Proximity::Close => &self.close,
            Proximity::Medium => &self.medium,
            Proximity::Far => &self.far,
        }
    }

    /// Buckets in palette display order
    pub fn iter(&self) -> impl Iterator<Item = (Proximity, &[RankedChord])> {
        Proximity::ALL.into_iter().map(move |level| (level, self.get(level)))
    }

    /// Total number of ranked chords across all buckets
    pub fn len(&self) -> usize {
        self.iter().map(|(_, bucket)| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared-note proximity ranking relative to a tonic chord
pub struct ProximityEngine;

impl ProximityEngine {
    /// Grade a single candidate against the tonic.
    ///
    /// The tonic itself (nominal equality) is graded `Tonic` and shares all
    /// of its own notes.
    pub fn compute_proximity(tonic: &Chord, candidate: &Chord) -> RankedChord {
        if candidate == tonic {
            return RankedChord {
                chord: candidate.clone(),
                shared_notes: candidate.pitch_classes().to_vec(),
                shared_note_count: candidate.len(),
                proximity: Proximity::Tonic,
            };
        }

        let shared_notes = PitchClass::shared_notes(tonic.pitch_classes(), candidate.pitch_classes());
        let shared_note_count = shared_notes.len();

        RankedChord {
            chord: candidate.clone(),
            shared_notes,
            shared_note_count,
            proximity: Proximity::from_shared_count(shared_note_count),
        }
    }

    /// Grade every candidate, most shared notes first.
    /// The sort is stable, so ties keep their input order.
    pub fn rank_all(tonic: &Chord, candidates: &[Chord]) -> Vec<RankedChord> {
        log::debug!(
            "Ranking {} candidates against tonic {}",
            candidates.len(),
            tonic
        );

        let mut ranked: Vec<RankedChord> = candidates
            .iter()
            .map(|candidate| Self::compute_proximity(tonic, candidate))
            .collect();
        ranked.sort_by(|a, b| b.shared_note_count.cmp(&a.shared_note_count));
        ranked
    }

    /// Partition ranked chords into proximity buckets
    pub fn group_by_proximity(ranked: &[RankedChord]) -> ProximityGroups {
        let mut groups = ProximityGroups::default();
        for entry in ranked {
            let bucket = match entry.proximity {
                Proximity::Tonic => &mut groups.tonic,
                Proximity::Close => &mut groups.close,
                Proximity::Medium => &mut groups.medium,
                Proximity::Far => &mut groups.far,
            };
            bucket.push(entry.clone());
        }
        groups
    }

    /// The grouped chord palette for a key: every major/minor triad (plus
    /// every seventh chord when configured) ranked against the key's tonic
    pub fn palette(key: Key, config: &ExplorerConfig) -> ProximityGroups {
        log::debug!(
            "Building palette for {} (sevenths: {})",
            key,
            config.include_sevenths
        );

        let mut candidates = ChordFactory::all_triads();
        if config.include_sevenths {
            candidates.extend(ChordFactory::all_sevenths());
        }

        let ranked = Self::rank_all(&key.tonic(), &candidates);
        Self::group_by_proximity(&ranked)
    }
}
