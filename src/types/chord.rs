use crate::error::{Result, TheoryError};
use crate::types::pitch_class::PitchClass;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The nine supported chord qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dom7,
    Maj7,
    Min7,
    Dim7,
    Min7b5,
}

impl ChordQuality {
    /// Every quality, triads first
    pub const ALL: [ChordQuality; 9] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Dom7,
        ChordQuality::Maj7,
        ChordQuality::Min7,
        ChordQuality::Dim7,
        ChordQuality::Min7b5,
    ];

    /// Interval template in semitones from the root, in voicing order
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Dom7 => &[0, 4, 7, 10],
            ChordQuality::Maj7 => &[0, 4, 7, 11],
            ChordQuality::Min7 => &[0, 3, 7, 10],
            ChordQuality::Dim7 => &[0, 3, 6, 9],
            ChordQuality::Min7b5 => &[0, 3, 6, 10],
        }
    }

    /// Suffix appended to the root name in a chord symbol
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Dom7 => "7",
            ChordQuality::Maj7 => "maj7",
            ChordQuality::Min7 => "m7",
            ChordQuality::Dim7 => "dim7",
            ChordQuality::Min7b5 => "m7b5",
        }
    }

    /// Enumerated tag exchanged with the UI and persistence layers
    pub fn tag(&self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Dom7 => "dom7",
            ChordQuality::Maj7 => "maj7",
            ChordQuality::Min7 => "min7",
            ChordQuality::Dim7 => "dim7",
            ChordQuality::Min7b5 => "min7b5",
        }
    }

    pub fn is_triad(&self) -> bool {
        matches!(
            self,
            ChordQuality::Major
                | ChordQuality::Minor
                | ChordQuality::Diminished
                | ChordQuality::Augmented
        )
    }

    pub fn is_seventh(&self) -> bool {
        !self.is_triad()
    }

    fn from_suffix(suffix: &str) -> Option<ChordQuality> {
        ChordQuality::ALL.into_iter().find(|q| q.suffix() == suffix)
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        ChordQuality::ALL
            .into_iter()
            .find(|q| q.tag() == s)
            .ok_or_else(|| TheoryError::InvalidQuality(s.to_string()))
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// The persisted form of a chord: just its root and quality.
///
/// Pitch classes are derived, so storing this pair is enough to rebuild
/// an identical `Chord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordRecord {
    pub root: PitchClass,
    pub quality: ChordQuality,
}

/// An immutable chord: a root, a quality, and the pitch classes they imply.
///
/// Equality and hashing are nominal (root + quality). Two chords that
/// happen to contain the same pitch classes under different qualities or
/// roots are different chords; use [`Chord::pitch_set_key`] when content
/// is what matters.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", from = "ChordRecord")
)]
pub struct Chord {
    root: PitchClass,
    quality: ChordQuality,
    pitch_classes: Vec<PitchClass>,
}

impl Chord {
    /// Build a chord, deriving its pitch classes from the quality template
    pub fn new(root: impl Into<PitchClass>, quality: ChordQuality) -> Self {
        let root = root.into();
        let pitch_classes = quality
            .intervals()
            .iter()
            .map(|&interval| root.transpose(interval as i32))
            .collect();

        Chord {
            root,
            quality,
            pitch_classes,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Pitch classes in template order (root first, wrap-around notes kept last)
    pub fn pitch_classes(&self) -> &[PitchClass] {
        &self.pitch_classes
    }

    /// Raw pitch class values in template order
    pub fn pitch_values(&self) -> Vec<u8> {
        self.pitch_classes.iter().map(|pc| pc.value()).collect()
    }

    /// Sorted pitch class values, identifying the chord by content alone
    pub fn pitch_set_key(&self) -> Vec<u8> {
        let mut key = self.pitch_values();
        key.sort_unstable();
        key
    }

    /// Get the number of notes in the chord
    pub fn len(&self) -> usize {
        self.pitch_classes.len()
    }

    /// Check if the chord has no notes
    pub fn is_empty(&self) -> bool {
        self.pitch_classes.is_empty()
    }

    /// Check if the chord contains a pitch class
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.pitch_classes.contains(&pc)
    }

    pub fn is_triad(&self) -> bool {
        self.quality.is_triad()
    }

    pub fn is_seventh(&self) -> bool {
        self.quality.is_seventh()
    }

    /// Chord symbol such as "Am7", "Db" or "G7"
    pub fn symbol(&self, prefer_flats: bool) -> String {
        format!("{}{}", self.root.name(prefer_flats), self.quality.suffix())
    }

    /// Same quality, root moved by `semitones`
    pub fn transpose(&self, semitones: i32) -> Self {
        Chord::new(self.root.transpose(semitones), self.quality)
    }

    /// Same root, different quality
    pub fn with_quality(&self, quality: ChordQuality) -> Self {
        Chord::new(self.root, quality)
    }

    /// The (root, quality) pair to persist
    pub fn record(&self) -> ChordRecord {
        ChordRecord {
            root: self.root,
            quality: self.quality,
        }
    }
}

impl From<ChordRecord> for Chord {
    fn from(record: ChordRecord) -> Self {
        Chord::new(record.root, record.quality)
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.quality == other.quality
    }
}

impl Eq for Chord {}

impl Hash for Chord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
        self.quality.hash(state);
    }
}

/// Parse a chord symbol in either spelling, e.g. "Bbmaj7", "F#m", "Bdim".
///
/// The root is the longest valid note name at the start (two characters,
/// then one); the rest must be exactly one quality suffix.
impl FromStr for Chord {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let symbol = s.trim();

        for split in [2, 1] {
            let (Some(name), Some(suffix)) = (symbol.get(..split), symbol.get(split..)) else {
                continue;
            };
            let Ok(root) = PitchClass::from_name(name) else {
                continue;
            };
            return ChordQuality::from_suffix(suffix)
                .map(|quality| Chord::new(root, quality))
                .ok_or_else(|| TheoryError::InvalidChordSymbol(s.to_string()));
        }

        Err(TheoryError::InvalidChordSymbol(s.to_string()))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol(false))
    }
}
