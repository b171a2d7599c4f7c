use crate::error::{Result, TheoryError};
use crate::types::chord::{Chord, ChordQuality};
use crate::types::pitch_class::PitchClass;
use std::fmt;
use std::str::FromStr;

/// Major scale intervals (whole-whole-half-whole-whole-whole-half)
pub const MAJOR_SCALE_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Natural minor scale intervals
pub const MINOR_SCALE_INTERVALS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Key roots that conventionally use flat spellings: Db, Eb, F, Ab, Bb
pub const FLAT_KEY_ROOTS: [u8; 5] = [1, 3, 5, 8, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    pub fn scale_intervals(&self) -> [u8; 7] {
        match self {
            Mode::Major => MAJOR_SCALE_INTERVALS,
            Mode::Minor => MINOR_SCALE_INTERVALS,
        }
    }

    /// Quality of the tonic triad in this mode
    pub fn tonic_quality(&self) -> ChordQuality {
        match self {
            Mode::Major => ChordQuality::Major,
            Mode::Minor => ChordQuality::Minor,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(Mode::Major),
            "minor" => Ok(Mode::Minor),
            _ => Err(TheoryError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A major or natural-minor scale: a root and its seven degrees.
/// Deserializes from its key alone; stored degrees are rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", from = "Key")
)]
pub struct Scale {
    root: PitchClass,
    mode: Mode,
    degrees: [PitchClass; 7],
    prefer_flats: bool,
}

impl Scale {
    pub fn new(root: impl Into<PitchClass>, mode: Mode) -> Self {
        let root = root.into();
        let degrees = mode
            .scale_intervals()
            .map(|interval| root.transpose(interval as i32));

        Scale {
            root,
            mode,
            degrees,
            prefer_flats: FLAT_KEY_ROOTS.contains(&root.value()),
        }
    }

    /// Create a major scale from a root pitch class value
    pub fn major(root: i32) -> Self {
        Scale::new(root, Mode::Major)
    }

    /// Create a natural minor scale from a root pitch class value
    pub fn minor(root: i32) -> Self {
        Scale::new(root, Mode::Minor)
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn degrees(&self) -> &[PitchClass; 7] {
        &self.degrees
    }

    /// Whether this key conventionally spells accidentals with flats.
    /// Depends on the root only, never on the mode.
    pub fn prefer_flats(&self) -> bool {
        self.prefer_flats
    }

    /// Check if a pitch class belongs to this scale
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.degrees.contains(&pc)
    }

    /// 1-indexed scale degree of a pitch class, if it is in the scale
    pub fn degree_of(&self, pc: PitchClass) -> Option<usize> {
        self.degrees.iter().position(|&d| d == pc).map(|i| i + 1)
    }

    /// Degree names using this scale's own spelling
    pub fn note_names(&self) -> Vec<&'static str> {
        self.degrees
            .iter()
            .map(|d| d.name(self.prefer_flats))
            .collect()
    }
}

impl From<Key> for Scale {
    fn from(key: Key) -> Self {
        Scale::new(key.root, key.mode)
    }
}

/// A tonal center: root plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    pub root: PitchClass,
    pub mode: Mode,
}

impl Key {
    pub fn new(root: impl Into<PitchClass>, mode: Mode) -> Self {
        Key {
            root: root.into(),
            mode,
        }
    }

    pub fn major(root: i32) -> Self {
        Key::new(root, Mode::Major)
    }

    pub fn minor(root: i32) -> Self {
        Key::new(root, Mode::Minor)
    }

    /// The tonic triad: major in a major key, minor in a minor key
    pub fn tonic(&self) -> Chord {
        Chord::new(self.root, self.mode.tonic_quality())
    }

    pub fn scale(&self) -> Scale {
        Scale::new(self.root, self.mode)
    }

    pub fn prefer_flats(&self) -> bool {
        FLAT_KEY_ROOTS.contains(&self.root.value())
    }

    /// Same mode, root moved by `semitones`
    pub fn transpose(&self, semitones: i32) -> Self {
        Key::new(self.root.transpose(semitones), self.mode)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root.name(self.prefer_flats()), self.mode)
    }
}
