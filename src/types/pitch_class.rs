use crate::error::{Result, TheoryError};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Note names spelled with sharps, indexed by pitch class value
pub const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Note names spelled with flats, indexed by pitch class value
pub const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// One of the twelve equal-tempered note identities, octave-independent.
/// 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
///
/// The wrapped value is always in `0..=11`; every constructor normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "i32", into = "u8")
)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class from any integer, taking its residue mod 12
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    /// Get the pitch class value (0-11)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Transpose by a number of semitones (negative moves down)
    pub fn transpose(self, semitones: i32) -> Self {
        let shifted = (self.0 as i64 + semitones as i64).rem_euclid(12);
        PitchClass(shifted as u8)
    }

    /// Get the note name, spelled with flats or sharps.
    /// Natural notes read the same in both spellings.
    pub fn name(&self, prefer_flats: bool) -> &'static str {
        if prefer_flats {
            NOTE_NAMES_FLAT[self.0 as usize]
        } else {
            NOTE_NAMES_SHARP[self.0 as usize]
        }
    }

    /// Ascending distance in semitones from this pitch class up to `other` (0-11)
    pub fn semitone_distance(&self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    /// Parse a note name against the sharp table, then the flat table
    pub fn from_name(name: &str) -> Result<Self> {
        NOTE_NAMES_SHARP
            .iter()
            .position(|&n| n == name)
            .or_else(|| NOTE_NAMES_FLAT.iter().position(|&n| n == name))
            .map(|index| PitchClass(index as u8))
            .ok_or_else(|| TheoryError::InvalidNoteName(name.to_string()))
    }

    /// Pitch classes of `set_a` that also appear in `set_b`.
    ///
    /// Order follows `set_a`, and each element of `set_a` is tested on its
    /// own, so duplicates in `set_a` survive.
    pub fn shared_notes(set_a: &[PitchClass], set_b: &[PitchClass]) -> Vec<PitchClass> {
        set_a
            .iter()
            .filter(|a| set_b.contains(a))
            .copied()
            .collect()
    }

    /// Check if this is a natural note (white key)
    pub fn is_natural(&self) -> bool {
        NOTE_NAMES_SHARP[self.0 as usize].len() == 1
    }
}

impl From<i32> for PitchClass {
    fn from(value: i32) -> Self {
        PitchClass::new(value)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        PitchClass::from_name(s)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(false))
    }
}

// Arithmetic operations for transposition
impl Add<i32> for PitchClass {
    type Output = PitchClass;

    fn add(self, semitones: i32) -> Self::Output {
        self.transpose(semitones)
    }
}

impl Sub<i32> for PitchClass {
    type Output = PitchClass;

    fn sub(self, semitones: i32) -> Self::Output {
        let down = (semitones as i64).rem_euclid(12) as i32;
        self.transpose(-down)
    }
}

// Ascending interval from `other` up to `self`
impl Sub<PitchClass> for PitchClass {
    type Output = u8;

    fn sub(self, other: PitchClass) -> Self::Output {
        other.semitone_distance(self)
    }
}
