//! Dominant-function transformations: secondary dominants, chains of them,
//! and tritone substitution

use crate::types::{Chord, ChordQuality};

/// Perfect fifth, in semitones
const FIFTH: i32 = 7;

/// Tritone, in semitones
const TRITONE: i32 = 6;

pub struct SecondaryDominant;

impl SecondaryDominant {
    /// The dominant seventh a perfect fifth above the target's root
    pub fn of(target: &Chord) -> Chord {
        Chord::new(target.root().transpose(FIFTH), ChordQuality::Dom7)
    }
}

pub struct DominantChain;

impl DominantChain {
    /// `length` stacked secondary dominants ending on `target`.
    ///
    /// Each chord is a dom7 a fifth above the one after it, and the target
    /// stays last. `length == 0` yields just `[target]`.
    pub fn build(target: &Chord, length: usize) -> Vec<Chord> {
        let mut chain = Vec::with_capacity(length + 1);
        let mut current = target.clone();
        for _ in 0..length {
            current = SecondaryDominant::of(&current);
            chain.push(current.clone());
        }
        chain.reverse();
        chain.push(target.clone());
        chain
    }
}

pub struct TritoneSubstitution;

impl TritoneSubstitution {
    /// The dom7 a tritone away. Quality is always forced to dom7, so applying
    /// it twice restores the root but not necessarily the original quality.
    pub fn of(chord: &Chord) -> Chord {
        Chord::new(chord.root().transpose(TRITONE), ChordQuality::Dom7)
    }
}
