//! Harmonic transformations
//!
//! Six independent tools behind one facade. None of them hold state; the
//! facade exists so callers (and the WASM layer) can pass a single value
//! around instead of importing every tool.

pub mod dominants;
pub mod pivot;
pub mod symmetric;

pub use dominants::{DominantChain, SecondaryDominant, TritoneSubstitution};
pub use pivot::PivotChords;
pub use symmetric::{AugmentedConnections, DiminishedBridge};

use crate::config::ExplorerConfig;
use crate::types::{Chord, Key, Mode};

/// Shared toolkit instance
pub const TOOLKIT: HarmonicToolkit = HarmonicToolkit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarmonicToolkit;

impl HarmonicToolkit {
    pub fn new() -> Self {
        HarmonicToolkit
    }

    pub fn secondary_dominant(&self, target: &Chord) -> Chord {
        SecondaryDominant::of(target)
    }

    pub fn dominant_chain(&self, target: &Chord, length: usize) -> Vec<Chord> {
        DominantChain::build(target, length)
    }

    /// Dominant chain using the configured default length
    pub fn dominant_chain_default(&self, target: &Chord, config: &ExplorerConfig) -> Vec<Chord> {
        DominantChain::build(target, config.chain_length)
    }

    pub fn tritone_substitution(&self, chord: &Chord) -> Chord {
        TritoneSubstitution::of(chord)
    }

    pub fn diminished_bridge(&self, source: &Chord, target: &Chord) -> Vec<Chord> {
        DiminishedBridge::between(source, target)
    }

    pub fn augmented_connections(&self, source: &Chord, target: &Chord) -> Vec<Chord> {
        AugmentedConnections::between(source, target)
    }

    pub fn augmented_reachable_triads(&self, aug: &Chord) -> Vec<Chord> {
        AugmentedConnections::reachable_triads(aug)
    }

    pub fn pivot_chords(&self, root_a: i32, mode_a: Mode, root_b: i32, mode_b: Mode) -> Vec<Chord> {
        PivotChords::between(root_a, mode_a, root_b, mode_b)
    }

    pub fn pivot_chords_for(&self, key_a: Key, key_b: Key) -> Vec<Chord> {
        PivotChords::between(
            key_a.root.value() as i32,
            key_a.mode,
            key_b.root.value() as i32,
            key_b.mode,
        )
    }
}
