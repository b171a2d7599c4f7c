//! Symmetric-chord connections.
//!
//! Diminished sevenths repeat every 3 semitones and augmented triads every
//! 4, so twelve roots collapse to 3 and 4 distinct pitch sets. Dedupe here is
//! structural (sorted pitch values), not nominal chord equality: C°7 and
//! E♭°7 are different chords but the same sound.

use crate::factory::ChordFactory;
use crate::types::{Chord, ChordQuality, PitchClass};
use std::collections::{BTreeSet, HashSet};

/// One representative chord per distinct pitch set of `quality`, lowest root
/// first, keeping only those that share a note with both ends
fn symmetric_connections(quality: ChordQuality, source: &Chord, target: &Chord) -> Vec<Chord> {
    log::debug!(
        "Searching {} connections from {} to {}",
        quality,
        source,
        target
    );

    let mut seen: HashSet<Vec<u8>> = HashSet::new();
    let mut connections = Vec::new();

    for root in 0..12 {
        let candidate = Chord::new(root, quality);
        if !seen.insert(candidate.pitch_set_key()) {
            log::trace!("Skipping {}: pitch set already covered", candidate);
            continue;
        }

        let touches_source =
            !PitchClass::shared_notes(candidate.pitch_classes(), source.pitch_classes()).is_empty();
        let touches_target =
            !PitchClass::shared_notes(candidate.pitch_classes(), target.pitch_classes()).is_empty();

        if touches_source && touches_target {
            connections.push(candidate);
        }
    }

    connections
}

pub struct DiminishedBridge;

impl DiminishedBridge {
    /// Diminished sevenths sharing at least one note with both chords (at most 3)
    pub fn between(source: &Chord, target: &Chord) -> Vec<Chord> {
        symmetric_connections(ChordQuality::Dim7, source, target)
    }
}

pub struct AugmentedConnections;

impl AugmentedConnections {
    /// Augmented triads sharing at least one note with both chords (at most 4)
    pub fn between(source: &Chord, target: &Chord) -> Vec<Chord> {
        symmetric_connections(ChordQuality::Augmented, source, target)
    }

    /// Major and minor triads one semitone step away from `aug`.
    ///
    /// Each note is moved down and then up by a semitone with the others held;
    /// the resulting set is matched against every major/minor triad. For an
    /// augmented triad this always gives six distinct chords.
    pub fn reachable_triads(aug: &Chord) -> Vec<Chord> {
        let triads = ChordFactory::all_triads();
        let notes = aug.pitch_classes();
        let mut reachable: Vec<Chord> = Vec::new();

        for index in 0..notes.len() {
            for step in [-1, 1] {
                let moved: BTreeSet<u8> = notes
                    .iter()
                    .enumerate()
                    .map(|(i, pc)| if i == index { pc.transpose(step) } else { *pc })
                    .map(|pc| pc.value())
                    .collect();

                let found = triads.iter().find(|triad| {
                    triad.pitch_values().into_iter().collect::<BTreeSet<u8>>() == moved
                });

                match found {
                    Some(triad) if !reachable.contains(triad) => reachable.push(triad.clone()),
                    Some(_) => {}
                    None => log::trace!("No triad matches {:?}", moved),
                }
            }
        }

        reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(chords: &[Chord]) -> Vec<String> {
        chords.iter().map(|c| c.symbol(false)).collect()
    }

    fn assert_distinct_sets(chords: &[Chord]) {
        let keys: HashSet<Vec<u8>> = chords.iter().map(|c| c.pitch_set_key()).collect();
        assert_eq!(keys.len(), chords.len());
    }

    #[test]
    fn test_diminished_bridge_c_to_g() {
        let c = Chord::new(0, ChordQuality::Major);
        let g = Chord::new(7, ChordQuality::Major);
        let bridge = DiminishedBridge::between(&c, &g);

        // C°7 {C Eb Gb A} touches C (C) and G (none) -> excluded
        // C#°7 {C# E G A#} touches both via E and G
        // D°7 {D F Ab B} touches G via D/B but not C -> excluded
        assert_eq!(symbols(&bridge), vec!["C#dim7"]);
    }

    #[test]
    fn test_diminished_bridge_bounds() {
        for source in ChordFactory::all_chords() {
            for target in ChordFactory::diatonic_triads(0, crate::types::Mode::Major) {
                let bridge = DiminishedBridge::between(&source, &target);
                assert!(bridge.len() <= 3);
                assert_distinct_sets(&bridge);
                assert!(bridge.iter().all(|c| c.quality() == ChordQuality::Dim7));
            }
        }
    }

    #[test]
    fn test_diminished_bridge_uses_lowest_root() {
        // Eb°7 has the same notes as C°7; the root-0 spelling represents it
        let eb_dim7 = Chord::new(3, ChordQuality::Dim7);
        let c = Chord::new(0, ChordQuality::Major);
        let bridge = DiminishedBridge::between(&c, &eb_dim7);
        assert_eq!(bridge, vec![Chord::new(0, ChordQuality::Dim7)]);
    }

    #[test]
    fn test_augmented_connections() {
        let c = Chord::new(0, ChordQuality::Major);
        let e = Chord::new(4, ChordQuality::Major);
        let connections = AugmentedConnections::between(&c, &e);

        // Caug {C E G#}, C#aug {C# F A}, Daug {D F# A#}, D#aug {D# G B}
        assert_eq!(symbols(&connections), vec!["Caug", "D#aug"]);
    }

    #[test]
    fn test_augmented_connections_bounds() {
        for source in ChordFactory::all_triads() {
            for target in ChordFactory::all_sevenths() {
                let connections = AugmentedConnections::between(&source, &target);
                assert!(connections.len() <= 4);
                assert_distinct_sets(&connections);
            }
        }
    }

    #[test]
    fn test_augmented_reachable_triads() {
        let c_aug = Chord::new(0, ChordQuality::Augmented);
        let reachable = AugmentedConnections::reachable_triads(&c_aug);
        assert_eq!(
            symbols(&reachable),
            vec!["E", "C#m", "G#", "Fm", "C", "Am"]
        );
    }

    #[test]
    fn test_every_augmented_triad_reaches_six() {
        for root in 0..12 {
            let aug = Chord::new(root, ChordQuality::Augmented);
            let reachable = AugmentedConnections::reachable_triads(&aug);
            assert_eq!(reachable.len(), 6);
            assert!(reachable.iter().all(|c| c.is_triad()));
            assert_eq!(reachable.iter().collect::<HashSet<_>>().len(), 6);
        }
    }
}
