//! Bulk and diatonic chord generation

use crate::types::{Chord, ChordQuality, Mode, PitchClass};

/// Triad qualities for major scale degrees (I ii iii IV V vi vii°)
const MAJOR_TRIAD_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

/// Triad qualities for natural minor scale degrees (i ii° III iv v VI VII)
const MINOR_TRIAD_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
];

const MAJOR_SEVENTH_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Maj7,
    ChordQuality::Min7,
    ChordQuality::Min7,
    ChordQuality::Maj7,
    ChordQuality::Dom7,
    ChordQuality::Min7,
    ChordQuality::Min7b5,
];

const MINOR_SEVENTH_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Min7,
    ChordQuality::Min7b5,
    ChordQuality::Maj7,
    ChordQuality::Min7,
    ChordQuality::Min7,
    ChordQuality::Maj7,
    ChordQuality::Dom7,
];

/// Palette triads: only major and minor, not diminished/augmented
const PALETTE_TRIAD_QUALITIES: [ChordQuality; 2] = [ChordQuality::Major, ChordQuality::Minor];

const SEVENTH_QUALITIES: [ChordQuality; 5] = [
    ChordQuality::Dom7,
    ChordQuality::Maj7,
    ChordQuality::Min7,
    ChordQuality::Dim7,
    ChordQuality::Min7b5,
];

/// Chord collections for every root, or for one key
pub struct ChordFactory;

impl ChordFactory {
    /// The 24 major and minor triads, all qualities of root 0 first
    pub fn all_triads() -> Vec<Chord> {
        Self::generate_for_qualities(&PALETTE_TRIAD_QUALITIES)
    }

    /// The 60 seventh chords (12 roots x 5 qualities)
    pub fn all_sevenths() -> Vec<Chord> {
        Self::generate_for_qualities(&SEVENTH_QUALITIES)
    }

    /// Every root with every quality (108 chords)
    pub fn all_chords() -> Vec<Chord> {
        Self::generate_for_qualities(&ChordQuality::ALL)
    }

    /// The seven diatonic triads of a key, in degree order
    pub fn diatonic_triads(root: i32, mode: Mode) -> Vec<Chord> {
        let qualities = match mode {
            Mode::Major => &MAJOR_TRIAD_QUALITIES,
            Mode::Minor => &MINOR_TRIAD_QUALITIES,
        };
        Self::diatonic(root, mode, qualities)
    }

    /// The seven diatonic seventh chords of a key, in degree order
    pub fn diatonic_sevenths(root: i32, mode: Mode) -> Vec<Chord> {
        let qualities = match mode {
            Mode::Major => &MAJOR_SEVENTH_QUALITIES,
            Mode::Minor => &MINOR_SEVENTH_QUALITIES,
        };
        Self::diatonic(root, mode, qualities)
    }

    fn diatonic(root: i32, mode: Mode, qualities: &[ChordQuality; 7]) -> Vec<Chord> {
        let tonic = PitchClass::new(root);
        mode.scale_intervals()
            .iter()
            .zip(qualities)
            .map(|(&interval, &quality)| Chord::new(tonic.transpose(interval as i32), quality))
            .collect()
    }

    fn generate_for_qualities(qualities: &[ChordQuality]) -> Vec<Chord> {
        (0..12)
            .flat_map(|root| {
                qualities
                    .iter()
                    .map(move |&quality| Chord::new(root, quality))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(chords: &[Chord]) -> Vec<String> {
        chords.iter().map(|c| c.symbol(false)).collect()
    }

    #[test]
    fn test_all_triads() {
        let triads = ChordFactory::all_triads();
        assert_eq!(triads.len(), 24);
        assert_eq!(triads[0], Chord::new(0, ChordQuality::Major));
        assert_eq!(triads[1], Chord::new(0, ChordQuality::Minor));
        assert_eq!(triads[2], Chord::new(1, ChordQuality::Major));
        assert_eq!(triads[23], Chord::new(11, ChordQuality::Minor));
    }

    #[test]
    fn test_all_sevenths() {
        let sevenths = ChordFactory::all_sevenths();
        assert_eq!(sevenths.len(), 60);
        assert!(sevenths.iter().all(|c| c.is_seventh()));
        assert_eq!(
            symbols(&sevenths[..5]),
            vec!["C7", "Cmaj7", "Cm7", "Cdim7", "Cm7b5"]
        );
        assert_eq!(sevenths[5].root().value(), 1);
    }

    #[test]
    fn test_all_chords() {
        let chords = ChordFactory::all_chords();
        assert_eq!(chords.len(), 108);
        assert_eq!(chords[8].quality(), ChordQuality::Min7b5);
        assert_eq!(chords[9], Chord::new(1, ChordQuality::Major));
    }

    #[test]
    fn test_diatonic_triads() {
        assert_eq!(
            symbols(&ChordFactory::diatonic_triads(0, Mode::Major)),
            vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]
        );
        assert_eq!(
            symbols(&ChordFactory::diatonic_triads(9, Mode::Minor)),
            vec!["Am", "Bdim", "C", "Dm", "Em", "F", "G"]
        );
        // Any integer root normalizes
        assert_eq!(
            ChordFactory::diatonic_triads(-12, Mode::Major),
            ChordFactory::diatonic_triads(0, Mode::Major)
        );
    }

    #[test]
    fn test_diatonic_sevenths() {
        assert_eq!(
            symbols(&ChordFactory::diatonic_sevenths(0, Mode::Major)),
            vec!["Cmaj7", "Dm7", "Em7", "Fmaj7", "G7", "Am7", "Bm7b5"]
        );
        assert_eq!(
            symbols(&ChordFactory::diatonic_sevenths(9, Mode::Minor)),
            vec!["Am7", "Bm7b5", "Cmaj7", "Dm7", "Em7", "Fmaj7", "G7"]
        );
    }

    #[test]
    fn test_diatonic_chords_stay_in_key() {
        for root in 0..12 {
            for mode in [Mode::Major, Mode::Minor] {
                let scale = crate::types::Scale::new(root, mode);
                let chords = ChordFactory::diatonic_triads(root, mode)
                    .into_iter()
                    .chain(ChordFactory::diatonic_sevenths(root, mode));
                for chord in chords {
                    assert!(chord.pitch_classes().iter().all(|&pc| scale.contains(pc)));
                }
            }
        }
    }
}
