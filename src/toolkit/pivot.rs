use crate::factory::ChordFactory;
use crate::types::{Chord, Mode};

/// Chords diatonic to two keys, the hinge of a common-chord modulation
pub struct PivotChords;

impl PivotChords {
    /// Diatonic triads of key A, in key-A degree order, that are also
    /// diatonic triads of key B
    pub fn between(root_a: i32, mode_a: Mode, root_b: i32, mode_b: Mode) -> Vec<Chord> {
        log::debug!(
            "Finding pivot chords between {} {} and {} {}",
            root_a,
            mode_a,
            root_b,
            mode_b
        );

        let in_b = ChordFactory::diatonic_triads(root_b, mode_b);
        ChordFactory::diatonic_triads(root_a, mode_a)
            .into_iter()
            .filter(|chord| in_b.contains(chord))
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
    fn test_pivot_c_major_to_g_major() {
        let pivots = PivotChords::between(0, Mode::Major, 7, Mode::Major);
        assert_eq!(symbols(&pivots), vec!["C", "Em", "G", "Am"]);
    }

    #[test]
    fn test_pivot_relative_keys_share_everything() {
        let pivots = PivotChords::between(0, Mode::Major, 9, Mode::Minor);
        assert_eq!(pivots, ChordFactory::diatonic_triads(0, Mode::Major));

        // Order follows the first key
        let reversed = PivotChords::between(9, Mode::Minor, 0, Mode::Major);
        assert_eq!(symbols(&reversed), vec!["Am", "Bdim", "C", "Dm", "Em", "F", "G"]);
    }

    #[test]
    fn test_pivot_distant_keys() {
        // C major and F# major share no triads
        assert!(PivotChords::between(0, Mode::Major, 6, Mode::Major).is_empty());
    }

    #[test]
    fn test_pivot_same_key() {
        let pivots = PivotChords::between(2, Mode::Minor, 14, Mode::Minor);
        assert_eq!(pivots.len(), 7);
    }
}
