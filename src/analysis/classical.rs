//! Classical (Riemannian) function analysis
//!
//! Diatonic chords take their function from fixed degree tables. Chromatic
//! chords are compared against the key's I, IV and V triads and take the
//! function of whichever they share the most notes with.

use super::{FunctionAnalyzer, FunctionLabel, HarmonicFunction};
use crate::types::{Chord, ChordQuality, Key, Mode, PitchClass, Scale};

use HarmonicFunction::{Dominant as D, Subdominant as S, Tonic as T};

const MAJOR_FUNCTIONS: [HarmonicFunction; 7] = [T, S, T, S, D, T, D];
const MINOR_FUNCTIONS: [HarmonicFunction; 7] = [T, S, T, S, D, S, D];

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Roman numeral grid rows, indexed by degree - 1; empty cells fall through
/// to a computed numeral
struct RomanGrid {
    major: [&'static str; 7],
    minor: [&'static str; 7],
    diminished: [&'static str; 7],
}

impl RomanGrid {
    /// Cell for a quality; dom7 reads the major row, other sevenths have no row
    fn lookup(&self, quality: ChordQuality, index: usize) -> Option<&'static str> {
        let row = match quality {
            ChordQuality::Major | ChordQuality::Dom7 => &self.major,
            ChordQuality::Minor => &self.minor,
            ChordQuality::Diminished => &self.diminished,
            _ => return None,
        };
        Some(row[index]).filter(|cell| !cell.is_empty())
    }
}

const MAJOR_ROMAN: RomanGrid = RomanGrid {
    major: ["I", "", "", "IV", "V", "", ""],
    minor: ["", "ii", "iii", "", "", "vi", ""],
    diminished: ["", "", "", "", "", "", "vii°"],
};

const MINOR_ROMAN: RomanGrid = RomanGrid {
    major: ["", "", "III", "", "V", "VI", "VII"],
    minor: ["i", "", "", "iv", "v", "", ""],
    diminished: ["", "ii°", "", "", "", "", ""],
};

/// Semitones above the key root -> nearest scale degree index, for chromatic roots
const CHROMATIC_DEGREE: [usize; 12] = [0, 0, 1, 2, 2, 3, 3, 4, 5, 5, 6, 6];

const FLAT_MARK: &str = "♭";

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalFunctionAnalyzer;

impl ClassicalFunctionAnalyzer {
    pub fn new() -> Self {
        ClassicalFunctionAnalyzer
    }

    /// Label one chord in the key given by `key_root` (any integer) and `mode`
    pub fn analyze(&self, chord: &Chord, key_root: i32, mode: Mode) -> FunctionLabel {
        let scale = Scale::new(key_root, mode);

        match scale.degree_of(chord.root()) {
            Some(degree) => Self::analyze_diatonic(chord, degree - 1, mode),
            None => Self::analyze_chromatic(chord, scale.root(), mode),
        }
    }

    /// Label one chord in a [`Key`]
    pub fn analyze_in(&self, chord: &Chord, key: Key) -> FunctionLabel {
        self.analyze(chord, key.root.value() as i32, key.mode)
    }

    fn analyze_diatonic(chord: &Chord, index: usize, mode: Mode) -> FunctionLabel {
        let (functions, grid) = match mode {
            Mode::Major => (&MAJOR_FUNCTIONS, &MAJOR_ROMAN),
            Mode::Minor => (&MINOR_FUNCTIONS, &MINOR_ROMAN),
        };

        let roman = grid
            .lookup(chord.quality(), index)
            .map(str::to_string)
            .unwrap_or_else(|| Self::computed_numeral(index, chord.quality()));

        FunctionLabel::new(functions[index], roman)
    }

    /// Numeral for a diatonic root whose quality has no grid entry
    fn computed_numeral(index: usize, quality: ChordQuality) -> String {
        let minor_family = matches!(quality, ChordQuality::Minor | ChordQuality::Min7);
        let diminished_family = matches!(quality, ChordQuality::Diminished | ChordQuality::Dim7);

        let base = NUMERALS[index];
        let mut numeral = if minor_family || diminished_family {
            base.to_lowercase()
        } else {
            base.to_string()
        };

        if diminished_family {
            numeral.push('°');
        }
        numeral.push_str(match quality {
            ChordQuality::Maj7 => "maj7",
            ChordQuality::Dom7 | ChordQuality::Min7 | ChordQuality::Dim7 | ChordQuality::Min7b5 => "7",
            _ => "",
        });
        numeral
    }

    fn analyze_chromatic(chord: &Chord, key_root: PitchClass, mode: Mode) -> FunctionLabel {
        log::debug!(
            "{} is chromatic in {}, using shared-note fallback",
            chord,
            Key::new(key_root, mode)
        );

        let tonic = Chord::new(key_root, mode.tonic_quality());
        let subdominant = Chord::new(key_root.transpose(5), mode.tonic_quality());
        let dominant = Chord::new(key_root.transpose(7), ChordQuality::Major);

        let shared_with = |reference: &Chord| {
            PitchClass::shared_notes(reference.pitch_classes(), chord.pitch_classes()).len()
        };
        let with_tonic = shared_with(&tonic);
        let with_subdominant = shared_with(&subdominant);
        let with_dominant = shared_with(&dominant);

        let func = if with_tonic >= with_subdominant && with_tonic >= with_dominant {
            HarmonicFunction::Tonic
        } else if with_dominant >= with_subdominant {
            HarmonicFunction::Dominant
        } else {
            HarmonicFunction::Subdominant
        };

        let interval = key_root.semitone_distance(chord.root());
        let base = NUMERALS[CHROMATIC_DEGREE[interval as usize]];
        let numeral = if matches!(chord.quality(), ChordQuality::Minor | ChordQuality::Min7) {
            base.to_lowercase()
        } else {
            base.to_string()
        };

        let roman = if mode.scale_intervals().contains(&interval) {
            numeral
        } else {
            format!("{}{}", FLAT_MARK, numeral)
        };

        FunctionLabel::new(func, roman)
    }
}

impl FunctionAnalyzer for ClassicalFunctionAnalyzer {
    type Label = FunctionLabel;

    fn analyze_section(&self, chords: &[Chord], key: Key) -> Vec<FunctionLabel> {
        chords.iter().map(|chord| self.analyze_in(chord, key)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(root: i32, quality: ChordQuality, key_root: i32, mode: Mode) -> (HarmonicFunction, String) {
        let result = ClassicalFunctionAnalyzer.analyze(&Chord::new(root, quality), key_root, mode);
        (result.func, result.roman_numeral)
    }

    fn numeral(root: i32, quality: ChordQuality, key_root: i32, mode: Mode) -> String {
        label(root, quality, key_root, mode).1
    }

    #[test]
    fn test_c_major_diatonic_triads() {
        use ChordQuality::*;
        let expected = [
            (0, Major, T, "I"),
            (2, Minor, S, "ii"),
            (4, Minor, T, "iii"),
            (5, Major, S, "IV"),
            (7, Major, D, "V"),
            (9, Minor, T, "vi"),
            (11, Diminished, D, "vii°"),
        ];
        for (root, quality, func, roman) in expected {
            assert_eq!(label(root, quality, 0, Mode::Major), (func, roman.to_string()));
        }
    }

    #[test]
    fn test_other_major_key() {
        assert_eq!(label(7, ChordQuality::Major, 7, Mode::Major), (T, "I".to_string()));
        assert_eq!(label(2, ChordQuality::Major, 7, Mode::Major), (D, "V".to_string()));
        // Key root normalizes
        assert_eq!(label(2, ChordQuality::Major, -5, Mode::Major), (D, "V".to_string()));
    }

    #[test]
    fn test_a_minor_diatonic_triads() {
        use ChordQuality::*;
        let expected = [
            (9, Minor, T, "i"),
            (11, Diminished, S, "ii°"),
            (0, Major, T, "III"),
            (2, Minor, S, "iv"),
            (4, Minor, D, "v"),
            (5, Major, S, "VI"),
            (7, Major, D, "VII"),
        ];
        for (root, quality, func, roman) in expected {
            assert_eq!(label(root, quality, 9, Mode::Minor), (func, roman.to_string()));
        }
        // Harmonic-minor dominant still reads from the major row
        assert_eq!(label(4, Major, 9, Mode::Minor), (D, "V".to_string()));
    }

    #[test]
    fn test_dom7_uses_major_row() {
        assert_eq!(numeral(7, ChordQuality::Dom7, 0, Mode::Major), "V");
        // No major cell on ii, so the computed numeral carries the 7
        assert_eq!(numeral(2, ChordQuality::Dom7, 0, Mode::Major), "II7");
    }

    #[test]
    fn test_computed_numerals() {
        use ChordQuality::*;
        assert_eq!(numeral(0, Maj7, 0, Mode::Major), "Imaj7");
        assert_eq!(numeral(2, Min7, 0, Mode::Major), "ii7");
        assert_eq!(numeral(11, Dim7, 0, Mode::Major), "vii°7");
        assert_eq!(numeral(11, Min7b5, 0, Mode::Major), "VII7");
        assert_eq!(numeral(0, Augmented, 0, Mode::Major), "I");
        assert_eq!(numeral(0, Minor, 0, Mode::Major), "i");
        assert_eq!(numeral(2, Diminished, 0, Mode::Major), "ii°");
    }

    #[test]
    fn test_chromatic_numerals() {
        use ChordQuality::*;
        // The rounding table reads Db in C as a lowered I
        assert_eq!(numeral(1, Major, 0, Mode::Major), "♭I");
        assert_eq!(numeral(3, Major, 0, Mode::Major), "♭III");
        assert_eq!(numeral(8, Major, 0, Mode::Major), "♭VI");
        assert_eq!(numeral(10, Major, 0, Mode::Major), "♭VII");
        assert_eq!(numeral(6, Minor, 0, Mode::Major), "♭iv");
        // Chromatic numerals never carry a seventh suffix
        assert_eq!(numeral(10, Dom7, 0, Mode::Major), "♭VII");
        assert_eq!(numeral(1, Minor, 9, Mode::Minor), "♭iii");
    }

    #[test]
    fn test_chromatic_functions() {
        use ChordQuality::*;
        // Db major {1,5,8}: I 0, IV(F) 1, V(G) 0
        assert_eq!(label(1, Major, 0, Mode::Major).0, S);
        // Eb major {3,7,10}: I 1, IV 0, V 1 -> tonic wins ties
        assert_eq!(label(3, Major, 0, Mode::Major).0, T);
        // F# minor {6,9,1}: I 0, IV 1, V 0
        assert_eq!(label(6, Minor, 0, Mode::Major).0, S);
        // F# major {6,10,1}: nothing shared -> tonic
        assert_eq!(label(6, Major, 0, Mode::Major).0, T);
        // Bb major {10,2,5}: I 0, IV 1, V 1 -> dominant wins over subdominant
        assert_eq!(label(10, Major, 0, Mode::Major).0, D);
    }

    #[test]
    fn test_chromatic_dominant() {
        // In A minor: I Am {9,0,4}, iv Dm {2,5,9}, V E {4,8,11}
        // G# major {8,0,3}: I 1 (C), iv 0, V 1 (G#) -> tonic on tie
        assert_eq!(label(8, ChordQuality::Major, 9, Mode::Minor).0, T);
        // C# major {1,5,8}: I 0, iv 1, V 1 -> dominant
        assert_eq!(label(1, ChordQuality::Major, 9, Mode::Minor).0, D);
    }

    #[test]
    fn test_explanation() {
        let result = ClassicalFunctionAnalyzer::new().analyze(&Chord::new(7, ChordQuality::Major), 0, Mode::Major);
        assert_eq!(result.explanation, "V — Dominant function");

        let chromatic = ClassicalFunctionAnalyzer.analyze(&Chord::new(1, ChordQuality::Major), 0, Mode::Major);
        assert_eq!(chromatic.explanation, "♭I — Subdominant function");
    }

    #[test]
    fn test_analyze_section() {
        let chords: Vec<Chord> = [0, 5, 7, 0]
            .into_iter()
            .map(|root| Chord::new(root, ChordQuality::Major))
            .collect();
        let labels = ClassicalFunctionAnalyzer.analyze_section(&chords, Key::major(0));
        let funcs: Vec<HarmonicFunction> = labels.iter().map(|l| l.func).collect();
        assert_eq!(funcs, vec![T, S, D, T]);
    }
}
