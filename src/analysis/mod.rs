//! Harmonic function analysis
//!
//! Two independent strategies label the chords of a section:
//!
//! - [`ClassicalFunctionAnalyzer`]: Riemannian T/S/D from the chord's scale
//!   degree, with a shared-note fallback for chromatic chords.
//! - [`SyntacticalFunctionAnalyzer`]: position within the section's
//!   T → S → D → T circuit, ignoring pitch content entirely.
//!
//! Both implement [`FunctionAnalyzer`], so a caller can pick a strategy at
//! runtime without either one knowing about the other.

pub mod classical;
pub mod syntactical;

pub use classical::ClassicalFunctionAnalyzer;
pub use syntactical::SyntacticalFunctionAnalyzer;

use crate::types::{Chord, Key};
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;

/// Classical harmonic function category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HarmonicFunction {
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    Tonic,
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Subdominant,
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Dominant,
}

impl HarmonicFunction {
    /// Single-letter tag: "T", "S" or "D"
    pub fn short(&self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "T",
            HarmonicFunction::Subdominant => "S",
            HarmonicFunction::Dominant => "D",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "Tonic",
            HarmonicFunction::Subdominant => "Subdominant",
            HarmonicFunction::Dominant => "Dominant",
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

/// Classical analysis of one chord
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FunctionLabel {
    pub func: HarmonicFunction,
    pub roman_numeral: String,
    pub explanation: String,
}

impl FunctionLabel {
    pub(crate) fn new(func: HarmonicFunction, roman_numeral: String) -> Self {
        let explanation = format!("{} — {} function", roman_numeral, func.name());
        FunctionLabel {
            func,
            roman_numeral,
            explanation,
        }
    }
}

#[cfg(feature = "colored")]
impl fmt::Display for FunctionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.func {
            HarmonicFunction::Tonic => self.func.short().green().bold(),
            HarmonicFunction::Subdominant => self.func.short().yellow().bold(),
            HarmonicFunction::Dominant => self.func.short().red().bold(),
        };
        write!(f, "{} [{}]", self.roman_numeral.bright_white(), tag)
    }
}

#[cfg(not(feature = "colored"))]
impl fmt::Display for FunctionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.roman_numeral, self.func.short())
    }
}

/// Positional role within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyntacticalRole {
    #[cfg_attr(feature = "serde", serde(rename = "T-opening"))]
    Opening,
    #[cfg_attr(feature = "serde", serde(rename = "S-transitional"))]
    Transitional,
    #[cfg_attr(feature = "serde", serde(rename = "D-penultimate"))]
    Penultimate,
    #[cfg_attr(feature = "serde", serde(rename = "T-closing"))]
    Closing,
}

impl SyntacticalRole {
    /// Position in the T → S → D → T circuit (1-4)
    pub fn circuit_position(&self) -> u8 {
        match self {
            SyntacticalRole::Opening => 1,
            SyntacticalRole::Transitional => 2,
            SyntacticalRole::Penultimate => 3,
            SyntacticalRole::Closing => 4,
        }
    }

    /// Function letter of this role
    pub fn short(&self) -> &'static str {
        self.function().short()
    }

    pub fn function(&self) -> HarmonicFunction {
        match self {
            SyntacticalRole::Opening | SyntacticalRole::Closing => HarmonicFunction::Tonic,
            SyntacticalRole::Transitional => HarmonicFunction::Subdominant,
            SyntacticalRole::Penultimate => HarmonicFunction::Dominant,
        }
    }

    /// Enumerated tag, e.g. "T-opening"
    pub fn tag(&self) -> &'static str {
        match self {
            SyntacticalRole::Opening => "T-opening",
            SyntacticalRole::Transitional => "S-transitional",
            SyntacticalRole::Penultimate => "D-penultimate",
            SyntacticalRole::Closing => "T-closing",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            SyntacticalRole::Opening => "Opening position — tonic function (establishes home)",
            SyntacticalRole::Transitional => "Mid-section — subdominant/departure function",
            SyntacticalRole::Penultimate => {
                "Penultimate position — dominant function (drives toward resolution)"
            }
            SyntacticalRole::Closing => "Closing position — tonic resolution (return home)",
        }
    }
}

impl fmt::Display for SyntacticalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Syntactical analysis of one chord position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SyntacticalLabel {
    pub role: SyntacticalRole,
    pub circuit_position: u8,
    pub explanation: String,
}

impl From<SyntacticalRole> for SyntacticalLabel {
    fn from(role: SyntacticalRole) -> Self {
        SyntacticalLabel {
            role,
            circuit_position: role.circuit_position(),
            explanation: role.explanation().to_string(),
        }
    }
}

/// A strategy for labeling every chord of a section in a key
pub trait FunctionAnalyzer {
    type Label;

    /// One label per chord, in order
    fn analyze_section(&self, chords: &[Chord], key: Key) -> Vec<Self::Label>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_label_explanation() {
        let label = FunctionLabel::new(HarmonicFunction::Dominant, "V".to_string());
        assert_eq!(label.explanation, "V — Dominant function");
        assert_eq!(label.func.short(), "D");
    }

    #[test]
    fn test_roles() {
        let roles = [
            SyntacticalRole::Opening,
            SyntacticalRole::Transitional,
            SyntacticalRole::Penultimate,
            SyntacticalRole::Closing,
        ];
        let positions: Vec<u8> = roles.iter().map(|r| r.circuit_position()).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);

        let letters: Vec<&str> = roles.iter().map(|r| r.short()).collect();
        assert_eq!(letters, vec!["T", "S", "D", "T"]);

        assert_eq!(SyntacticalRole::Penultimate.to_string(), "D-penultimate");
    }

    #[test]
    fn test_label_from_role() {
        let label = SyntacticalLabel::from(SyntacticalRole::Closing);
        assert_eq!(label.circuit_position, 4);
        assert!(label.explanation.starts_with("Closing position"));
    }

    // Strategy selected at runtime
    #[test]
    fn test_trait_dispatch() {
        use crate::types::ChordQuality;

        let chords = vec![
            Chord::new(0, ChordQuality::Major),
            Chord::new(7, ChordQuality::Major),
        ];
        let key = Key::major(0);

        let analyzers: Vec<Box<dyn FunctionAnalyzer<Label = String>>> = vec![
            Box::new(Letters(ClassicalFunctionAnalyzer)),
            Box::new(Letters(SyntacticalFunctionAnalyzer)),
        ];
        let results: Vec<Vec<String>> = analyzers
            .iter()
            .map(|a| a.analyze_section(&chords, key))
            .collect();
        assert_eq!(results[0], vec!["T", "D"]);
        assert_eq!(results[1], vec!["T", "T"]);
    }

    struct Letters<A>(A);

    impl FunctionAnalyzer for Letters<ClassicalFunctionAnalyzer> {
        type Label = String;

        fn analyze_section(&self, chords: &[Chord], key: Key) -> Vec<String> {
            FunctionAnalyzer::analyze_section(&self.0, chords, key)
                .into_iter()
                .map(|l| l.func.short().to_string())
                .collect()
        }
    }

    impl FunctionAnalyzer for Letters<SyntacticalFunctionAnalyzer> {
        type Label = String;

        fn analyze_section(&self, chords: &[Chord], key: Key) -> Vec<String> {
            FunctionAnalyzer::analyze_section(&self.0, chords, key)
                .into_iter()
                .map(|l| l.role.short().to_string())
                .collect()
        }
    }
}
