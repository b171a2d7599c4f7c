//! Explorer configuration types
//!
//! Plain data describing how a caller wants the engine driven: which chords
//! the palette offers, how notes are spelled, and the default length of
//! generated dominant chains. Nothing here holds state between calls.

use crate::types::Key;

/// How note names are spelled in symbols and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Spelling {
    /// Follow the key's convention (flats for Db, Eb, F, Ab, Bb)
    #[default]
    Auto,
    Sharps,
    Flats,
}

impl Spelling {
    /// Parse spelling from string (case-insensitive)
    pub fn from_name(s: &str) -> Option<Spelling> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Spelling::Auto),
            "sharps" | "sharp" | "#" => Some(Spelling::Sharps),
            "flats" | "flat" | "b" => Some(Spelling::Flats),
            _ => None,
        }
    }

    /// Resolve to a concrete flat/sharp choice for a key
    pub fn prefer_flats(&self, key: Key) -> bool {
        match self {
            Spelling::Auto => key.prefer_flats(),
            Spelling::Sharps => false,
            Spelling::Flats => true,
        }
    }
}

/// Options for palette ranking and the harmonic tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ExplorerConfig {
    /// Offer the 60 seventh chords alongside the 24 major/minor triads
    pub include_sevenths: bool,
    pub spelling: Spelling,
    /// Number of secondary dominants prepended by a default dominant chain
    pub chain_length: usize,
}

impl ExplorerConfig {
    pub const DEFAULT_CHAIN_LENGTH: usize = 3;

    pub fn with_sevenths(mut self, include_sevenths: bool) -> Self {
        self.include_sevenths = include_sevenths;
        self
    }

    pub fn with_spelling(mut self, spelling: Spelling) -> Self {
        self.spelling = spelling;
        self
    }

    pub fn with_chain_length(mut self, chain_length: usize) -> Self {
        self.chain_length = chain_length;
        self
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            include_sevenths: false,
            spelling: Spelling::Auto,
            chain_length: Self::DEFAULT_CHAIN_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert!(!config.include_sevenths);
        assert_eq!(config.spelling, Spelling::Auto);
        assert_eq!(config.chain_length, 3);
    }

    #[test]
    fn test_builder_methods() {
        let config = ExplorerConfig::default()
            .with_sevenths(true)
            .with_spelling(Spelling::Flats)
            .with_chain_length(5);
        assert!(config.include_sevenths);
        assert_eq!(config.spelling, Spelling::Flats);
        assert_eq!(config.chain_length, 5);
    }

    #[test]
    fn test_spelling_parsing() {
        assert_eq!(Spelling::from_name("auto"), Some(Spelling::Auto));
        assert_eq!(Spelling::from_name("FLATS"), Some(Spelling::Flats));
        assert_eq!(Spelling::from_name("Sharp"), Some(Spelling::Sharps));
        assert_eq!(Spelling::from_name("natural"), None);
    }

    #[test]
    fn test_spelling_resolution() {
        let f_major = Key::major(5);
        let g_major = Key::major(7);
        assert!(Spelling::Auto.prefer_flats(f_major));
        assert!(!Spelling::Auto.prefer_flats(g_major));
        assert!(Spelling::Flats.prefer_flats(g_major));
        assert!(!Spelling::Sharps.prefer_flats(f_major));
    }
}
