//! # Chord Explorer Core
//!
//! Harmonic-analysis engine for the chord explorer. Given a key and a tonic
//! chord it models pitch classes and chords, ranks candidate chords by how
//! close they sit to the tonic, generates standard harmonic transformations
//! (secondary dominants, tritone substitutions, diminished/augmented bridges,
//! pivot chords), and labels chords with both classical and positional
//! function.
//!
//! Everything here is pure computation over immutable values. Rendering,
//! audio, persistence and MIDI export live outside this crate and call in
//! with plain integers and enumerated strings.
//!
//! ## Features
//!
//! - **serde**: Enable JSON serialization for web interop
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//! - **colored**: Enable colored terminal output (disabled in WASM)
//!
//! ## Modules
//!
//! - `types`: pitch classes, chords, scales and keys.
//! - `factory`: bulk and diatonic chord generation.
//! - `proximity`: shared-note ranking against a tonic.
//! - `toolkit`: the six harmonic transformation tools behind one facade.
//! - `analysis`: classical and syntactical function analyzers.
//! - `voice_leading`: common-tone analysis between adjacent chords.
//! - `progression`: sections, progressions and their combined analysis.
//!
//! ## Example
//!
//! ```
//! use chord_explorer_core::{Chord, ChordQuality, ProximityEngine, Proximity, TOOLKIT};
//!
//! let c = Chord::new(0, ChordQuality::Major);
//! let am = Chord::new(9, ChordQuality::Minor);
//! assert_eq!(ProximityEngine::compute_proximity(&c, &am).proximity, Proximity::Close);
//!
//! let chain: Vec<String> = TOOLKIT
//!     .dominant_chain(&c, 3)
//!     .iter()
//!     .map(|chord| chord.symbol(false))
//!     .collect();
//! assert_eq!(chain, ["A7", "D7", "G7", "C"]);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod factory;
pub mod progression;
pub mod proximity;
pub mod toolkit;
pub mod types;
pub mod voice_leading;
pub mod wasm;

// Re-export commonly used types
pub use analysis::{
    ClassicalFunctionAnalyzer, FunctionAnalyzer, FunctionLabel, HarmonicFunction,
    SyntacticalFunctionAnalyzer, SyntacticalLabel, SyntacticalRole,
};
pub use config::{ExplorerConfig, Spelling};
pub use error::{Result, TheoryError};
pub use factory::ChordFactory;
pub use progression::{parse_chords, Progression, Section, SectionAnalysis};
pub use proximity::{Proximity, ProximityEngine, ProximityGroups, RankedChord};
pub use toolkit::{HarmonicToolkit, TOOLKIT};
pub use types::{Chord, ChordQuality, ChordRecord, Key, Mode, PitchClass, Scale};
pub use voice_leading::{VoiceLeadingAnalyzer, VoiceLeadingResult};
