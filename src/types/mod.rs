// src/types/mod.rs

pub mod chord;
pub mod pitch_class;
pub mod scale;

pub use chord::{Chord, ChordQuality, ChordRecord};
pub use pitch_class::{PitchClass, NOTE_NAMES_FLAT, NOTE_NAMES_SHARP};
pub use scale::{Key, Mode, Scale, FLAT_KEY_ROOTS, MAJOR_SCALE_INTERVALS, MINOR_SCALE_INTERVALS};
