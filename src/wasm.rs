//! WASM bindings
//!
//! Plain integers and enumerated strings in, serde-built `JsValue` records
//! out. Bad enum strings come back as a `JsError` carrying the parse message.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::analysis::{ClassicalFunctionAnalyzer, SyntacticalFunctionAnalyzer};
#[cfg(feature = "wasm")]
use crate::config::ExplorerConfig;
#[cfg(feature = "wasm")]
use crate::proximity::ProximityEngine;
#[cfg(feature = "wasm")]
use crate::toolkit::TOOLKIT;
#[cfg(feature = "wasm")]
use crate::types::{Chord, ChordQuality, ChordRecord, Key, Mode};
#[cfg(feature = "wasm")]
use crate::voice_leading::VoiceLeadingAnalyzer;

#[cfg(feature = "wasm")]
fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

#[cfg(feature = "wasm")]
fn chord(root: i32, quality: &str) -> Result<Chord, JsError> {
    Ok(Chord::new(root, quality.parse::<ChordQuality>()?))
}

/// Chord records (`{ root, quality }`) from a JS array
#[cfg(feature = "wasm")]
fn chords_from_js(chords: JsValue) -> Result<Vec<Chord>, JsError> {
    let records: Vec<ChordRecord> = serde_wasm_bindgen::from_value(chords)?;
    Ok(records.into_iter().map(Chord::from).collect())
}

/// Grouped palette for a key. `options` is an optional `ExplorerConfig` object.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn rank_palette(key_root: i32, mode: &str, options: JsValue) -> Result<JsValue, JsError> {
    let key = Key::new(key_root, mode.parse::<Mode>()?);
    let config: ExplorerConfig = if options.is_undefined() || options.is_null() {
        ExplorerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    Ok(to_js(&ProximityEngine::palette(key, &config)))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn chord_symbol(root: i32, quality: &str, prefer_flats: bool) -> Result<String, JsError> {
    Ok(chord(root, quality)?.symbol(prefer_flats))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn secondary_dominant(root: i32, quality: &str) -> Result<JsValue, JsError> {
    Ok(to_js(&TOOLKIT.secondary_dominant(&chord(root, quality)?)))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn dominant_chain(root: i32, quality: &str, length: usize) -> Result<JsValue, JsError> {
    Ok(to_js(&TOOLKIT.dominant_chain(&chord(root, quality)?, length)))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn tritone_substitution(root: i32, quality: &str) -> Result<JsValue, JsError> {
    Ok(to_js(&TOOLKIT.tritone_substitution(&chord(root, quality)?)))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn diminished_bridge(
    source_root: i32,
    source_quality: &str,
    target_root: i32,
    target_quality: &str,
) -> Result<JsValue, JsError> {
    let source = chord(source_root, source_quality)?;
    let target = chord(target_root, target_quality)?;
    Ok(to_js(&TOOLKIT.diminished_bridge(&source, &target)))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn augmented_connections(
    source_root: i32,
    source_quality: &str,
    target_root: i32,
    target_quality: &str,
) -> Result<JsValue, JsError> {
    let source = chord(source_root, source_quality)?;
    let target = chord(target_root, target_quality)?;
    Ok(to_js(&TOOLKIT.augmented_connections(&source, &target)))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn augmented_reachable_triads(root: i32) -> JsValue {
    let aug = Chord::new(root, ChordQuality::Augmented);
    to_js(&TOOLKIT.augmented_reachable_triads(&aug))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn pivot_chords(
    root_a: i32,
    mode_a: &str,
    root_b: i32,
    mode_b: &str,
) -> Result<JsValue, JsError> {
    let pivots = TOOLKIT.pivot_chords(root_a, mode_a.parse()?, root_b, mode_b.parse()?);
    Ok(to_js(&pivots))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn analyze_classical(
    root: i32,
    quality: &str,
    key_root: i32,
    mode: &str,
) -> Result<JsValue, JsError> {
    let label = ClassicalFunctionAnalyzer.analyze(&chord(root, quality)?, key_root, mode.parse()?);
    Ok(to_js(&label))
}

/// Syntactical labels for an array of `{ root, quality }` records
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn analyze_section(chords: JsValue, key_root: i32, mode: &str) -> Result<JsValue, JsError> {
    let chords = chords_from_js(chords)?;
    let labels = SyntacticalFunctionAnalyzer.analyze_section(&chords, key_root, mode.parse()?);
    Ok(to_js(&labels))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn analyze_voice_leading(chords: JsValue) -> Result<JsValue, JsError> {
    let chords = chords_from_js(chords)?;
    Ok(to_js(&VoiceLeadingAnalyzer.analyze_progression(&chords)))
}
