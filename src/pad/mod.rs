//! Pad-descriptor decoding.
//!
//! Altium's interchange export names each pad with a compact
//! underscore-delimited descriptor such as `RoundRect[T]Pad_540x640_135.514_um`.
//! This module decodes those descriptors:
//!
//! - [`decode_pad_name`] — full decode into a [`PadGeometry`]
//! - [`extract_layer`] — layer tag only, without decoding geometry
//! - [`is_plated_hole`] / [`is_smt_pad`] — plated-versus-SMT classification
//!
//! All entry points are pure functions over the input string; calls are
//! independent and safe to make concurrently.
//!
//! Note the deliberate asymmetry between the two layer paths: the full
//! decoder defaults to [`Layer::Top`] when the descriptor carries no
//! bracketed tag, while [`extract_layer`] treats a missing tag as an error.

pub mod decoder;
pub mod geometry;

pub use decoder::decode_pad_name;
pub use geometry::{Layer, PadGeometry, PadShape};

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DescriptorError, DescriptorResult};

/// Layer-tag pattern, matched anywhere in the descriptor.
fn layer_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([BTA])\]").expect("layer tag pattern is valid"))
}

/// Extracts the layer tag from a pad descriptor without decoding geometry.
///
/// Scans the whole string for the first bracketed `A`/`B`/`T` tag. Unlike
/// [`decode_pad_name`], which defaults to the top layer, a missing tag is
/// always an error here.
///
/// # Errors
///
/// Returns [`DescriptorError::MissingLayerTag`] when no bracketed tag exists
/// anywhere in the string.
pub fn extract_layer(descriptor: &str) -> DescriptorResult<Layer> {
    layer_tag_regex()
        .captures(descriptor)
        .and_then(|caps| caps.get(1)?.as_str().chars().next())
        .and_then(Layer::from_tag)
        .ok_or_else(|| DescriptorError::missing_layer_tag(descriptor))
}

/// Whether the descriptor names a plated through-hole pad (layer tag `A`).
///
/// # Errors
///
/// Propagates [`DescriptorError::MissingLayerTag`] from [`extract_layer`].
pub fn is_plated_hole(descriptor: &str) -> DescriptorResult<bool> {
    Ok(extract_layer(descriptor)?.is_plated())
}

/// Whether the descriptor names a surface-mount pad (layer tag `B` or `T`).
///
/// # Errors
///
/// Propagates [`DescriptorError::MissingLayerTag`] from [`extract_layer`].
pub fn is_smt_pad(descriptor: &str) -> DescriptorResult<bool> {
    Ok(!is_plated_hole(descriptor)?)
}
