//! Decoder for underscore-delimited pad-descriptor strings.
//!
//! # Descriptor Format
//!
//! ```text
//! <Shape>[<Layer>]Pad_<params...>_um_<qualifiers...>
//! ```
//!
//! The first segment carries the shape name, an optional bracketed layer tag,
//! and usually a fused literal `Pad`. The remaining segments are
//! shape-specific:
//!
//! - `Round[A]Pad_1524_um` — diameter
//! - `RoundRect[T]Pad_540x640_135.514_um` — `<W>x<H>`, then corner radius
//! - `Oval[A]Pad_2286x1524_um` — `<W>x<H>`, circularized on decode
//! - `Rect[T]Pad_609.6x1270_um` — `<W>x<H>`
//! - `Cust[T]Pad_1000x500_1000x_1500_23_um` — `<W>x<H>`, then free-form params
//!
//! Dimensional values are micrometers (the trailing `um` marker). Missing
//! required segments are hard errors; numeric text that is present but does
//! not parse becomes NaN instead, matching the permissive behaviour of the
//! interchange pipeline this feeds.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::geometry::{Layer, PadGeometry, PadShape};
use crate::error::{DescriptorError, DescriptorResult};
use crate::units::to_millimeters;

/// First-segment pattern: a letter run, optionally followed by a bracketed
/// layer tag. Unanchored, so leading non-letter noise is skipped rather than
/// rejected.
fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z]+)(?:\[([ABT])\])?").expect("header pattern is valid")
    })
}

/// Decodes a pad-descriptor string into its structured geometry.
///
/// See the [module docs](self) for the descriptor format. Unrecognized shape
/// names do not fail; they decode to [`PadShape::Unrecognized`] so callers
/// can filter them downstream.
///
/// # Errors
///
/// Returns [`DescriptorError::MalformedDescriptor`] when the shape/layer
/// header cannot be matched or a structurally required segment is absent.
///
/// # Examples
///
/// ```
/// use altium_pad_decoder::pad::{decode_pad_name, Layer, PadShape};
///
/// let pad = decode_pad_name("Round[A]Pad_1524_um")?;
/// assert_eq!(pad.layer, Layer::MultiLayer);
/// assert_eq!(pad.shape, PadShape::Round { diameter: 1.524 });
/// # Ok::<(), altium_pad_decoder::error::DescriptorError>(())
/// ```
pub fn decode_pad_name(descriptor: &str) -> DescriptorResult<PadGeometry> {
    let mut segments = descriptor.split('_');
    // split always yields at least one item, but the header may be empty
    let header = segments.next().unwrap_or_default();
    if header.is_empty() {
        return Err(DescriptorError::malformed(
            descriptor,
            "unable to parse pad shape and layer",
        ));
    }
    let rest: Vec<&str> = segments.collect();

    let caps = header_regex().captures(header).ok_or_else(|| {
        DescriptorError::malformed(descriptor, "no shape name in first segment")
    })?;
    let shape_name = strip_pad_suffix(caps.get(1).map_or("", |m| m.as_str()));
    let layer = caps
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Layer::from_tag)
        .unwrap_or_default();

    let shape = match shape_name {
        "Round" => {
            let diameter = rest.first().ok_or_else(|| {
                DescriptorError::malformed(descriptor, "missing diameter segment")
            })?;
            PadShape::Round {
                diameter: to_millimeters(parse_float(diameter)),
            }
        }
        "RoundRect" => {
            let (Some(dimensions), Some(radius)) = (rest.first(), rest.get(1)) else {
                return Err(DescriptorError::malformed(
                    descriptor,
                    "missing dimensions or radius segment",
                ));
            };
            let (width, height) = split_dimensions(dimensions);
            PadShape::RoundRect {
                width: to_millimeters(width),
                height: to_millimeters(height),
                // Radius stays in raw descriptor units
                corner_radius: parse_float(radius),
            }
        }
        "Oval" => {
            let dimensions = rest.first().ok_or_else(|| {
                DescriptorError::malformed(descriptor, "missing dimensions segment")
            })?;
            let (width, height) = split_dimensions(dimensions);
            let (width, height) = (to_millimeters(width), to_millimeters(height));
            // Circularize: the target geometry model has no ellipse primitive,
            // so take the larger dimension as the diameter. An unparsable
            // half stays NaN; f64::max would discard it.
            PadShape::Oval {
                diameter: if width.is_nan() || height.is_nan() {
                    f64::NAN
                } else {
                    width.max(height)
                },
            }
        }
        "Rect" => {
            let dimensions = rest.first().ok_or_else(|| {
                DescriptorError::malformed(descriptor, "missing dimensions segment")
            })?;
            let (width, height) = split_dimensions(dimensions);
            PadShape::Rect {
                width: to_millimeters(width),
                height: to_millimeters(height),
            }
        }
        "Cust" => {
            let dimensions = rest.first().ok_or_else(|| {
                DescriptorError::malformed(descriptor, "missing dimensions segment")
            })?;
            let (width, height) = split_dimensions(dimensions);
            PadShape::Custom {
                width: to_millimeters(width),
                height: to_millimeters(height),
                params: rest[1..].iter().map(ToString::to_string).collect(),
            }
        }
        other => {
            tracing::debug!(descriptor, shape = other, "Unrecognized pad shape, passing through");
            PadShape::Unrecognized {
                name: other.to_string(),
            }
        }
    };

    tracing::trace!(descriptor, shape = shape.name(), layer = %layer, "Decoded pad descriptor");
    Ok(PadGeometry { layer, shape })
}

impl FromStr for PadGeometry {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_pad_name(s)
    }
}

/// Strips the literal `Pad` suffix that real-world descriptors fuse onto the
/// shape name (`RoundRectPad` → `RoundRect`), unless stripping would leave
/// the name empty.
fn strip_pad_suffix(captured: &str) -> &str {
    match captured.strip_suffix("Pad") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => captured,
    }
}

/// Parses a descriptor number, yielding NaN for text that is present but
/// unparsable.
fn parse_float(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

/// Splits a `<W>x<H>` dimension segment.
///
/// A half that does not exist (no `x` separator) defaults to `0`; a half
/// that exists but does not parse — including the empty half of `"1000x"` —
/// becomes NaN.
fn split_dimensions(dimensions: &str) -> (f64, f64) {
    let mut halves = dimensions.split('x');
    let width = halves.next().map_or(0.0, parse_float);
    let height = halves.next().map_or(0.0, parse_float);
    (width, height)
}
