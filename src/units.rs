//! Unit conversion for pad-descriptor dimensions.
//!
//! Descriptor strings carry their dimensional segments in micrometers, with a
//! literal `um` marker segment (e.g. `Rect[T]Pad_609.6x1270_um` is a 0.6096mm
//! by 1.27mm pad). The geometry model downstream works in millimeters, so
//! every converted dimension passes through [`to_millimeters`].

/// Micrometers per millimeter.
pub const MICROMETERS_PER_MILLIMETER: f64 = 1000.0;

/// Converts a raw descriptor dimension (micrometers) to millimeters.
///
/// Pure and NaN-propagating: a not-a-number input (the decoder's marker for
/// unparsable numeric text) stays not-a-number.
#[must_use]
pub fn to_millimeters(raw: f64) -> f64 {
    raw / MICROMETERS_PER_MILLIMETER
}
