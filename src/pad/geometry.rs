//! Pad geometry types decoded from descriptor strings.
//!
//! [`PadGeometry`] is the structured result of decoding one descriptor. The
//! shape is a closed tagged union so that the diameter-versus-width/height
//! exclusivity is enforced by the type rather than by convention: circular
//! shapes carry only a diameter, rectangular shapes only a width and height.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pad placement layer, decoded from the bracketed descriptor tag.
///
/// Altium's "Multi-Layer" (tag `A`) spans all copper layers and marks a
/// plated through-hole pad; `T` and `B` are the top and bottom surface
/// layers for SMT pads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Top copper layer (tag `T`). The descriptor default when no tag is given.
    #[default]
    #[serde(rename = "T")]
    Top,

    /// Bottom copper layer (tag `B`).
    #[serde(rename = "B")]
    Bottom,

    /// Multi-layer (tag `A`, all copper layers, for plated through-hole pads).
    #[serde(rename = "A")]
    MultiLayer,
}

impl Layer {
    /// Returns the single-character tag used in descriptor strings.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Top => 'T',
            Self::Bottom => 'B',
            Self::MultiLayer => 'A',
        }
    }

    /// Parses a descriptor tag character.
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'T' => Some(Self::Top),
            'B' => Some(Self::Bottom),
            'A' => Some(Self::MultiLayer),
            _ => None,
        }
    }

    /// Whether this layer marks a plated through-hole pad.
    #[must_use]
    pub const fn is_plated(self) -> bool {
        matches!(self, Self::MultiLayer)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "Top Layer",
            Self::Bottom => "Bottom Layer",
            Self::MultiLayer => "Multi-Layer",
        };
        f.write_str(name)
    }
}

/// Shape-specific pad geometry.
///
/// One variant per descriptor shape name, each carrying exactly the fields
/// that shape defines. Dimensions are in millimeters except
/// [`corner_radius`](Self::RoundRect), which stays in raw descriptor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum PadShape {
    /// Circular pad, described by diameter.
    Round {
        /// Pad diameter in mm.
        diameter: f64,
    },

    /// Rectangular pad with rounded corners.
    RoundRect {
        /// Pad width in mm.
        width: f64,
        /// Pad height in mm.
        height: f64,
        /// Corner radius in raw descriptor units (not converted).
        corner_radius: f64,
    },

    /// Oval pad, circularized to the larger dimension because the target
    /// geometry model has no ellipse primitive.
    Oval {
        /// Diameter of the circularized pad in mm.
        diameter: f64,
    },

    /// Plain rectangular pad.
    Rect {
        /// Pad width in mm.
        width: f64,
        /// Pad height in mm.
        height: f64,
    },

    /// Custom pad outline. The bounding dimensions decode like a rectangle;
    /// the remaining descriptor segments are kept verbatim.
    #[serde(rename = "Cust")]
    Custom {
        /// Bounding width in mm.
        width: f64,
        /// Bounding height in mm.
        height: f64,
        /// Raw descriptor segments after the dimension pair, in original
        /// order. Empty when the descriptor had none.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        params: Vec<String>,
    },

    /// Shape name the decoder does not recognize.
    ///
    /// Decoding is deliberately permissive here: the caller may discard
    /// unrecognized shapes upstream, so no error is raised and the record
    /// view reports zero width and height.
    Unrecognized {
        /// The shape name as captured from the descriptor header.
        name: String,
    },
}

impl PadShape {
    /// Returns the descriptor shape name for this variant.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Round { .. } => "Round",
            Self::RoundRect { .. } => "RoundRect",
            Self::Oval { .. } => "Oval",
            Self::Rect { .. } => "Rect",
            Self::Custom { .. } => "Cust",
            Self::Unrecognized { name } => name,
        }
    }
}

/// A decoded pad descriptor: placement layer plus shape geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadGeometry {
    /// Layer the pad is on.
    #[serde(default)]
    pub layer: Layer,

    /// Shape-specific geometry.
    pub shape: PadShape,
}

impl PadGeometry {
    /// Pad width in mm.
    ///
    /// `None` for circular shapes (described by diameter instead);
    /// `Some(0.0)` for unrecognized shapes.
    #[must_use]
    pub const fn width(&self) -> Option<f64> {
        match &self.shape {
            PadShape::Round { .. } | PadShape::Oval { .. } => None,
            PadShape::RoundRect { width, .. }
            | PadShape::Rect { width, .. }
            | PadShape::Custom { width, .. } => Some(*width),
            PadShape::Unrecognized { .. } => Some(0.0),
        }
    }

    /// Pad height in mm. Same availability as [`width`](Self::width).
    #[must_use]
    pub const fn height(&self) -> Option<f64> {
        match &self.shape {
            PadShape::Round { .. } | PadShape::Oval { .. } => None,
            PadShape::RoundRect { height, .. }
            | PadShape::Rect { height, .. }
            | PadShape::Custom { height, .. } => Some(*height),
            PadShape::Unrecognized { .. } => Some(0.0),
        }
    }

    /// Pad diameter in mm, present only for circular-equivalent shapes.
    #[must_use]
    pub const fn diameter(&self) -> Option<f64> {
        match &self.shape {
            PadShape::Round { diameter } | PadShape::Oval { diameter } => Some(*diameter),
            _ => None,
        }
    }

    /// Rounded-corner radius in raw descriptor units, `RoundRect` only.
    #[must_use]
    pub const fn corner_radius(&self) -> Option<f64> {
        match &self.shape {
            PadShape::RoundRect { corner_radius, .. } => Some(*corner_radius),
            _ => None,
        }
    }

    /// Raw trailing segments of a `Cust` descriptor, `None` when the
    /// descriptor had none (or the shape is not custom).
    #[must_use]
    pub fn custom_params(&self) -> Option<&[String]> {
        match &self.shape {
            PadShape::Custom { params, .. } if !params.is_empty() => Some(params),
            _ => None,
        }
    }

    /// Whether this pad decodes to a circle (round, or oval circularized).
    #[must_use]
    pub const fn is_circular(&self) -> bool {
        self.diameter().is_some()
    }
}
