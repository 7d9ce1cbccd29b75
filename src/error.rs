//! Error types for pad-descriptor decoding.

use thiserror::Error;

/// Result type for descriptor operations.
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Errors that can occur while decoding a pad descriptor.
///
/// Both variants are input-validation failures attributable to malformed
/// upstream data, never transient conditions. A failing call returns no
/// partial result.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// A structurally required segment is absent, or the shape/layer header
    /// could not be matched.
    #[error("malformed pad descriptor '{descriptor}': {message}")]
    MalformedDescriptor {
        /// The descriptor string that failed to decode.
        descriptor: String,
        /// Description of what's wrong.
        message: String,
    },

    /// No bracketed `A`/`B`/`T` layer tag exists anywhere in the string.
    ///
    /// Raised only by the layer-only extraction path; the full decoder
    /// defaults to the top layer instead.
    #[error("no layer tag in pad descriptor: {descriptor}")]
    MissingLayerTag {
        /// The descriptor string that was scanned.
        descriptor: String,
    },
}

impl DescriptorError {
    /// Creates a malformed-descriptor error.
    pub fn malformed(descriptor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            descriptor: descriptor.into(),
            message: message.into(),
        }
    }

    /// Creates a missing-layer-tag error.
    pub fn missing_layer_tag(descriptor: impl Into<String>) -> Self {
        Self::MissingLayerTag {
            descriptor: descriptor.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_error_display() {
        let err = DescriptorError::malformed("Round[A]Pad", "missing diameter segment");
        let msg = err.to_string();
        assert!(msg.contains("Round[A]Pad"));
        assert!(msg.contains("missing diameter segment"));
    }

    #[test]
    fn missing_layer_tag_display() {
        let err = DescriptorError::missing_layer_tag("RoundPad_1524_um");
        assert_eq!(
            err.to_string(),
            "no layer tag in pad descriptor: RoundPad_1524_um"
        );
    }
}
