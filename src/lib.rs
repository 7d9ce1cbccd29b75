//! altium-pad-decoder: structured geometry from Altium pad-descriptor strings.
//!
//! Altium's PCB interchange export names every pad with a compact descriptor
//! like `RoundRect[T]Pad_540x640_135.514_um`. This crate decodes those
//! descriptors into typed geometry for downstream design-to-geometry
//! conversion.
//!
//! # Example
//!
//! ```
//! use altium_pad_decoder::pad::{decode_pad_name, is_plated_hole, Layer};
//!
//! let pad = decode_pad_name("Oval[A]Pad_2286x1524_um")?;
//! assert_eq!(pad.layer, Layer::MultiLayer);
//! assert_eq!(pad.diameter(), Some(2.286)); // ovals circularize
//! assert!(is_plated_hole("Oval[A]Pad_2286x1524_um")?);
//! # Ok::<(), altium_pad_decoder::error::DescriptorError>(())
//! ```
//!
//! # Modules
//!
//! - [`error`] — Error types
//! - [`pad`] — Descriptor decoding, layer extraction, pad classification
//! - [`units`] — Micrometer-to-millimeter conversion

pub mod error;
pub mod pad;
pub mod units;
