//! Corpus test over real pad descriptors from an Altium interchange export.

use altium_pad_decoder::pad::{decode_pad_name, extract_layer, is_smt_pad, Layer, PadShape};

/// Pad names as they appear in real exported designs.
const PAD_NAMES: &[&str] = &[
    "RoundRect[T]Pad_540x640_135.514_um_0.000000_0",
    "RoundRect[T]Pad_975x1400_244.678_um",
    "Round[A]Pad_1524_um",
    "Oval[A]Pad_2286x1524_um",
    "Rect[T]Pad_609.6x1270_um",
    "Rect[B]Pad_1060x650_um",
    "Cust[T]Pad_1000x500_1000x_1500_23_um",
];

#[test]
fn whole_corpus_decodes() {
    for name in PAD_NAMES {
        let pad = decode_pad_name(name)
            .unwrap_or_else(|err| panic!("failed to decode {name}: {err}"));

        // Diameter and width/height are mutually exclusive for every
        // recognized shape
        assert_ne!(
            pad.diameter().is_some(),
            pad.width().is_some() && pad.height().is_some(),
            "exclusivity violated for {name}"
        );
        assert_eq!(pad.width().is_some(), pad.height().is_some());
        assert!(!matches!(pad.shape, PadShape::Unrecognized { .. }));
    }
}

#[test]
fn corpus_layers_match_tags() {
    for name in PAD_NAMES {
        let layer = extract_layer(name).unwrap();
        assert_eq!(decode_pad_name(name).unwrap().layer, layer);
        assert_eq!(is_smt_pad(name).unwrap(), !layer.is_plated());
    }
}

#[test]
fn only_hole_pads_are_plated() {
    let plated: Vec<&str> = PAD_NAMES
        .iter()
        .copied()
        .filter(|name| extract_layer(name).unwrap() == Layer::MultiLayer)
        .collect();
    assert_eq!(plated, ["Round[A]Pad_1524_um", "Oval[A]Pad_2286x1524_um"]);
}

#[test]
fn decoded_geometry_serializes_with_shape_tag() {
    let pad = decode_pad_name("RoundRect[T]Pad_540x640_135.514_um").unwrap();
    let json = serde_json::to_value(&pad).unwrap();

    assert_eq!(json["layer"], "T");
    assert_eq!(json["shape"]["shape"], "RoundRect");
    assert_eq!(json["shape"]["corner_radius"], 135.514);

    let back: altium_pad_decoder::pad::PadGeometry = serde_json::from_value(json).unwrap();
    assert_eq!(back, pad);
}

#[test]
fn custom_pad_serializes_params_verbatim() {
    let pad = decode_pad_name("Cust[T]Pad_1000x500_1000x_1500_23_um").unwrap();
    let json = serde_json::to_value(&pad).unwrap();

    assert_eq!(json["shape"]["shape"], "Cust");
    assert_eq!(
        json["shape"]["params"],
        serde_json::json!(["1000x", "1500", "23", "um"])
    );
}

#[test]
fn custom_pad_without_params_omits_the_field() {
    let pad = decode_pad_name("Cust[T]Pad_1000x500").unwrap();
    let json = serde_json::to_value(&pad).unwrap();
    assert!(json["shape"].get("params").is_none());
}
