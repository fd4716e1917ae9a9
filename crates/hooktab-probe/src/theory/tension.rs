/// Base tension by scale degree and case. Hand-tuned values carried
/// over unchanged: the tonic is at rest, dominant/subdominant are
/// close, the leading-tone degree is furthest out, and the
/// minor-quality (lowercase) variant of a degree always sits slightly
/// above its major-quality twin.
fn base_tension(core: &str) -> f32 {
    match core {
        "I" => 0.0,
        "i" => 0.5,
        "II" => 1.5,
        "ii" => 2.0,
        "III" => 1.5,
        "iii" => 2.0,
        "IV" => 1.0,
        "iv" => 1.5,
        "V" => 1.0,
        "v" => 1.5,
        "VI" => 1.5,
        "vi" => 2.0,
        "VII" => 3.0,
        "vii" => 3.5,
        // Degrees the table does not know get a moderate default
        // instead of failing.
        _ => 2.0,
    }
}

fn roman_core(symbol: &str) -> &str {
    let rest = symbol.strip_prefix(['#', 'b', '\u{266f}', '\u{266d}']).unwrap_or(symbol);
    let end = rest
        .char_indices()
        .find(|(_, c)| !matches!(c, 'I' | 'i' | 'V' | 'v'))
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Heuristic "distance from tonic" for one chord symbol.
///
/// The symbol is stripped of "maj"/"min"/"7" before the table lookup;
/// seventh, diminished and augmented markers on the original symbol
/// each add their own independent surcharge. Never fails: unrecognized
/// input degrades to the default base plus applicable modifiers.
pub fn tension_strain(symbol: &str) -> f32 {
    let stripped = symbol.replace("maj", "").replace("min", "").replace('7', "");
    let mut tension = base_tension(roman_core(&stripped));

    if symbol.contains('7') {
        tension += 0.5;
    }
    if symbol.contains("dim") {
        tension += 1.5;
    }
    if symbol.contains("aug") {
        tension += 1.5;
    }

    tension
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tonic_is_at_rest() {
        assert_eq!(tension_strain("I"), 0.0);
        assert!(tension_strain("i") > 0.0);
    }

    #[test]
    fn dominant_and_subdominant_are_equally_low() {
        assert_eq!(tension_strain("V"), tension_strain("IV"));
        assert!(tension_strain("V") < tension_strain("ii"));
    }

    #[test]
    fn lowercase_sits_above_uppercase_at_every_degree() {
        for (upper, lower) in [("I", "i"), ("II", "ii"), ("III", "iii"), ("IV", "iv"), ("V", "v"), ("VI", "vi"), ("VII", "vii")] {
            assert!(
                tension_strain(lower) > tension_strain(upper),
                "{} should be tenser than {}",
                lower,
                upper
            );
        }
    }

    #[test]
    fn leading_tone_is_highest_base() {
        let others = ["I", "i", "II", "ii", "III", "iii", "IV", "iv", "V", "v", "VI", "vi"];
        for degree in others {
            assert!(tension_strain("vii") > tension_strain(degree));
        }
    }

    #[test]
    fn submediant_above_tonic() {
        assert!(tension_strain("vi") > tension_strain("I"));
    }

    #[test]
    fn modifiers_are_additive_and_stack() {
        assert_eq!(tension_strain("V7"), tension_strain("V") + 0.5);
        assert_eq!(tension_strain("vdim"), tension_strain("v") + 1.5);
        assert_eq!(tension_strain("IVaug"), tension_strain("IV") + 1.5);
        // The worked example: base(vii) + diminished + seventh.
        assert_eq!(tension_strain("viidim7"), tension_strain("vii") + 1.5 + 0.5);
    }

    #[test]
    fn modifiers_never_decrease_tension() {
        for base in ["I", "ii", "V", "vii", "bVII"] {
            let plain = tension_strain(base);
            assert!(tension_strain(&format!("{}7", base)) >= plain);
            assert!(tension_strain(&format!("{}dim", base)) >= plain);
            assert!(tension_strain(&format!("{}aug", base)) >= plain);
        }
    }

    #[test]
    fn quality_words_do_not_disturb_the_lookup() {
        assert_eq!(tension_strain("Imaj7"), tension_strain("I") + 0.5);
        assert_eq!(tension_strain("iimin7"), tension_strain("ii") + 0.5);
    }

    #[test]
    fn unknown_degrades_to_default() {
        assert_eq!(tension_strain("???"), 2.0);
        assert_eq!(tension_strain(""), 2.0);
        // Unknown degree with a modifier still gets the surcharge.
        assert_eq!(tension_strain("Xdim"), 2.0 + 1.5);
    }
}
