use crate::models::{EditCategory, EditOptions};

/// Appended to every instruction.
pub const OUTPUT_CONSTRAINTS: &str =
    " Return ONLY the modified image. Maintain high resolution. Preserve the original lighting and background.";

const DATA_URI_SUBTYPES: [&str; 4] = ["png", "jpeg", "jpg", "webp"];

/// Removes a leading `data:image/<png|jpeg|jpg|webp>;base64,` marker.
/// Anything else is returned untouched.
pub fn strip_data_uri(photo: &str) -> &str {
    let Some(rest) = photo.strip_prefix("data:image/") else {
        return photo;
    };

    DATA_URI_SUBTYPES
        .iter()
        .find_map(|subtype| {
            rest.strip_prefix(subtype)
                .and_then(|r| r.strip_prefix(";base64,"))
        })
        .unwrap_or(photo)
}

pub fn build_instruction(category: Option<EditCategory>, options: &EditOptions) -> String {
    let style = options.style();
    let intensity = options.intensity();
    let color = options.color();

    let mut instruction = match category {
        Some(EditCategory::Makeup) => format!(
            "Apply a {} makeup look with {} intensity. Focus on eyeshadow, lipstick, and blush. \
             Keep facial features and identity exactly the same. High fashion salon style.",
            style, intensity
        ),
        Some(EditCategory::Nails) => format!(
            "Change the nail polish to a {} color with a {} finish. \
             Keep the hands and skin tone exactly the same. Focus only on the nails.",
            color, style
        ),
        Some(EditCategory::Hair) => format!(
            "Change the hairstyle to {}. Keep the face and identity exactly the same. \
             Realistic salon finish.",
            style
        ),
        Some(EditCategory::HairColor) => format!(
            "Change the hair color to {}. Keep the style and length the same. \
             Keep the face exactly the same.",
            color
        ),
        Some(EditCategory::Bridal) => format!(
            "Transform into a bridal look with a {} theme. Soft glam makeup, elegant hairstyle \
             suitable for a wedding. White dress hint if visible. Keep identity 100% same.",
            style
        ),
        Some(EditCategory::Skin) => format!(
            "Retouch skin to look glowing and smooth with {} smoothing. Even out the skin tone \
             and remove blemishes but keep skin texture realistic. Do not make it look plastic. \
             \"Glass skin\" effect.",
            intensity
        ),
        Some(EditCategory::Lashes) => format!(
            "Apply {} eyelash extensions with {} volume. Keep the eye shape and identity \
             exactly the same. Focus only on the lashes.",
            style, intensity
        ),
        None => "Enhance the beauty of this image. Salon quality retouch.".to_string(),
    };

    instruction.push_str(OUTPUT_CONSTRAINTS);
    instruction
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = "/9j/4AAQSkZJRgABAQEASABIAAD/2wBDAAMCAgMCAgMDAwMEAwME";

    #[test]
    fn test_strip_supported_prefixes() {
        for subtype in ["png", "jpeg", "jpg", "webp"] {
            let prefixed = format!("data:image/{};base64,{}", subtype, PAYLOAD);
            assert_eq!(strip_data_uri(&prefixed), PAYLOAD, "subtype {}", subtype);
        }
    }

    #[test]
    fn test_strip_leaves_other_input_alone() {
        assert_eq!(strip_data_uri(PAYLOAD), PAYLOAD);

        let gif = format!("data:image/gif;base64,{}", PAYLOAD);
        assert_eq!(strip_data_uri(&gif), gif);

        let no_base64 = format!("data:image/png,{}", PAYLOAD);
        assert_eq!(strip_data_uri(&no_base64), no_base64);

        let embedded = format!("x data:image/png;base64,{}", PAYLOAD);
        assert_eq!(strip_data_uri(&embedded), embedded);

        assert_eq!(strip_data_uri(""), "");
    }

    #[test]
    fn test_strip_only_removes_one_prefix() {
        let doubled = format!("data:image/png;base64,data:image/png;base64,{}", PAYLOAD);
        assert_eq!(
            strip_data_uri(&doubled),
            format!("data:image/png;base64,{}", PAYLOAD)
        );
    }

    #[test]
    fn test_every_instruction_ends_with_constraints() {
        let options = EditOptions::new();
        for category in EditCategory::ALL.into_iter().map(Some).chain([None]) {
            let instruction = build_instruction(category, &options);
            assert!(instruction.ends_with(OUTPUT_CONSTRAINTS), "{:?}", category);
        }
    }

    #[test]
    fn test_templates_are_distinct_per_category() {
        let options = EditOptions::new();
        let mut seen: Vec<String> = EditCategory::ALL
            .into_iter()
            .map(|c| build_instruction(Some(c), &options))
            .collect();
        seen.push(build_instruction(None, &options));
        let count = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), count);
    }

    #[test]
    fn test_category_intent() {
        let options = EditOptions::new();
        let cases = [
            (EditCategory::Makeup, vec!["makeup look", "identity", "facial features"]),
            (EditCategory::Nails, vec!["nail polish", "hands", "skin tone"]),
            (EditCategory::Hair, vec!["hairstyle", "face", "identity"]),
            (EditCategory::HairColor, vec!["hair color", "style and length", "face"]),
            (EditCategory::Bridal, vec!["bridal", "wedding", "dress", "identity"]),
            (EditCategory::Skin, vec!["blemishes", "skin texture", "plastic"]),
            (EditCategory::Lashes, vec!["eyelash", "identity"]),
        ];
        for (category, needles) in cases {
            let instruction = build_instruction(Some(category), &options);
            for needle in needles {
                assert!(
                    instruction.contains(needle),
                    "{:?} instruction missing '{}': {}",
                    category,
                    needle,
                    instruction
                );
            }
        }
    }

    #[test]
    fn test_unrecognized_falls_back_to_generic() {
        let instruction = build_instruction(None, &EditOptions::new().with("style", "Punk"));
        assert!(instruction.starts_with("Enhance the beauty of this image."));
        assert!(!instruction.contains("Punk"));
    }

    #[test]
    fn test_empty_options_use_defaults() {
        let options = EditOptions::new();

        let makeup = build_instruction(Some(EditCategory::Makeup), &options);
        assert!(makeup.contains("natural makeup look with medium intensity"));

        let nails = build_instruction(Some(EditCategory::Nails), &options);
        assert!(nails.contains("matching color with a natural finish"));

        let hair = build_instruction(Some(EditCategory::Hair), &options);
        assert!(hair.contains("hairstyle to natural."));

        let hair_color = build_instruction(Some(EditCategory::HairColor), &options);
        assert!(hair_color.contains("hair color to matching."));

        let skin = build_instruction(Some(EditCategory::Skin), &options);
        assert!(skin.contains("medium smoothing"));
    }

    #[test]
    fn test_nails_mentions_chosen_options() {
        let options = EditOptions::new()
            .with("color", "Classic Red")
            .with("style", "Almond");
        let instruction = build_instruction(Some(EditCategory::Nails), &options);
        assert!(instruction.contains("Classic Red"));
        assert!(instruction.contains("Almond"));
        assert!(instruction.contains("hands"));
        assert!(instruction.contains("skin tone"));
    }
}
