use std::collections::HashSet;

/// A font family as listed by the font browser.
///
/// `index` is the toolkit font index of the first face seen for the family,
/// used to render the family's own label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    pub name: String,
    pub index: usize,
}

/// Trailing face words that name a style of a family rather than a family.
const STYLE_WORDS: &[&str] = &[
    "thin", "hairline", "extralight", "ultralight", "light", "semilight", "demilight",
    "book", "regular", "normal", "medium", "semibold", "demibold", "bold",
    "extrabold", "ultrabold", "black", "heavy", "ultraheavy", "italic", "oblique",
    "condensed", "semicondensed", "extracondensed", "ultracondensed", "narrow",
    "expanded", "semiexpanded", "extraexpanded", "ultraexpanded",
];

/// First byte of an FLTK face name: plain, bold, italic, bold italic.
const PLAIN_PREFIX: char = ' ';
const STYLE_PREFIXES: &[char] = &['B', 'I', 'P'];

fn is_style_word(word: &str) -> bool {
    let folded: String = word
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    STYLE_WORDS.contains(&folded.as_str())
}

/// Family name of one face name.
///
/// Strips the leading space FLTK uses for plain faces and trailing style
/// words (`Bold`, `Condensed`, `ExtraLight`...). At least one word is kept.
pub fn family_name(face: &str) -> &str {
    let mut name = face.strip_prefix(PLAIN_PREFIX).unwrap_or(face).trim_end();
    while let Some((head, last)) = name.rsplit_once(' ') {
        if head.trim().is_empty() || !is_style_word(last) {
            break;
        }
        name = head.trim_end();
    }
    name
}

/// Collapse face names into families, keeping the environment's order.
///
/// Backends that prefix faces with a style byte (`" Arial"`, `"BArial"`,
/// `"IArial"`, `"PArial"`) have the byte dropped when the remainder names a
/// family that also appears as a plain face.
pub fn group_families(faces: &[String]) -> Vec<FontFamily> {
    let plain: HashSet<&str> = faces
        .iter()
        .filter(|f| f.starts_with(PLAIN_PREFIX))
        .map(|f| family_name(f))
        .filter(|name| !name.is_empty())
        .collect();

    let mut families: Vec<FontFamily> = Vec::new();

    for (index, face) in faces.iter().enumerate() {
        let name = match face.strip_prefix(STYLE_PREFIXES) {
            Some(rest) if plain.contains(family_name(rest)) => family_name(rest),
            _ => family_name(face),
        };
        if name.is_empty() || families.iter().any(|f| f.name == name) {
            continue;
        }
        families.push(FontFamily {
            name: name.to_string(),
            index,
        });
    }

    families
}
