//! Entity reference decoding.

/// Named entities resolved to their character values.
///
/// The five XML predefined entities plus the HTML names that show up in
/// ordinary prose. Anything else is preserved literally.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("lt", "<"),
    ("gt", ">"),
    ("amp", "&"),
    ("apos", "'"),
    ("quot", "\""),
    ("nbsp", "\u{00a0}"),
    ("mdash", "\u{2014}"),
    ("ndash", "\u{2013}"),
    ("hellip", "\u{2026}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201c}"),
    ("rdquo", "\u{201d}"),
    ("laquo", "\u{00ab}"),
    ("raquo", "\u{00bb}"),
    ("copy", "\u{00a9}"),
    ("reg", "\u{00ae}"),
    ("trade", "\u{2122}"),
    ("times", "\u{00d7}"),
    ("middot", "\u{00b7}"),
];

/// Decode an entity reference (the name between `&` and `;`) to text.
///
/// Unknown names are preserved as-is, including the delimiters.
#[must_use]
pub fn decode_entity(entity: &str) -> String {
    if let Some((_, value)) = NAMED_ENTITIES.iter().find(|(name, _)| *name == entity) {
        return (*value).to_owned();
    }

    // Numeric character references
    if let Some(rest) = entity.strip_prefix('#') {
        let code = if let Some(hex) = rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok()
        } else {
            rest.parse::<u32>().ok()
        };
        return code
            .and_then(char::from_u32)
            .map_or_else(|| format!("&{entity};"), |c| c.to_string());
    }

    format!("&{entity};")
}
