// crates/domain/src/diacritics.rs
//! Fixed mapping between combining diacritics and the glyphs used to show
//! or type them on their own.

/// `(combining mark, standalone glyph)` pairs.
pub const DIACRITICS: [(char, char); 9] = [
    ('\u{0301}', '´'), // čárka
    ('\u{030C}', 'ˇ'), // háček
    ('\u{0302}', 'ˆ'),
    ('\u{0308}', '¨'),
    ('\u{030A}', '°'), // kroužek
    ('\u{0303}', '~'),
    ('\u{0300}', '`'),
    ('\u{030B}', '˝'),
    ('\u{0327}', '¸'),
];

/// Standalone glyph for a combining mark.
pub fn display_glyph(mark: char) -> Option<char> {
    DIACRITICS.iter().find(|(m, _)| *m == mark).map(|(_, glyph)| *glyph)
}

/// Combining mark typed as a standalone glyph.
pub fn combining_for(glyph: char) -> Option<char> {
    DIACRITICS.iter().find(|(_, g)| *g == glyph).map(|(mark, _)| *mark)
}

/// Whether `key` is exactly one combining mark listed in [`DIACRITICS`].
pub fn is_known_combining(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => display_glyph(c).is_some(),
        _ => false,
    }
}
