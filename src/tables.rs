//! Static Turkish character tables shared by the engine.
//!
//! Four fixed mappings: accented→plain (asciify), the bidirectional accent
//! toggle, and the two context-normalization tables used when building
//! pattern-match windows. All are total over the letters they cover and
//! immutable; characters outside a table simply return `None`.

/// Plain ASCII form of an accented Turkish letter, case preserved.
/// Returns `None` for anything that is not an accented Turkish letter.
pub fn asciify(c: char) -> Option<char> {
    match c {
        'ç' => Some('c'),
        'Ç' => Some('C'),
        'ğ' => Some('g'),
        'Ğ' => Some('G'),
        'ı' => Some('i'),
        'İ' => Some('I'),
        'ö' => Some('o'),
        'Ö' => Some('O'),
        'ş' => Some('s'),
        'Ş' => Some('S'),
        'ü' => Some('u'),
        'Ü' => Some('U'),
        _ => None,
    }
}

/// Toggle the accent of a letter in either direction (c↔ç, i↔ı, I↔İ, ...).
/// This is the table consulted once the engine decides a position flips.
pub fn toggle(c: char) -> Option<char> {
    match c {
        'c' => Some('ç'),
        'C' => Some('Ç'),
        'g' => Some('ğ'),
        'G' => Some('Ğ'),
        'i' => Some('ı'),
        'I' => Some('İ'),
        'o' => Some('ö'),
        'O' => Some('Ö'),
        's' => Some('ş'),
        'S' => Some('Ş'),
        'u' => Some('ü'),
        'U' => Some('Ü'),
        'ç' => Some('c'),
        'Ç' => Some('C'),
        'ğ' => Some('g'),
        'Ğ' => Some('G'),
        'ı' => Some('i'),
        'İ' => Some('I'),
        'ö' => Some('o'),
        'Ö' => Some('O'),
        'ş' => Some('s'),
        'Ş' => Some('S'),
        'ü' => Some('u'),
        'Ü' => Some('U'),
        _ => None,
    }
}

/// Normalization for the forward (right-of-cursor) half of a context
/// window: every usable letter folds to lowercase plain ASCII. A `None`
/// marks a word boundary and stops the forward walk.
pub fn downcase_context(c: char) -> Option<char> {
    match c {
        'a'..='z' => Some(c),
        'A'..='Z' => Some(c.to_ascii_lowercase()),
        'ç' | 'Ç' => Some('c'),
        'ğ' | 'Ğ' => Some('g'),
        'ı' | 'İ' => Some('i'),
        'ö' | 'Ö' => Some('o'),
        'ş' | 'Ş' => Some('s'),
        'ü' | 'Ü' => Some('u'),
        _ => None,
    }
}

/// Normalization for the backward (left-of-cursor) half of a context
/// window. Plain letters fold to lowercase, accented letters fold to
/// UPPERCASE plain ASCII, so the window records which left-side letters
/// carried accents (pattern keys rely on this: `kUCXk` means the `ü` and
/// `ç` of `küçük` were already restored when the final `u` is examined).
pub fn upcase_context(c: char) -> Option<char> {
    match c {
        'a'..='z' => Some(c),
        'A'..='Z' => Some(c.to_ascii_lowercase()),
        'ç' | 'Ç' => Some('C'),
        'ğ' | 'Ğ' => Some('G'),
        'ı' | 'İ' => Some('I'),
        'ö' | 'Ö' => Some('O'),
        'ş' | 'Ş' => Some('S'),
        'ü' | 'Ü' => Some('U'),
        _ => None,
    }
}
