//! Context window construction around a cursor position.
//!
//! A window is a letters-only, case-normalized snapshot of the text
//! around the cursor: `2 * size + 1` slots filled with spaces, with the
//! marker `X` at the center anchoring substring offsets. The cursor's own
//! character never appears in the window.

use crate::tables;

/// Marker placed at the window center.
pub const MARKER: char = 'X';

/// Neutral fill for unreached slots and word boundaries.
pub const FILL: char = ' ';

/// Build the context window for `buffer[point]`.
///
/// Forward half: characters after the cursor are folded through
/// [`tables::downcase_context`] and appended in order. The first
/// character that does not fold (or the end of the buffer) is a word
/// boundary: its slot is kept as a space and the walk stops, so a
/// boundary inside range always shows up as one trailing space. The
/// window is then truncated to the slots actually consumed.
///
/// Backward half: characters before the cursor are folded through
/// [`tables::upcase_context`] and written right-to-left next to the
/// marker. A character that does not fold consumes one slot (left as a
/// space) the first time; further unfoldable characters are skipped, and
/// a later foldable character resumes writing. The left context therefore
/// reaches across word boundaries, collapsing each run of separators to a
/// single space. This is deliberately asymmetric with the forward walk —
/// the trained pattern keys encode left context that way.
pub fn build_context(buffer: &[char], size: usize, point: usize) -> Vec<char> {
    debug_assert!(size > 0, "context size must be positive");
    let mut window = vec![FILL; 2 * size + 1];
    window[size] = MARKER;

    // Forward walk.
    let mut slot = size + 1;
    let mut index = point + 1;
    while slot < window.len() {
        let folded = buffer.get(index).copied().and_then(tables::downcase_context);
        match folded {
            Some(x) => {
                window[slot] = x;
                slot += 1;
                index += 1;
            }
            None => {
                // Boundary (separator or end of text): keep the blank slot.
                slot += 1;
                break;
            }
        }
    }
    window.truncate(slot);

    // Backward walk.
    let mut slot = size as isize - 1;
    let mut index = point as isize - 1;
    let mut gap = false;
    while slot >= 0 && index >= 0 {
        match tables::upcase_context(buffer[index as usize]) {
            Some(x) => {
                window[slot as usize] = x;
                slot -= 1;
                gap = false;
            }
            None if !gap => {
                // First separator of a run takes one blank slot.
                slot -= 1;
                gap = true;
            }
            None => {}
        }
        index -= 1;
    }

    window
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn window_str(buffer: &str, size: usize, point: usize) -> String {
        build_context(&chars(buffer), size, point).into_iter().collect()
    }

    #[test]
    fn marker_sits_at_the_center_index() {
        let w = build_context(&chars("merhaba"), 5, 3);
        assert_eq!(w[5], MARKER);
    }

    #[test]
    fn forward_walk_stops_at_a_boundary_and_keeps_one_space() {
        // Cursor on 'u' of "kus", followed by " ve": the boundary space is
        // included, nothing after it is.
        let w = window_str("kus ve", 4, 1);
        assert_eq!(w, "   kXs ");
    }

    #[test]
    fn end_of_text_behaves_like_a_boundary() {
        // No separator after the final word, yet the window still ends in
        // a single boundary space.
        let w = window_str("kus", 4, 1);
        assert_eq!(w, "   kXs ");
    }

    #[test]
    fn forward_walk_is_clipped_by_window_capacity() {
        let w = window_str("abcdefgh", 2, 0);
        // Two forward slots only, no boundary reached within range.
        assert_eq!(w, "  Xbc");
    }

    #[test]
    fn backward_walk_crosses_word_boundaries_with_a_single_gap() {
        // Cursor on 'v' of "ve": the left context keeps "kus" behind one
        // collapsed space.
        let w = window_str("kus  ve", 6, 5);
        assert_eq!(w, "  kus Xe ");
    }

    #[test]
    fn backward_walk_leaves_unreached_slots_blank() {
        let w = window_str("ab", 4, 1);
        assert_eq!(w, "   aX ");
    }

    #[test]
    fn left_accents_are_encoded_as_uppercase() {
        let w = window_str("gülüs", 4, 4);
        assert_eq!(w, "gUlUX ");
    }

    #[test]
    fn right_accents_are_folded_to_lowercase_plain() {
        let w = window_str("crüt", 4, 0);
        assert_eq!(w, "    Xrut ");
    }

    #[test]
    fn growing_the_context_size_past_the_word_changes_nothing_but_padding() {
        // A single short word: every size beyond the word length yields the
        // same trimmed content.
        let small: String = window_str("kus", 4, 1).trim().to_string();
        let large: String = window_str("kus", 30, 1).trim().to_string();
        assert_eq!(small, large);
    }
}
