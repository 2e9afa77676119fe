//! The deasciification engine: pattern matching, the per-letter decision
//! rule, and the left-to-right buffer pass.

use tracing::trace;

use crate::context::build_context;
use crate::errors::DeasciifyError;
use crate::patterns::{PatternSet, PatternTable};
use crate::tables;

/// Default context width on each side of the cursor.
pub const DEFAULT_CONTEXT_SIZE: usize = 20;

/// Score a context window against one pattern table.
///
/// Every substring spanning the marker is enumerated (start ascending,
/// then end ascending); a table hit replaces the current rank only when
/// strictly smaller in magnitude, so ties keep the first-enumerated
/// entry. The initial rank `2 * len(table)` is a positive no-match
/// sentinel that outranks every real entry.
pub fn match_pattern(table: &PatternTable, window: &[char], context_size: usize) -> bool {
    let mut rank = table.len() as i32 * 2;
    let mut key = String::with_capacity(window.len());
    for start in 0..=context_size {
        for end in (context_size + 1)..=window.len() {
            key.clear();
            key.extend(&window[start..end]);
            if let Some(r) = table.rank(&key) {
                if (r as i32).abs() < rank.abs() {
                    rank = r as i32;
                }
            }
        }
    }
    rank > 0
}

/// The two decision behaviors. The dotless-i pair (`i`/`ı`, `I`/`İ`)
/// was trained with opposite polarity, so its rule is the mirror image
/// of every other letter's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterClass {
    Ordinary,
    DotlessI,
}

fn classify(canonical: char) -> LetterClass {
    if canonical == 'I' {
        LetterClass::DotlessI
    } else {
        LetterClass::Ordinary
    }
}

/// The toggle decision as an explicit table over (letter class, whether
/// the observed char already equals its canonical plain form, pattern
/// match result).
fn decide(class: LetterClass, typed_plain: bool, matched: bool) -> bool {
    match (class, typed_plain) {
        (LetterClass::Ordinary, true) => matched,
        (LetterClass::Ordinary, false) => !matched,
        (LetterClass::DotlessI, true) => !matched,
        (LetterClass::DotlessI, false) => matched,
    }
}

/// Turkish deasciifier with a fixed context size and correction mode.
///
/// Immutable once built; a single instance can serve any number of
/// threads, each working on its own text.
#[derive(Debug, Clone)]
pub struct Deasciifier {
    context_size: usize,
    aggressive: bool,
    patterns: Option<PatternSet>,
}

impl Default for Deasciifier {
    fn default() -> Self {
        Self {
            context_size: DEFAULT_CONTEXT_SIZE,
            aggressive: false,
            patterns: None,
        }
    }
}

impl Deasciifier {
    /// `context_size` is the window width on each side of the cursor and
    /// must be at least 1. Non-aggressive mode only adds accents;
    /// aggressive mode also considers stripping accents the pattern
    /// evidence contradicts.
    pub fn new(context_size: usize, aggressive: bool) -> Result<Self, DeasciifyError> {
        if context_size == 0 {
            return Err(DeasciifyError::InvalidContextSize);
        }
        Ok(Self {
            context_size,
            aggressive,
            patterns: None,
        })
    }

    /// Replace the built-in pattern data with a custom set.
    pub fn with_patterns(mut self, patterns: PatternSet) -> Self {
        self.patterns = Some(patterns);
        self
    }

    pub fn context_size(&self) -> usize {
        self.context_size
    }

    pub fn is_aggressive(&self) -> bool {
        self.aggressive
    }

    fn patterns(&self) -> &PatternSet {
        self.patterns.as_ref().unwrap_or_else(|| PatternSet::builtin())
    }

    /// Deasciify a whole text. Empty or whitespace-only input is
    /// returned unchanged.
    pub fn deasciify(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return input.to_string();
        }
        let mut buffer: Vec<char> = input.chars().collect();
        let len = buffer.len();
        self.correct_range(&mut buffer, 0, len);
        buffer.into_iter().collect()
    }

    /// Deasciify only the char range `[start, start + len)`; context
    /// windows still read the whole text. Out-of-range bounds are an
    /// error, never clamped.
    pub fn deasciify_region(
        &self,
        input: &str,
        start: usize,
        len: usize,
    ) -> Result<String, DeasciifyError> {
        let mut buffer: Vec<char> = input.chars().collect();
        let end = start
            .checked_add(len)
            .filter(|&end| start <= buffer.len() && end <= buffer.len())
            .ok_or(DeasciifyError::RegionOutOfBounds {
                start,
                len,
                text_len: buffer.len(),
            })?;
        if input.trim().is_empty() {
            return Ok(input.to_string());
        }
        self.correct_range(&mut buffer, start, end);
        Ok(buffer.into_iter().collect())
    }

    /// The driving loop: corrections applied at lower indices feed the
    /// context windows of later positions.
    fn correct_range(&self, buffer: &mut [char], start: usize, end: usize) {
        for point in start..end {
            let ch = buffer[point];
            if self.needs_correction(buffer, ch, point) {
                if let Some(toggled) = tables::toggle(ch) {
                    trace!(point, from = %ch, to = %toggled, "toggle");
                    buffer[point] = toggled;
                }
            }
        }
    }

    /// Pure predicate over the current buffer state.
    fn needs_correction(&self, buffer: &[char], ch: char, point: usize) -> bool {
        let canonical = match tables::asciify(ch) {
            Some(plain) => {
                if !self.aggressive {
                    // Never strip an accent the user typed themselves.
                    return false;
                }
                plain
            }
            None => ch,
        };

        let matched = match self.patterns().get(canonical) {
            Some(table) => {
                let window = build_context(buffer, self.context_size, point);
                match_pattern(table, &window, self.context_size)
            }
            // No table for this letter: no evidence either way.
            None => false,
        };

        decide(classify(canonical), ch == canonical, matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternTable;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn set_with(base: char, entries: &[(&str, i16)]) -> PatternSet {
        let mut set = PatternSet::new();
        set.insert(base, PatternTable::from_entries(entries));
        set
    }

    // ── Matcher ──────────────────────────────────────────────────────

    #[test]
    fn smallest_magnitude_wins() {
        let table = PatternTable::from_entries(&[("Xb", -5), ("aXb", 1)]);
        let window = chars("aXb ");
        assert!(match_pattern(&table, &window, 1));
    }

    #[test]
    fn tie_break_keeps_the_first_enumerated_entry() {
        // Equal magnitude, opposite sign. Enumeration is start-ascending
        // then end-ascending, so "aXb" (start 0) is visited before "Xb "
        // (start 1) and its sign decides.
        let table = PatternTable::from_entries(&[("aXb", -3), ("Xb ", 3)]);
        let window = chars("aXb ");
        assert!(!match_pattern(&table, &window, 1));

        let flipped = PatternTable::from_entries(&[("aXb", 3), ("Xb ", -3)]);
        assert!(match_pattern(&flipped, &window, 1));
    }

    #[test]
    fn substrings_not_spanning_the_marker_never_score() {
        // "ab" occurs in the window but does not include the marker; the
        // only spanning keys are absent, so the positive "ab" entry must
        // not fire and the sentinel's default (positive => true) holds.
        let table = PatternTable::from_entries(&[("ab", -1)]);
        let window = chars("abX ");
        assert!(match_pattern(&table, &window, 2));
    }

    #[test]
    fn no_match_defaults_to_the_positive_sentinel() {
        let table = PatternTable::from_entries(&[("zzz", -1)]);
        let window = chars(" X ");
        assert!(match_pattern(&table, &window, 1));
    }

    // ── Decision rule ────────────────────────────────────────────────

    #[test]
    fn decision_table_is_the_documented_inversion() {
        use LetterClass::*;
        assert!(decide(Ordinary, true, true));
        assert!(!decide(Ordinary, true, false));
        assert!(!decide(Ordinary, false, true));
        assert!(decide(Ordinary, false, false));
        assert!(!decide(DotlessI, true, true));
        assert!(decide(DotlessI, true, false));
        assert!(decide(DotlessI, false, true));
        assert!(!decide(DotlessI, false, false));
    }

    #[test]
    fn dotless_i_rule_with_a_minimal_synthetic_table() {
        // One entry: after "asl", prefer the dotless form (positive).
        let set = set_with('i', &[("slX", 1)]);
        let engine = Deasciifier::new(3, false).unwrap().with_patterns(set);
        assert_eq!(engine.deasciify("asli"), "aslı");

        // Opposite evidence keeps the dotted i.
        let set = set_with('i', &[("slX", -1)]);
        let engine = Deasciifier::new(3, false).unwrap().with_patterns(set);
        assert_eq!(engine.deasciify("asli"), "asli");
    }

    #[test]
    fn capital_i_inverts_relative_to_lowercase() {
        // With no table at all, matched = false: lowercase i stays put,
        // capital I flips to İ.
        let engine = Deasciifier::new(3, false)
            .unwrap()
            .with_patterns(PatternSet::new());
        assert_eq!(engine.deasciify("ki"), "ki");
        assert_eq!(engine.deasciify("KI"), "Kİ");
    }

    // ── Modes ────────────────────────────────────────────────────────

    #[test]
    fn non_aggressive_never_strips_typed_accents() {
        // Evidence says plain c, but the ç was typed by the user.
        let set = set_with('c', &[("aXb", -1)]);
        let engine = Deasciifier::new(3, false).unwrap().with_patterns(set);
        assert_eq!(engine.deasciify("açb"), "açb");
    }

    #[test]
    fn aggressive_mode_strips_a_spurious_accent() {
        let set = set_with('c', &[("aXb", -1)]);
        let engine = Deasciifier::new(3, true).unwrap().with_patterns(set);
        assert_eq!(engine.deasciify("açb"), "acb");
    }

    #[test]
    fn aggressive_mode_keeps_a_supported_accent() {
        let set = set_with('c', &[("aXb", 1)]);
        let engine = Deasciifier::new(3, true).unwrap().with_patterns(set);
        assert_eq!(engine.deasciify("açb"), "açb");
    }

    // ── Buffer pass ──────────────────────────────────────────────────

    #[test]
    fn earlier_corrections_feed_later_windows() {
        // The second entry requires the uppercase U that only appears
        // after the first u has been corrected to ü.
        let mut set = PatternSet::new();
        set.insert('u', PatternTable::from_entries(&[("bXtun", 2), ("bUtXn", 1)]));
        let engine = Deasciifier::new(5, false).unwrap().with_patterns(set);
        assert_eq!(engine.deasciify("butun"), "bütün");
    }

    #[test]
    fn empty_and_whitespace_inputs_are_identity() {
        let engine = Deasciifier::default();
        assert_eq!(engine.deasciify(""), "");
        assert_eq!(engine.deasciify("   \t\n"), "   \t\n");
    }

    #[test]
    fn deasciify_is_deterministic() {
        let engine = Deasciifier::default();
        let input = "Turkce karakterli bir metin ornegi";
        assert_eq!(engine.deasciify(input), engine.deasciify(input));
    }

    #[test]
    fn idempotent_on_already_correct_text() {
        let engine = Deasciifier::default();
        let correct = "Türkçe karakterli bir metin";
        assert_eq!(engine.deasciify(correct), correct);
    }

    #[test]
    fn context_size_beyond_the_word_does_not_change_the_result() {
        let set = set_with('u', &[("tXrk", 1)]);
        let small = Deasciifier::new(5, false)
            .unwrap()
            .with_patterns(set.clone());
        let large = Deasciifier::new(50, false).unwrap().with_patterns(set);
        assert_eq!(small.deasciify("turk"), "türk");
        assert_eq!(large.deasciify("turk"), "türk");
    }

    #[test]
    fn zero_context_size_is_rejected() {
        assert!(matches!(
            Deasciifier::new(0, false),
            Err(DeasciifyError::InvalidContextSize)
        ));
    }

    // ── Regions ──────────────────────────────────────────────────────

    #[test]
    fn region_only_corrects_inside_the_range() {
        let set = set_with('u', &[("tXrk", 1)]);
        let engine = Deasciifier::new(5, false).unwrap().with_patterns(set);
        let text = "turk turk";
        assert_eq!(engine.deasciify_region(text, 0, 4).unwrap(), "türk turk");
        assert_eq!(engine.deasciify_region(text, 5, 4).unwrap(), "turk türk");
    }

    #[test]
    fn out_of_range_region_is_an_error() {
        let engine = Deasciifier::default();
        let err = engine.deasciify_region("kisa", 2, 10).unwrap_err();
        assert!(matches!(
            err,
            DeasciifyError::RegionOutOfBounds {
                start: 2,
                len: 10,
                text_len: 4
            }
        ));
    }

    // ── Builtin model smoke tests ────────────────────────────────────

    #[test]
    fn restores_the_flagship_sentence() {
        let engine = Deasciifier::default();
        assert_eq!(
            engine.deasciify("Turkce karakterli bir metin"),
            "Türkçe karakterli bir metin"
        );
    }

    #[test]
    fn restores_common_words_with_chained_corrections() {
        let engine = Deasciifier::default();
        assert_eq!(engine.deasciify("kucuk"), "küçük");
        assert_eq!(engine.deasciify("guzel"), "güzel");
        assert_eq!(engine.deasciify("cok"), "çok");
    }

    #[test]
    fn leaves_plain_words_alone() {
        let engine = Deasciifier::default();
        assert_eq!(engine.deasciify("bir metin"), "bir metin");
        assert_eq!(engine.deasciify("ucuz"), "ucuz");
    }

    #[test]
    fn restores_both_dotless_vowels_of_kirmizi() {
        let engine = Deasciifier::default();
        assert_eq!(engine.deasciify("kirmizi"), "kırmızı");
        // Front-harmony words with the same suffix shape stay dotted.
        assert_eq!(engine.deasciify("temizi"), "temizi");
    }

    #[test]
    fn all_caps_dotless_words_keep_their_capital_i() {
        // In an all-caps word the left context folds to plain lowercase,
        // so these rely on the dedicated uppercase-window entries.
        let engine = Deasciifier::default();
        assert_eq!(engine.deasciify("KIRMIZI"), "KIRMIZI");
    }
}
