//! Overlay passes around the engine: whole-word exclusions restored after
//! the buffer pass, and fixed-phrase corrections applied last.
//!
//! Both structures are read-only once loaded. They ship with small
//! built-in defaults and load from plain text: one word per line for
//! exclusions, `wrong<TAB>right` per line for corrections. Blank lines
//! and `#` comments are skipped.

use std::collections::HashSet;

use tracing::debug;

use crate::errors::TableError;

/// A span of char indices `[start, end)` inside a buffer.
pub type Span = (usize, usize);

// ── Exclusions ───────────────────────────────────────────────────────

/// Loanwords and dotless all-caps terms the engine keeps accenting
/// wrongly. Matched as whole words, case-sensitively; their original
/// spelling is restored verbatim.
static DEFAULT_EXCLUSIONS: &[&str] = &[
    "chat", "email", "link", "online", "server", "show", "site", "video", "web", "TIR",
];

/// Whole words exempt from correction.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self {
            words: DEFAULT_EXCLUSIONS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ExclusionSet {
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// One word per line.
    pub fn from_lines(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| l.to_string())
            .collect::<HashSet<_>>();
        debug!(count = words.len(), "Exclusion list loaded");
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Spans of every whole excluded word in `buffer`, bounded by
    /// whitespace or the text edges. Partial matches inside a longer
    /// word are not exclusions.
    pub fn find_spans(&self, buffer: &[char]) -> Vec<Span> {
        let mut spans = Vec::new();
        if self.words.is_empty() {
            return spans;
        }
        let mut start = None;
        for i in 0..=buffer.len() {
            let boundary = i == buffer.len() || buffer[i].is_whitespace();
            match (start, boundary) {
                (None, false) => start = Some(i),
                (Some(s), true) => {
                    let word: String = buffer[s..i].iter().collect();
                    if self.words.contains(&word) {
                        spans.push((s, i));
                    }
                    start = None;
                }
                _ => {}
            }
        }
        spans
    }

    /// Undo any engine correction inside the recorded spans.
    pub fn restore(spans: &[Span], original: &[char], buffer: &mut [char]) {
        for &(start, end) in spans {
            buffer[start..end].copy_from_slice(&original[start..end]);
        }
    }
}

// ── Corrections ──────────────────────────────────────────────────────

/// Phrases the engine systematically gets wrong, overwritten verbatim
/// after it has run. Replacement must have the same char length as the
/// key; only whole, whitespace-bounded occurrences are touched.
static DEFAULT_CORRECTIONS: &[(&str, &str)] = &[
    ("Istanbul", "İstanbul"),
    ("Izmir", "İzmir"),
    ("Ataturk", "Atatürk"),
];

#[derive(Debug, Clone)]
pub struct CorrectionList {
    entries: Vec<(Vec<char>, Vec<char>)>,
}

impl Default for CorrectionList {
    fn default() -> Self {
        let entries = DEFAULT_CORRECTIONS
            .iter()
            .map(|&(wrong, right)| (wrong.chars().collect(), right.chars().collect()))
            .collect();
        Self { entries }
    }
}

impl CorrectionList {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// `wrong<TAB>right` per line; both sides must have the same char
    /// length so the overwrite is positional.
    pub fn from_lines(text: &str) -> Result<Self, TableError> {
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (wrong, right) = line.split_once('\t').ok_or(TableError::MalformedCorrection {
                line: idx + 1,
                reason: "expected two tab-separated phrases",
            })?;
            let wrong: Vec<char> = wrong.chars().collect();
            let right: Vec<char> = right.chars().collect();
            if wrong.len() != right.len() {
                return Err(TableError::MalformedCorrection {
                    line: idx + 1,
                    reason: "phrases must have equal character length",
                });
            }
            entries.push((wrong, right));
        }
        debug!(count = entries.len(), "Correction list loaded");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite every whole, whitespace-bounded occurrence of a key
    /// phrase with its replacement, character for character.
    pub fn apply(&self, buffer: &mut [char]) {
        for (wrong, right) in &self.entries {
            let n = wrong.len();
            if n == 0 || n > buffer.len() {
                continue;
            }
            let mut i = 0;
            while i + n <= buffer.len() {
                let left_ok = i == 0 || buffer[i - 1].is_whitespace();
                let right_ok = i + n == buffer.len() || buffer[i + n].is_whitespace();
                if left_ok && right_ok && buffer[i..i + n] == wrong[..] {
                    buffer[i..i + n].copy_from_slice(right);
                    i += n;
                } else {
                    i += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn whole_words_are_excluded() {
        let set = ExclusionSet::from_lines("cok\nweb\n");
        let spans = set.find_spans(&chars("cok web cok"));
        assert_eq!(spans, vec![(0, 3), (4, 7), (8, 11)]);
    }

    #[test]
    fn partial_matches_are_not_excluded() {
        let set = ExclusionSet::from_lines("cok");
        assert!(set.find_spans(&chars("cokca sokcok")).is_empty());
    }

    #[test]
    fn restore_undoes_engine_changes_inside_spans() {
        let original = chars("cok iyi");
        let mut corrected = chars("çok iyi");
        let set = ExclusionSet::from_lines("cok");
        let spans = set.find_spans(&original);
        ExclusionSet::restore(&spans, &original, &mut corrected);
        let result: String = corrected.into_iter().collect();
        assert_eq!(result, "cok iyi");
    }

    #[test]
    fn exclusion_loader_skips_blanks_and_comments() {
        let set = ExclusionSet::from_lines("# loanwords\n\n  web  \nchat\n");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn corrections_overwrite_whole_phrases_only() {
        let list = CorrectionList::from_lines("Istanbul\tİstanbul").unwrap();
        let mut buffer = chars("Istanbul ve Istanbulda");
        list.apply(&mut buffer);
        let result: String = buffer.into_iter().collect();
        // The bare word is replaced; the suffixed form is not bounded.
        assert_eq!(result, "İstanbul ve Istanbulda");
    }

    #[test]
    fn corrections_at_text_edges_count_as_bounded() {
        let list = CorrectionList::from_lines("Izmir\tİzmir").unwrap();
        let mut buffer = chars("Izmir");
        list.apply(&mut buffer);
        let result: String = buffer.into_iter().collect();
        assert_eq!(result, "İzmir");
    }

    #[test]
    fn correction_phrases_may_contain_spaces() {
        let list = CorrectionList::from_lines("bir sey\tbir şey").unwrap();
        let mut buffer = chars("sana bir sey diyecegim");
        list.apply(&mut buffer);
        let result: String = buffer.into_iter().collect();
        assert_eq!(result, "sana bir şey diyecegim");
    }

    #[test]
    fn unequal_length_correction_is_rejected() {
        let err = CorrectionList::from_lines("kisa\tçok uzun").unwrap_err();
        assert!(matches!(err, TableError::MalformedCorrection { line: 1, .. }));
    }

    #[test]
    fn missing_tab_is_rejected() {
        let err = CorrectionList::from_lines("tek-sutun").unwrap_err();
        assert!(matches!(err, TableError::MalformedCorrection { line: 1, .. }));
    }

    #[test]
    fn default_tables_are_populated() {
        assert!(!ExclusionSet::default().is_empty());
        assert!(!CorrectionList::default().is_empty());
    }
}
