//! Signed-rank context patterns, one table per ambiguous base letter.
//!
//! A pattern key is a substring of a context window: lowercase plain
//! letters, uppercase letters for already-accented left context, the
//! cursor marker `X`, and spaces for word boundaries. The rank's sign
//! picks the preferred form (positive ⇒ accented, with the dotless-i
//! tables inverted) and its magnitude encodes specificity: when several
//! keys match one window, the smallest absolute rank wins.
//!
//! The built-in data is a compact hand-curated model covering common
//! vocabulary; callers with a larger trained table can inject their own
//! [`PatternSet`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Signed pattern rank. Magnitude = specificity, sign = direction.
pub type Rank = i16;

/// Context-substring → rank table for a single base letter.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    map: HashMap<String, Rank>,
}

impl PatternTable {
    pub fn from_entries(entries: &[(&str, Rank)]) -> Self {
        let map = entries
            .iter()
            .map(|&(k, r)| (k.to_string(), r))
            .collect();
        Self { map }
    }

    pub fn rank(&self, key: &str) -> Option<Rank> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// All pattern tables, keyed by lowercase base letter.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    tables: HashMap<char, PatternTable>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, base: char, table: PatternTable) {
        self.tables.insert(base.to_ascii_lowercase(), table);
    }

    /// Table for a base letter; lookup folds case, so `I` and `i` share
    /// the dotless-i table.
    pub fn get(&self, base: char) -> Option<&PatternTable> {
        self.tables.get(&base.to_ascii_lowercase())
    }

    /// The compact built-in Turkish model.
    pub fn builtin() -> &'static PatternSet {
        static BUILTIN: LazyLock<PatternSet> = LazyLock::new(|| {
            let mut set = PatternSet::new();
            set.insert('c', PatternTable::from_entries(PATTERNS_C));
            set.insert('g', PatternTable::from_entries(PATTERNS_G));
            set.insert('i', PatternTable::from_entries(PATTERNS_I));
            set.insert('o', PatternTable::from_entries(PATTERNS_O));
            set.insert('s', PatternTable::from_entries(PATTERNS_S));
            set.insert('u', PatternTable::from_entries(PATTERNS_U));
            set
        });
        &BUILTIN
    }
}

// ── Built-in pattern data ────────────────────────────────────────────
//
// Each table carries a one-slot catch-all key "X" whose large negative
// rank keeps the typed letter when nothing more specific matches; every
// real entry has a smaller magnitude and overrides it.

/// c ↔ ç
static PATTERNS_C: &[(&str, Rank)] = &[
    ("X", -49),
    ("Xok", 1),      // çok
    ("Xogu", 2),     // çoğu
    ("Xunku", 1),    // çünkü
    ("Xocuk", 1),    // çocuk
    ("oXuk", 2),
    ("iXin", 1),     // için
    ("geXen", 2),    // geçen
    ("Xalis", 1),    // çalış-
    ("aXik", 3),     // açık
    ("Xare", 2),     // çare
    ("Xevre", 1),    // çevre
    ("Xiz", 4),      // çiz-
    ("uXak", 2),     // uçak
    (" Xik", 2),     // çık- word-initial, avoids the -cik diminutive
    ("suX ", 3),     // suç
    ("uXuz", -2),    // ucuz stays plain
    ("gerXek", 1),   // gerçek
    ("araX ", 2),    // araç
    ("amaX ", 2),    // amaç
    ("sonuX ", 2),   // sonuç
    ("Xesit", 2),    // çeşit
    ("seXim", 2),    // seçim
    ("Xanta", 2),    // çanta
    ("Xan", -3),     // can stays plain; çanta overrides at rank 2
    ("Xoz", 4),      // çöz-
    ("Xicek", 2),    // çiçek
    ("iXek", 2),
    ("kaX ", 3),     // kaç
    ("gUX", 2),      // güç, after the ü has been restored
    ("ilaX ", 2),    // ilaç
    ("rkXe", 1),     // türkçe
    ("biXim", 2),    // biçim
    ("UXu", 1),      // küçük, üçüncü: ç between restored ü and u
];

/// g ↔ ğ
static PATTERNS_G: &[(&str, Rank)] = &[
    ("X", -49),
    ("aXac", 1),     // ağaç
    ("doXru", 1),    // doğru
    ("deXil", 1),    // değil
    ("oXlu", 2),     // oğlu
    ("oXul", 2),     // oğul
    ("daXit", 2),    // dağıt-
    ("baXli", 2),    // bağlı
    ("saXl", 2),     // sağla-, sağlam, sağlık
    ("eXit", 2),     // eğit-
    ("eXer ", 2),    // eğer
    ("deXer", 1),    // değer
    ("uXra", 2),     // uğra-
    ("soXuk", 1),    // soğuk
    ("yaXmur", 1),   // yağmur
    ("aXir", 2),     // ağır
    ("aXri", 2),     // ağrı
    ("boXaz", 2),    // boğaz
    ("iXne", 2),     // iğne
    ("liXi", 3),     // -liği
    ("diXer", 1),    // diğer
    ("daX ", 3),     // dağ
    ("baX ", 4),     // bağ
    ("beXen", 2),    // beğen-
    ("uXur", 2),     // uğur
    ("OXren", 1),    // öğren-, after the ö has been restored
    ("OXret", 1),    // öğret-
    ("OXle", 2),     // öğle
];

/// i ↔ ı (both cases; positive ⇒ dotless)
///
/// An unmatched capital I falls to the catch-all and comes out as İ,
/// the right default for the common sentence-initial case (Insan →
/// İnsan). All-caps dotless words look identical to lowercase ones in a
/// case-folded window, so they need either an explicit key ("rmizX"
/// covers KIRMIZI) or an exclusion-list entry (TIR).
static PATTERNS_I: &[(&str, Rank)] = &[
    ("X", -49),
    ("yXl", 1),      // yıl
    ("kXz", 2),      // kız
    ("yXld", 1),     // yıldız
    ("sXcak", 1),    // sıcak
    ("alXk", 2),     // aralık, -alık
    ("arlXk", 2),    // varlık
    ("irlXk", -2),   // birlik stays dotted
    ("aXr", 4),      // hatır, satır, bakır
    ("daXre", -1),   // daire stays dotted
    ("apX", 2),      // yapı, kapı
    ("acX", 3),      // acı, hacı
    ("kXsa", 1),     // kısa
    ("kXrm", 1),     // kırmızı
    ("rmXzi", 2),    // kırmızı's middle ı; temizi keeps its dotted i
    ("azX", 2),      // yazı, beyazı
    ("izX", -2),     // sizi, bizi, denizi stay dotted
    ("IzX", 2),      // vowel harmony: suffix after a restored ı
    ("rmizX", 2),    // final I of all-caps KIRMIZI
    ("anX ", 3),     // zamanı, insanı
    ("sXnif", 1),    // sınıf
    ("InXf", 1),
    (" Xrmak", 2),   // ırmak
    ("Xspar", 2),    // ısparta
    ("hXz ", 3),     // hız
    ("hXzl", 2),     // hızlı
    ("kXyi", 2),     // kıyı
    ("IyX ", 2),
    ("atlX", 2),     // tatlı, atlı
    ("IlX", 2),      // vowel harmony: suffix after a restored ı
    ("InX", 3),
];

/// o ↔ ö
static PATTERNS_O: &[(&str, Rank)] = &[
    ("X", -49),
    ("Xnce", 1),     // önce
    ("Xnem", 1),     // önem
    ("Xrnek", 1),    // örnek
    ("Xzel", 1),     // özel
    ("Xzg", 3),      // özgür, özgün
    ("bXzg", -2),    // bozgun stays plain
    ("gXz", 2),      // göz
    ("gXster", 1),   // göster-
    ("gXre", 2),     // göre
    ("sXz", 2),      // söz
    ("bXyle", 1),    // böyle
    ("bXlge", 2),    // bölge
    ("bXlum", 2),    // bölüm
    ("dXrt", 2),     // dört
    ("dXnem", 2),    // dönem
    ("yXnet", 1),    // yönet-
    (" Xlc", 2),     // ölç- word-initial
    ("kXtu", 2),     // kötü
    ("tXren", 2),    // tören
    ("gXrus", 2),    // görüş
    ("Xdul", 2),     // ödül
    ("Xfke", 2),     // öfke
    ("Xgren", 1),    // öğren-
    ("Xgret", 1),    // öğret-
    ("Xgle", 2),     // öğle
    ("gXnul", 2),    // gönül
    ("kXse", 2),     // köşe
    ("CXz", 1),      // çöz-, after the ç has been restored
];

/// s ↔ ş
static PATTERNS_S: &[(&str, Rank)] = &[
    ("X", -49),
    ("Xey", 1),      // şey
    ("Ximdi", 1),    // şimdi
    ("Xehir", 1),    // şehir
    ("Xekil", 1),    // şekil
    ("baXka", 1),    // başka
    ("baXla", 2),    // başla-
    ("baXar", 2),    // başar-
    ("Xarki", 1),    // şarkı
    (" iX ", 3),     // iş as a standalone word; polis, servis stay plain
    ("iXte", 2),     // işte
    ("liXte", -1),   // liste stays plain
    ("kiXi", 1),     // kişi
    ("karXi", 1),    // karşı
    ("Xans", 2),     // şans
    ("taX ", 3),     // taş
    ("yaXam", 2),    // yaşam
    ("yaX ", 4),     // yaş
    ("Xart", 2),     // şart
    ("Xirket", 1),   // şirket
    ("Xiir", 2),     // şiir
    ("konuX", 2),    // konuş-
    ("rUX ", 2),     // görüş, after the ü has been restored
    ("OXe", 2),      // köşe, after the ö has been restored
    ("Xasir", 2),    // şaşır-
    ("teXek", 2),    // teşekkür
    ("Xube", 2),     // şube
    ("Xiddet", 2),   // şiddet
    ("miX ", 2),     // -miş
    ("mIX ", 2),     // -mış, after the ı has been restored
];

/// u ↔ ü
static PATTERNS_U: &[(&str, Rank)] = &[
    ("X", -49),
    ("tXrk", 1),     // türk
    (" Xc ", 2),     // üç
    (" dXn ", 2),    // dün; odun stays plain
    ("bXtun", 2),    // bütün
    ("bUtXn", 1),
    ("gXzel", 1),    // güzel
    ("yXz", 2),      // yüz
    ("dXsman", 2),   // düşman
    ("dXsun", 1),    // düşün-
    (" Xst", 2),     // üst
    (" Xlke", 2),    // ülke
    ("Xzere", 1),    // üzere
    ("Xzer", 2),     // üzer-
    (" Xnl", 3),     // ünlü
    (" gXl", 4),     // gül word-initial; vurgu, bulgu stay plain
    ("sXrekli", 2),  // sürekli
    ("sXre", 3),     // süre
    ("mXmk", 1),     // mümkün
    ("mkXn", 1),
    (" Xniv", 1),    // üniversite
    ("hXkum", 2),    // hüküm, hükümet
    ("hXkuk", -1),   // hukuk stays plain
    ("kXlt", 2),     // kültür
    ("ltXr", 2),
    ("kXcuk", 1),    // küçük
    ("kUCXk", 1),
    ("dXnya", 1),    // dünya
    ("gXc ", 3),     // güç
    ("sXt ", 4),     // süt
    ("bOlXm", 1),    // bölüm, after the ö has been restored
    ("bXyuk", 1),    // büyük
    ("bUyXk", 1),
    ("COzXm", 1),    // çözüm, after ç and ö have been restored
    ("bugXn", 1),    // bugün
    (" gXn ", 2),    // gün; uygun, yorgun stay plain
    ("gXnd", 2),     // gündem, gündüz
    ("UndXz", 1),    // gündüz second ü; kunduz stays plain
    ("gXnes", 2),    // güneş
    ("dXzey", 2),    // düzey
    ("dXzen", 1),    // düzen
    (" dXz", 3),     // düz word-initial
    ("yXksek", 1),   // yüksek
    ("yXru", 2),     // yürü-
    ("tXm ", 2),     // tüm
    ("tXrl", 2),     // türlü
];
