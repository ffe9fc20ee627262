//! Japanese prefecture selection.
//!
//! Two select variants over the same static table of 47 prefectures in
//! JIS X 0401 order: [`PrefectureCodeSelect`] keyed by the zero-padded
//! two-digit code (`"01"`–`"47"`), and [`PrefectureSelect`] keyed by
//! the prefecture name itself. Neither accepts values outside the
//! table.

use crate::foundation::{FieldError, OptionSet, SelectItem};

// ============================================================================
// PREFECTURE TABLE
// ============================================================================

/// All 47 prefectures as `(code, name)` pairs in JIS X 0401 order
/// (北海道 first, 沖縄県 last).
///
/// The codes, names, and ordering are a reproducible external contract;
/// the table is shared read-only by every field instance and never
/// mutated.
pub const PREFECTURES: [(&str, &str); 47] = [
    ("01", "北海道"),
    ("02", "青森県"),
    ("03", "岩手県"),
    ("04", "宮城県"),
    ("05", "秋田県"),
    ("06", "山形県"),
    ("07", "福島県"),
    ("08", "茨城県"),
    ("09", "栃木県"),
    ("10", "群馬県"),
    ("11", "埼玉県"),
    ("12", "千葉県"),
    ("13", "東京都"),
    ("14", "神奈川県"),
    ("15", "新潟県"),
    ("16", "富山県"),
    ("17", "石川県"),
    ("18", "福井県"),
    ("19", "山梨県"),
    ("20", "長野県"),
    ("21", "岐阜県"),
    ("22", "静岡県"),
    ("23", "愛知県"),
    ("24", "三重県"),
    ("25", "滋賀県"),
    ("26", "京都府"),
    ("27", "大阪府"),
    ("28", "兵庫県"),
    ("29", "奈良県"),
    ("30", "和歌山県"),
    ("31", "鳥取県"),
    ("32", "島根県"),
    ("33", "岡山県"),
    ("34", "広島県"),
    ("35", "山口県"),
    ("36", "徳島県"),
    ("37", "香川県"),
    ("38", "愛媛県"),
    ("39", "高知県"),
    ("40", "福岡県"),
    ("41", "佐賀県"),
    ("42", "長崎県"),
    ("43", "熊本県"),
    ("44", "大分県"),
    ("45", "宮崎県"),
    ("46", "鹿児島県"),
    ("47", "沖縄県"),
];

/// Looks up a prefecture display name by its two-digit code.
#[must_use]
pub fn prefecture_name(code: &str) -> Option<&'static str> {
    PREFECTURES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

fn code_keyed_options(empty_label: &str) -> OptionSet {
    OptionSet::with_empty_option(empty_label.to_string(), PREFECTURES)
}

fn name_keyed_options(empty_label: &str) -> OptionSet {
    OptionSet::with_empty_option(
        empty_label.to_string(),
        PREFECTURES.iter().map(|(_, name)| (*name, *name)),
    )
}

// ============================================================================
// CODE-KEYED SELECT
// ============================================================================

/// Prefecture select keyed by two-digit code, labeled by name.
///
/// # Examples
///
/// ```
/// use jpform::fields::PrefectureCodeSelect;
///
/// let mut select = PrefectureCodeSelect::new();
/// select.set_value("27");
/// assert!(select.validate().is_ok());
/// assert_eq!(select.prefecture(), Some("大阪府"));
/// ```
#[derive(Debug, Clone)]
pub struct PrefectureCodeSelect {
    item: SelectItem,
}

impl PrefectureCodeSelect {
    /// Creates an empty, optional select with an unlabeled sentinel
    /// entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            item: SelectItem::new(code_keyed_options("")),
        }
    }

    /// Sets whether an empty selection fails validation.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.item = self.item.required(required);
        self
    }

    /// Relabels the leading empty option (e.g. `"選択してください"`),
    /// rebuilding the option set from the same table. The 47 real
    /// entries keep their order and the sentinel stays first.
    pub fn set_empty_option_label(&mut self, label: &str) {
        self.item.set_options(code_keyed_options(label));
    }

    /// Assigns the selected code.
    pub fn set_value(&mut self, raw: &str) {
        self.item.set_value(raw);
    }

    /// The currently selected code.
    #[must_use]
    pub fn value(&self) -> &str {
        self.item.value()
    }

    /// Whether no selection has been made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    /// The option set in render order (sentinel first).
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        self.item.options()
    }

    /// Validates the selected code against the table.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.item.validate()
    }

    /// The selected prefecture's display name, or `None` when empty or
    /// invalid.
    #[must_use]
    pub fn prefecture(&self) -> Option<&'static str> {
        self.item.parsed().and_then(prefecture_name)
    }

    /// The validated code, or `None` when empty or invalid.
    #[must_use]
    pub fn parsed(&self) -> Option<&str> {
        self.item.parsed()
    }
}

impl Default for PrefectureCodeSelect {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// NAME-KEYED SELECT
// ============================================================================

/// Prefecture select where key and label are both the prefecture name.
///
/// # Examples
///
/// ```
/// use jpform::fields::PrefectureSelect;
///
/// let mut select = PrefectureSelect::new();
/// select.set_value("東京都");
/// assert_eq!(select.prefecture(), Some("東京都"));
/// ```
#[derive(Debug, Clone)]
pub struct PrefectureSelect {
    item: SelectItem,
}

impl PrefectureSelect {
    /// Creates an empty, optional select with an unlabeled sentinel
    /// entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            item: SelectItem::new(name_keyed_options("")),
        }
    }

    /// Sets whether an empty selection fails validation.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.item = self.item.required(required);
        self
    }

    /// Relabels the leading empty option, rebuilding the option set
    /// from the same table.
    pub fn set_empty_option_label(&mut self, label: &str) {
        self.item.set_options(name_keyed_options(label));
    }

    /// Assigns the selected name.
    pub fn set_value(&mut self, raw: &str) {
        self.item.set_value(raw);
    }

    /// The currently selected name.
    #[must_use]
    pub fn value(&self) -> &str {
        self.item.value()
    }

    /// Whether no selection has been made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    /// The option set in render order (sentinel first).
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        self.item.options()
    }

    /// Validates the selected name against the table.
    pub fn validate(&self) -> Result<(), FieldError> {
        self.item.validate()
    }

    /// The selected prefecture's name, or `None` when empty or invalid.
    ///
    /// Keys are the names themselves, so this is the validated value
    /// resolved back to the table's `'static` string.
    #[must_use]
    pub fn prefecture(&self) -> Option<&'static str> {
        let selected = self.item.parsed()?;
        PREFECTURES
            .iter()
            .find(|(_, name)| *name == selected)
            .map(|(_, name)| *name)
    }

    /// The validated name, or `None` when empty or invalid.
    #[must_use]
    pub fn parsed(&self) -> Option<&str> {
        self.item.parsed()
    }
}

impl Default for PrefectureSelect {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
