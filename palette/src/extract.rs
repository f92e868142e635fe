use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ASCII word boundary so a trailing seventh hex digit (or letter, digit,
// underscore) disqualifies the whole token.
static HEX_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#[0-9A-Fa-f]{6}(?-u:\b)").expect("hex color pattern is valid")
});

/// Ordered hex colors taken from one completion, e.g. `["#FF00AA", "#112233"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Palette {
    fn from(colors: Vec<String>) -> Self {
        Self(colors)
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

/// Collect every `#RRGGBB` token in `text`, in order and with original casing.
///
/// Absent or empty input yields an empty list. Duplicates are kept and
/// nothing is truncated.
///
/// ```
/// use palette::extract_hex_codes;
///
/// assert_eq!(extract_hex_codes("first #112233 then #445566"), vec!["#112233", "#445566"]);
/// assert!(extract_hex_codes(None).is_empty());
/// ```
pub fn extract_hex_codes<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    match text.into() {
        Some(text) => HEX_CODE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        None => Vec::new(),
    }
}
