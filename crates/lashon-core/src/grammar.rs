//! Token grammar for multi-gender Hebrew text.
//!
//! Two authored forms are recognized:
//!
//! - **Slash suffix**: a masculine base followed by one or more feminine
//!   suffixes, e.g. `מוכן/ה`, `ברוך/ה`, `תלמידים/ות`. The masculine form is
//!   the base as written; the feminine form appends the first suffix, turning
//!   a final letter back into its medial form (`מוכן` + `ה` → `מוכנה`) and
//!   stripping the masculine plural ending `ים` first (`תלמידים/ות` →
//!   `תלמידות`).
//! - **Braced alternation**: `{אתה|את}` or `{אב|אם|הורה}` with explicit
//!   masculine, feminine and optionally neutral segments, for pairs the
//!   suffix rule cannot derive.
//!
//! The neutral resolution keeps the combined multi-gender spelling: slash
//! tokens stay as authored, two-segment braces join with a slash, and
//! three-segment braces use their third segment.
//!
//! Resolution happens in a single left-to-right pass over authored text;
//! resolved output is never rescanned within a pass.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::gender::Gender;

/// Masculine plural ending stripped before a feminine plural suffix
const MASC_PLURAL: &str = "ים";

/// Final Hebrew letters and their medial forms
const FINAL_LETTERS: [(char, char); 5] = [
    ('ך', 'כ'),
    ('ם', 'מ'),
    ('ן', 'נ'),
    ('ף', 'פ'),
    ('ץ', 'צ'),
];

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{}|]*)\|([^{}|]*)(?:\|([^{}|]*))?\}|(\p{Hebrew}+)((?:/\p{Hebrew}{1,4})+)")
        .expect("token grammar regex is valid")
});

/// One recognized gendered-text occurrence within a scanned string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Byte range of the authored token in the scanned string
    pub span: Range<usize>,
    /// Masculine resolution
    pub male: String,
    /// Feminine resolution
    pub female: String,
    /// Combined multi-gender resolution
    pub neutral: String,
}

impl Token {
    fn from_captures(caps: &Captures<'_>, span: Range<usize>) -> Token {
        if let Some(male) = caps.get(1) {
            let male = male.as_str();
            let female = caps.get(2).map_or("", |m| m.as_str());
            let neutral = caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| format!("{}/{}", male, female));
            Token {
                span,
                male: male.to_string(),
                female: female.to_string(),
                neutral,
            }
        } else {
            let base = caps.get(4).map_or("", |m| m.as_str());
            let suffixes = caps.get(5).map_or("", |m| m.as_str());
            let first_suffix = suffixes
                .trim_start_matches('/')
                .split('/')
                .next()
                .unwrap_or("");
            Token {
                span,
                male: base.to_string(),
                female: feminine(base, first_suffix),
                neutral: format!("{}{}", base, suffixes),
            }
        }
    }

    /// The text this token resolves to for the given gender.
    pub fn resolve(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Neutral => &self.neutral,
        }
    }
}

/// Enumerate every recognized token in `text`, in document order.
pub fn scan(text: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| {
            caps.get(0)
                .map(|whole| Token::from_captures(&caps, whole.range()))
        })
        .collect()
}

/// Resolve every recognized token in `text` to its `gender` form.
pub(crate) fn replace_all(text: &str, gender: Gender) -> Cow<'_, str> {
    TOKEN_RE.replace_all(text, |caps: &Captures<'_>| {
        let span = caps.get(0).map_or(0..0, |whole| whole.range());
        Token::from_captures(caps, span).resolve(gender).to_string()
    })
}

/// Feminine form of a slash token: base + suffix, after stripping the
/// masculine plural ending and restoring a final letter to its medial form.
fn feminine(base: &str, suffix: &str) -> String {
    let stem = base.strip_suffix(MASC_PLURAL).unwrap_or(base);
    format!("{}{}", medial(stem), suffix)
}

/// Turn a trailing final letter into its medial form so a suffix can attach.
fn medial(stem: &str) -> Cow<'_, str> {
    let Some(last) = stem.chars().last() else {
        return Cow::Borrowed(stem);
    };
    match FINAL_LETTERS.iter().find(|(f, _)| *f == last) {
        Some(&(_, medial)) => {
            let mut s = stem[..stem.len() - last.len_utf8()].to_string();
            s.push(medial);
            Cow::Owned(s)
        }
        None => Cow::Borrowed(stem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_token_resolutions() {
        let tokens = scan("מוכן/ה");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].male, "מוכן");
        assert_eq!(tokens[0].female, "מוכנה");
        assert_eq!(tokens[0].neutral, "מוכן/ה");
    }

    #[test]
    fn slash_token_restores_medial_letter() {
        let tokens = scan("ברוך/ה");
        assert_eq!(tokens[0].female, "ברוכה");
    }

    #[test]
    fn slash_token_strips_masculine_plural() {
        let tokens = scan("תלמידים/ות");
        assert_eq!(tokens[0].male, "תלמידים");
        assert_eq!(tokens[0].female, "תלמידות");
        assert_eq!(tokens[0].neutral, "תלמידים/ות");
    }

    #[test]
    fn slash_token_with_multiple_suffixes_uses_first_for_feminine() {
        let tokens = scan("חבר/ה/ים");
        assert_eq!(tokens[0].male, "חבר");
        assert_eq!(tokens[0].female, "חברה");
        assert_eq!(tokens[0].neutral, "חבר/ה/ים");
    }

    #[test]
    fn braced_token_two_segments() {
        let tokens = scan("{אתה|את}");
        assert_eq!(tokens[0].male, "אתה");
        assert_eq!(tokens[0].female, "את");
        assert_eq!(tokens[0].neutral, "אתה/את");
    }

    #[test]
    fn braced_token_three_segments() {
        let tokens = scan("{אב|אם|הורה}");
        assert_eq!(tokens[0].male, "אב");
        assert_eq!(tokens[0].female, "אם");
        assert_eq!(tokens[0].neutral, "הורה");
    }

    #[test]
    fn scan_reports_byte_spans_in_document_order() {
        let text = "שלום מוכן/ה";
        let tokens = scan(text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(&text[tokens[0].span.clone()], "מוכן/ה");
    }

    #[test]
    fn scan_ignores_latin_and_numeric_slashes() {
        assert!(scan("either/or").is_empty());
        assert!(scan("01/02/2026").is_empty());
        assert!(scan("שלום עולם").is_empty());
    }

    #[test]
    fn resolve_maps_each_gender() {
        let token = &scan("מוכן/ה")[0];
        assert_eq!(token.resolve(Gender::Male), "מוכן");
        assert_eq!(token.resolve(Gender::Female), "מוכנה");
        assert_eq!(token.resolve(Gender::Neutral), "מוכן/ה");
    }

    #[test]
    fn medial_letter_table() {
        assert_eq!(medial("ברוך"), "ברוכ");
        assert_eq!(medial("שלום"), "שלומ");
        assert_eq!(medial("חבר"), "חבר");
        assert_eq!(medial(""), "");
    }
}
