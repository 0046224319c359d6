// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 validation and language tag parsing.
//!
//! Tags arrive from the command line (`--lang ar-SA`) or from a browser
//! `Accept-Language` style value. Only the primary subtag matters.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use super::Lang;
use thiserror::Error;

/// Every ISO 639-1 code, sorted for binary search.
const ISO639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangError {
    #[error("empty language tag")]
    Empty,
    #[error("'{0}' is not an ISO 639-1 language code")]
    UnknownCode(String),
}

/// Whether `code` is a lowercase ISO 639-1 two-letter code.
///
/// ```
/// assert!(lalie_site::i18n::is_valid_iso639_1("ar"));
/// assert!(!lalie_site::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO639_1.binary_search(&code).is_ok()
}

/// Parse a language tag into a site language.
///
/// Accepts `ar`, `AR`, `ar-SA`, `en_GB`. A valid code the site does not
/// carry narrows to English; an invalid primary subtag is an error.
pub fn parse_tag(tag: &str) -> Result<Lang, LangError> {
    let primary = tag
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if primary.is_empty() {
        return Err(LangError::Empty);
    }
    if !is_valid_iso639_1(&primary) {
        return Err(LangError::UnknownCode(tag.trim().to_string()));
    }
    match Lang::from_code(&primary) {
        Some(lang) => Ok(lang),
        None => {
            tracing::debug!(tag, "unsupported language, using en");
            Ok(Lang::En)
        }
    }
}

/// English name of a site language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "ar" => Some("Arabic"),
        _ => None,
    }
}

/// Name of a site language in its own script, as shown on the toggle.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "ar" => Some("العربية"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_list_is_sorted() {
        assert!(ISO639_1.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("ar"));
        assert!(is_valid_iso639_1("zu"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("eng"));
        assert!(!is_valid_iso639_1("EN"));
    }

    #[test]
    fn tags_parse_by_primary_subtag() {
        assert_eq!(parse_tag("ar"), Ok(Lang::Ar));
        assert_eq!(parse_tag("ar-SA"), Ok(Lang::Ar));
        assert_eq!(parse_tag(" EN_us "), Ok(Lang::En));
        assert_eq!("ar".parse::<Lang>(), Ok(Lang::Ar));
    }

    #[test]
    fn unsupported_language_narrows_to_english() {
        assert_eq!(parse_tag("fr"), Ok(Lang::En));
        assert_eq!(parse_tag("he-IL"), Ok(Lang::En));
    }

    #[test]
    fn bad_tags_are_errors() {
        assert_eq!(parse_tag(""), Err(LangError::Empty));
        assert_eq!(parse_tag("xx"), Err(LangError::UnknownCode("xx".into())));
    }

    #[test]
    fn names_resolve() {
        assert_eq!(language_name("ar"), Some("Arabic"));
        assert_eq!(native_name("ar"), Some("العربية"));
        assert_eq!(native_name("fr"), None);
    }
}
