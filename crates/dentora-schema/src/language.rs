//! Content languages
//!
//! Every localized field exists in exactly these three languages. The admin
//! authors all of them in one pass; there is no fallback chain.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnsupportedLanguage(pub String);

/// A supported content language.
///
/// # Examples
///
/// ```
/// use dentora_schema::Language;
///
/// assert_eq!(Language::Ro.code(), "ro");
/// assert_eq!(Language::Ro.suffix(), "Ro");
/// assert_eq!(Language::from_code("ru").unwrap(), Language::Ru);
/// assert!(Language::from_code("de").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	En,
	Ro,
	Ru,
}

impl Language {
	pub const ALL: [Language; 3] = [Language::En, Language::Ro, Language::Ru];

	/// Lowercase ISO 639-1 code.
	pub fn code(&self) -> &'static str {
		match self {
			Language::En => "en",
			Language::Ro => "ro",
			Language::Ru => "ru",
		}
	}

	/// The capitalized suffix concrete field keys carry (`titleEn`, `titleRo`,
	/// `titleRu`).
	pub fn suffix(&self) -> &'static str {
		match self {
			Language::En => "En",
			Language::Ro => "Ro",
			Language::Ru => "Ru",
		}
	}

	pub fn from_code(code: &str) -> Result<Self, UnsupportedLanguage> {
		match code {
			"en" => Ok(Language::En),
			"ro" => Ok(Language::Ro),
			"ru" => Ok(Language::Ru),
			other => Err(UnsupportedLanguage(other.to_string())),
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("en", Language::En)]
	#[case("ro", Language::Ro)]
	#[case("ru", Language::Ru)]
	fn test_from_code_round_trips(#[case] code: &str, #[case] expected: Language) {
		let language = Language::from_code(code).unwrap();
		assert_eq!(language, expected);
		assert_eq!(language.code(), code);
	}

	#[test]
	fn test_unknown_code_is_rejected() {
		let err = Language::from_code("fr").unwrap_err();
		assert_eq!(err.to_string(), "unsupported language code: fr");
	}
}
