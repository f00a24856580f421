//! Per-language field resolver
//!
//! Localized content is stored flat: one concrete key per language
//! (`titleEn`, `titleRo`, `titleRu`), never a nested object. The resolver is
//! the single place that knows the mapping from a logical field name to its
//! concrete keys, so forms, codecs and the client all agree on key spelling.

use crate::language::Language;

/// One logical field and its three concrete per-language keys.
///
/// Entries are `const`-constructible so entity schemas can declare their
/// localized tables as statics.
///
/// # Examples
///
/// ```
/// use dentora_schema::{Language, LocalizedField};
///
/// const TITLE: LocalizedField = LocalizedField::new("title", "titleEn", "titleRo", "titleRu");
///
/// assert_eq!(TITLE.resolve(Language::Ro), "titleRo");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedField {
	pub logical: &'static str,
	pub en: &'static str,
	pub ro: &'static str,
	pub ru: &'static str,
}

impl LocalizedField {
	pub const fn new(
		logical: &'static str,
		en: &'static str,
		ro: &'static str,
		ru: &'static str,
	) -> Self {
		Self { logical, en, ro, ru }
	}

	/// The concrete key for a language. Pure and total over [`Language`].
	pub fn resolve(&self, language: Language) -> &'static str {
		match language {
			Language::En => self.en,
			Language::Ro => self.ro,
			Language::Ru => self.ru,
		}
	}

	/// All three concrete keys, in `Language::ALL` order.
	pub fn keys(&self) -> [&'static str; 3] {
		[self.en, self.ro, self.ru]
	}
}
